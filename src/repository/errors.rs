use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
