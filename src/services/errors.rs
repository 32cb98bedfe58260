use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures signalled by the client registry core.
///
/// None of them is transient; callers surface them as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Invalid South African ID Number")]
    InvalidIdNumber,

    #[error("Duplicate ID Number")]
    DuplicateIdNumber,

    #[error("Duplicate Mobile Number")]
    DuplicateMobileNumber,

    #[error("Client not found")]
    ClientNotFound,

    /// Raised by the HTTP gateway before any core call.
    #[error("No search criteria provided")]
    NoSearchCriteriaProvided,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::ClientNotFound,
        }
    }
}
