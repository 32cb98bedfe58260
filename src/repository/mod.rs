//! Storage seam of the client registry.
//!
//! Readers take `&self` and writers take `&mut self`, so a caller holding the
//! store's lock for a whole service call gets check-then-write atomicity for
//! free.

use crate::{
    domain::client::{Client, ClientSearchQuery},
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use memory::{ClientList, InMemoryRepository};

pub trait ClientReader {
    /// First client, in insertion order, whose ID number equals `id_number`.
    fn get_client_by_id(&self, id_number: &str) -> RepositoryResult<Option<Client>>;
    /// First client, in insertion order, matching the query.
    fn find_client(&self, query: &ClientSearchQuery) -> RepositoryResult<Option<Client>>;
    fn count_clients_by_id_number(&self, id_number: &str) -> RepositoryResult<usize>;
    fn count_clients_by_mobile_number(&self, mobile_number: &str) -> RepositoryResult<usize>;
}

pub trait ClientWriter {
    /// Appends the client at the end of the collection.
    fn insert_client(&mut self, client: Client) -> RepositoryResult<Client>;
    /// Overwrites the first client stored under `id_number` in place.
    fn replace_client(&mut self, id_number: &str, replacement: Client) -> RepositoryResult<Client>;
}
