//! Process-local client storage.

use parking_lot::{Mutex, MutexGuard};

use crate::domain::client::{Client, ClientSearchQuery};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter};

/// Ordered client collection. Insertion order is the only ordering kept and
/// decides which record a lookup returns when several would match.
#[derive(Debug, Default, Clone)]
pub struct ClientList {
    clients: Vec<Client>,
}

impl ClientList {
    pub fn new(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn as_slice(&self) -> &[Client] {
        &self.clients
    }
}

impl ClientReader for ClientList {
    fn get_client_by_id(&self, id_number: &str) -> RepositoryResult<Option<Client>> {
        Ok(self
            .clients
            .iter()
            .find(|c| c.id_number == id_number)
            .cloned())
    }

    fn find_client(&self, query: &ClientSearchQuery) -> RepositoryResult<Option<Client>> {
        Ok(self.clients.iter().find(|c| query.matches(c)).cloned())
    }

    fn count_clients_by_id_number(&self, id_number: &str) -> RepositoryResult<usize> {
        Ok(self
            .clients
            .iter()
            .filter(|c| c.id_number == id_number)
            .count())
    }

    fn count_clients_by_mobile_number(&self, mobile_number: &str) -> RepositoryResult<usize> {
        Ok(self
            .clients
            .iter()
            .filter(|c| c.mobile_number.as_deref() == Some(mobile_number))
            .count())
    }
}

impl ClientWriter for ClientList {
    fn insert_client(&mut self, client: Client) -> RepositoryResult<Client> {
        self.clients.push(client.clone());
        Ok(client)
    }

    fn replace_client(&mut self, id_number: &str, replacement: Client) -> RepositoryResult<Client> {
        let slot = self
            .clients
            .iter_mut()
            .find(|c| c.id_number == id_number)
            .ok_or(RepositoryError::NotFound)?;

        slot.overwrite(replacement);
        Ok(slot.clone())
    }
}

/// Shared, mutex-guarded client store owned by one service instance.
///
/// Every service call should run against a single [`InMemoryRepository::lock`]
/// guard so that uniqueness checks and the following write see the same
/// state.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    clients: Mutex<ClientList>,
}

impl InMemoryRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `clients`, kept in the given order.
    ///
    /// Records are taken verbatim; nothing is validated.
    pub fn with_clients(clients: Vec<Client>) -> Self {
        Self {
            clients: Mutex::new(ClientList::new(clients)),
        }
    }

    /// Acquires exclusive access to the collection.
    pub fn lock(&self) -> MutexGuard<'_, ClientList> {
        self.clients.lock()
    }

    /// Copy of every stored client in insertion order.
    pub fn snapshot(&self) -> Vec<Client> {
        self.lock().as_slice().to_vec()
    }
}
