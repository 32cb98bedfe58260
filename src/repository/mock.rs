//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, ClientSearchQuery};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id_number: &str) -> RepositoryResult<Option<Client>>;
        fn find_client(&self, query: &ClientSearchQuery) -> RepositoryResult<Option<Client>>;
        fn count_clients_by_id_number(&self, id_number: &str) -> RepositoryResult<usize>;
        fn count_clients_by_mobile_number(&self, mobile_number: &str) -> RepositoryResult<usize>;
    }

    impl ClientWriter for Repository {
        fn insert_client(&mut self, client: Client) -> RepositoryResult<Client>;
        fn replace_client(
            &mut self,
            id_number: &str,
            replacement: Client,
        ) -> RepositoryResult<Client>;
    }
}
