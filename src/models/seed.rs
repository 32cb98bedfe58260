//! Seed data read at startup.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::domain::client::Client;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed seed file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads a JSON array of clients. Records are not validated here.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Client>, SeedError> {
    let raw = fs::read_to_string(path)?;
    let clients = serde_json::from_str(&raw)?;
    Ok(clients)
}
