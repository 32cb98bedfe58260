//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// JSON file with clients to load at startup.
    pub seed_file: Option<String>,
}
