//! Domain records and value objects of the client registry.

pub mod client;
pub mod types;
