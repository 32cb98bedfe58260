//! Inbound payloads accepted by the HTTP gateway.

use thiserror::Error;
use validator::ValidationErrors;

pub mod client;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("{}", validation_message(.0))]
    Validation(#[from] ValidationErrors),
}

/// Flattens validation errors into `"field: message"` pairs joined by `"; "`,
/// sorted by field for a stable output.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: {}", err.code),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
