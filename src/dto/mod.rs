//! Response bodies produced by the HTTP gateway.

pub mod error;
