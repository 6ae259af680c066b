//! Domain entities exposed by the client service layer.

pub mod client;
pub mod types;
