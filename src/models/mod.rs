//! Database and configuration models used by the client service.

pub mod client;
pub mod config;
