//! DTOs exposed by the client HTTP API.

pub mod api;
