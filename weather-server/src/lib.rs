//! Library surface of the weather HTTP server.
//!
//! `main.rs` wires these modules together; integration tests use them to
//! stand up the router against mock providers.

pub mod cli;
pub mod routes;
