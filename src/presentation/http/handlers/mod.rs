//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod account;
pub mod client;
pub mod health;
pub mod movement;
