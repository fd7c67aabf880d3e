//! # Application Layer
//!
//! Business services and DTOs. The services implement the domain rules on
//! top of the repository traits; the DTOs shape the HTTP boundary.

pub mod dto;
pub mod services;
