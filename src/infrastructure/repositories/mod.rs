//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.

mod account_repository;
mod client_repository;
mod movement_repository;

pub use account_repository::PgAccountRepository;
pub use client_repository::PgClientRepository;
pub use movement_repository::PgMovementRepository;
