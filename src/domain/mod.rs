//! # Domain Layer
//!
//! The domain layer contains the core business objects of the banking
//! backend. It is independent of any external frameworks or infrastructure
//! concerns.
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities encapsulate the little domain behavior there is (the active
//!   movement-state check)

pub mod entities;

pub use entities::*;
