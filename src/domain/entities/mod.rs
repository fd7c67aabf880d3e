//! # Domain Entities
//!
//! Core domain entities representing the main business objects in the
//! banking backend. All entities map directly to their corresponding
//! database tables.
//!
//! ## Entities
//!
//! - **Client**: a bank customer, identified by a numeric id
//! - **Account**: a financial account owned by exactly one client
//! - **Movement**: a transaction entry owned by exactly one account
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod account;
mod client;
mod movement;

pub use account::{Account, AccountRepository};
pub use client::{Client, ClientRepository};
pub use movement::{Movement, MovementRepository, ACTIVE_STATE};

#[cfg(test)]
pub use account::MockAccountRepository;
#[cfg(test)]
pub use client::MockClientRepository;
#[cfg(test)]
pub use movement::MockMovementRepository;
