//! # Application Services
//!
//! Business-rule layer. Each entity has a service trait, one implementation
//! generic over the repository traits it needs, and a service-local error
//! enum that the HTTP layer maps onto status codes.
//!
//! The services carry all conditional logic in the system: the legal-age
//! check on client birth dates, the referential-integrity guards before
//! client/account deletion, and the active-state guard before movement
//! deletion.

mod account_service;
mod client_service;
mod movement_service;

pub use account_service::{
    AccountError, AccountService, AccountServiceImpl, CreateAccountDto, UpdateAccountDto,
};
pub use client_service::{
    is_of_legal_age, ClientError, ClientService, ClientServiceImpl, CreateClientDto,
    UpdateClientDto,
};
pub use movement_service::{
    CreateMovementDto, MovementError, MovementService, MovementServiceImpl, UpdateMovementDto,
};

use std::future::Future;

use crate::shared::error::AppError;

/// User recorded in the audit columns for every create and update.
///
/// There is no authentication layer, so all writes are attributed to a
/// single fixed principal.
pub const AUDIT_USER: &str = "system";

/// Shared delete guard: resolve a child lookup and report whether any
/// dependents exist.
///
/// Each delete site keeps its own error type; this only factors out the
/// fetch-and-check shape common to the client-has-accounts and
/// account-has-movements guards.
pub(crate) async fn has_dependents<T, F>(children: F) -> Result<bool, AppError>
where
    F: Future<Output = Result<Vec<T>, AppError>>,
{
    Ok(!children.await?.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn has_dependents_reports_non_empty() {
        let children = async { Ok::<_, AppError>(vec![1, 2]) };
        assert!(has_dependents(children).await.unwrap());
    }

    #[tokio::test]
    async fn has_dependents_reports_empty() {
        let children = async { Ok::<Vec<i32>, AppError>(vec![]) };
        assert!(!has_dependents(children).await.unwrap());
    }

    #[tokio::test]
    async fn has_dependents_propagates_lookup_errors() {
        let children = async { Err::<Vec<i32>, _>(AppError::Internal("lookup failed".into())) };
        assert!(has_dependents(children).await.is_err());
    }
}
