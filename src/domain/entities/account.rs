//! Account entity and repository trait.
//!
//! Maps to the `accounts` table. Every account belongs to exactly one
//! client, set at creation and never reassigned.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a financial account owned by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Primary key, assigned by the database on insert
    pub id: i64,

    /// Owning client (NOT NULL foreign key)
    pub client_id: i64,

    /// Account product (e.g. savings, credit line)
    pub product: String,

    /// Account status (free text)
    pub status: String,

    /// Credit value, carried as free text rather than a numeric type
    pub credit_value: String,

    /// Date the account was opened
    pub opened_at: NaiveDate,

    /// Audit: set exactly once at creation
    pub created_at: NaiveDate,

    /// Audit: set exactly once at creation
    pub created_by: String,

    /// Audit: set on every update
    pub modified_at: Option<NaiveDate>,

    /// Audit: set on every update
    pub modified_by: Option<String>,
}

/// Repository trait for Account data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Check whether an account with the given id exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Find an account by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, AppError>;

    /// Find all accounts owned by a client. Returns an empty list when the
    /// client has no accounts.
    async fn find_by_client(&self, client_id: i64) -> Result<Vec<Account>, AppError>;

    /// Insert a new account. The `id` field is ignored; the stored record
    /// carries the database-assigned id.
    async fn create(&self, account: &Account) -> Result<Account, AppError>;

    /// Overwrite an existing account, matched by `id`.
    async fn update(&self, account: &Account) -> Result<Account, AppError>;

    /// Delete an account by id.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
