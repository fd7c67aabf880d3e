//! Movement entity and repository trait.
//!
//! Maps to the `movements` table. A movement is a transaction entry owned
//! by exactly one account.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Movement state value that blocks deletion.
///
/// The state column is free text; this is the single value the services
/// special-case.
pub const ACTIVE_STATE: &str = "activo";

/// Represents a transaction entry on an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Primary key, assigned by the database on insert
    pub id: i64,

    /// Owning account (NOT NULL foreign key)
    pub account_id: i64,

    /// Movement type (e.g. deposit, withdrawal)
    pub kind: String,

    /// Monetary value of the movement
    pub value: i64,

    /// Accounting period the movement belongs to
    pub period: String,

    /// Free-text state; `"activo"` blocks deletion
    pub state: String,

    /// Date the movement took place
    pub movement_date: NaiveDate,

    /// Audit: set exactly once at creation
    pub created_at: NaiveDate,

    /// Audit: set exactly once at creation
    pub created_by: String,

    /// Audit: set on every update
    pub modified_at: Option<NaiveDate>,

    /// Audit: set on every update
    pub modified_by: Option<String>,
}

impl Movement {
    /// Whether this movement is in the active state that blocks deletion.
    ///
    /// The comparison is exact: only the literal `"activo"` counts.
    pub fn is_active(&self) -> bool {
        self.state == ACTIVE_STATE
    }
}

/// Repository trait for Movement data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovementRepository: Send + Sync {
    /// Check whether a movement with the given id exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Find a movement by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Movement>, AppError>;

    /// Find all movements on an account. Returns an empty list when the
    /// account has no movements.
    async fn find_by_account(&self, account_id: i64) -> Result<Vec<Movement>, AppError>;

    /// Insert a new movement. The `id` field is ignored; the stored record
    /// carries the database-assigned id.
    async fn create(&self, movement: &Movement) -> Result<Movement, AppError>;

    /// Overwrite an existing movement, matched by `id`.
    async fn update(&self, movement: &Movement) -> Result<Movement, AppError>;

    /// Delete a movement by id.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
