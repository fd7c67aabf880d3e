//! Account Repository Implementation
//!
//! PostgreSQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{Account, AccountRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `accounts` table schema.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: i64,
    client_id: i64,
    product: String,
    status: String,
    credit_value: String,
    opened_at: NaiveDate,
    created_at: NaiveDate,
    created_by: String,
    modified_at: Option<NaiveDate>,
    modified_by: Option<String>,
}

impl AccountRow {
    /// Convert database row to domain Account entity.
    fn into_account(self) -> Account {
        Account {
            id: self.id,
            client_id: self.client_id,
            product: self.product,
            status: self.status,
            credit_value: self.credit_value,
            opened_at: self.opened_at,
            created_at: self.created_at,
            created_by: self.created_by,
            modified_at: self.modified_at,
            modified_by: self.modified_by,
        }
    }
}

const ACCOUNT_COLUMNS: &str = "id, client_id, product, status, credit_value, opened_at, \
                               created_at, created_by, modified_at, modified_by";

/// PostgreSQL account repository implementation.
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM accounts WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_account()))
    }

    async fn find_by_client(&self, client_id: i64) -> Result<Vec<Account>, AppError> {
        let rows = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE client_id = $1 ORDER BY id ASC"
        ))
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_account()).collect())
    }

    async fn create(&self, account: &Account) -> Result<Account, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            r#"
            INSERT INTO accounts (client_id, product, status, credit_value, opened_at,
                                  created_at, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(account.client_id)
        .bind(&account.product)
        .bind(&account.status)
        .bind(&account.credit_value)
        .bind(account.opened_at)
        .bind(account.created_at)
        .bind(&account.created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_account())
    }

    async fn update(&self, account: &Account) -> Result<Account, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            r#"
            UPDATE accounts
            SET product = $2,
                status = $3,
                credit_value = $4,
                opened_at = $5,
                modified_at = $6,
                modified_by = $7
            WHERE id = $1
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(account.id)
        .bind(&account.product)
        .bind(&account.status)
        .bind(&account.credit_value)
        .bind(account.opened_at)
        .bind(account.modified_at)
        .bind(&account.modified_by)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("account with id {} not found", account.id)))?;

        Ok(row.into_account())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("account with id {} not found", id)));
        }

        Ok(())
    }
}
