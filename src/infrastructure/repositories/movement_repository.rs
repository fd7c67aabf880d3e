//! Movement Repository Implementation
//!
//! PostgreSQL implementation of the MovementRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{Movement, MovementRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `movements` table schema.
#[derive(Debug, sqlx::FromRow)]
struct MovementRow {
    id: i64,
    account_id: i64,
    kind: String,
    value: i64,
    period: String,
    state: String,
    movement_date: NaiveDate,
    created_at: NaiveDate,
    created_by: String,
    modified_at: Option<NaiveDate>,
    modified_by: Option<String>,
}

impl MovementRow {
    /// Convert database row to domain Movement entity.
    fn into_movement(self) -> Movement {
        Movement {
            id: self.id,
            account_id: self.account_id,
            kind: self.kind,
            value: self.value,
            period: self.period,
            state: self.state,
            movement_date: self.movement_date,
            created_at: self.created_at,
            created_by: self.created_by,
            modified_at: self.modified_at,
            modified_by: self.modified_by,
        }
    }
}

const MOVEMENT_COLUMNS: &str = "id, account_id, kind, value, period, state, movement_date, \
                                created_at, created_by, modified_at, modified_by";

/// PostgreSQL movement repository implementation.
#[derive(Clone)]
pub struct PgMovementRepository {
    pool: PgPool,
}

impl PgMovementRepository {
    /// Create a new PgMovementRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovementRepository for PgMovementRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM movements WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movement>, AppError> {
        let row = sqlx::query_as::<_, MovementRow>(&format!(
            "SELECT {MOVEMENT_COLUMNS} FROM movements WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_movement()))
    }

    async fn find_by_account(&self, account_id: i64) -> Result<Vec<Movement>, AppError> {
        let rows = sqlx::query_as::<_, MovementRow>(&format!(
            "SELECT {MOVEMENT_COLUMNS} FROM movements WHERE account_id = $1 ORDER BY id ASC"
        ))
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_movement()).collect())
    }

    async fn create(&self, movement: &Movement) -> Result<Movement, AppError> {
        let row = sqlx::query_as::<_, MovementRow>(&format!(
            r#"
            INSERT INTO movements (account_id, kind, value, period, state, movement_date,
                                   created_at, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {MOVEMENT_COLUMNS}
            "#
        ))
        .bind(movement.account_id)
        .bind(&movement.kind)
        .bind(movement.value)
        .bind(&movement.period)
        .bind(&movement.state)
        .bind(movement.movement_date)
        .bind(movement.created_at)
        .bind(&movement.created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_movement())
    }

    async fn update(&self, movement: &Movement) -> Result<Movement, AppError> {
        let row = sqlx::query_as::<_, MovementRow>(&format!(
            r#"
            UPDATE movements
            SET kind = $2,
                value = $3,
                period = $4,
                state = $5,
                movement_date = $6,
                modified_at = $7,
                modified_by = $8
            WHERE id = $1
            RETURNING {MOVEMENT_COLUMNS}
            "#
        ))
        .bind(movement.id)
        .bind(&movement.kind)
        .bind(movement.value)
        .bind(&movement.period)
        .bind(&movement.state)
        .bind(movement.movement_date)
        .bind(movement.modified_at)
        .bind(&movement.modified_by)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("movement with id {} not found", movement.id))
        })?;

        Ok(row.into_movement())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM movements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("movement with id {} not found", id)));
        }

        Ok(())
    }
}
