//! Movement Service
//!
//! Movement CRUD with the owning-account check on creation and the
//! active-state delete guard.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::domain::{AccountRepository, Movement, MovementRepository};

use super::AUDIT_USER;

/// Movement service trait
#[async_trait]
pub trait MovementService: Send + Sync {
    /// Create a new movement attached to an existing account.
    async fn create_movement(&self, data: CreateMovementDto)
        -> Result<Movement, MovementError>;

    /// Get a movement by id.
    async fn get_movement(&self, movement_id: i64) -> Result<Movement, MovementError>;

    /// List all movements on an account. The account must exist.
    async fn list_movements_by_account(
        &self,
        account_id: i64,
    ) -> Result<Vec<Movement>, MovementError>;

    /// Overwrite the mutable fields of an existing movement. The owning
    /// account is never reassigned.
    async fn update_movement(
        &self,
        movement_id: i64,
        data: UpdateMovementDto,
    ) -> Result<Movement, MovementError>;

    /// Delete a movement. Blocked while its state is `"activo"`.
    async fn delete_movement(&self, movement_id: i64) -> Result<bool, MovementError>;
}

/// Create movement request
#[derive(Debug, Clone)]
pub struct CreateMovementDto {
    /// Owning account; must exist at creation time
    pub account_id: i64,
    pub kind: String,
    pub value: i64,
    pub period: String,
    pub state: String,
    pub movement_date: NaiveDate,
}

/// Update movement request. Full overwrite of the mutable fields; the
/// account relation is left untouched.
#[derive(Debug, Clone)]
pub struct UpdateMovementDto {
    pub kind: String,
    pub value: i64,
    pub period: String,
    pub state: String,
    pub movement_date: NaiveDate,
}

/// Movement service errors
#[derive(Debug, thiserror::Error)]
pub enum MovementError {
    #[error("movement with id {0} does not exist")]
    NotFound(i64),

    #[error("account with id {0} does not exist")]
    AccountNotFound(i64),

    #[error("movement with id {0} cannot be deleted because its state is active")]
    ActiveState(i64),

    #[error("internal error: {0}")]
    Internal(String),
}

/// MovementService implementation
pub struct MovementServiceImpl<M, A>
where
    M: MovementRepository,
    A: AccountRepository,
{
    movement_repo: Arc<M>,
    account_repo: Arc<A>,
}

impl<M, A> MovementServiceImpl<M, A>
where
    M: MovementRepository,
    A: AccountRepository,
{
    pub fn new(movement_repo: Arc<M>, account_repo: Arc<A>) -> Self {
        Self {
            movement_repo,
            account_repo,
        }
    }
}

#[async_trait]
impl<M, A> MovementService for MovementServiceImpl<M, A>
where
    M: MovementRepository + 'static,
    A: AccountRepository + 'static,
{
    async fn create_movement(
        &self,
        data: CreateMovementDto,
    ) -> Result<Movement, MovementError> {
        let account = self
            .account_repo
            .find_by_id(data.account_id)
            .await
            .map_err(|e| MovementError::Internal(e.to_string()))?
            .ok_or(MovementError::AccountNotFound(data.account_id))?;

        let today = Utc::now().date_naive();

        let movement = Movement {
            id: 0,
            account_id: account.id,
            kind: data.kind,
            value: data.value,
            period: data.period,
            state: data.state,
            movement_date: data.movement_date,
            created_at: today,
            created_by: AUDIT_USER.to_string(),
            modified_at: None,
            modified_by: None,
        };

        self.movement_repo
            .create(&movement)
            .await
            .map_err(|e| MovementError::Internal(e.to_string()))
    }

    async fn get_movement(&self, movement_id: i64) -> Result<Movement, MovementError> {
        self.movement_repo
            .find_by_id(movement_id)
            .await
            .map_err(|e| MovementError::Internal(e.to_string()))?
            .ok_or(MovementError::NotFound(movement_id))
    }

    async fn list_movements_by_account(
        &self,
        account_id: i64,
    ) -> Result<Vec<Movement>, MovementError> {
        if !self
            .account_repo
            .exists_by_id(account_id)
            .await
            .map_err(|e| MovementError::Internal(e.to_string()))?
        {
            return Err(MovementError::AccountNotFound(account_id));
        }

        self.movement_repo
            .find_by_account(account_id)
            .await
            .map_err(|e| MovementError::Internal(e.to_string()))
    }

    async fn update_movement(
        &self,
        movement_id: i64,
        data: UpdateMovementDto,
    ) -> Result<Movement, MovementError> {
        if !self
            .movement_repo
            .exists_by_id(movement_id)
            .await
            .map_err(|e| MovementError::Internal(e.to_string()))?
        {
            return Err(MovementError::NotFound(movement_id));
        }

        let existing = self
            .movement_repo
            .find_by_id(movement_id)
            .await
            .map_err(|e| MovementError::Internal(e.to_string()))?
            .ok_or(MovementError::NotFound(movement_id))?;

        let today = Utc::now().date_naive();

        let updated = Movement {
            id: existing.id,
            account_id: existing.account_id,
            kind: data.kind,
            value: data.value,
            period: data.period,
            state: data.state,
            movement_date: data.movement_date,
            created_at: existing.created_at,
            created_by: existing.created_by,
            modified_at: Some(today),
            modified_by: Some(AUDIT_USER.to_string()),
        };

        self.movement_repo
            .update(&updated)
            .await
            .map_err(|e| MovementError::Internal(e.to_string()))
    }

    async fn delete_movement(&self, movement_id: i64) -> Result<bool, MovementError> {
        let movement = self
            .movement_repo
            .find_by_id(movement_id)
            .await
            .map_err(|e| MovementError::Internal(e.to_string()))?
            .ok_or(MovementError::NotFound(movement_id))?;

        if movement.is_active() {
            return Err(MovementError::ActiveState(movement_id));
        }

        self.movement_repo
            .delete_by_id(movement_id)
            .await
            .map_err(|e| MovementError::Internal(e.to_string()))?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Account, MockAccountRepository, MockMovementRepository};
    use pretty_assertions::assert_eq;

    fn stored_account(id: i64) -> Account {
        Account {
            id,
            client_id: 1,
            product: "savings".into(),
            status: "activo".into(),
            credit_value: "1000000".into(),
            opened_at: NaiveDate::from_ymd_opt(2022, 2, 2).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2022, 2, 2).unwrap(),
            created_by: AUDIT_USER.into(),
            modified_at: None,
            modified_by: None,
        }
    }

    fn stored_movement(id: i64, state: &str) -> Movement {
        Movement {
            id,
            account_id: 1,
            kind: "deposit".into(),
            value: 50_000,
            period: "2022-06".into(),
            state: state.into(),
            movement_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            created_by: AUDIT_USER.into(),
            modified_at: None,
            modified_by: None,
        }
    }

    fn create_payload(account_id: i64) -> CreateMovementDto {
        CreateMovementDto {
            account_id,
            kind: "deposit".into(),
            value: 50_000,
            period: "2022-06".into(),
            state: "activo".into(),
            movement_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
        }
    }

    fn service(
        movement_repo: MockMovementRepository,
        account_repo: MockAccountRepository,
    ) -> MovementServiceImpl<MockMovementRepository, MockAccountRepository> {
        MovementServiceImpl::new(Arc::new(movement_repo), Arc::new(account_repo))
    }

    #[tokio::test]
    async fn create_movement_attaches_looked_up_account() {
        let today = Utc::now().date_naive();
        let mut account_repo = MockAccountRepository::new();
        account_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_account(id))));
        let mut movement_repo = MockMovementRepository::new();
        movement_repo
            .expect_create()
            .withf(move |m| {
                m.account_id == 3 && m.created_at == today && m.created_by == AUDIT_USER
            })
            .returning(|m| {
                let mut stored = m.clone();
                stored.id = 1;
                Ok(stored)
            });

        let movement = service(movement_repo, account_repo)
            .create_movement(create_payload(3))
            .await
            .unwrap();

        assert_eq!(movement.account_id, 3);
    }

    #[tokio::test]
    async fn create_movement_fails_for_missing_account() {
        let mut account_repo = MockAccountRepository::new();
        account_repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(MockMovementRepository::new(), account_repo)
            .create_movement(create_payload(99))
            .await;

        assert!(matches!(result, Err(MovementError::AccountNotFound(99))));
    }

    #[tokio::test]
    async fn get_movement_fails_for_missing_id() {
        let mut movement_repo = MockMovementRepository::new();
        movement_repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(movement_repo, MockAccountRepository::new())
            .get_movement(99)
            .await;

        assert!(matches!(result, Err(MovementError::NotFound(99))));
    }

    #[tokio::test]
    async fn list_movements_requires_existing_account() {
        let mut account_repo = MockAccountRepository::new();
        account_repo.expect_exists_by_id().returning(|_| Ok(false));

        let result = service(MockMovementRepository::new(), account_repo)
            .list_movements_by_account(99)
            .await;

        assert!(matches!(result, Err(MovementError::AccountNotFound(99))));
    }

    #[tokio::test]
    async fn list_movements_returns_account_movements() {
        let mut account_repo = MockAccountRepository::new();
        account_repo.expect_exists_by_id().returning(|_| Ok(true));
        let mut movement_repo = MockMovementRepository::new();
        movement_repo
            .expect_find_by_account()
            .returning(|_| Ok(vec![stored_movement(1, "activo"), stored_movement(2, "anulado")]));

        let movements = service(movement_repo, account_repo)
            .list_movements_by_account(1)
            .await
            .unwrap();

        assert_eq!(movements.len(), 2);
    }

    #[tokio::test]
    async fn update_movement_stamps_modification_audit() {
        let today = Utc::now().date_naive();
        let mut movement_repo = MockMovementRepository::new();
        movement_repo.expect_exists_by_id().returning(|_| Ok(true));
        movement_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_movement(id, "activo"))));
        movement_repo
            .expect_update()
            .withf(move |m| {
                m.state == "anulado"
                    && m.modified_at == Some(today)
                    && m.modified_by.as_deref() == Some(AUDIT_USER)
            })
            .returning(|m| Ok(m.clone()));

        let updated = service(movement_repo, MockAccountRepository::new())
            .update_movement(
                1,
                UpdateMovementDto {
                    kind: "deposit".into(),
                    value: 50_000,
                    period: "2022-06".into(),
                    state: "anulado".into(),
                    movement_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.state, "anulado");
    }

    #[tokio::test]
    async fn update_movement_fails_for_missing_id() {
        // Only the existence check may run: no load, no write.
        let mut movement_repo = MockMovementRepository::new();
        movement_repo.expect_exists_by_id().returning(|_| Ok(false));

        let result = service(movement_repo, MockAccountRepository::new())
            .update_movement(
                99,
                UpdateMovementDto {
                    kind: "deposit".into(),
                    value: 50_000,
                    period: "2022-06".into(),
                    state: "anulado".into(),
                    movement_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
                },
            )
            .await;

        assert!(matches!(result, Err(MovementError::NotFound(99))));
    }

    #[tokio::test]
    async fn delete_movement_blocked_while_active() {
        let mut movement_repo = MockMovementRepository::new();
        movement_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_movement(id, "activo"))));

        let result = service(movement_repo, MockAccountRepository::new())
            .delete_movement(1)
            .await;

        assert!(matches!(result, Err(MovementError::ActiveState(1))));
    }

    #[tokio::test]
    async fn delete_movement_with_other_state_succeeds() {
        let mut movement_repo = MockMovementRepository::new();
        movement_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_movement(id, "inactivo"))));
        movement_repo.expect_delete_by_id().returning(|_| Ok(()));

        let deleted = service(movement_repo, MockAccountRepository::new())
            .delete_movement(1)
            .await
            .unwrap();

        assert!(deleted);
    }

    #[tokio::test]
    async fn delete_movement_fails_for_missing_id() {
        let mut movement_repo = MockMovementRepository::new();
        movement_repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(movement_repo, MockAccountRepository::new())
            .delete_movement(99)
            .await;

        assert!(matches!(result, Err(MovementError::NotFound(99))));
    }
}
