//! Account Service
//!
//! Account CRUD with the owning-client check on creation and the
//! movements delete guard.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::domain::{Account, AccountRepository, ClientRepository, MovementRepository};

use super::{has_dependents, AUDIT_USER};

/// Account service trait
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create a new account attached to an existing client.
    async fn create_account(&self, data: CreateAccountDto) -> Result<Account, AccountError>;

    /// Get an account by id.
    async fn get_account(&self, account_id: i64) -> Result<Account, AccountError>;

    /// List all accounts owned by a client. The client must exist; the
    /// list itself may be empty.
    async fn list_accounts_by_client(&self, client_id: i64)
        -> Result<Vec<Account>, AccountError>;

    /// Overwrite the mutable fields of an existing account. The owning
    /// client is never reassigned.
    async fn update_account(
        &self,
        account_id: i64,
        data: UpdateAccountDto,
    ) -> Result<Account, AccountError>;

    /// Delete an account. Blocked while any movement references it.
    async fn delete_account(&self, account_id: i64) -> Result<bool, AccountError>;
}

/// Create account request
#[derive(Debug, Clone)]
pub struct CreateAccountDto {
    /// Owning client; must exist at creation time
    pub client_id: i64,
    pub product: String,
    pub status: String,
    pub credit_value: String,
    pub opened_at: NaiveDate,
}

/// Update account request. Full overwrite of the mutable fields; the
/// client relation is left untouched.
#[derive(Debug, Clone)]
pub struct UpdateAccountDto {
    pub product: String,
    pub status: String,
    pub credit_value: String,
    pub opened_at: NaiveDate,
}

/// Account service errors
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("account with id {0} does not exist")]
    NotFound(i64),

    #[error("client with id {0} does not exist")]
    ClientNotFound(i64),

    #[error("account with id {0} cannot be deleted because it has linked movements")]
    HasMovements(i64),

    #[error("internal error: {0}")]
    Internal(String),
}

/// AccountService implementation
pub struct AccountServiceImpl<A, C, M>
where
    A: AccountRepository,
    C: ClientRepository,
    M: MovementRepository,
{
    account_repo: Arc<A>,
    client_repo: Arc<C>,
    movement_repo: Arc<M>,
}

impl<A, C, M> AccountServiceImpl<A, C, M>
where
    A: AccountRepository,
    C: ClientRepository,
    M: MovementRepository,
{
    pub fn new(account_repo: Arc<A>, client_repo: Arc<C>, movement_repo: Arc<M>) -> Self {
        Self {
            account_repo,
            client_repo,
            movement_repo,
        }
    }
}

#[async_trait]
impl<A, C, M> AccountService for AccountServiceImpl<A, C, M>
where
    A: AccountRepository + 'static,
    C: ClientRepository + 'static,
    M: MovementRepository + 'static,
{
    async fn create_account(&self, data: CreateAccountDto) -> Result<Account, AccountError> {
        let client = self
            .client_repo
            .find_by_id(data.client_id)
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))?
            .ok_or(AccountError::ClientNotFound(data.client_id))?;

        let today = Utc::now().date_naive();

        let account = Account {
            id: 0,
            client_id: client.id,
            product: data.product,
            status: data.status,
            credit_value: data.credit_value,
            opened_at: data.opened_at,
            created_at: today,
            created_by: AUDIT_USER.to_string(),
            modified_at: None,
            modified_by: None,
        };

        self.account_repo
            .create(&account)
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))
    }

    async fn get_account(&self, account_id: i64) -> Result<Account, AccountError> {
        self.account_repo
            .find_by_id(account_id)
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))?
            .ok_or(AccountError::NotFound(account_id))
    }

    async fn list_accounts_by_client(
        &self,
        client_id: i64,
    ) -> Result<Vec<Account>, AccountError> {
        if !self
            .client_repo
            .exists_by_id(client_id)
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))?
        {
            return Err(AccountError::ClientNotFound(client_id));
        }

        self.account_repo
            .find_by_client(client_id)
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))
    }

    async fn update_account(
        &self,
        account_id: i64,
        data: UpdateAccountDto,
    ) -> Result<Account, AccountError> {
        let existing = self
            .account_repo
            .find_by_id(account_id)
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))?
            .ok_or(AccountError::NotFound(account_id))?;

        let today = Utc::now().date_naive();

        let updated = Account {
            id: existing.id,
            client_id: existing.client_id,
            product: data.product,
            status: data.status,
            credit_value: data.credit_value,
            opened_at: data.opened_at,
            created_at: existing.created_at,
            created_by: existing.created_by,
            modified_at: Some(today),
            modified_by: Some(AUDIT_USER.to_string()),
        };

        self.account_repo
            .update(&updated)
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))
    }

    async fn delete_account(&self, account_id: i64) -> Result<bool, AccountError> {
        if !self
            .account_repo
            .exists_by_id(account_id)
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))?
        {
            return Err(AccountError::NotFound(account_id));
        }

        if has_dependents(self.movement_repo.find_by_account(account_id))
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))?
        {
            return Err(AccountError::HasMovements(account_id));
        }

        self.account_repo
            .delete_by_id(account_id)
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Client, Movement, MockAccountRepository, MockClientRepository, MockMovementRepository,
    };
    use pretty_assertions::assert_eq;

    fn stored_client(id: i64) -> Client {
        Client {
            id,
            document_type: "CC".into(),
            document_number: 1_234_567,
            status: "activo".into(),
            client_type: "personal".into(),
            address: "Calle 1 # 2-3".into(),
            phone: "3001234567".into(),
            email: "ana@example.com".into(),
            first_name: "Ana".into(),
            middle_name: None,
            last_name: "Gomez".into(),
            second_last_name: None,
            birth_date: NaiveDate::from_ymd_opt(1980, 5, 24).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            created_by: AUDIT_USER.into(),
            modified_at: None,
            modified_by: None,
        }
    }

    fn stored_account(id: i64, client_id: i64) -> Account {
        Account {
            id,
            client_id,
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

    fn stored_movement(id: i64, account_id: i64) -> Movement {
        Movement {
            id,
            account_id,
            kind: "deposit".into(),
            value: 50_000,
            period: "2022-06".into(),
            state: "activo".into(),
            movement_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            created_by: AUDIT_USER.into(),
            modified_at: None,
            modified_by: None,
        }
    }

    fn create_payload(client_id: i64) -> CreateAccountDto {
        CreateAccountDto {
            client_id,
            product: "savings".into(),
            status: "activo".into(),
            credit_value: "1000000".into(),
            opened_at: NaiveDate::from_ymd_opt(2022, 2, 2).unwrap(),
        }
    }

    fn service(
        account_repo: MockAccountRepository,
        client_repo: MockClientRepository,
        movement_repo: MockMovementRepository,
    ) -> AccountServiceImpl<MockAccountRepository, MockClientRepository, MockMovementRepository>
    {
        AccountServiceImpl::new(
            Arc::new(account_repo),
            Arc::new(client_repo),
            Arc::new(movement_repo),
        )
    }

    #[tokio::test]
    async fn create_account_attaches_looked_up_client() {
        let today = Utc::now().date_naive();
        let mut client_repo = MockClientRepository::new();
        client_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_client(id))));
        let mut account_repo = MockAccountRepository::new();
        account_repo
            .expect_create()
            .withf(move |a| {
                a.client_id == 5 && a.created_at == today && a.created_by == AUDIT_USER
            })
            .returning(|a| {
                let mut stored = a.clone();
                stored.id = 1;
                Ok(stored)
            });

        let account = service(account_repo, client_repo, MockMovementRepository::new())
            .create_account(create_payload(5))
            .await
            .unwrap();

        assert_eq!(account.client_id, 5);
        assert_eq!(account.created_at, today);
    }

    #[tokio::test]
    async fn create_account_fails_for_missing_client() {
        let mut client_repo = MockClientRepository::new();
        client_repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(
            MockAccountRepository::new(),
            client_repo,
            MockMovementRepository::new(),
        )
        .create_account(create_payload(99))
        .await;

        assert!(matches!(result, Err(AccountError::ClientNotFound(99))));
    }

    #[tokio::test]
    async fn get_account_fails_for_missing_id() {
        let mut account_repo = MockAccountRepository::new();
        account_repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(
            account_repo,
            MockClientRepository::new(),
            MockMovementRepository::new(),
        )
        .get_account(99)
        .await;

        assert!(matches!(result, Err(AccountError::NotFound(99))));
    }

    #[tokio::test]
    async fn list_accounts_requires_existing_client() {
        let mut client_repo = MockClientRepository::new();
        client_repo.expect_exists_by_id().returning(|_| Ok(false));

        let result = service(
            MockAccountRepository::new(),
            client_repo,
            MockMovementRepository::new(),
        )
        .list_accounts_by_client(99)
        .await;

        assert!(matches!(result, Err(AccountError::ClientNotFound(99))));
    }

    #[tokio::test]
    async fn list_accounts_may_be_empty() {
        // Unlike list_clients, an empty account list is not an error.
        let mut client_repo = MockClientRepository::new();
        client_repo.expect_exists_by_id().returning(|_| Ok(true));
        let mut account_repo = MockAccountRepository::new();
        account_repo.expect_find_by_client().returning(|_| Ok(vec![]));

        let accounts = service(account_repo, client_repo, MockMovementRepository::new())
            .list_accounts_by_client(1)
            .await
            .unwrap();

        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn update_account_preserves_owner_and_stamps_modification() {
        let today = Utc::now().date_naive();
        let mut account_repo = MockAccountRepository::new();
        account_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored_account(id, 5))));
        account_repo
            .expect_update()
            .withf(move |a| {
                a.client_id == 5
                    && a.product == "premium"
                    && a.modified_at == Some(today)
                    && a.modified_by.as_deref() == Some(AUDIT_USER)
            })
            .returning(|a| Ok(a.clone()));

        let updated = service(
            account_repo,
            MockClientRepository::new(),
            MockMovementRepository::new(),
        )
        .update_account(
            1,
            UpdateAccountDto {
                product: "premium".into(),
                status: "activo".into(),
                credit_value: "2000000".into(),
                opened_at: NaiveDate::from_ymd_opt(2022, 2, 2).unwrap(),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.product, "premium");
    }

    #[tokio::test]
    async fn delete_account_blocked_by_linked_movements() {
        let mut account_repo = MockAccountRepository::new();
        account_repo.expect_exists_by_id().returning(|_| Ok(true));
        let mut movement_repo = MockMovementRepository::new();
        movement_repo
            .expect_find_by_account()
            .returning(|account_id| Ok(vec![stored_movement(1, account_id)]));

        let result = service(account_repo, MockClientRepository::new(), movement_repo)
            .delete_account(1)
            .await;

        assert!(matches!(result, Err(AccountError::HasMovements(1))));
    }

    #[tokio::test]
    async fn delete_account_without_movements_succeeds() {
        let mut account_repo = MockAccountRepository::new();
        account_repo.expect_exists_by_id().returning(|_| Ok(true));
        account_repo.expect_delete_by_id().returning(|_| Ok(()));
        let mut movement_repo = MockMovementRepository::new();
        movement_repo.expect_find_by_account().returning(|_| Ok(vec![]));

        let deleted = service(account_repo, MockClientRepository::new(), movement_repo)
            .delete_account(1)
            .await
            .unwrap();

        assert!(deleted);
    }

    #[tokio::test]
    async fn delete_account_fails_for_missing_id() {
        let mut account_repo = MockAccountRepository::new();
        account_repo.expect_exists_by_id().returning(|_| Ok(false));

        let result = service(
            account_repo,
            MockClientRepository::new(),
            MockMovementRepository::new(),
        )
        .delete_account(99)
        .await;

        assert!(matches!(result, Err(AccountError::NotFound(99))));
    }
}
