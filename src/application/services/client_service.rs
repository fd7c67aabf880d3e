//! Client Service
//!
//! Client CRUD with the legal-age rule and the accounts delete guard.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};

use crate::domain::{AccountRepository, Client, ClientRepository};

use super::{has_dependents, AUDIT_USER};

/// Minimum age, in whole years, for a client to be created or updated.
const LEGAL_AGE: i32 = 18;

/// Client service trait
#[async_trait]
pub trait ClientService: Send + Sync {
    /// Create a new client. Rejects clients under the legal age.
    async fn create_client(&self, data: CreateClientDto) -> Result<Client, ClientError>;

    /// Get a client by id.
    async fn get_client(&self, client_id: i64) -> Result<Client, ClientError>;

    /// List every client. Fails when the store holds none.
    async fn list_clients(&self) -> Result<Vec<Client>, ClientError>;

    /// Overwrite every mutable field of an existing client. Rejects when
    /// the new birth date violates the legal-age rule.
    async fn update_client(&self, client_id: i64, data: UpdateClientDto)
        -> Result<Client, ClientError>;

    /// Delete a client. Blocked while any account references it.
    async fn delete_client(&self, client_id: i64) -> Result<bool, ClientError>;
}

/// Create client request
#[derive(Debug, Clone)]
pub struct CreateClientDto {
    pub document_type: String,
    pub document_number: i64,
    pub status: String,
    pub client_type: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub second_last_name: Option<String>,
    pub birth_date: NaiveDate,
}

/// Update client request. Full overwrite: every mutable field is replaced,
/// there are no partial-update semantics.
#[derive(Debug, Clone)]
pub struct UpdateClientDto {
    pub document_type: String,
    pub document_number: i64,
    pub status: String,
    pub client_type: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub second_last_name: Option<String>,
    pub birth_date: NaiveDate,
}

/// Client service errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("client with id {0} does not exist")]
    NotFound(i64),

    #[error("no clients found")]
    NoneFound,

    #[error("client is under legal age")]
    UnderAge,

    #[error("client with id {0} cannot be deleted because it has linked accounts")]
    HasAccounts(i64),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Whole years elapsed between `birth_date` and `today`.
fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years
}

/// Legal-age predicate over a birth date.
///
/// Computes the client's age in whole years and compares it against the
/// legal threshold. Birthdays count from the start of the day: a client
/// turning 18 on `today` passes.
pub fn is_of_legal_age(birth_date: NaiveDate, today: NaiveDate) -> bool {
    age_in_years(birth_date, today) >= LEGAL_AGE
}

/// ClientService implementation
pub struct ClientServiceImpl<C, A>
where
    C: ClientRepository,
    A: AccountRepository,
{
    client_repo: Arc<C>,
    account_repo: Arc<A>,
}

impl<C, A> ClientServiceImpl<C, A>
where
    C: ClientRepository,
    A: AccountRepository,
{
    pub fn new(client_repo: Arc<C>, account_repo: Arc<A>) -> Self {
        Self {
            client_repo,
            account_repo,
        }
    }
}

#[async_trait]
impl<C, A> ClientService for ClientServiceImpl<C, A>
where
    C: ClientRepository + 'static,
    A: AccountRepository + 'static,
{
    async fn create_client(&self, data: CreateClientDto) -> Result<Client, ClientError> {
        let today = Utc::now().date_naive();

        if !is_of_legal_age(data.birth_date, today) {
            return Err(ClientError::UnderAge);
        }

        let client = Client {
            id: 0,
            document_type: data.document_type,
            document_number: data.document_number,
            status: data.status,
            client_type: data.client_type,
            address: data.address,
            phone: data.phone,
            email: data.email,
            first_name: data.first_name,
            middle_name: data.middle_name,
            last_name: data.last_name,
            second_last_name: data.second_last_name,
            birth_date: data.birth_date,
            created_at: today,
            created_by: AUDIT_USER.to_string(),
            modified_at: None,
            modified_by: None,
        };

        self.client_repo
            .create(&client)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))
    }

    async fn get_client(&self, client_id: i64) -> Result<Client, ClientError> {
        self.client_repo
            .find_by_id(client_id)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?
            .ok_or(ClientError::NotFound(client_id))
    }

    async fn list_clients(&self) -> Result<Vec<Client>, ClientError> {
        let clients = self
            .client_repo
            .find_all()
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        if clients.is_empty() {
            return Err(ClientError::NoneFound);
        }

        Ok(clients)
    }

    async fn update_client(
        &self,
        client_id: i64,
        data: UpdateClientDto,
    ) -> Result<Client, ClientError> {
        if !self
            .client_repo
            .exists_by_id(client_id)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?
        {
            return Err(ClientError::NotFound(client_id));
        }

        let today = Utc::now().date_naive();

        // Validated before anything is written: a rejected update leaves
        // the stored record exactly as it was.
        if !is_of_legal_age(data.birth_date, today) {
            return Err(ClientError::UnderAge);
        }

        let existing = self
            .client_repo
            .find_by_id(client_id)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?
            .ok_or(ClientError::NotFound(client_id))?;

        let updated = Client {
            id: existing.id,
            document_type: data.document_type,
            document_number: data.document_number,
            status: data.status,
            client_type: data.client_type,
            address: data.address,
            phone: data.phone,
            email: data.email,
            first_name: data.first_name,
            middle_name: data.middle_name,
            last_name: data.last_name,
            second_last_name: data.second_last_name,
            birth_date: data.birth_date,
            created_at: existing.created_at,
            created_by: existing.created_by,
            modified_at: Some(today),
            modified_by: Some(AUDIT_USER.to_string()),
        };

        self.client_repo
            .update(&updated)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))
    }

    async fn delete_client(&self, client_id: i64) -> Result<bool, ClientError> {
        if !self
            .client_repo
            .exists_by_id(client_id)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?
        {
            return Err(ClientError::NotFound(client_id));
        }

        if has_dependents(self.account_repo.find_by_client(client_id))
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?
        {
            return Err(ClientError::HasAccounts(client_id));
        }

        self.client_repo
            .delete_by_id(client_id)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        Ok(true)
    }
}
