//! Client entity and repository trait.
//!
//! Maps to the `clients` table in the database schema.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a bank customer.
///
/// Maps to the `clients` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - document_type, status, client_type: TEXT NOT NULL
/// - document_number: BIGINT NOT NULL
/// - address, phone, email: TEXT NOT NULL
/// - first_name, last_name: TEXT NOT NULL; middle_name, second_last_name: TEXT NULL
/// - birth_date: DATE NOT NULL
/// - created_at: DATE NOT NULL, created_by: TEXT NOT NULL
/// - modified_at: DATE NULL, modified_by: TEXT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Primary key, assigned by the database on insert
    pub id: i64,

    /// Identity document type (e.g. national ID, passport)
    pub document_type: String,

    /// Identity document number
    pub document_number: i64,

    /// Client status (free text, e.g. "activo"/"inactivo")
    pub status: String,

    /// Client classification
    pub client_type: String,

    pub address: String,

    pub phone: String,

    /// Contact email, validated at the request boundary
    pub email: String,

    pub first_name: String,

    pub middle_name: Option<String>,

    pub last_name: String,

    pub second_last_name: Option<String>,

    pub birth_date: NaiveDate,

    /// Audit: set exactly once at creation
    pub created_at: NaiveDate,

    /// Audit: set exactly once at creation
    pub created_by: String,

    /// Audit: set on every update
    pub modified_at: Option<NaiveDate>,

    /// Audit: set on every update
    pub modified_by: Option<String>,
}

impl Client {
    /// Full display name, skipping absent middle/second-last names.
    pub fn full_name(&self) -> String {
        let mut parts = vec![self.first_name.as_str()];
        if let Some(middle) = &self.middle_name {
            parts.push(middle);
        }
        parts.push(&self.last_name);
        if let Some(second_last) = &self.second_last_name {
            parts.push(second_last);
        }
        parts.join(" ")
    }
}

/// Repository trait for Client data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Check whether a client with the given id exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Find a client by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError>;

    /// Find every client.
    async fn find_all(&self) -> Result<Vec<Client>, AppError>;

    /// Insert a new client. The `id` field is ignored; the stored record
    /// carries the database-assigned id.
    async fn create(&self, client: &Client) -> Result<Client, AppError>;

    /// Overwrite an existing client, matched by `id`.
    async fn update(&self, client: &Client) -> Result<Client, AppError>;

    /// Delete a client by id.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_client() -> Client {
        Client {
            id: 1,
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
            created_by: "system".into(),
            modified_at: None,
            modified_by: None,
        }
    }

    #[test]
    fn full_name_skips_absent_parts() {
        let client = sample_client();
        assert_eq!(client.full_name(), "Ana Gomez");
    }

    #[test]
    fn full_name_includes_all_parts() {
        let client = Client {
            middle_name: Some("Maria".into()),
            second_last_name: Some("Lopez".into()),
            ..sample_client()
        };
        assert_eq!(client.full_name(), "Ana Maria Gomez Lopez");
    }

    #[test]
    fn serializes_dates_as_iso_strings() {
        let json = serde_json::to_value(sample_client()).unwrap();
        assert_eq!(json["birth_date"], "1980-05-24");
        assert_eq!(json["created_at"], "2022-01-01");
        assert!(json["modified_at"].is_null());
    }
}
