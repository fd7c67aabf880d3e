//! Client Repository Implementation
//!
//! PostgreSQL implementation of the ClientRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{Client, ClientRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `clients` table schema.
#[derive(Debug, sqlx::FromRow)]
struct ClientRow {
    id: i64,
    document_type: String,
    document_number: i64,
    status: String,
    client_type: String,
    address: String,
    phone: String,
    email: String,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    second_last_name: Option<String>,
    birth_date: NaiveDate,
    created_at: NaiveDate,
    created_by: String,
    modified_at: Option<NaiveDate>,
    modified_by: Option<String>,
}

impl ClientRow {
    /// Convert database row to domain Client entity.
    fn into_client(self) -> Client {
        Client {
            id: self.id,
            document_type: self.document_type,
            document_number: self.document_number,
            status: self.status,
            client_type: self.client_type,
            address: self.address,
            phone: self.phone,
            email: self.email,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            second_last_name: self.second_last_name,
            birth_date: self.birth_date,
            created_at: self.created_at,
            created_by: self.created_by,
            modified_at: self.modified_at,
            modified_by: self.modified_by,
        }
    }
}

const CLIENT_COLUMNS: &str = "id, document_type, document_number, status, client_type, address, \
                              phone, email, first_name, middle_name, last_name, second_last_name, \
                              birth_date, created_at, created_by, modified_at, modified_by";

/// PostgreSQL client repository implementation.
#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    /// Create a new PgClientRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM clients WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_client()))
    }

    async fn find_all(&self) -> Result<Vec<Client>, AppError> {
        let rows = sqlx::query_as::<_, ClientRow>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_client()).collect())
    }

    async fn create(&self, client: &Client) -> Result<Client, AppError> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            r#"
            INSERT INTO clients (document_type, document_number, status, client_type, address,
                                 phone, email, first_name, middle_name, last_name,
                                 second_last_name, birth_date, created_at, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(&client.document_type)
        .bind(client.document_number)
        .bind(&client.status)
        .bind(&client.client_type)
        .bind(&client.address)
        .bind(&client.phone)
        .bind(&client.email)
        .bind(&client.first_name)
        .bind(&client.middle_name)
        .bind(&client.last_name)
        .bind(&client.second_last_name)
        .bind(client.birth_date)
        .bind(client.created_at)
        .bind(&client.created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_client())
    }

    async fn update(&self, client: &Client) -> Result<Client, AppError> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            r#"
            UPDATE clients
            SET document_type = $2,
                document_number = $3,
                status = $4,
                client_type = $5,
                address = $6,
                phone = $7,
                email = $8,
                first_name = $9,
                middle_name = $10,
                last_name = $11,
                second_last_name = $12,
                birth_date = $13,
                modified_at = $14,
                modified_by = $15
            WHERE id = $1
            RETURNING {CLIENT_COLUMNS}
            "#
        ))
        .bind(client.id)
        .bind(&client.document_type)
        .bind(client.document_number)
        .bind(&client.status)
        .bind(&client.client_type)
        .bind(&client.address)
        .bind(&client.phone)
        .bind(&client.email)
        .bind(&client.first_name)
        .bind(&client.middle_name)
        .bind(&client.last_name)
        .bind(&client.second_last_name)
        .bind(client.birth_date)
        .bind(client.modified_at)
        .bind(&client.modified_by)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("client with id {} not found", client.id)))?;

        Ok(row.into_client())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("client with id {} not found", id)));
        }

        Ok(())
    }
}
