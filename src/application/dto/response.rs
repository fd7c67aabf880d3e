//! Response DTOs
//!
//! Data structures for API response bodies, converted from domain entities.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Account, Client, Movement};

/// Client response
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: i64,
    pub document_type: String,
    pub document_number: i64,
    pub status: String,
    pub client_type: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_last_name: Option<String>,
    pub birth_date: NaiveDate,
    pub created_at: NaiveDate,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            document_type: client.document_type,
            document_number: client.document_number,
            status: client.status,
            client_type: client.client_type,
            address: client.address,
            phone: client.phone,
            email: client.email,
            first_name: client.first_name,
            middle_name: client.middle_name,
            last_name: client.last_name,
            second_last_name: client.second_last_name,
            birth_date: client.birth_date,
            created_at: client.created_at,
            created_by: client.created_by,
            modified_at: client.modified_at,
            modified_by: client.modified_by,
        }
    }
}

/// Account response
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub client_id: i64,
    pub product: String,
    pub status: String,
    pub credit_value: String,
    pub opened_at: NaiveDate,
    pub created_at: NaiveDate,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            client_id: account.client_id,
            product: account.product,
            status: account.status,
            credit_value: account.credit_value,
            opened_at: account.opened_at,
            created_at: account.created_at,
            created_by: account.created_by,
            modified_at: account.modified_at,
            modified_by: account.modified_by,
        }
    }
}

/// Movement response
#[derive(Debug, Serialize)]
pub struct MovementResponse {
    pub id: i64,
    pub account_id: i64,
    pub kind: String,
    pub value: i64,
    pub period: String,
    pub state: String,
    pub movement_date: NaiveDate,
    pub created_at: NaiveDate,
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

impl From<Movement> for MovementResponse {
    fn from(movement: Movement) -> Self {
        Self {
            id: movement.id,
            account_id: movement.account_id,
            kind: movement.kind,
            value: movement.value,
            period: movement.period,
            state: movement.state,
            movement_date: movement.movement_date,
            created_at: movement.created_at,
            created_by: movement.created_by,
            modified_at: movement.modified_at,
            modified_by: movement.modified_by,
        }
    }
}
