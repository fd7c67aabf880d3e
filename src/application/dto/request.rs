//! Request DTOs
//!
//! Data structures for API request bodies. Updates carry the same full
//! payload as creates: the services overwrite every mutable field, there
//! are no partial-update semantics.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Create client request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, message = "Document type must not be blank"))]
    pub document_type: String,

    pub document_number: i64,

    #[validate(length(min = 1, message = "Status must not be blank"))]
    pub status: String,

    #[validate(length(min = 1, message = "Client type must not be blank"))]
    pub client_type: String,

    pub address: String,

    pub phone: String,

    #[validate(
        length(min = 1, message = "Email is mandatory"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "First name must not be blank"))]
    pub first_name: String,

    pub middle_name: Option<String>,

    #[validate(length(min = 1, message = "Last name must not be blank"))]
    pub last_name: String,

    pub second_last_name: Option<String>,

    pub birth_date: NaiveDate,
}

/// Update client request (full overwrite)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, message = "Document type must not be blank"))]
    pub document_type: String,

    pub document_number: i64,

    #[validate(length(min = 1, message = "Status must not be blank"))]
    pub status: String,

    #[validate(length(min = 1, message = "Client type must not be blank"))]
    pub client_type: String,

    pub address: String,

    pub phone: String,

    #[validate(
        length(min = 1, message = "Email is mandatory"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "First name must not be blank"))]
    pub first_name: String,

    pub middle_name: Option<String>,

    #[validate(length(min = 1, message = "Last name must not be blank"))]
    pub last_name: String,

    pub second_last_name: Option<String>,

    pub birth_date: NaiveDate,
}

/// Create account request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    /// Owning client id; validated against the store by the service
    pub client_id: i64,

    #[validate(length(min = 1, message = "Product must not be blank"))]
    pub product: String,

    #[validate(length(min = 1, message = "Status must not be blank"))]
    pub status: String,

    pub credit_value: String,

    pub opened_at: NaiveDate,
}

/// Update account request (full overwrite; the owning client is immutable)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 1, message = "Product must not be blank"))]
    pub product: String,

    #[validate(length(min = 1, message = "Status must not be blank"))]
    pub status: String,

    pub credit_value: String,

    pub opened_at: NaiveDate,
}

/// Create movement request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMovementRequest {
    /// Owning account id; validated against the store by the service
    pub account_id: i64,

    #[validate(length(min = 1, message = "Kind must not be blank"))]
    pub kind: String,

    pub value: i64,

    pub period: String,

    #[validate(length(min = 1, message = "State must not be blank"))]
    pub state: String,

    pub movement_date: NaiveDate,
}

/// Update movement request (full overwrite; the owning account is immutable)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMovementRequest {
    #[validate(length(min = 1, message = "Kind must not be blank"))]
    pub kind: String,

    pub value: i64,

    pub period: String,

    #[validate(length(min = 1, message = "State must not be blank"))]
    pub state: String,

    pub movement_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_json(email: &str) -> String {
        format!(
            r#"{{
                "document_type": "CC",
                "document_number": 1234567,
                "status": "activo",
                "client_type": "personal",
                "address": "Calle 1 # 2-3",
                "phone": "3001234567",
                "email": "{email}",
                "first_name": "Ana",
                "last_name": "Gomez",
                "birth_date": "1980-05-24"
            }}"#
        )
    }

    #[test]
    fn valid_client_request_passes_validation() {
        let request: CreateClientRequest =
            serde_json::from_str(&client_json("ana@example.com")).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn malformed_email_fails_validation() {
        let request: CreateClientRequest =
            serde_json::from_str(&client_json("not-an-email")).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn blank_email_fails_validation() {
        let request: CreateClientRequest = serde_json::from_str(&client_json("")).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn optional_name_parts_default_to_none() {
        let request: CreateClientRequest =
            serde_json::from_str(&client_json("ana@example.com")).unwrap();
        assert!(request.middle_name.is_none());
        assert!(request.second_last_name.is_none());
    }
}
