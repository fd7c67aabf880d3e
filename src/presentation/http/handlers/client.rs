//! Client Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateClientRequest, UpdateClientRequest};
use crate::application::dto::response::{AccountResponse, ClientResponse};
use crate::application::services::{
    AccountError, AccountService, AccountServiceImpl, ClientError, ClientService,
    ClientServiceImpl, CreateClientDto, UpdateClientDto,
};
use crate::infrastructure::repositories::{
    PgAccountRepository, PgClientRepository, PgMovementRepository,
};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn client_service(
    state: &AppState,
) -> ClientServiceImpl<PgClientRepository, PgAccountRepository> {
    let client_repo = Arc::new(PgClientRepository::new(state.db.clone()));
    let account_repo = Arc::new(PgAccountRepository::new(state.db.clone()));
    ClientServiceImpl::new(client_repo, account_repo)
}

fn map_client_error(e: ClientError) -> AppError {
    match e {
        ClientError::NotFound(_) | ClientError::NoneFound => AppError::NotFound(e.to_string()),
        ClientError::UnderAge | ClientError::HasAccounts(_) => AppError::BadRequest(e.to_string()),
        ClientError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Create a new client
pub async fn create_client(
    State(state): State<AppState>,
    Json(body): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), AppError> {
    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let request = CreateClientDto {
        document_type: body.document_type,
        document_number: body.document_number,
        status: body.status,
        client_type: body.client_type,
        address: body.address,
        phone: body.phone,
        email: body.email,
        first_name: body.first_name,
        middle_name: body.middle_name,
        last_name: body.last_name,
        second_last_name: body.second_last_name,
        birth_date: body.birth_date,
    };

    let client = client_service(&state)
        .create_client(request)
        .await
        .map_err(map_client_error)?;

    Ok((StatusCode::CREATED, Json(ClientResponse::from(client))))
}

/// Get client by ID
pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<ClientResponse>, AppError> {
    let client_id: i64 = client_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid client ID".into()))?;

    let client = client_service(&state)
        .get_client(client_id)
        .await
        .map_err(map_client_error)?;

    Ok(Json(ClientResponse::from(client)))
}

/// List all clients
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, AppError> {
    let clients = client_service(&state)
        .list_clients()
        .await
        .map_err(map_client_error)?;

    Ok(Json(clients.into_iter().map(ClientResponse::from).collect()))
}

/// Update client
pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(body): Json<UpdateClientRequest>,
) -> Result<Json<ClientResponse>, AppError> {
    let client_id: i64 = client_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid client ID".into()))?;

    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let update = UpdateClientDto {
        document_type: body.document_type,
        document_number: body.document_number,
        status: body.status,
        client_type: body.client_type,
        address: body.address,
        phone: body.phone,
        email: body.email,
        first_name: body.first_name,
        middle_name: body.middle_name,
        last_name: body.last_name,
        second_last_name: body.second_last_name,
        birth_date: body.birth_date,
    };

    let client = client_service(&state)
        .update_client(client_id, update)
        .await
        .map_err(map_client_error)?;

    Ok(Json(ClientResponse::from(client)))
}

/// Delete client
///
/// Refused with 400 while the client still owns accounts.
pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<bool>, AppError> {
    let client_id: i64 = client_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid client ID".into()))?;

    let deleted = client_service(&state)
        .delete_client(client_id)
        .await
        .map_err(map_client_error)?;

    Ok(Json(deleted))
}

/// List accounts owned by a client
pub async fn get_client_accounts(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let client_id: i64 = client_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid client ID".into()))?;

    let account_repo = Arc::new(PgAccountRepository::new(state.db.clone()));
    let client_repo = Arc::new(PgClientRepository::new(state.db.clone()));
    let movement_repo = Arc::new(PgMovementRepository::new(state.db.clone()));
    let account_service = AccountServiceImpl::new(account_repo, client_repo, movement_repo);

    let accounts = account_service
        .list_accounts_by_client(client_id)
        .await
        .map_err(|e| match e {
            AccountError::ClientNotFound(_) => AppError::NotFound(e.to_string()),
            AccountError::Internal(msg) => AppError::Internal(msg),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(
        accounts.into_iter().map(AccountResponse::from).collect(),
    ))
}
