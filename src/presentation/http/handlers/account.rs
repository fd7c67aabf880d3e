//! Account Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateAccountRequest, UpdateAccountRequest};
use crate::application::dto::response::{AccountResponse, MovementResponse};
use crate::application::services::{
    AccountError, AccountService, AccountServiceImpl, CreateAccountDto, MovementError,
    MovementService, MovementServiceImpl, UpdateAccountDto,
};
use crate::infrastructure::repositories::{
    PgAccountRepository, PgClientRepository, PgMovementRepository,
};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn account_service(
    state: &AppState,
) -> AccountServiceImpl<PgAccountRepository, PgClientRepository, PgMovementRepository> {
    let account_repo = Arc::new(PgAccountRepository::new(state.db.clone()));
    let client_repo = Arc::new(PgClientRepository::new(state.db.clone()));
    let movement_repo = Arc::new(PgMovementRepository::new(state.db.clone()));
    AccountServiceImpl::new(account_repo, client_repo, movement_repo)
}

fn map_account_error(e: AccountError) -> AppError {
    match e {
        AccountError::NotFound(_) | AccountError::ClientNotFound(_) => {
            AppError::NotFound(e.to_string())
        }
        AccountError::HasMovements(_) => AppError::BadRequest(e.to_string()),
        AccountError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Create a new account for an existing client
pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let request = CreateAccountDto {
        client_id: body.client_id,
        product: body.product,
        status: body.status,
        credit_value: body.credit_value,
        opened_at: body.opened_at,
    };

    let account = account_service(&state)
        .create_account(request)
        .await
        .map_err(map_account_error)?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// Get account by ID
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, AppError> {
    let account_id: i64 = account_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid account ID".into()))?;

    let account = account_service(&state)
        .get_account(account_id)
        .await
        .map_err(map_account_error)?;

    Ok(Json(AccountResponse::from(account)))
}

/// Update account
pub async fn update_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Json(body): Json<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let account_id: i64 = account_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid account ID".into()))?;

    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let update = UpdateAccountDto {
        product: body.product,
        status: body.status,
        credit_value: body.credit_value,
        opened_at: body.opened_at,
    };

    let account = account_service(&state)
        .update_account(account_id, update)
        .await
        .map_err(map_account_error)?;

    Ok(Json(AccountResponse::from(account)))
}

/// Delete account
///
/// Refused with 400 while the account still has movements.
pub async fn delete_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<bool>, AppError> {
    let account_id: i64 = account_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid account ID".into()))?;

    let deleted = account_service(&state)
        .delete_account(account_id)
        .await
        .map_err(map_account_error)?;

    Ok(Json(deleted))
}

/// List movements recorded against an account
pub async fn get_account_movements(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<Vec<MovementResponse>>, AppError> {
    let account_id: i64 = account_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid account ID".into()))?;

    let movement_repo = Arc::new(PgMovementRepository::new(state.db.clone()));
    let account_repo = Arc::new(PgAccountRepository::new(state.db.clone()));
    let movement_service = MovementServiceImpl::new(movement_repo, account_repo);

    let movements = movement_service
        .list_movements_by_account(account_id)
        .await
        .map_err(|e| match e {
            MovementError::AccountNotFound(_) => AppError::NotFound(e.to_string()),
            MovementError::Internal(msg) => AppError::Internal(msg),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(
        movements.into_iter().map(MovementResponse::from).collect(),
    ))
}
