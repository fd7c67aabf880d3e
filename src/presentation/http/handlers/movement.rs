//! Movement Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{CreateMovementRequest, UpdateMovementRequest};
use crate::application::dto::response::MovementResponse;
use crate::application::services::{
    CreateMovementDto, MovementError, MovementService, MovementServiceImpl, UpdateMovementDto,
};
use crate::infrastructure::repositories::{PgAccountRepository, PgMovementRepository};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn movement_service(
    state: &AppState,
) -> MovementServiceImpl<PgMovementRepository, PgAccountRepository> {
    let movement_repo = Arc::new(PgMovementRepository::new(state.db.clone()));
    let account_repo = Arc::new(PgAccountRepository::new(state.db.clone()));
    MovementServiceImpl::new(movement_repo, account_repo)
}

fn map_movement_error(e: MovementError) -> AppError {
    match e {
        MovementError::NotFound(_) | MovementError::AccountNotFound(_) => {
            AppError::NotFound(e.to_string())
        }
        MovementError::ActiveState(_) => AppError::BadRequest(e.to_string()),
        MovementError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Create a new movement against an existing account
pub async fn create_movement(
    State(state): State<AppState>,
    Json(body): Json<CreateMovementRequest>,
) -> Result<(StatusCode, Json<MovementResponse>), AppError> {
    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let request = CreateMovementDto {
        account_id: body.account_id,
        kind: body.kind,
        value: body.value,
        period: body.period,
        state: body.state,
        movement_date: body.movement_date,
    };

    let movement = movement_service(&state)
        .create_movement(request)
        .await
        .map_err(map_movement_error)?;

    Ok((StatusCode::CREATED, Json(MovementResponse::from(movement))))
}

/// Get movement by ID
pub async fn get_movement(
    State(state): State<AppState>,
    Path(movement_id): Path<String>,
) -> Result<Json<MovementResponse>, AppError> {
    let movement_id: i64 = movement_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid movement ID".into()))?;

    let movement = movement_service(&state)
        .get_movement(movement_id)
        .await
        .map_err(map_movement_error)?;

    Ok(Json(MovementResponse::from(movement)))
}

/// Update movement
pub async fn update_movement(
    State(state): State<AppState>,
    Path(movement_id): Path<String>,
    Json(body): Json<UpdateMovementRequest>,
) -> Result<Json<MovementResponse>, AppError> {
    let movement_id: i64 = movement_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid movement ID".into()))?;

    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let update = UpdateMovementDto {
        kind: body.kind,
        value: body.value,
        period: body.period,
        state: body.state,
        movement_date: body.movement_date,
    };

    let movement = movement_service(&state)
        .update_movement(movement_id, update)
        .await
        .map_err(map_movement_error)?;

    Ok(Json(MovementResponse::from(movement)))
}

/// Delete movement
///
/// Refused with 400 while the movement state is still active.
pub async fn delete_movement(
    State(state): State<AppState>,
    Path(movement_id): Path<String>,
) -> Result<Json<bool>, AppError> {
    let movement_id: i64 = movement_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid movement ID".into()))?;

    let deleted = movement_service(&state)
        .delete_movement(movement_id)
        .await
        .map_err(map_movement_error)?;

    Ok(Json(deleted))
}
