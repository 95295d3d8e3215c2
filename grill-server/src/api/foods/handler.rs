//! Food API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Map, Value};
use shared::models::{FoodCreate, FoodRecord, FoodUpdate};
use shared::response::{DataResponse, FoodCreated, MessageResponse};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::utils::JsonBody;

fn food_not_found(id: &str) -> AppError {
    tracing::warn!(food_id = %id, "Food not found");
    AppError::new(ErrorCode::FoodNotFound).with_detail("food_id", id)
}

/// List the whole catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<DataResponse<Vec<FoodRecord>>>> {
    let foods = state.foods().find_all()?;
    Ok(Json(DataResponse::new(foods)))
}

/// Create a catalog item
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<FoodCreate>,
) -> AppResult<(StatusCode, Json<FoodCreated>)> {
    let item = payload.validate()?;
    let id = state.foods().create(&item)?;
    tracing::info!(food_id = %id, food_name = %item.food_name, "Food created");
    Ok((StatusCode::CREATED, Json(FoodCreated::new(id))))
}

/// Merge the supplied fields into an existing item
///
/// An unknown id is reported before the patch itself is checked.
pub async fn update(
    State(state): State<ServerState>,
    Path(food_id): Path<String>,
    JsonBody(fields): JsonBody<Map<String, Value>>,
) -> AppResult<Json<MessageResponse>> {
    let repo = state.foods();
    if repo.find_by_id(&food_id)?.is_none() {
        return Err(food_not_found(&food_id));
    }
    let patch = FoodUpdate::from_fields(fields)?;
    if !repo.update(&food_id, patch)? {
        return Err(food_not_found(&food_id));
    }
    tracing::info!(food_id = %food_id, "Food updated");
    Ok(Json(MessageResponse::new("Food updated successfully")))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(food_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !state.foods().delete(&food_id)? {
        return Err(food_not_found(&food_id));
    }
    tracing::info!(food_id = %food_id, "Food deleted");
    Ok(Json(MessageResponse::new("Food deleted successfully")))
}
