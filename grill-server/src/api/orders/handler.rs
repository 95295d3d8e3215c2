//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Delivery, OrderCreate};
use shared::response::{DataResponse, Notice, OrderConfirmed};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::db::Document;
use crate::utils::JsonBody;

fn order_not_found(id: &str) -> AppError {
    tracing::warn!(order_id = %id, "Order not found");
    AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", id)
}

/// Place an order
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderConfirmed>)> {
    let order = payload.validate(state.config.strict_order_validation, state.now())?;
    state.orders().create(&order)?;
    tracing::info!(
        order_id = %order.order_id,
        items = order.items.len(),
        full_price = order.full_price,
        delivery_mode = %order.delivery_mode.as_str(),
        "Order created"
    );
    Ok((
        StatusCode::CREATED,
        Json(OrderConfirmed::new(order.order_id, order.estimated_delivery_time)),
    ))
}

/// The stored order record, unmodified
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Document>> {
    let order = state
        .orders()
        .find_raw(&order_id)?
        .ok_or_else(|| order_not_found(&order_id))?;
    Ok(Json(order))
}

pub async fn mark_delivered(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Notice>> {
    if !state.orders().mark_delivered(&order_id, state.now())? {
        return Err(order_not_found(&order_id));
    }
    tracing::info!(order_id = %order_id, "Order delivered");
    Ok(Json(Notice::new("Order marked as delivered")))
}

/// Deliveries registered against an order, oldest first
pub async fn list_deliveries(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Delivery>>>> {
    let deliveries = state.deliveries().list_for_order(&order_id)?;
    Ok(Json(DataResponse::new(deliveries)))
}
