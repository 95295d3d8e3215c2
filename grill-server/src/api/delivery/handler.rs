//! Delivery API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Delivery, DoorstepCreate, PickupCreate};
use shared::response::DeliveryCreated;
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::utils::JsonBody;

/// Reject a delivery for an unknown order when the server is configured to check
fn ensure_order_exists(state: &ServerState, order_id: &str) -> AppResult<()> {
    if state.config.verify_delivery_order && !state.orders().exists(order_id)? {
        tracing::warn!(order_id = %order_id, "Delivery references a missing order");
        return Err(AppError::with_message(
            ErrorCode::ReferencedOrderMissing,
            format!("Order {order_id} does not exist"),
        )
        .with_detail("order_id", order_id));
    }
    Ok(())
}

fn register(state: &ServerState, delivery: Delivery) -> AppResult<(StatusCode, Json<DeliveryCreated>)> {
    ensure_order_exists(state, delivery.order_id())?;
    state.deliveries().create(&delivery)?;
    tracing::info!(
        delivery_id = %delivery.delivery_id(),
        order_id = %delivery.order_id(),
        kind = delivery.kind(),
        "Delivery registered"
    );
    Ok((
        StatusCode::CREATED,
        Json(DeliveryCreated::new(delivery.delivery_id())),
    ))
}

pub async fn create_pickup(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<PickupCreate>,
) -> AppResult<(StatusCode, Json<DeliveryCreated>)> {
    let pickup = payload.validate(state.now())?;
    register(&state, Delivery::Pickup(pickup))
}

pub async fn create_doorstep(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<DoorstepCreate>,
) -> AppResult<(StatusCode, Json<DeliveryCreated>)> {
    let doorstep = payload.validate(state.now())?;
    register(&state, Delivery::Doorstep(doorstep))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(delivery_id): Path<String>,
) -> AppResult<Json<Delivery>> {
    let delivery = state.deliveries().find_by_id(&delivery_id)?.ok_or_else(|| {
        tracing::warn!(delivery_id = %delivery_id, "Delivery not found");
        AppError::new(ErrorCode::DeliveryNotFound).with_detail("delivery_id", delivery_id.clone())
    })?;
    Ok(Json(delivery))
}
