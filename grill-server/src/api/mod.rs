//! API routes
//!
//! - [`health`] - liveness banner and health check
//! - [`foods`] - food catalog
//! - [`orders`] - order placement and delivery status
//! - [`delivery`] - pickup / doorstep registration

pub mod delivery;
pub mod foods;
pub mod health;
pub mod orders;

use std::time::Duration;

use axum::Router;
use shared::{AppError, ErrorCode};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Routes without state or middleware
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(foods::router())
        .merge(orders::router())
        .merge(delivery::router())
        .fallback(route_not_found)
}

/// The full service: routes, middleware and state
pub fn build_router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    build_app()
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found() -> AppError {
    AppError::with_message(ErrorCode::NotFound, "Route not found")
}
