//! Liveness routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | / | GET, POST | welcome banner |
//! | /health | GET | health check |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub const WELCOME: &str = "Welcome to Holy Grills.";

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(welcome).post(welcome))
        .route("/health", get(health))
}

async fn welcome() -> Json<&'static str> {
    Json(WELCOME)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    environment: String,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
    })
}
