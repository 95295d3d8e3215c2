//! Order API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /orders | POST | place an order |
//! | /orders/{order_id} | GET | stored order record |
//! | /orders/{order_id}/deliver | PATCH | mark delivered |
//! | /orders/{order_id}/deliveries | GET | deliveries registered for the order |

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/orders", post(handler::create))
        .route("/orders/{order_id}", get(handler::get_by_id))
        .route("/orders/{order_id}/deliver", patch(handler::mark_delivered))
        .route("/orders/{order_id}/deliveries", get(handler::list_deliveries))
}
