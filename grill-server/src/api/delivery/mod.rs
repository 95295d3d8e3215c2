//! Delivery registration API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /delivery/pickup | POST | register a rider pickup |
//! | /delivery/doorstep | POST | register a doorstep drop-off |
//! | /delivery/{delivery_id} | GET | stored delivery record |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/delivery", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/pickup", post(handler::create_pickup))
        .route("/doorstep", post(handler::create_doorstep))
        .route("/{delivery_id}", get(handler::get_by_id))
}
