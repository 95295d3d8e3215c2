//! Food catalog API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /foods/all | GET | list every item with its id |
//! | /foods/foods | POST | create an item |
//! | /foods/foods/{food_id} | PUT | merge the supplied fields |
//! | /foods/foods/{food_id} | DELETE | remove an item |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/foods", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/all", get(handler::list))
        .route("/foods", post(handler::create))
        .route("/foods/{food_id}", put(handler::update).delete(handler::delete))
}
