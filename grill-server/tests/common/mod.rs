#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use grill_server::api::build_router;
use grill_server::{Config, ServerState};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn app() -> Router {
    app_with(Config::in_memory())
}

pub fn app_with(config: Config) -> Router {
    let state = ServerState::initialize(&config).unwrap();
    build_router(state)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub fn order_payload() -> Value {
    json!({
        "items": [
            {"food_name": "Jollof Rice", "addins": ["plantain"], "size": "large", "price": 2500.0},
            {"food_name": "Chapman", "size": "medium", "price": 1500.0}
        ],
        "customer_name": "Ada Obi",
        "customer_phone": "08031234567",
        "delivery_mode": "doorstep"
    })
}

pub fn pickup_payload(order_id: &str) -> Value {
    json!({
        "order_id": order_id,
        "customer_name": "Ada Obi",
        "customer_phone": "08031234567",
        "rider_name": "Tunde",
        "order_time": "6:30 PM",
        "restaurant_address": "12 Campus Road"
    })
}

pub fn doorstep_payload(order_id: &str) -> Value {
    json!({
        "order_id": order_id,
        "street": "Hall Road",
        "zone": "North",
        "lodge_name": "Emerald Lodge",
        "delivery_time": "7:00 PM"
    })
}
