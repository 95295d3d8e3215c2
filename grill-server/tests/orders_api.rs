mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Duration};
use common::{app, app_with, get, order_payload, post, send};
use grill_server::Config;
use serde_json::json;

#[tokio::test]
async fn test_create_and_fetch_order() {
    let app = app();
    let (status, body) = post(&app, "/orders", order_payload()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Order confirmed");
    let order_id = body["order_id"].as_str().unwrap().to_string();
    let estimate = body["estimated_delivery_time"].as_str().unwrap().to_string();

    let (status, order) = get(&app, &format!("/orders/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["order_id"], order_id.as_str());
    assert_eq!(order["order_status"], "Pending");
    assert_eq!(order["delivery_mode"], "doorstep");
    assert_eq!(order["full_price"], 4000.0);
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
    assert_eq!(order["items"][1]["addins"], json!([]));
    assert_eq!(order["estimated_delivery_time"], estimate.as_str());

    let created_at = DateTime::parse_from_rfc3339(order["created_at"].as_str().unwrap()).unwrap();
    let expected = (created_at + Duration::minutes(45)).format("%H:%M").to_string();
    assert_eq!(estimate, expected);
}

#[tokio::test]
async fn test_full_price_is_exact_sum() {
    let app = app();
    let mut payload = order_payload();
    payload["items"] = json!([
        {"food_name": "Puff puff", "size": "small", "price": 0.1},
        {"food_name": "Zobo", "size": "small", "price": 0.2}
    ]);

    let (_, body) = post(&app, "/orders", payload).await;
    let order_id = body["order_id"].as_str().unwrap().to_string();

    let (_, order) = get(&app, &format!("/orders/{order_id}")).await;
    assert_eq!(order["full_price"], 0.3);
}

#[tokio::test]
async fn test_mark_delivered_twice() {
    let app = app();
    let (_, body) = post(&app, "/orders", order_payload()).await;
    let order_id = body["order_id"].as_str().unwrap().to_string();
    let uri = format!("/orders/{order_id}/deliver");

    for _ in 0..2 {
        let (status, body) = send(&app, "PATCH", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Order marked as delivered"}));

        let (_, order) = get(&app, &format!("/orders/{order_id}")).await;
        assert_eq!(order["order_status"], "Delivered");
        assert!(order["delivered_at"].is_string());
        assert_eq!(order["full_price"], 4000.0);
    }
}

#[tokio::test]
async fn test_unknown_order() {
    let app = app();
    let (status, body) = get(&app, "/orders/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found");
    assert_eq!(body["code"], 4001);

    let (status, _) = send(&app, "PATCH", "/orders/missing/deliver", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_order_missing_fields() {
    let app = app();

    let mut payload = order_payload();
    payload.as_object_mut().unwrap().remove("items");
    let (status, body) = post(&app, "/orders", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "items is required");

    let mut payload = order_payload();
    payload["items"][0].as_object_mut().unwrap().remove("size");
    let (status, body) = post(&app, "/orders", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "items[0].size is required");

    let mut payload = order_payload();
    payload["customer_phone"] = json!("  ");
    let (status, body) = post(&app, "/orders", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "customer_phone");
}

#[tokio::test]
async fn test_lenient_mode_accepts_empty_items_and_unknown_mode() {
    let app = app();
    let mut payload = order_payload();
    payload["items"] = json!([]);
    payload["delivery_mode"] = json!("drone");

    let (status, body) = post(&app, "/orders", payload).await;
    assert_eq!(status, StatusCode::CREATED);

    let order_id = body["order_id"].as_str().unwrap().to_string();
    let (_, order) = get(&app, &format!("/orders/{order_id}")).await;
    assert_eq!(order["delivery_mode"], "drone");
    assert_eq!(order["full_price"], 0.0);
}

#[tokio::test]
async fn test_strict_mode() {
    let app = app_with(Config {
        strict_order_validation: true,
        ..Config::in_memory()
    });

    let mut payload = order_payload();
    payload["items"] = json!([]);
    let (status, body) = post(&app, "/orders", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);

    let mut payload = order_payload();
    payload["delivery_mode"] = json!("drone");
    let (status, body) = post(&app, "/orders", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);

    let (status, _) = post(&app, "/orders", order_payload()).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_business_timezone_applies_to_timestamps() {
    let app = app_with(Config {
        timezone: chrono_tz::Africa::Lagos,
        ..Config::in_memory()
    });

    let (_, body) = post(&app, "/orders", order_payload()).await;
    let order_id = body["order_id"].as_str().unwrap().to_string();
    let (_, order) = get(&app, &format!("/orders/{order_id}")).await;

    let created_at = DateTime::parse_from_rfc3339(order["created_at"].as_str().unwrap()).unwrap();
    assert_eq!(created_at.offset().local_minus_utc(), 3600);
}
