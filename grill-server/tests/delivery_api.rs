mod common;

use axum::http::StatusCode;
use common::{app, app_with, doorstep_payload, get, order_payload, pickup_payload, post};
use grill_server::Config;
use serde_json::json;

#[tokio::test]
async fn test_register_pickup() {
    let app = app();
    let (status, body) = post(&app, "/delivery/pickup", pickup_payload("o1")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let delivery_id = body["delivery_id"].as_str().unwrap().to_string();

    let (status, delivery) = get(&app, &format!("/delivery/{delivery_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(delivery["type"], "pickup");
    assert_eq!(delivery["order_id"], "o1");
    assert_eq!(delivery["rider_name"], "Tunde");
    assert!(delivery["created_at"].is_string());
}

#[tokio::test]
async fn test_pickup_missing_field_names_it() {
    let app = app();
    let mut payload = pickup_payload("o1");
    payload.as_object_mut().unwrap().remove("restaurant_address");

    let (status, body) = post(&app, "/delivery/pickup", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "restaurant_address is required");
    assert_eq!(body["success"], false);

    let (_, listed) = get(&app, "/orders/o1/deliveries").await;
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn test_pickup_blank_field_is_missing() {
    let mut payload = pickup_payload("o1");
    payload["rider_name"] = json!("   ");

    let (status, body) = post(&app(), "/delivery/pickup", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "rider_name is required");
}

#[tokio::test]
async fn test_pickup_reports_first_missing_field() {
    let (status, body) = post(&app(), "/delivery/pickup", json!({"order_id": "o1"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "customer_name is required");
}

#[tokio::test]
async fn test_register_doorstep_without_additional_info() {
    let app = app();
    let (status, body) = post(&app, "/delivery/doorstep", doorstep_payload("o1")).await;
    assert_eq!(status, StatusCode::CREATED);
    let delivery_id = body["delivery_id"].as_str().unwrap().to_string();
    assert!(!delivery_id.is_empty());

    let (_, delivery) = get(&app, &format!("/delivery/{delivery_id}")).await;
    assert_eq!(delivery["type"], "doorstep");
    assert_eq!(delivery["lodge_name"], "Emerald Lodge");
    assert!(delivery["additional_info"].is_null());
}

#[tokio::test]
async fn test_doorstep_missing_field() {
    let mut payload = doorstep_payload("o1");
    payload.as_object_mut().unwrap().remove("zone");

    let app = app();
    let (status, body) = post(&app, "/delivery/doorstep", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "zone is required");

    let (_, listed) = get(&app, "/orders/o1/deliveries").await;
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn test_non_text_order_id_is_rejected() {
    let app = app();
    let mut payload = pickup_payload("o1");
    payload["order_id"] = json!(12345);

    let (status, body) = post(&app, "/delivery/pickup", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
    assert_eq!(body["success"], false);

    let (_, listed) = get(&app, "/orders/12345/deliveries").await;
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn test_unknown_delivery() {
    let (status, body) = get(&app(), "/delivery/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 7001);
}

#[tokio::test]
async fn test_deliveries_for_order() {
    let app = app();
    post(&app, "/delivery/pickup", pickup_payload("o1")).await;
    post(&app, "/delivery/doorstep", doorstep_payload("o1")).await;
    post(&app, "/delivery/pickup", pickup_payload("o2")).await;

    let (status, body) = get(&app, "/orders/o1/deliveries").await;
    assert_eq!(status, StatusCode::OK);
    let deliveries = body["data"].as_array().unwrap();
    assert_eq!(deliveries.len(), 2);
    assert!(deliveries.iter().all(|d| d["order_id"] == "o1"));
}

#[tokio::test]
async fn test_unverified_order_reference_is_accepted() {
    let (status, _) = post(&app(), "/delivery/pickup", pickup_payload("no-such-order")).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_verified_order_reference() {
    let app = app_with(Config {
        verify_delivery_order: true,
        ..Config::in_memory()
    });

    let (status, body) = post(&app, "/delivery/doorstep", doorstep_payload("no-such-order")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7002);
    assert_eq!(body["details"]["order_id"], "no-such-order");

    let (_, body) = post(&app, "/orders", order_payload()).await;
    let order_id = body["order_id"].as_str().unwrap().to_string();
    let (status, _) = post(&app, "/delivery/doorstep", doorstep_payload(&order_id)).await;
    assert_eq!(status, StatusCode::CREATED);
}
