//! Order model
//!
//! An order snapshots its items at placement time: `full_price` is computed
//! once in [`Order::new`] and never recomputed, and the only later mutation
//! is the delivered transition (see [`Order::delivered_patch`]).

use chrono::{DateTime, Duration, FixedOffset};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::food::FoodItem;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::util::new_id;
use crate::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, check_addins, check_len, check_price, present,
    require_text,
};

/// Minutes added to the placement time for the delivery estimate
pub const ESTIMATED_DELIVERY_MINUTES: i64 = 45;

/// Wall-clock format of `estimated_delivery_time` (24-hour)
pub const ESTIMATE_FORMAT: &str = "%H:%M";

/// Fulfillment path chosen by the customer
///
/// Stored as plain text. Unrecognized values are only accepted when strict
/// order validation is off, and are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeliveryMode {
    Pickup,
    Doorstep,
    Other(String),
}

impl DeliveryMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pickup => "pickup",
            Self::Doorstep => "doorstep",
            Self::Other(s) => s,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for DeliveryMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pickup" => Self::Pickup,
            "doorstep" => Self::Doorstep,
            _ => Self::Other(value),
        }
    }
}

impl From<DeliveryMode> for String {
    fn from(mode: DeliveryMode) -> Self {
        match mode {
            DeliveryMode::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Delivered,
}

/// Customer purchase as persisted in the `orders` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub items: Vec<FoodItem>,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_mode: DeliveryMode,
    pub order_status: OrderStatus,
    pub estimated_delivery_time: String,
    pub created_at: DateTime<FixedOffset>,
    pub full_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<FixedOffset>>,
}

impl Order {
    /// Place a new order at `now`: fresh id, `Pending`, price snapshot and
    /// a delivery estimate [`ESTIMATED_DELIVERY_MINUTES`] later.
    pub fn new(
        items: Vec<FoodItem>,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        delivery_mode: DeliveryMode,
        now: DateTime<FixedOffset>,
    ) -> Self {
        let full_price = Self::calculate_total(&items);
        Self {
            order_id: new_id(),
            items,
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            delivery_mode,
            order_status: OrderStatus::Pending,
            estimated_delivery_time: Self::estimate_delivery_time(now),
            created_at: now,
            full_price,
            delivered_at: None,
        }
    }

    /// Sum of item prices, added in decimal so the total is exact
    pub fn calculate_total(items: &[FoodItem]) -> f64 {
        items
            .iter()
            .map(|item| Decimal::from_f64(item.price).unwrap_or(Decimal::ZERO))
            .sum::<Decimal>()
            .to_f64()
            .unwrap_or_default()
    }

    /// `HH:MM` of `now` plus [`ESTIMATED_DELIVERY_MINUTES`]
    pub fn estimate_delivery_time(now: DateTime<FixedOffset>) -> String {
        (now + Duration::minutes(ESTIMATED_DELIVERY_MINUTES))
            .format(ESTIMATE_FORMAT)
            .to_string()
    }

    /// Fields written by the delivered transition. Applied as a merge, so
    /// items and `full_price` stay untouched; re-applying only re-stamps.
    pub fn delivered_patch(at: DateTime<FixedOffset>) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(
            "order_status".into(),
            serde_json::to_value(OrderStatus::Delivered).unwrap_or(Value::Null),
        );
        fields.insert(
            "delivered_at".into(),
            serde_json::to_value(at).unwrap_or(Value::Null),
        );
        fields
    }
}

/// One line of an order request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub food_name: Option<String>,
    pub addins: Option<Vec<String>>,
    pub size: Option<String>,
    pub price: Option<f64>,
}

impl OrderItemInput {
    fn validate(self, index: usize) -> AppResult<FoodItem> {
        let field = |name: &str| format!("items[{index}].{name}");

        let food_name =
            present(self.food_name).ok_or_else(|| AppError::required_field(field("food_name")))?;
        let size = present(self.size).ok_or_else(|| AppError::required_field(field("size")))?;
        let price = self
            .price
            .ok_or_else(|| AppError::required_field(field("price")))?;
        let addins = self.addins.unwrap_or_default();

        check_len(&food_name, &field("food_name"), MAX_NAME_LEN)?;
        check_len(&size, &field("size"), MAX_SHORT_TEXT_LEN)?;
        check_price(price, &field("price"))?;
        check_addins(&addins, &field("addins"))?;

        Ok(FoodItem::new(food_name, addins, size, price))
    }
}

/// Create order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    pub items: Option<Vec<OrderItemInput>>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub delivery_mode: Option<String>,
}

impl OrderCreate {
    /// Check required fields (and, when `strict`, a non-empty item list and a
    /// recognized delivery mode), then place the order at `now`.
    pub fn validate(self, strict: bool, now: DateTime<FixedOffset>) -> AppResult<Order> {
        let inputs = self.items.ok_or_else(|| AppError::required_field("items"))?;
        let customer_name = require_text(self.customer_name, "customer_name", MAX_NAME_LEN)?;
        let customer_phone =
            require_text(self.customer_phone, "customer_phone", MAX_SHORT_TEXT_LEN)?;
        let delivery_mode = DeliveryMode::from(require_text(
            self.delivery_mode,
            "delivery_mode",
            MAX_SHORT_TEXT_LEN,
        )?);

        if strict {
            if inputs.is_empty() {
                return Err(AppError::new(ErrorCode::OrderEmpty));
            }
            if !delivery_mode.is_recognized() {
                return Err(AppError::new(ErrorCode::InvalidDeliveryMode)
                    .with_detail("delivery_mode", delivery_mode.as_str()));
            }
        }

        let items = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| input.validate(index))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Order::new(
            items,
            customer_name,
            customer_phone,
            delivery_mode,
            now,
        ))
    }
}
