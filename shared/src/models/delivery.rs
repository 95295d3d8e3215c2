//! Delivery registration model
//!
//! Both fulfillment types share the `deliveries` collection and are told
//! apart by the `type` field (`pickup` | `doorstep`). The referenced order is
//! not enforced here.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::util::new_id;
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, optional_text, require_text,
};

/// Rider handoff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupDelivery {
    pub delivery_id: String,
    pub order_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub rider_name: String,
    /// Free text, e.g. "6:30 PM"
    pub order_time: String,
    pub restaurant_address: String,
    pub created_at: DateTime<FixedOffset>,
}

/// Drop-off at a named location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorstepDelivery {
    pub delivery_id: String,
    pub order_id: String,
    pub street: String,
    pub zone: String,
    pub lodge_name: String,
    /// Free text, e.g. "7:00 PM"
    pub delivery_time: String,
    /// Persisted as `null` when omitted
    #[serde(default)]
    pub additional_info: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

/// Any delivery record, discriminated by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Delivery {
    Pickup(PickupDelivery),
    Doorstep(DoorstepDelivery),
}

impl Delivery {
    pub fn delivery_id(&self) -> &str {
        match self {
            Self::Pickup(p) => &p.delivery_id,
            Self::Doorstep(d) => &d.delivery_id,
        }
    }

    pub fn order_id(&self) -> &str {
        match self {
            Self::Pickup(p) => &p.order_id,
            Self::Doorstep(d) => &d.order_id,
        }
    }

    pub fn created_at(&self) -> DateTime<FixedOffset> {
        match self {
            Self::Pickup(p) => p.created_at,
            Self::Doorstep(d) => d.created_at,
        }
    }

    /// `pickup` or `doorstep`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pickup(_) => "pickup",
            Self::Doorstep(_) => "doorstep",
        }
    }
}

/// Create pickup payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickupCreate {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub rider_name: Option<String>,
    pub order_time: Option<String>,
    pub restaurant_address: Option<String>,
}

impl PickupCreate {
    /// Fields are checked in declaration order; the first missing one is
    /// reported as `<field> is required`.
    pub fn validate(self, now: DateTime<FixedOffset>) -> AppResult<PickupDelivery> {
        Ok(PickupDelivery {
            order_id: require_text(self.order_id, "order_id", MAX_SHORT_TEXT_LEN)?,
            customer_name: require_text(self.customer_name, "customer_name", MAX_NAME_LEN)?,
            customer_phone: require_text(
                self.customer_phone,
                "customer_phone",
                MAX_SHORT_TEXT_LEN,
            )?,
            rider_name: require_text(self.rider_name, "rider_name", MAX_NAME_LEN)?,
            order_time: require_text(self.order_time, "order_time", MAX_SHORT_TEXT_LEN)?,
            restaurant_address: require_text(
                self.restaurant_address,
                "restaurant_address",
                MAX_ADDRESS_LEN,
            )?,
            delivery_id: new_id(),
            created_at: now,
        })
    }
}

/// Create doorstep payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoorstepCreate {
    pub order_id: Option<String>,
    pub street: Option<String>,
    pub zone: Option<String>,
    pub lodge_name: Option<String>,
    pub delivery_time: Option<String>,
    pub additional_info: Option<String>,
}

impl DoorstepCreate {
    pub fn validate(self, now: DateTime<FixedOffset>) -> AppResult<DoorstepDelivery> {
        Ok(DoorstepDelivery {
            order_id: require_text(self.order_id, "order_id", MAX_SHORT_TEXT_LEN)?,
            street: require_text(self.street, "street", MAX_ADDRESS_LEN)?,
            zone: require_text(self.zone, "zone", MAX_SHORT_TEXT_LEN)?,
            lodge_name: require_text(self.lodge_name, "lodge_name", MAX_NAME_LEN)?,
            delivery_time: require_text(self.delivery_time, "delivery_time", MAX_SHORT_TEXT_LEN)?,
            additional_info: optional_text(self.additional_info, "additional_info", MAX_NOTE_LEN)?,
            delivery_id: new_id(),
            created_at: now,
        })
    }
}
