//! Success response bodies
//!
//! Each endpoint answers with its own small shape; failures always use
//! [`crate::error::ErrorBody`].

use serde::{Deserialize, Serialize};

/// `{ "success": true, "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "message": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// `{ "success": true, "message": ..., "id": ... }` for a new catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCreated {
    pub success: bool,
    pub message: String,
    pub id: String,
}

impl FoodCreated {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: "Food created successfully".to_string(),
            id: id.into(),
        }
    }
}

/// Answer to order placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmed {
    pub message: String,
    pub order_id: String,
    pub estimated_delivery_time: String,
}

impl OrderConfirmed {
    pub fn new(order_id: impl Into<String>, estimated_delivery_time: impl Into<String>) -> Self {
        Self {
            message: "Order confirmed".to_string(),
            order_id: order_id.into(),
            estimated_delivery_time: estimated_delivery_time.into(),
        }
    }
}

/// `{ "message": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "success": true, "delivery_id": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryCreated {
    pub success: bool,
    pub delivery_id: String,
}

impl DeliveryCreated {
    pub fn new(delivery_id: impl Into<String>) -> Self {
        Self {
            success: true,
            delivery_id: delivery_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shapes() {
        assert_eq!(
            serde_json::to_value(FoodCreated::new("f1")).unwrap(),
            json!({"success": true, "message": "Food created successfully", "id": "f1"})
        );
        assert_eq!(
            serde_json::to_value(OrderConfirmed::new("o1", "18:45")).unwrap(),
            json!({"message": "Order confirmed", "order_id": "o1", "estimated_delivery_time": "18:45"})
        );
        assert_eq!(
            serde_json::to_value(DeliveryCreated::new("d1")).unwrap(),
            json!({"success": true, "delivery_id": "d1"})
        );
        assert_eq!(
            serde_json::to_value(DataResponse::new(vec![1, 2])).unwrap(),
            json!({"success": true, "data": [1, 2]})
        );
    }
}
