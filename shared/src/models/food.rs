//! Food catalog model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, check_addins, check_len, check_price, present,
};

/// One orderable menu line
///
/// Embedded verbatim in orders (no id); stored standalone in the catalog
/// under an opaque id, see [`FoodRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub food_name: String,
    #[serde(default)]
    pub addins: Vec<String>,
    pub size: String,
    pub price: f64,
}

impl FoodItem {
    pub fn new(
        food_name: impl Into<String>,
        addins: Vec<String>,
        size: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            food_name: food_name.into(),
            addins,
            size: size.into(),
            price,
        }
    }
}

/// Catalog entry as returned by the listing: the item plus its document id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: String,
    #[serde(flatten)]
    pub item: FoodItem,
}

/// Create food payload
///
/// Every field is optional at the wire level so missing fields surface as
/// a structured validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodCreate {
    pub food_name: Option<String>,
    pub addins: Option<Vec<String>>,
    pub size: Option<String>,
    pub price: Option<f64>,
}

fn missing(field: &str) -> AppError {
    AppError::new(ErrorCode::RequiredField).with_detail("field", field)
}

impl FoodCreate {
    /// `food_name`, `size` and `price` are required; `addins` defaults to empty.
    pub fn validate(self) -> AppResult<FoodItem> {
        let food_name = present(self.food_name).ok_or_else(|| missing("food_name"))?;
        let size = present(self.size).ok_or_else(|| missing("size"))?;
        let price = self.price.ok_or_else(|| missing("price"))?;
        let addins = self.addins.unwrap_or_default();

        check_len(&food_name, "food_name", MAX_NAME_LEN)?;
        check_len(&size, "size", MAX_SHORT_TEXT_LEN)?;
        check_price(price, "price")?;
        check_addins(&addins, "addins")?;

        Ok(FoodItem::new(food_name, addins, size, price))
    }
}

/// Partial food update
///
/// Only supplied fields overwrite the stored document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FoodUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl FoodUpdate {
    /// Field names a patch may carry
    pub const FIELDS: [&'static str; 4] = ["food_name", "addins", "size", "price"];

    /// Parse a raw JSON object, rejecting keys outside [`Self::FIELDS`]
    /// and values of the wrong type.
    pub fn from_fields(fields: Map<String, Value>) -> AppResult<Self> {
        if let Some(unknown) = fields
            .keys()
            .find(|key| !Self::FIELDS.contains(&key.as_str()))
        {
            return Err(AppError::with_message(
                ErrorCode::UnknownField,
                format!("{unknown} is not a food field"),
            )
            .with_detail("field", unknown.clone()));
        }

        let patch: Self = serde_json::from_value(Value::Object(fields))
            .map_err(|e| AppError::validation(format!("Invalid food update: {e}")))?;
        patch.validate()?;
        Ok(patch)
    }

    /// Supplied fields must still satisfy the create rules.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.food_name {
            if name.trim().is_empty() {
                return Err(AppError::required_field("food_name"));
            }
            check_len(name, "food_name", MAX_NAME_LEN)?;
        }
        if let Some(size) = &self.size {
            if size.trim().is_empty() {
                return Err(AppError::required_field("size"));
            }
            check_len(size, "size", MAX_SHORT_TEXT_LEN)?;
        }
        if let Some(price) = self.price {
            check_price(price, "price")?;
        }
        if let Some(addins) = &self.addins {
            check_addins(addins, "addins")?;
        }
        Ok(())
    }

    /// The supplied fields as a JSON object, ready for a field merge
    pub fn into_fields(self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
