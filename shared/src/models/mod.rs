//! Domain entities and their request payloads
//!
//! | Entity | Collection | Id |
//! |--------|------------|----|
//! | [`FoodItem`] | `foods` | generated, not stored in the document |
//! | [`Order`] | `orders` | `order_id` |
//! | [`PickupDelivery`] / [`DoorstepDelivery`] | `deliveries` | `delivery_id` |

pub mod delivery;
pub mod food;
pub mod order;

pub use delivery::{Delivery, DoorstepCreate, DoorstepDelivery, PickupCreate, PickupDelivery};
pub use food::{FoodCreate, FoodItem, FoodRecord, FoodUpdate};
pub use order::{DeliveryMode, Order, OrderCreate, OrderItemInput, OrderStatus};
