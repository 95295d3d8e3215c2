//! Repository Module
//!
//! Typed access to the document store, one repository per collection.

pub mod delivery;
pub mod food;
pub mod order;

pub use delivery::DeliveryRepository;
pub use food::FoodRepository;
pub use order::OrderRepository;

use std::sync::Arc;

use super::{DocumentStore, StoreResult};

pub type RepoResult<T> = StoreResult<T>;

/// Shared handle every repository wraps
#[derive(Clone)]
pub struct BaseRepository {
    store: Arc<dyn DocumentStore>,
}

impl BaseRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
