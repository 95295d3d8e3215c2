//! Order Repository
//!
//! Orders are written once at creation; the only later mutation is the
//! delivered transition, applied as a field merge.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use shared::models::Order;

use super::{BaseRepository, RepoResult};
use crate::db::{Collection, Document, DocumentStore, to_document};

const COLLECTION: Collection = Collection::Orders;

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Persist a new order keyed by its `order_id`
    pub fn create(&self, order: &Order) -> RepoResult<()> {
        let document = to_document(COLLECTION, order)?;
        self.base.store().set(COLLECTION, &order.order_id, &document)
    }

    /// The stored record exactly as persisted
    pub fn find_raw(&self, order_id: &str) -> RepoResult<Option<Document>> {
        self.base.store().get(COLLECTION, order_id)
    }

    pub fn exists(&self, order_id: &str) -> RepoResult<bool> {
        self.base.store().exists(COLLECTION, order_id)
    }

    /// Set the order to delivered, `false` if the order does not exist
    pub fn mark_delivered(&self, order_id: &str, at: DateTime<FixedOffset>) -> RepoResult<bool> {
        self.base
            .store()
            .update(COLLECTION, order_id, Order::delivered_patch(at))
    }
}
