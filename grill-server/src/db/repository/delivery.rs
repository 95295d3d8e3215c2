//! Delivery Repository

use std::sync::Arc;

use shared::models::Delivery;

use super::{BaseRepository, RepoResult};
use crate::db::{Collection, DocumentStore, from_document, to_document};

const COLLECTION: Collection = Collection::Deliveries;

#[derive(Clone)]
pub struct DeliveryRepository {
    base: BaseRepository,
}

impl DeliveryRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    pub fn create(&self, delivery: &Delivery) -> RepoResult<()> {
        let document = to_document(COLLECTION, delivery)?;
        self.base
            .store()
            .set(COLLECTION, delivery.delivery_id(), &document)
    }

    pub fn find_by_id(&self, delivery_id: &str) -> RepoResult<Option<Delivery>> {
        self.base
            .store()
            .get(COLLECTION, delivery_id)?
            .map(from_document::<Delivery>)
            .transpose()
    }

    /// Deliveries registered against an order, oldest first
    pub fn list_for_order(&self, order_id: &str) -> RepoResult<Vec<Delivery>> {
        let mut deliveries = Vec::new();
        for (_, document) in self.base.store().list(COLLECTION)? {
            let delivery: Delivery = from_document(document)?;
            if delivery.order_id() == order_id {
                deliveries.push(delivery);
            }
        }
        deliveries.sort_by_key(|d| d.created_at());
        Ok(deliveries)
    }
}
