//! Food Repository

use std::sync::Arc;

use shared::models::{FoodItem, FoodRecord, FoodUpdate};
use shared::util::new_id;

use super::{BaseRepository, RepoResult};
use crate::db::{Collection, DocumentStore, from_document, to_document};

const COLLECTION: Collection = Collection::Foods;

#[derive(Clone)]
pub struct FoodRepository {
    base: BaseRepository,
}

impl FoodRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Every catalog entry with its id
    pub fn find_all(&self) -> RepoResult<Vec<FoodRecord>> {
        self.base
            .store()
            .list(COLLECTION)?
            .into_iter()
            .map(|(id, document)| -> RepoResult<FoodRecord> {
                Ok(FoodRecord {
                    id,
                    item: from_document(document)?,
                })
            })
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<FoodItem>> {
        self.base
            .store()
            .get(COLLECTION, id)?
            .map(from_document::<FoodItem>)
            .transpose()
    }

    /// Store a new item under a fresh id and return the id
    pub fn create(&self, item: &FoodItem) -> RepoResult<String> {
        let id = new_id();
        let document = to_document(COLLECTION, item)?;
        self.base.store().set(COLLECTION, &id, &document)?;
        Ok(id)
    }

    /// Merge the given fields, `false` if the item does not exist
    pub fn update(&self, id: &str, patch: FoodUpdate) -> RepoResult<bool> {
        self.base.store().update(COLLECTION, id, patch.into_fields())
    }

    /// `false` if the item does not exist
    pub fn delete(&self, id: &str) -> RepoResult<bool> {
        self.base.store().delete(COLLECTION, id)
    }
}
