//! redb-backed [`DocumentStore`]
//!
//! # Tables
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | `foods` | food id | JSON-serialized food |
//! | `orders` | order id | JSON-serialized order |
//! | `deliveries` | delivery id | JSON-serialized delivery |
//!
//! Every write runs in its own write transaction. A merge-update reads and
//! rewrites the document inside that one transaction.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

use super::{Collection, Document, DocumentStore, StoreResult};

const fn table(collection: Collection) -> TableDefinition<'static, &'static str, &'static [u8]> {
    TableDefinition::new(collection.as_str())
}

fn decode(bytes: &[u8]) -> StoreResult<Document> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Document store backed by redb
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create the database file at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Create a store that lives only in memory
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        for collection in Collection::ALL {
            write_txn.open_table(table(collection))?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl DocumentStore for RedbStore {
    fn get(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(table(collection))?;
        let document = match table.get(id)? {
            Some(value) => Some(decode(value.value())?),
            None => None,
        };
        Ok(document)
    }

    fn set(&self, collection: Collection, id: &str, document: &Document) -> StoreResult<()> {
        let bytes = serde_json::to_vec(document)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(table(collection))?;
            table.insert(id, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn update(&self, collection: Collection, id: &str, fields: Document) -> StoreResult<bool> {
        let write_txn = self.db.begin_write()?;
        let updated = {
            let mut table = write_txn.open_table(table(collection))?;
            let existing = match table.get(id)? {
                Some(value) => Some(decode(value.value())?),
                None => None,
            };
            match existing {
                Some(mut document) => {
                    document.extend(fields);
                    let bytes = serde_json::to_vec(&document)?;
                    table.insert(id, bytes.as_slice())?;
                    true
                }
                None => false,
            }
        };
        if updated {
            write_txn.commit()?;
        } else {
            write_txn.abort()?;
        }
        Ok(updated)
    }

    fn delete(&self, collection: Collection, id: &str) -> StoreResult<bool> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(table(collection))?;
            table.remove(id)?.is_some()
        };
        write_txn.commit()?;
        Ok(removed)
    }

    fn list(&self, collection: Collection) -> StoreResult<Vec<(String, Document)>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(table(collection))?;
        let mut documents = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            documents.push((key.value().to_string(), decode(value.value())?));
        }
        Ok(documents)
    }
}
