//! Document store
//!
//! Records are JSON objects grouped into named collections and addressed by a
//! string id. The server only talks to the [`DocumentStore`] trait, so the redb
//! backend can be swapped for an in-memory one in tests.

pub mod redb_store;
pub mod repository;

use serde::Serialize;
use serde_json::{Map, Value};
use shared::AppError;
use std::fmt;
use thiserror::Error;

pub use redb_store::RedbStore;

/// A stored record: a JSON object of field name to value
pub type Document = Map<String, Value>;

/// Named collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Foods,
    Orders,
    Deliveries,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Foods, Collection::Orders, Collection::Deliveries];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Collection::Foods => "foods",
            Collection::Orders => "orders",
            Collection::Deliveries => "deliveries",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Record in {0} is not a JSON object")]
    NotAnObject(Collection),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::database(err.to_string())
    }
}

/// Keyed JSON document storage
pub trait DocumentStore: Send + Sync {
    /// Fetch a document, `None` if the id is unknown
    fn get(&self, collection: Collection, id: &str) -> StoreResult<Option<Document>>;

    fn exists(&self, collection: Collection, id: &str) -> StoreResult<bool> {
        Ok(self.get(collection, id)?.is_some())
    }

    /// Create or fully replace a document
    fn set(&self, collection: Collection, id: &str, document: &Document) -> StoreResult<()>;

    /// Merge `fields` into an existing document
    ///
    /// Returns `false` and writes nothing when the document does not exist.
    fn update(&self, collection: Collection, id: &str, fields: Document) -> StoreResult<bool>;

    /// Remove a document, returning whether it existed
    fn delete(&self, collection: Collection, id: &str) -> StoreResult<bool>;

    /// All documents of a collection as `(id, document)` pairs, ordered by id
    fn list(&self, collection: Collection) -> StoreResult<Vec<(String, Document)>>;
}

/// Serialize a record into a document
pub fn to_document<T: Serialize>(collection: Collection, value: &T) -> StoreResult<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject(collection)),
    }
}

/// Deserialize a document into a typed record
pub fn from_document<T: serde::de::DeserializeOwned>(document: Document) -> StoreResult<T> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
