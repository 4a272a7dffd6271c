//! Repository for the schemaless resource collections (parts, reviews,
//! orders).

use serde_json::Value;

use goodies_core::result::AppResult;
use goodies_core::traits::DocumentStore;
use goodies_core::types::{Collection, DeleteResult, Document, Filter, InsertOneResult};

use crate::store::StoreManager;

/// Pass-through CRUD over one collection.
///
/// Documents are stored exactly as received; only `_id` is assigned.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    collection: Collection,
    store: StoreManager,
}

impl DocumentRepository {
    /// Create a repository for `collection`.
    pub fn new(collection: Collection, store: StoreManager) -> Self {
        Self { collection, store }
    }

    /// Insert a new document.
    pub async fn insert(&self, doc: Document) -> AppResult<InsertOneResult> {
        self.store.insert_one(self.collection, doc).await
    }

    /// Every document in the collection.
    pub async fn find_all(&self) -> AppResult<Vec<Document>> {
        self.store.find(self.collection, &Filter::all()).await
    }

    /// Every document whose `field` equals `value`.
    pub async fn find_by(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> AppResult<Vec<Document>> {
        self.store
            .find(self.collection, &Filter::eq(field, value))
            .await
    }

    /// The document with the given `_id`.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Document>> {
        self.store.find_one(self.collection, &Filter::by_id(id)).await
    }

    /// Delete the document with the given `_id`.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<DeleteResult> {
        self.store
            .delete_one(self.collection, &Filter::by_id(id))
            .await
    }
}
