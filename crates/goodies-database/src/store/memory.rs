//! In-memory document store backed by dashmap.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

use goodies_core::result::AppResult;
use goodies_core::traits::DocumentStore;
use goodies_core::types::{
    Collection, DeleteResult, Document, Filter, ID_FIELD, InsertOneResult, UpdateResult,
};

use super::{apply_set, ensure_id_untouched, new_document_id, upsert_document};

/// In-memory document store.
///
/// Each collection is a vector in insertion order; a collection's shard
/// lock is held for the duration of one operation, which keeps every
/// operation atomic.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<DashMap<Collection, Vec<Document>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn update(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
        upsert: bool,
        many: bool,
    ) -> AppResult<UpdateResult> {
        ensure_id_untouched(&set)?;

        let mut docs = self.collections.entry(collection).or_default();
        let mut matched = 0u64;
        let mut modified = 0u64;

        for doc in docs.iter_mut().filter(|d| filter.matches(d)) {
            matched += 1;
            if apply_set(doc, &set) {
                modified += 1;
            }
            if !many {
                break;
            }
        }

        if matched > 0 || !upsert {
            return Ok(UpdateResult::matched(matched, modified));
        }

        let (id, doc) = upsert_document(filter, set);
        docs.push(doc);
        debug!(%collection, id = %id, "Upserted document");
        Ok(UpdateResult::upserted(id))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_one(
        &self,
        collection: Collection,
        mut doc: Document,
    ) -> AppResult<InsertOneResult> {
        let id = new_document_id();
        doc.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        self.collections.entry(collection).or_default().push(doc);
        Ok(InsertOneResult::new(id))
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> AppResult<Vec<Document>> {
        Ok(self
            .collections
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> AppResult<Option<Document>> {
        Ok(self
            .collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> AppResult<UpdateResult> {
        self.update(collection, filter, set, upsert, false)
    }

    async fn update_many(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> AppResult<UpdateResult> {
        self.update(collection, filter, set, upsert, true)
    }

    async fn delete_one(&self, collection: Collection, filter: &Filter) -> AppResult<DeleteResult> {
        let Some(mut docs) = self.collections.get_mut(&collection) else {
            return Ok(DeleteResult::new(0));
        };
        match docs.iter().position(|d| filter.matches(d)) {
            Some(index) => {
                docs.remove(index);
                Ok(DeleteResult::new(1))
            }
            None => Ok(DeleteResult::new(0)),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
