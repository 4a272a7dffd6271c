//! Document store trait for pluggable persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{Collection, DeleteResult, Document, Filter, InsertOneResult, UpdateResult};

/// Trait for document store backends (PostgreSQL JSONB or in-memory).
///
/// Every method is a single store operation and is atomic on its own.
/// Nothing spans more than one call, and nothing is retried.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert `doc` into `collection`, assigning it a fresh `_id`.
    async fn insert_one(&self, collection: Collection, doc: Document)
    -> AppResult<InsertOneResult>;

    /// Return every document matching `filter`, in insertion order.
    async fn find(&self, collection: Collection, filter: &Filter) -> AppResult<Vec<Document>>;

    /// Return the first document matching `filter`.
    async fn find_one(&self, collection: Collection, filter: &Filter)
    -> AppResult<Option<Document>>;

    /// Merge `set` into the first document matching `filter`.
    ///
    /// With `upsert`, a new document built from the filter's equality
    /// fields plus `set` is created when nothing matches.
    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> AppResult<UpdateResult>;

    /// Merge `set` into every document matching `filter`, upserting as
    /// [`DocumentStore::update_one`] does.
    async fn update_many(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> AppResult<UpdateResult>;

    /// Remove the first document matching `filter`.
    async fn delete_one(&self, collection: Collection, filter: &Filter) -> AppResult<DeleteResult>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
