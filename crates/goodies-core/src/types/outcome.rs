//! Raw write results returned by the document store.
//!
//! These serialize in the camelCase shape clients of the API already
//! consume, and are passed through to responses unchanged.

use serde::{Deserialize, Serialize};

/// Result of inserting a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    /// Whether the write was acknowledged by the store.
    pub acknowledged: bool,
    /// The generated `_id` of the new document.
    pub inserted_id: String,
}

impl InsertOneResult {
    /// An acknowledged insert of `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            acknowledged: true,
            inserted_id: id.into(),
        }
    }
}

/// Result of an update (optionally upserting).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    /// Whether the write was acknowledged by the store.
    pub acknowledged: bool,
    /// Number of documents matched by the filter.
    pub matched_count: u64,
    /// Number of matched documents whose contents changed.
    pub modified_count: u64,
    /// `_id` of the document created by an upsert, if any.
    pub upserted_id: Option<String>,
    /// Number of documents created by an upsert (0 or 1).
    pub upserted_count: u64,
}

impl UpdateResult {
    /// An update that matched existing documents.
    pub fn matched(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_id: None,
            upserted_count: 0,
        }
    }

    /// An update that created a new document.
    pub fn upserted(id: impl Into<String>) -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id.into()),
            upserted_count: 1,
        }
    }
}

/// Result of deleting documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    /// Whether the write was acknowledged by the store.
    pub acknowledged: bool,
    /// Number of documents removed.
    pub deleted_count: u64,
}

impl DeleteResult {
    /// An acknowledged delete of `deleted_count` documents.
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
