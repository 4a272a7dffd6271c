//! Schemaless documents and equality filters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field holding a document's system-generated identifier.
pub const ID_FIELD: &str = "_id";

/// A schemaless JSON object as stored in a collection.
pub type Document = serde_json::Map<String, Value>;

/// A conjunction of top-level field equalities.
///
/// The empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter(Document);

impl Filter {
    /// A filter matching every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter matching documents whose `field` equals `value`.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and(field, value)
    }

    /// A filter matching the document with the given `_id`.
    pub fn by_id(id: impl Into<String>) -> Self {
        let id: String = id.into();
        Self::eq(ID_FIELD, id)
    }

    /// Adds another equality condition.
    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Whether `doc` satisfies every condition.
    pub fn matches(&self, doc: &Document) -> bool {
        self.0
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }

    /// The `_id` this filter pins, if any.
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    /// The conditions as a JSON object.
    pub fn as_document(&self) -> &Document {
        &self.0
    }
}
