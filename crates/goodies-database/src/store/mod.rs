//! Document store backends and the manager that selects between them.

pub mod manager;
pub mod memory;
pub mod postgres;

pub use manager::StoreManager;
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use serde_json::Value;
use uuid::Uuid;

use goodies_core::error::AppError;
use goodies_core::result::AppResult;
use goodies_core::types::{Document, Filter, ID_FIELD};

/// Generates a fresh document id.
pub(crate) fn new_document_id() -> String {
    Uuid::new_v4().to_string()
}

/// Rejects `$set` documents that would rewrite `_id`.
pub(crate) fn ensure_id_untouched(set: &Document) -> AppResult<()> {
    if set.contains_key(ID_FIELD) {
        return Err(AppError::validation("The _id field is immutable"));
    }
    Ok(())
}

/// Builds the document an upsert creates: the filter's equality fields,
/// overlaid with `set`, keyed by the filter's `_id` or a fresh one.
pub(crate) fn upsert_document(filter: &Filter, set: Document) -> (String, Document) {
    let id = filter.id().map(String::from).unwrap_or_else(new_document_id);
    let mut doc = filter.as_document().clone();
    doc.extend(set);
    doc.insert(ID_FIELD.to_string(), Value::String(id.clone()));
    (id, doc)
}

/// Applies a `$set` merge in place. Returns whether anything changed.
pub(crate) fn apply_set(doc: &mut Document, set: &Document) -> bool {
    let mut changed = false;
    for (field, value) in set {
        if doc.get(field) != Some(value) {
            doc.insert(field.clone(), value.clone());
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_upsert_document_uses_filter_fields() {
        let (id, created) = upsert_document(
            &Filter::eq("email", "new@x.com"),
            doc(json!({"name": "New"})),
        );
        assert_eq!(created["email"], "new@x.com");
        assert_eq!(created["name"], "New");
        assert_eq!(created[ID_FIELD], Value::String(id));
    }

    #[test]
    fn test_upsert_document_keeps_filter_id() {
        let (id, created) = upsert_document(&Filter::by_id("fixed"), Document::new());
        assert_eq!(id, "fixed");
        assert_eq!(created[ID_FIELD], "fixed");
    }

    #[test]
    fn test_apply_set_reports_changes() {
        let mut target = doc(json!({"a": 1, "b": 2}));
        assert!(!apply_set(&mut target, &doc(json!({"a": 1}))));
        assert!(apply_set(&mut target, &doc(json!({"b": 3, "c": 4}))));
        assert_eq!(target, doc(json!({"a": 1, "b": 3, "c": 4})));
    }

    #[test]
    fn test_id_is_immutable() {
        assert!(ensure_id_untouched(&doc(json!({"_id": "x"}))).is_err());
        assert!(ensure_id_untouched(&doc(json!({"name": "x"}))).is_ok());
    }
}
