//! User record model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use goodies_core::types::{Document, ID_FIELD};

use super::role::UserRole;

/// Field names the service reads from user documents.
pub mod fields {
    /// The identity key.
    pub const EMAIL: &str = "email";
    /// The stored role label.
    pub const ROLE: &str = "role";
}

/// Typed view over a stored user document.
///
/// Only `email` and `role` are interpreted; every other field is profile
/// data supplied by clients and kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store-assigned document id.
    pub id: Option<String>,
    /// Identity key.
    pub email: Option<String>,
    /// Role label (absent reads as ordinary user).
    pub role: UserRole,
    /// The full underlying document.
    pub document: Document,
}

impl User {
    /// Interprets a user document.
    pub fn from_document(document: Document) -> Self {
        let text = |field: &str| document.get(field).and_then(Value::as_str).map(String::from);
        Self {
            id: text(ID_FIELD),
            email: text(fields::EMAIL),
            role: UserRole::from_stored(document.get(fields::ROLE).and_then(Value::as_str)),
            document,
        }
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Profile fields a user may change on their record.
///
/// Absent fields are written as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Avatar image URL.
    #[serde(default)]
    pub img: Option<Value>,
    /// Free-form location.
    #[serde(default)]
    pub location: Option<Value>,
    /// Contact phone number.
    #[serde(default)]
    pub phone_number: Option<Value>,
}

impl ProfileUpdate {
    /// The `$set` document for this update.
    pub fn into_set_document(self) -> Document {
        let mut set = Document::new();
        set.insert("img".into(), self.img.unwrap_or(Value::Null));
        set.insert("location".into(), self.location.unwrap_or(Value::Null));
        set.insert("phoneNumber".into(), self.phone_number.unwrap_or(Value::Null));
        set
    }
}
