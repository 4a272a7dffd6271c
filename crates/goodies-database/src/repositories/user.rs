//! User repository implementation.

use serde_json::Value;

use goodies_core::result::AppResult;
use goodies_core::traits::DocumentStore;
use goodies_core::types::{Collection, DeleteResult, Document, Filter, UpdateResult};
use goodies_entity::user::model::fields;
use goodies_entity::user::{ProfileUpdate, User, UserRole};

use crate::store::StoreManager;

/// Repository for user records, keyed by email.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: StoreManager,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(store: StoreManager) -> Self {
        Self { store }
    }

    fn by_email(email: &str) -> Filter {
        Filter::eq(fields::EMAIL, email)
    }

    /// Find a user by email (exact match).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .store
            .find_one(Collection::Users, &Self::by_email(email))
            .await?
            .map(User::from_document))
    }

    /// Every user document, unmodified.
    pub async fn find_all(&self) -> AppResult<Vec<Document>> {
        self.store.find(Collection::Users, &Filter::all()).await
    }

    /// Merge `profile` into the user with `email`, creating the record if
    /// none exists.
    pub async fn upsert_by_email(&self, email: &str, profile: Document) -> AppResult<UpdateResult> {
        self.store
            .update_one(Collection::Users, &Self::by_email(email), profile, true)
            .await
    }

    /// Set `role = "admin"` on an existing user. Never creates a record.
    pub async fn promote_to_admin(&self, email: &str) -> AppResult<UpdateResult> {
        let mut set = Document::new();
        set.insert(
            fields::ROLE.to_string(),
            Value::String(UserRole::Admin.as_str().to_string()),
        );
        self.store
            .update_one(Collection::Users, &Self::by_email(email), set, false)
            .await
    }

    /// Overwrite the profile fields of the user document with `id`,
    /// creating it if absent.
    pub async fn update_profile(&self, id: &str, update: ProfileUpdate) -> AppResult<UpdateResult> {
        self.store
            .update_many(
                Collection::Users,
                &Filter::by_id(id),
                update.into_set_document(),
                true,
            )
            .await
    }

    /// Delete the user with `email`.
    pub async fn delete_by_email(&self, email: &str) -> AppResult<DeleteResult> {
        self.store
            .delete_one(Collection::Users, &Self::by_email(email))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_upsert_then_promote() {
        let repo = UserRepository::new(StoreManager::memory());
        repo.upsert_by_email("alice@example.com", profile(json!({"name": "Alice"})))
            .await
            .unwrap();

        let user = repo.find_by_email("alice@example.com").await.unwrap().unwrap();
        assert_eq!(user.role, UserRole::User);

        let result = repo.promote_to_admin("alice@example.com").await.unwrap();
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.modified_count, 1);

        let user = repo.find_by_email("alice@example.com").await.unwrap().unwrap();
        assert!(user.is_admin());
        assert_eq!(user.document["name"], "Alice");
    }

    #[tokio::test]
    async fn test_promote_unknown_user_creates_nothing() {
        let repo = UserRepository::new(StoreManager::memory());
        let result = repo.promote_to_admin("ghost@x.com").await.unwrap();
        assert_eq!(result.matched_count, 0);
        assert_eq!(result.upserted_count, 0);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_profile_by_id() {
        let repo = UserRepository::new(StoreManager::memory());
        let created = repo
            .upsert_by_email("carol@x.com", Document::new())
            .await
            .unwrap();
        let id = created.upserted_id.unwrap();

        let update: ProfileUpdate =
            serde_json::from_value(json!({"location": "Dhaka", "phoneNumber": "017"})).unwrap();
        let result = repo.update_profile(&id, update).await.unwrap();
        assert_eq!(result.matched_count, 1);

        let user = repo.find_by_email("carol@x.com").await.unwrap().unwrap();
        assert_eq!(user.document["location"], "Dhaka");
        assert_eq!(user.document["img"], Value::Null);
    }

    #[tokio::test]
    async fn test_delete_by_email() {
        let repo = UserRepository::new(StoreManager::memory());
        repo.upsert_by_email("dave@x.com", Document::new())
            .await
            .unwrap();
        assert_eq!(repo.delete_by_email("dave@x.com").await.unwrap().deleted_count, 1);
        assert!(repo.find_by_email("dave@x.com").await.unwrap().is_none());
    }
}
