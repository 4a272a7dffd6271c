//! Admin gate: looks up the verified identity's stored role.

use tracing::warn;

use goodies_core::error::AppError;
use goodies_database::repositories::UserRepository;
use goodies_entity::user::Identity;

/// Allows a request through only when the identity's user record has
/// `role = "admin"`.
#[derive(Debug, Clone)]
pub struct RoleAuthorizer {
    users: UserRepository,
}

impl RoleAuthorizer {
    /// Creates an authorizer reading roles through `users`.
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Requires the identity to be an admin.
    ///
    /// A verified identity with no user record is a server fault, not a
    /// permission failure.
    pub async fn authorize(&self, identity: &Identity) -> Result<(), AppError> {
        let user = self
            .users
            .find_by_email(identity.as_str())
            .await?
            .ok_or_else(|| {
                warn!(identity = %identity, "Verified identity has no user record");
                AppError::internal(format!("No user record for '{identity}'"))
            })?;

        if user.is_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden("forbidden"))
        }
    }

    /// Whether `email` names an admin. Unknown users are not admins.
    pub async fn is_admin(&self, email: &str) -> Result<bool, AppError> {
        Ok(self
            .users
            .find_by_email(email)
            .await?
            .is_some_and(|user| user.is_admin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goodies_core::error::ErrorKind;
    use goodies_core::types::Document;
    use goodies_database::StoreManager;
    use serde_json::json;

    async fn authorizer_with(users: &[(&str, Option<&str>)]) -> RoleAuthorizer {
        let repo = UserRepository::new(StoreManager::memory());
        for (email, role) in users {
            let mut doc = Document::new();
            if let Some(role) = role {
                doc.insert("role".to_string(), json!(role));
            }
            repo.upsert_by_email(email, doc).await.unwrap();
        }
        RoleAuthorizer::new(repo)
    }

    #[tokio::test]
    async fn test_admin_passes() {
        let authz = authorizer_with(&[("root@x.com", Some("admin"))]).await;
        authz.authorize(&Identity::new("root@x.com")).await.unwrap();
        assert!(authz.is_admin("root@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_non_admin_is_forbidden() {
        let authz = authorizer_with(&[
            ("plain@x.com", None),
            ("shout@x.com", Some("ADMIN")),
            ("mod@x.com", Some("moderator")),
        ])
        .await;
        for email in ["plain@x.com", "shout@x.com", "mod@x.com"] {
            let err = authz.authorize(&Identity::new(email)).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Forbidden, "{email}");
        }
    }

    #[tokio::test]
    async fn test_missing_user_is_internal() {
        let authz = authorizer_with(&[]).await;
        let err = authz
            .authorize(&Identity::new("ghost@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert!(!authz.is_admin("ghost@x.com").await.unwrap());
    }
}
