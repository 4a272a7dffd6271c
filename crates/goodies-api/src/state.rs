//! Application state shared across all handlers and gates.

use std::sync::Arc;

use goodies_auth::jwt::{JwtDecoder, JwtEncoder};
use goodies_auth::rbac::RoleAuthorizer;
use goodies_core::config::AppConfig;
use goodies_core::result::AppResult;
use goodies_core::types::Collection;
use goodies_database::StoreManager;
use goodies_database::repositories::{DocumentRepository, UserRepository};

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Document store handle.
    pub store: StoreManager,

    /// Token Issuer.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Token Verifier.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Role Authorizer.
    pub role_authorizer: Arc<RoleAuthorizer>,

    // Repositories
    pub user_repo: Arc<UserRepository>,
    pub part_repo: Arc<DocumentRepository>,
    pub review_repo: Arc<DocumentRepository>,
    pub order_repo: Arc<DocumentRepository>,
}

impl AppState {
    /// Wires the auth components and repositories over `store`.
    ///
    /// Fails when no signing secret is configured.
    pub fn new(config: AppConfig, store: StoreManager) -> AppResult<Self> {
        let jwt_encoder = JwtEncoder::new(&config.auth)?;
        let jwt_decoder = JwtDecoder::new(&config.auth)?;

        let user_repo = UserRepository::new(store.clone());
        let role_authorizer = RoleAuthorizer::new(user_repo.clone());
        let documents = |collection| Arc::new(DocumentRepository::new(collection, store.clone()));

        Ok(Self {
            config: Arc::new(config),
            jwt_encoder: Arc::new(jwt_encoder),
            jwt_decoder: Arc::new(jwt_decoder),
            role_authorizer: Arc::new(role_authorizer),
            user_repo: Arc::new(user_repo),
            part_repo: documents(Collection::Parts),
            review_repo: documents(Collection::Reviews),
            order_repo: documents(Collection::Orders),
            store,
        })
    }
}
