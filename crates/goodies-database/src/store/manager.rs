//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use goodies_core::config::AppConfig;
use goodies_core::error::AppError;
use goodies_core::result::AppResult;
use goodies_core::traits::DocumentStore;
use goodies_core::types::{Collection, DeleteResult, Document, Filter, InsertOneResult, UpdateResult};

use crate::connection::DatabasePool;
use crate::migration::run_migrations;

use super::{MemoryDocumentStore, PgDocumentStore};

/// Document store handle shared by every repository.
///
/// The backend is selected at construction time from `store.provider`.
/// Cloning is cheap.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn DocumentStore>,
    provider: &'static str,
}

impl StoreManager {
    /// Connect the backend named by the configuration.
    ///
    /// For `postgres` this opens the pool and, when `database.auto_migrate`
    /// is set, applies pending migrations.
    pub async fn connect(config: &AppConfig) -> AppResult<Self> {
        match config.store.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL document store");
                let pool = DatabasePool::connect(&config.database).await?;
                if config.database.auto_migrate {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self {
                    inner: Arc::new(PgDocumentStore::new(pool.into_pool())),
                    provider: "postgres",
                })
            }
            "memory" => {
                info!("Initializing in-memory document store");
                Ok(Self::memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown store provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// A fresh, empty in-memory store.
    pub fn memory() -> Self {
        Self {
            inner: Arc::new(MemoryDocumentStore::new()),
            provider: "memory",
        }
    }

    /// Name of the active backend.
    pub fn provider(&self) -> &'static str {
        self.provider
    }
}

#[async_trait]
impl DocumentStore for StoreManager {
    async fn insert_one(&self, collection: Collection, doc: Document) -> AppResult<InsertOneResult> {
        self.inner.insert_one(collection, doc).await
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> AppResult<Vec<Document>> {
        self.inner.find(collection, filter).await
    }

    async fn find_one(&self, collection: Collection, filter: &Filter) -> AppResult<Option<Document>> {
        self.inner.find_one(collection, filter).await
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> AppResult<UpdateResult> {
        self.inner.update_one(collection, filter, set, upsert).await
    }

    async fn update_many(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> AppResult<UpdateResult> {
        self.inner.update_many(collection, filter, set, upsert).await
    }

    async fn delete_one(&self, collection: Collection, filter: &Filter) -> AppResult<DeleteResult> {
        self.inner.delete_one(collection, filter).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goodies_core::error::ErrorKind;

    #[tokio::test]
    async fn test_connect_memory() {
        let mut config = AppConfig::default();
        config.store.provider = "memory".to_string();
        let store = StoreManager::connect(&config).await.unwrap();
        assert_eq!(store.provider(), "memory");
        assert!(store.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_provider() {
        let mut config = AppConfig::default();
        config.store.provider = "mongo".to_string();
        let err = StoreManager::connect(&config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
