//! PostgreSQL document store: one JSONB table per collection.
//!
//! Filters compile to JSONB containment (`doc @> $1`), so every lookup is a
//! single parameterised statement regardless of which fields it names.
//! Table names come from [`Collection::as_str`], never from input.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgConnection, PgPool};
use sqlx::types::Json;
use tracing::debug;

use goodies_core::error::{AppError, ErrorKind};
use goodies_core::result::AppResult;
use goodies_core::traits::DocumentStore;
use goodies_core::types::{
    Collection, DeleteResult, Document, Filter, ID_FIELD, InsertOneResult, UpdateResult,
};

use super::{ensure_id_untouched, new_document_id, upsert_document};

/// Document store over a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_with_id(
        &self,
        collection: Collection,
        id: &str,
        doc: &Document,
    ) -> AppResult<()> {
        let sql = format!("INSERT INTO {collection} (id, doc) VALUES ($1, $2)");
        sqlx::query(&sql)
            .bind(id)
            .bind(Json(doc))
            .execute(&self.pool)
            .await
            .map_err(|e| db_error(collection, "insert document", e))?;
        Ok(())
    }

    async fn update(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
        upsert: bool,
        many: bool,
    ) -> AppResult<UpdateResult> {
        ensure_id_untouched(&set)?;

        if !upsert {
            let mut conn = self
                .pool
                .acquire()
                .await
                .map_err(|e| db_error(collection, "acquire connection", e))?;
            let modified = merge(&mut conn, collection, filter, &set, many).await?;
            return Ok(matched(&modified));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error(collection, "begin transaction", e))?;

        // Concurrent upserts with the same filter queue here until the first commits.
        let lock_key = format!("{collection}:{}", Value::Object(filter.as_document().clone()));
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(lock_key)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error(collection, "lock upsert", e))?;

        let modified = merge(&mut tx, collection, filter, &set, many).await?;
        let result = if !modified.is_empty() {
            matched(&modified)
        } else {
            let (id, doc) = upsert_document(filter, set.clone());
            let sql = format!(
                "INSERT INTO {collection} (id, doc) VALUES ($1, $2)
                 ON CONFLICT DO NOTHING RETURNING id"
            );
            let inserted: Option<String> = sqlx::query_scalar(&sql)
                .bind(&id)
                .bind(Json(&doc))
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| db_error(collection, "upsert document", e))?;

            match inserted {
                Some(id) => {
                    debug!(%collection, id = %id, "Upserted document");
                    UpdateResult::upserted(id)
                }
                None => {
                    let modified = merge(&mut tx, collection, filter, &set, many).await?;
                    if modified.is_empty() {
                        return Err(AppError::validation(format!(
                            "Upsert in '{collection}' conflicts with an existing document"
                        )));
                    }
                    matched(&modified)
                }
            }
        };

        tx.commit()
            .await
            .map_err(|e| db_error(collection, "commit upsert", e))?;
        Ok(result)
    }
}

/// Merges `set` into the first (or every) document matching `filter`.
/// Returns one entry per matched document: whether its content changed.
async fn merge(
    conn: &mut PgConnection,
    collection: Collection,
    filter: &Filter,
    set: &Document,
    many: bool,
) -> AppResult<Vec<bool>> {
    let limit = if many { "" } else { " ORDER BY seq LIMIT 1" };
    let sql = format!(
        "WITH target AS (
            SELECT id, doc FROM {collection} WHERE doc @> $1{limit} FOR UPDATE
         )
         UPDATE {collection} AS t
         SET doc = t.doc || $2, updated_at = NOW()
         FROM target
         WHERE t.id = target.id
         RETURNING (target.doc IS DISTINCT FROM t.doc) AS modified"
    );

    sqlx::query_scalar(&sql)
        .bind(Json(filter.as_document()))
        .bind(Json(set))
        .fetch_all(conn)
        .await
        .map_err(|e| db_error(collection, "update documents", e))
}

fn matched(modified: &[bool]) -> UpdateResult {
    let changed = modified.iter().filter(|m| **m).count() as u64;
    UpdateResult::matched(modified.len() as u64, changed)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_one(
        &self,
        collection: Collection,
        mut doc: Document,
    ) -> AppResult<InsertOneResult> {
        let id = new_document_id();
        doc.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        self.insert_with_id(collection, &id, &doc).await?;
        Ok(InsertOneResult::new(id))
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> AppResult<Vec<Document>> {
        let sql = format!("SELECT doc FROM {collection} WHERE doc @> $1 ORDER BY seq");
        let rows: Vec<Json<Document>> = sqlx::query_scalar(&sql)
            .bind(Json(filter.as_document()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error(collection, "find documents", e))?;
        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> AppResult<Option<Document>> {
        let sql = format!("SELECT doc FROM {collection} WHERE doc @> $1 ORDER BY seq LIMIT 1");
        let row: Option<Json<Document>> = sqlx::query_scalar(&sql)
            .bind(Json(filter.as_document()))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error(collection, "find document", e))?;
        Ok(row.map(|Json(doc)| doc))
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> AppResult<UpdateResult> {
        self.update(collection, filter, set, upsert, false).await
    }

    async fn update_many(
        &self,
        collection: Collection,
        filter: &Filter,
        set: Document,
        upsert: bool,
    ) -> AppResult<UpdateResult> {
        self.update(collection, filter, set, upsert, true).await
    }

    async fn delete_one(&self, collection: Collection, filter: &Filter) -> AppResult<DeleteResult> {
        let sql = format!(
            "DELETE FROM {collection}
             WHERE id = (SELECT id FROM {collection} WHERE doc @> $1 ORDER BY seq LIMIT 1)"
        );
        let result = sqlx::query(&sql)
            .bind(Json(filter.as_document()))
            .execute(&self.pool)
            .await
            .map_err(|e| db_error(collection, "delete document", e))?;
        Ok(DeleteResult::new(result.rows_affected()))
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

fn db_error(collection: Collection, action: &str, err: sqlx::Error) -> AppError {
    AppError::with_source(
        ErrorKind::Database,
        format!("Failed to {action} in '{collection}': {err}"),
        err,
    )
}
