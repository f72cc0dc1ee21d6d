//! PostgreSQL note store.
//!
//! Notes live in the `notes` table as JSONB documents. The `BIGSERIAL` id
//! gives a stable insertion order and is never part of a returned note.

use async_trait::async_trait;
use notepad_core::Note;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::types::Json;

use crate::error::StoreResult;
use crate::schema;
use crate::store::{NoteStore, StoreConfig};

/// Note store backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgNoteStore {
    pool: PgPool,
}

impl PgNoteStore {
    /// Connect to the database and verify it answers.
    ///
    /// Creates the notes collection if `config.run_migrations` is true.
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        let store = Self { pool };
        store.ping().await?;
        tracing::info!("Connected to database");

        if config.run_migrations {
            schema::run_migrations(&store.pool).await?;
        }

        Ok(store)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn insert(&self, note: &Note) -> StoreResult<()> {
        sqlx::query("INSERT INTO notes (document) VALUES ($1)")
            .bind(Json(note))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_all(&self) -> StoreResult<Vec<Note>> {
        let rows: Vec<(Json<Note>,)> =
            sqlx::query_as("SELECT document FROM notes ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(Json(note),)| note).collect())
    }

    async fn delete_one(&self, title: &str) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM notes
            WHERE id = (
                SELECT id FROM notes
                WHERE document->>'title' = $1
                ORDER BY id
                LIMIT 1
            )
            "#,
        )
        .bind(title)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
