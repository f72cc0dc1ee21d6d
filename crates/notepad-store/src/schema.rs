//! Schema definitions and migration utilities.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the notes collection (001_notes.sql).
pub const NOTES_MIGRATION: &str = include_str!("../../../migrations/001_notes.sql");

/// Create the notes collection if it does not exist yet.
///
/// Idempotent; safe to run on every start.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::debug!("Running notes migration (001_notes.sql)...");
    sqlx::raw_sql(NOTES_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Notes migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the notes table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'notes'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migration_creates_notes_table() {
        assert!(NOTES_MIGRATION.contains("CREATE TABLE IF NOT EXISTS notes"));
        assert!(NOTES_MIGRATION.contains("document JSONB NOT NULL"));
    }
}
