//! Integration tests for the startup schema manager.

use anitrack_db::schema::{ensure_column, ensure_schema, table_columns, ColumnOutcome};
use assert_matches::assert_matches;
use sqlx::SqlitePool;

/// The table as it looked before `platform_url` was introduced.
const LEGACY_TABLE: &str = "CREATE TABLE animes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    current_episode INTEGER NOT NULL,
    total_episodes INTEGER,
    platform TEXT NOT NULL,
    status TEXT DEFAULT 'watching',
    notes TEXT,
    update_day TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

#[sqlx::test(migrations = false)]
async fn test_ensure_schema_creates_full_table(pool: SqlitePool) {
    assert!(table_columns(&pool).await.unwrap().is_empty());

    ensure_schema(&pool, "watching").await.unwrap();

    let columns = table_columns(&pool).await.unwrap();
    assert_eq!(
        columns,
        [
            "id",
            "title",
            "current_episode",
            "total_episodes",
            "platform",
            "platform_url",
            "status",
            "notes",
            "update_day",
            "created_at",
            "updated_at",
        ]
    );
}

#[sqlx::test(migrations = false)]
async fn test_ensure_schema_is_idempotent(pool: SqlitePool) {
    ensure_schema(&pool, "watching").await.unwrap();
    ensure_schema(&pool, "watching").await.unwrap();

    assert_eq!(table_columns(&pool).await.unwrap().len(), 11);
}

#[sqlx::test(migrations = false)]
async fn test_ensure_column_on_existing_column_is_noop(pool: SqlitePool) {
    ensure_schema(&pool, "watching").await.unwrap();

    let outcome = ensure_column(&pool, "platform_url", "TEXT").await.unwrap();
    assert_eq!(outcome, ColumnOutcome::AlreadyPresent);
}

#[sqlx::test(migrations = false)]
async fn test_legacy_table_gains_platform_url(pool: SqlitePool) {
    sqlx::query(LEGACY_TABLE).execute(&pool).await.unwrap();
    assert!(!table_columns(&pool)
        .await
        .unwrap()
        .contains(&"platform_url".to_string()));

    ensure_schema(&pool, "watching").await.unwrap();

    let columns = table_columns(&pool).await.unwrap();
    assert_eq!(columns.last().map(String::as_str), Some("platform_url"));
}

#[sqlx::test(migrations = false)]
async fn test_ensure_column_adds_new_column(pool: SqlitePool) {
    sqlx::query(LEGACY_TABLE).execute(&pool).await.unwrap();

    let outcome = ensure_column(&pool, "platform_url", "TEXT").await.unwrap();
    assert_eq!(outcome, ColumnOutcome::Added);
}

#[sqlx::test(migrations = false)]
async fn test_ensure_column_without_table_is_an_error(pool: SqlitePool) {
    let result = ensure_column(&pool, "platform_url", "TEXT").await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = false)]
async fn test_status_column_default_follows_configuration(pool: SqlitePool) {
    ensure_schema(&pool, "追番中").await.unwrap();

    sqlx::query(
        "INSERT INTO animes (title, current_episode, platform, created_at, updated_at) \
         VALUES ('X', 1, 'Y', '2026-01-01T00:00:00', '2026-01-01T00:00:00')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let status: String = sqlx::query_scalar("SELECT status FROM animes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "追番中");
}
