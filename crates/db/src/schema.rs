//! Startup schema management for the `animes` table.
//!
//! There is no migration log. The current schema is inferred from column
//! presence, and evolution is strictly additive: new optional columns are
//! appended with `ALTER TABLE ... ADD COLUMN`, nothing is ever dropped or
//! retyped.

use crate::DbPool;

/// Name of the single table backing tracked titles.
pub const ANIMES_TABLE: &str = "animes";

/// Optional columns introduced after the first release, in the order they
/// were added. Older installations gain them on the next start.
const ADDITIVE_COLUMNS: &[(&str, &str)] = &[("platform_url", "TEXT")];

/// SQLite's message prefix when `ADD COLUMN` targets an existing column.
const DUPLICATE_COLUMN_MESSAGE: &str = "duplicate column name";

/// Result of [`ensure_column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOutcome {
    /// The column was missing and has been added.
    Added,
    /// The column already existed; nothing changed.
    AlreadyPresent,
}

/// Create the `animes` table if absent and apply every additive column.
///
/// Idempotent, meant to run on every process start. `default_status` is the
/// column default for `status` on freshly created tables.
pub async fn ensure_schema(pool: &DbPool, default_status: &str) -> Result<(), sqlx::Error> {
    let create = format!(
        "CREATE TABLE IF NOT EXISTS {ANIMES_TABLE} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            current_episode INTEGER NOT NULL,
            total_episodes INTEGER,
            platform TEXT NOT NULL,
            platform_url TEXT,
            status TEXT DEFAULT {default_status},
            notes TEXT,
            update_day TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        default_status = quote_literal(default_status),
    );
    sqlx::query(&create).execute(pool).await?;

    for (name, sql_type) in ADDITIVE_COLUMNS {
        ensure_column(pool, name, sql_type).await?;
    }
    Ok(())
}

/// Add `name` to the `animes` table unless it already exists.
///
/// A duplicate-column failure is the steady state after the first
/// successful migration, so it is logged at info level and reported as
/// [`ColumnOutcome::AlreadyPresent`]. Any other error is returned.
pub async fn ensure_column(
    pool: &DbPool,
    name: &str,
    sql_type: &str,
) -> Result<ColumnOutcome, sqlx::Error> {
    let alter = format!(
        "ALTER TABLE {ANIMES_TABLE} ADD COLUMN {} {sql_type}",
        quote_ident(name)
    );
    match sqlx::query(&alter).execute(pool).await {
        Ok(_) => {
            tracing::info!(column = name, table = ANIMES_TABLE, "Added column");
            Ok(ColumnOutcome::Added)
        }
        Err(sqlx::Error::Database(db_err))
            if db_err.message().starts_with(DUPLICATE_COLUMN_MESSAGE) =>
        {
            tracing::info!(column = name, table = ANIMES_TABLE, "Column already present");
            Ok(ColumnOutcome::AlreadyPresent)
        }
        Err(err) => Err(err),
    }
}

/// Column names of the `animes` table in declaration order.
///
/// Returns an empty list when the table does not exist.
pub async fn table_columns(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info(?) ORDER BY cid")
        .bind(ANIMES_TABLE)
        .fetch_all(pool)
        .await
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
