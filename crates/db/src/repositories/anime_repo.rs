//! Repository for the `animes` table.

use anitrack_core::types::{now_timestamp, DbId};
use sqlx::SqlitePool;

use crate::models::anime::{Anime, SaveAnime};

/// Column list shared across queries to avoid repetition.
///
/// Every column here is guaranteed by `schema::ensure_schema`, which runs
/// before the repository is used.
const COLUMNS: &str = "id, title, current_episode, total_episodes, platform, platform_url, \
     status, notes, update_day, created_at, updated_at";

/// Provides CRUD operations and the per-weekday view for tracked titles.
pub struct AnimeRepo;

impl AnimeRepo {
    /// Insert a new title, returning the stored row.
    ///
    /// `created_at` and `updated_at` receive the same timestamp.
    pub async fn create(pool: &SqlitePool, input: &SaveAnime) -> Result<Anime, sqlx::Error> {
        let now = now_timestamp();
        let query = format!(
            "INSERT INTO animes (title, current_episode, total_episodes, platform, \
                platform_url, status, notes, update_day, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Anime>(&query)
        .bind(&input.title)
        .bind(input.current_episode)
        .bind(input.total_episodes)
        .bind(&input.platform)
        .bind(&input.platform_url)
        .bind(&input.status)
        .bind(&input.notes)
        .bind(&input.update_day)
        .bind(&now)
        .fetch_one(pool)
        .await
    }

    /// Find a title by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Anime>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animes WHERE id = ?1");
        sqlx::query_as::<_, Anime>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all titles, most recently updated first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Anime>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animes ORDER BY updated_at DESC, id DESC");
        sqlx::query_as::<_, Anime>(&query).fetch_all(pool).await
    }

    /// Titles airing on `day` whose status equals `status`, ordered by title.
    pub async fn list_by_day(
        pool: &SqlitePool,
        day: &str,
        status: &str,
    ) -> Result<Vec<Anime>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM animes WHERE update_day = ?1 AND status = ?2 ORDER BY title ASC"
        );
        sqlx::query_as::<_, Anime>(&query)
        .bind(day)
        .bind(status)
        .fetch_all(pool)
        .await
    }

    /// Replace every mutable field of a title and stamp `updated_at`.
    ///
    /// `created_at` is left untouched. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &SaveAnime,
    ) -> Result<Option<Anime>, sqlx::Error> {
        let now = now_timestamp();
        let query = format!(
            "UPDATE animes SET \
                title = ?2, \
                current_episode = ?3, \
                total_episodes = ?4, \
                platform = ?5, \
                platform_url = ?6, \
                status = ?7, \
                notes = ?8, \
                update_day = ?9, \
                updated_at = MAX(COALESCE(created_at, ''), ?10) \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Anime>(&query)
        .bind(id)
        .bind(&input.title)
        .bind(input.current_episode)
        .bind(input.total_episodes)
        .bind(&input.platform)
        .bind(&input.platform_url)
        .bind(&input.status)
        .bind(&input.notes)
        .bind(&input.update_day)
        .bind(&now)
        .fetch_optional(pool)
        .await
    }

    /// Permanently delete a title. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animes WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
