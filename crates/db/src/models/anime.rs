//! Tracked title entity model and DTOs.

use anitrack_core::error::CoreError;
use anitrack_core::tracking;
use anitrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// A row from the `animes` table.
///
/// Optional text columns are surfaced as empty strings rather than `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anime {
    pub id: DbId,
    pub title: String,
    pub current_episode: i64,
    pub total_episodes: Option<i64>,
    pub platform: String,
    pub platform_url: String,
    pub status: String,
    pub notes: String,
    pub update_day: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// Columns are read by name. Rows written before a column was added hold
// NULL there and surface as empty strings.
impl<'r> FromRow<'r, SqliteRow> for Anime {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            current_episode: row.try_get("current_episode")?,
            total_episodes: row.try_get("total_episodes")?,
            platform: row.try_get("platform")?,
            platform_url: optional_text(row, "platform_url")?,
            status: optional_text(row, "status")?,
            notes: optional_text(row, "notes")?,
            update_day: optional_text(row, "update_day")?,
            created_at: optional_text(row, "created_at")?,
            updated_at: optional_text(row, "updated_at")?,
        })
    }
}

fn optional_text(row: &SqliteRow, column: &str) -> Result<String, sqlx::Error> {
    let value: Option<String> = row.try_get(column)?;
    Ok(value.unwrap_or_default())
}

/// Request body for create and full-record update.
///
/// Every field is optional at the deserialization level so missing
/// required fields surface as a validation error, not a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnimeInput {
    pub title: Option<String>,
    pub current_episode: Option<i64>,
    pub total_episodes: Option<i64>,
    pub platform: Option<String>,
    pub platform_url: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub update_day: Option<String>,
}

impl AnimeInput {
    /// Check required fields and apply defaults.
    ///
    /// A blank or absent `status` becomes `default_status`.
    pub fn into_record(self, default_status: &str) -> Result<SaveAnime, CoreError> {
        let title = tracking::non_blank(self.title);
        let platform = tracking::non_blank(self.platform);

        let (Some(title), Some(current_episode), Some(platform)) =
            (title.clone(), self.current_episode, platform.clone())
        else {
            return Err(tracking::missing_fields_error(&[
                ("title", title.is_none()),
                ("current_episode", self.current_episode.is_none()),
                ("platform", platform.is_none()),
            ]));
        };
        tracking::validate_episode_counts(current_episode, self.total_episodes)?;

        Ok(SaveAnime {
            title,
            current_episode,
            total_episodes: self.total_episodes,
            platform,
            platform_url: self.platform_url,
            status: tracking::non_blank(self.status)
                .unwrap_or_else(|| default_status.to_string()),
            notes: self.notes,
            update_day: self.update_day,
        })
    }
}

/// Validated field set written on insert and on full-record update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveAnime {
    pub title: String,
    pub current_episode: i64,
    pub total_episodes: Option<i64>,
    pub platform: String,
    pub platform_url: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub update_day: Option<String>,
}
