//! Handlers for the `/animes` resource.
//!
//! Updates are full-record replacements: the body must carry every field,
//! and omitted optional fields are cleared.

use anitrack_core::error::CoreError;
use anitrack_core::tracking::ANIME_ENTITY;
use anitrack_core::types::DbId;
use anitrack_db::models::anime::{Anime, AnimeInput};
use anitrack_db::repositories::AnimeRepo;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Body of `GET /api/animes/today`.
#[derive(Debug, Serialize)]
pub struct TodayResponse {
    /// Weekday label matched against `update_day`.
    pub today: &'static str,
    pub animes: Vec<Anime>,
}

/// Confirmation body for deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/animes
///
/// All titles, most recently updated first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Anime>>> {
    let animes = AnimeRepo::list(&state.pool).await?;
    Ok(Json(animes))
}

/// POST /api/animes
pub async fn create(
    State(state): State<AppState>,
    AppJson(body): AppJson<AnimeInput>,
) -> AppResult<Json<Anime>> {
    let input = body.into_record(state.config.locale.watching_status())?;
    let anime = AnimeRepo::create(&state.pool, &input).await?;

    tracing::info!(anime_id = anime.id, title = %anime.title, "Anime created");
    Ok(Json(anime))
}

/// PUT /api/animes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(body): AppJson<AnimeInput>,
) -> AppResult<Json<Anime>> {
    let input = body.into_record(state.config.locale.watching_status())?;
    let anime = AnimeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ANIME_ENTITY,
            id,
        }))?;

    tracing::info!(anime_id = id, current_episode = anime.current_episode, "Anime updated");
    Ok(Json(anime))
}

/// DELETE /api/animes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !AnimeRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: ANIME_ENTITY,
            id,
        }));
    }

    tracing::info!(anime_id = id, "Anime deleted");
    Ok(Json(MessageResponse { message: "Deleted" }))
}

/// GET /api/animes/today
///
/// Titles whose `update_day` is today's local weekday label and whose
/// status is the "watching" sentinel, ordered by title.
pub async fn today(State(state): State<AppState>) -> AppResult<Json<TodayResponse>> {
    let locale = state.config.locale;
    let today = locale.today_label();
    let animes = AnimeRepo::list_by_day(&state.pool, today, locale.watching_status()).await?;

    tracing::debug!(today, count = animes.len(), "Listed titles airing today");
    Ok(Json(TodayResponse { today, animes }))
}
