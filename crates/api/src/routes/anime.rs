//! Route definitions for tracked titles.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::anime;
use crate::state::AppState;

/// Routes mounted at `/animes`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /today   -> today
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(anime::list).post(anime::create))
        .route("/today", get(anime::today))
        .route("/{id}", put(anime::update).delete(anime::delete))
}
