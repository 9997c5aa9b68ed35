pub mod anime;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /animes                                          list, create
/// /animes/today                                    airing today (watching only)
/// /animes/{id}                                     replace, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/animes", anime::router())
}
