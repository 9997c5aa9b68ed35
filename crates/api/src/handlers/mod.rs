//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `anitrack_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod anime;
