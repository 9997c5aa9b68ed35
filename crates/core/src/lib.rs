//! Domain logic for the anime tracker.
//!
//! No I/O lives here: the `db` and `api` crates depend on this one for
//! error types, label tables and input validation.

pub mod error;
pub mod schedule;
pub mod tracking;
pub mod types;
