//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO accepted by the HTTP layer
//! - The validated record written by the repository

pub mod anime;
