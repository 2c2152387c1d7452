//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request schemas for inserts and partial updates
//! - Aggregate/read-model structs returned by the repositories

pub mod dashboard;
pub mod project;
