//! Domain logic for the CIB projects service.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db`, `api`
//! and `assistant` crates build on these types.

pub mod chat;
pub mod coerce;
pub mod error;
pub mod export;
pub mod filter;
pub mod pagination;
pub mod project;
pub mod types;
