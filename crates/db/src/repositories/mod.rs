//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod project_repo;

pub use dashboard_repo::DashboardRepo;
pub use project_repo::ProjectRepo;
