//! Dashboard aggregate read models.

use cib_core::project::{FundStatus, ProjectType};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::project::Project;

/// Published project count for one type. Only non-zero groups exist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub project_type: ProjectType,
    pub count: i64,
}

/// Published project count for one funding status. Only non-zero groups exist.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundCount {
    #[sqlx(try_from = "String")]
    pub fund_available: FundStatus,
    pub count: i64,
}

/// Number of published projects starting in one `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MonthCount {
    pub date: String,
    pub count: i64,
}

/// Everything the dashboard page renders, read from one snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: i64,
    pub total_drafts: i64,
    pub projects_by_type: Vec<TypeCount>,
    pub projects_by_fund: Vec<FundCount>,
    pub recent_projects: Vec<Project>,
    pub projects_over_time: Vec<MonthCount>,
}
