//! Project entity model and DTOs.

use std::borrow::Cow;

use cib_core::pagination::PageMeta;
use cib_core::project::{FundStatus, ProjectType};
use cib_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub pid: i32,
    pub project_name: String,
    pub ministry_dept: String,
    pub lead_programme_manager: String,
    pub programme_manager: String,
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub project_type: ProjectType,
    #[sqlx(try_from = "String")]
    pub fund_available: FundStatus,
    pub contract_value: String,
    pub description: String,
    pub status: String,
    pub start_date: Option<Date>,
    pub completion_date: Option<Date>,
    pub is_draft: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One page of a filtered, sorted project listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPage {
    pub data: Vec<Project>,
    pub meta: PageMeta,
}

/// DTO for creating a new project.
///
/// Unknown keys (`id`, timestamps) are ignored so the form can post a
/// whole record back.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(deserialize_with = "cib_core::coerce::pid")]
    pub pid: i32,
    #[validate(custom(function = "not_blank"))]
    pub project_name: String,
    #[validate(custom(function = "not_blank"))]
    pub ministry_dept: String,
    #[validate(custom(function = "not_blank"))]
    pub lead_programme_manager: String,
    #[validate(custom(function = "not_blank"))]
    pub programme_manager: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub fund_available: FundStatus,
    #[validate(custom(function = "not_blank"))]
    pub contract_value: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(custom(function = "not_blank"))]
    pub status: String,
    #[serde(default, deserialize_with = "cib_core::coerce::nullable_date")]
    pub start_date: Option<Date>,
    #[serde(default, deserialize_with = "cib_core::coerce::nullable_date")]
    pub completion_date: Option<Date>,
    /// Defaults to `false` (published) if omitted.
    #[serde(default)]
    pub is_draft: bool,
}

/// DTO for updating an existing project. All fields are optional.
///
/// For the nullable dates, an absent key keeps the stored value while an
/// explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(default, deserialize_with = "cib_core::coerce::optional_pid")]
    pub pid: Option<i32>,
    #[validate(custom(function = "not_blank"))]
    pub project_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub ministry_dept: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub lead_programme_manager: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub programme_manager: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<ProjectType>,
    pub fund_available: Option<FundStatus>,
    #[validate(custom(function = "not_blank"))]
    pub contract_value: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "cib_core::coerce::patch_date")]
    pub start_date: Option<Option<Date>>,
    #[serde(default, deserialize_with = "cib_core::coerce::patch_date")]
    pub completion_date: Option<Option<Date>>,
    pub is_draft: Option<bool>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(
            ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank"))
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
