//! Shared query parameter types for API handlers.
//!
//! The listing and both export endpoints accept the same filter and sort
//! parameters, so they share [`ProjectListParams`].

use cib_core::error::CoreError;
use cib_core::filter::{FilterParams, ProjectFilter};
use cib_core::pagination::{PageRequest, Sort};
use serde::Deserialize;

/// Query string for `GET /projects` and the export downloads.
///
/// Every value is optional. Exports ignore `page` and `pageSize`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub fund_available: Option<String>,
    pub is_draft: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ProjectListParams {
    pub fn filter(&self) -> Result<ProjectFilter, CoreError> {
        ProjectFilter::parse(FilterParams {
            search: self.search.as_deref(),
            project_type: self.project_type.as_deref(),
            fund_available: self.fund_available.as_deref(),
            is_draft: self.is_draft.as_deref(),
        })
    }

    pub fn sort(&self) -> Result<Sort, CoreError> {
        Sort::parse(self.sort_by.as_deref(), self.sort_order.as_deref())
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}
