//! Pagination and sort parameters for project listings.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// First page number (pages are 1-based).
pub const DEFAULT_PAGE: i64 = 1;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of rows per page.
pub const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Page request / metadata
// ---------------------------------------------------------------------------

/// A normalized page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Apply defaults and clamp user-provided values.
    ///
    /// `page` floors at 1; `page_size` is kept within `1..=MAX_PAGE_SIZE`.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of rows to fetch.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Listing metadata returned next to a page of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Full filtered count, independent of the page window.
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(total: i64, request: &PageRequest) -> Self {
        Self {
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: total_pages(total, request.page_size),
        }
    }
}

/// `ceil(total / page_size)`, zero for an empty result.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if page_size <= 0 || total <= 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Sortable project fields, named as they appear in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Pid,
    ProjectName,
    MinistryDept,
    LeadProgrammeManager,
    ProgrammeManager,
    Type,
    FundAvailable,
    ContractValue,
    Status,
    StartDate,
    CompletionDate,
    IsDraft,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    const NAMES: &'static [(&'static str, SortField)] = &[
        ("id", SortField::Id),
        ("pid", SortField::Pid),
        ("projectName", SortField::ProjectName),
        ("ministryDept", SortField::MinistryDept),
        ("leadProgrammeManager", SortField::LeadProgrammeManager),
        ("programmeManager", SortField::ProgrammeManager),
        ("type", SortField::Type),
        ("fundAvailable", SortField::FundAvailable),
        ("contractValue", SortField::ContractValue),
        ("status", SortField::Status),
        ("startDate", SortField::StartDate),
        ("completionDate", SortField::CompletionDate),
        ("isDraft", SortField::IsDraft),
        ("createdAt", SortField::CreatedAt),
        ("updatedAt", SortField::UpdatedAt),
    ];

    pub fn parse(name: &str) -> Result<Self, CoreError> {
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, field)| *field)
            .ok_or_else(|| CoreError::Validation(format!("Cannot sort by unknown field '{name}'")))
    }

    /// Column backing this field in the `projects` table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Pid => "pid",
            Self::ProjectName => "project_name",
            Self::MinistryDept => "ministry_dept",
            Self::LeadProgrammeManager => "lead_programme_manager",
            Self::ProgrammeManager => "programme_manager",
            Self::Type => "project_type",
            Self::FundAvailable => "fund_available",
            Self::ContractValue => "contract_value",
            Self::Status => "status",
            Self::StartDate => "start_date",
            Self::CompletionDate => "completion_date",
            Self::IsDraft => "is_draft",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Accepts `asc`/`desc` and the table widget's `ascend`/`descend`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "asc" | "ascend" => Ok(Self::Asc),
            "desc" | "descend" => Ok(Self::Desc),
            other => Err(CoreError::Validation(format!(
                "Invalid sort order '{other}'. Must be 'asc' or 'desc'"
            ))),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Ordering for listings and exports. Defaults to `updatedAt desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::UpdatedAt,
            order: SortOrder::Desc,
        }
    }
}

impl Sort {
    /// Parse optional `sortBy` / `sortOrder` values, falling back to the
    /// defaults for absent or blank ones.
    pub fn parse(sort_by: Option<&str>, sort_order: Option<&str>) -> Result<Self, CoreError> {
        let defaults = Self::default();
        let field = match sort_by.map(str::trim).filter(|s| !s.is_empty()) {
            Some(name) => SortField::parse(name)?,
            None => defaults.field,
        };
        let order = match sort_order.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => SortOrder::parse(raw)?,
            None => defaults.order,
        };
        Ok(Self { field, order })
    }

    /// `ORDER BY` body with `id` as a stable tie-breaker.
    ///
    /// Both parts come from closed enums, never from user text.
    pub fn order_by_sql(&self) -> String {
        let dir = self.order.as_sql();
        match self.field {
            SortField::Id => format!("id {dir}"),
            field => format!("{} {dir} NULLS LAST, id {dir}", field.column()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
