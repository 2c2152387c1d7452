//! Project list filtering.
//!
//! Turns the flat, optional query parameters of the listing and export
//! endpoints into a [`ProjectFilter`]. A row matches the filter iff it
//! satisfies every constraint that is present; an absent parameter never
//! narrows the result set. The SQL translation lives in the `db` crate.

use crate::error::CoreError;
use crate::project::{FundStatus, ProjectType};

/// Columns scanned by the free-text search, OR-ed together.
pub const SEARCH_COLUMNS: &[&str] = &[
    "project_name",
    "ministry_dept",
    "lead_programme_manager",
    "programme_manager",
    "description",
];

/// Value of `isDraft` that disables draft filtering.
pub const DRAFT_FILTER_ALL: &str = "all";

// ---------------------------------------------------------------------------
// Draft filter
// ---------------------------------------------------------------------------

/// Constraint on the `is_draft` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftFilter {
    /// No constraint (`isDraft` omitted or `"all"`).
    #[default]
    Any,
    /// Only rows with `is_draft = true`.
    DraftsOnly,
    /// Only rows with `is_draft = false`.
    PublishedOnly,
}

impl DraftFilter {
    /// Parse the raw `isDraft` query value.
    ///
    /// `"true"` selects drafts, `"all"` or an absent value disables the
    /// filter, and any other value selects published rows.
    pub fn parse(raw: Option<&str>) -> Self {
        match non_blank(raw) {
            None => Self::Any,
            Some(DRAFT_FILTER_ALL) => Self::Any,
            Some("true") => Self::DraftsOnly,
            Some(_) => Self::PublishedOnly,
        }
    }

    /// The `is_draft` value rows must have, or `None` for no constraint.
    pub fn required_value(&self) -> Option<bool> {
        match self {
            Self::Any => None,
            Self::DraftsOnly => Some(true),
            Self::PublishedOnly => Some(false),
        }
    }
}

// ---------------------------------------------------------------------------
// Project filter
// ---------------------------------------------------------------------------

/// Raw filter parameters as received on the query string.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterParams<'a> {
    pub search: Option<&'a str>,
    pub project_type: Option<&'a str>,
    pub fund_available: Option<&'a str>,
    pub is_draft: Option<&'a str>,
}

/// Typed filter over project rows. Present constraints combine with AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    /// Case-insensitive substring matched against [`SEARCH_COLUMNS`].
    pub search: Option<String>,
    pub project_type: Option<ProjectType>,
    pub fund_available: Option<FundStatus>,
    pub draft: DraftFilter,
}

impl ProjectFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Blank values are treated as absent. A non-blank search term is kept
    /// verbatim, surrounding whitespace included. Unknown `type` or
    /// `fundAvailable` values are rejected rather than silently matching
    /// nothing.
    pub fn parse(params: FilterParams<'_>) -> Result<Self, CoreError> {
        let search = params
            .search
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string);

        let project_type = non_blank(params.project_type)
            .map(str::parse::<ProjectType>)
            .transpose()?;

        let fund_available = non_blank(params.fund_available)
            .map(str::parse::<FundStatus>)
            .transpose()?;

        Ok(Self {
            search,
            project_type,
            fund_available,
            draft: DraftFilter::parse(params.is_draft),
        })
    }

    /// `ILIKE` pattern for the search term, if any.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(like_pattern)
    }

    /// Whether the filter imposes no constraint at all.
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.project_type.is_none()
            && self.fund_available.is_none()
            && self.draft == DraftFilter::Any
    }
}

/// Build a `%term%` pattern that matches `term` literally.
///
/// `LIKE` metacharacters in the term are escaped with a backslash, which is
/// PostgreSQL's default escape character.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
