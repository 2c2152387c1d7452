//! Project classification enums.
//!
//! Both enums are stored as constrained `TEXT` columns and travel over the
//! wire as their upper-case names (`ON_HOLD`, `FUNDED`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle classification of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    New,
    Ongoing,
    OnHold,
    Completed,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::New,
        ProjectType::Ongoing,
        ProjectType::OnHold,
        ProjectType::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Ongoing => "ONGOING",
            Self::OnHold => "ON_HOLD",
            Self::Completed => "COMPLETED",
        }
    }
}

impl FromStr for ProjectType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid project type '{s}'. Must be one of: NEW, ONGOING, ON_HOLD, COMPLETED"
                ))
            })
    }
}

impl TryFrom<String> for ProjectType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Funding state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FundStatus {
    Yes,
    No,
    Funded,
}

impl FundStatus {
    pub const ALL: [FundStatus; 3] = [FundStatus::Yes, FundStatus::No, FundStatus::Funded];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::Funded => "FUNDED",
        }
    }
}

impl FromStr for FundStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid funding status '{s}'. Must be one of: YES, NO, FUNDED"
                ))
            })
    }
}

impl TryFrom<String> for FundStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for FundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn project_type_round_trips_through_str() {
        for t in ProjectType::ALL {
            assert_eq!(t.as_str().parse::<ProjectType>().unwrap(), t);
        }
    }

    #[test]
    fn project_type_rejects_lowercase() {
        assert_matches!("ongoing".parse::<ProjectType>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn project_type_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ProjectType::OnHold).unwrap();
        assert_eq!(json, "\"ON_HOLD\"");
    }

    #[test]
    fn fund_status_parses_known_values() {
        assert_eq!("FUNDED".parse::<FundStatus>().unwrap(), FundStatus::Funded);
        assert_eq!(FundStatus::try_from("NO".to_string()).unwrap(), FundStatus::No);
    }

    #[test]
    fn fund_status_rejects_unknown() {
        assert_matches!("MAYBE".parse::<FundStatus>(), Err(CoreError::Validation(_)));
    }
}
