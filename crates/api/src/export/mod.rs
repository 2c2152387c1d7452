//! Report renderers for the project export downloads.
//!
//! Column layouts come from [`cib_core::export`]; this module only turns
//! rows into file bytes.

pub mod pdf;
pub mod xlsx;

use cib_core::export::{format_date, ExportField};
use cib_db::models::project::Project;

/// Display text of one field of `project`, shared by both renderers.
pub fn cell_text(project: &Project, field: ExportField) -> String {
    match field {
        ExportField::Pid => project.pid.to_string(),
        ExportField::ProjectName => project.project_name.clone(),
        ExportField::MinistryDept => project.ministry_dept.clone(),
        ExportField::Type => project.project_type.to_string(),
        ExportField::Status => project.status.clone(),
        ExportField::FundAvailable => project.fund_available.to_string(),
        ExportField::StartDate => format_date(project.start_date),
        ExportField::CompletionDate => format_date(project.completion_date),
        ExportField::ContractValue => project.contract_value.clone(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{NaiveDate, TimeZone, Utc};
    use cib_core::project::{FundStatus, ProjectType};
    use cib_db::models::project::Project;

    pub fn project(pid: i32, name: &str) -> Project {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Project {
            id: pid as i64,
            pid,
            project_name: name.to_string(),
            ministry_dept: "Ministry of Transport".to_string(),
            lead_programme_manager: "Lead".to_string(),
            programme_manager: "Manager".to_string(),
            project_type: ProjectType::OnHold,
            fund_available: FundStatus::Funded,
            contract_value: "$2,500,000".to_string(),
            description: "Description".to_string(),
            status: "Awaiting approval".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 9),
            completion_date: None,
            is_draft: false,
            created_at: ts,
            updated_at: ts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_text_uses_wire_values_and_iso_dates() {
        let p = fixtures::project(1001, "Bridge");
        assert_eq!(cell_text(&p, ExportField::Pid), "1001");
        assert_eq!(cell_text(&p, ExportField::Type), "ON_HOLD");
        assert_eq!(cell_text(&p, ExportField::FundAvailable), "FUNDED");
        assert_eq!(cell_text(&p, ExportField::StartDate), "2025-03-09");
        assert_eq!(cell_text(&p, ExportField::CompletionDate), "");
    }
}
