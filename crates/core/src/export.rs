//! Report export layout: column sets and cell formatting.
//!
//! The renderers in the API crate consume these definitions so the
//! spreadsheet and PDF reports stay in sync with each other.

use crate::types::Date;

/// Worksheet name used in spreadsheet exports.
pub const SHEET_NAME: &str = "Projects";

/// Title printed at the top of the PDF report.
pub const PDF_TITLE: &str = "CIB Projects Report";

pub const XLSX_FILENAME: &str = "projects.xlsx";
pub const PDF_FILENAME: &str = "projects.pdf";

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Fields a report column can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportField {
    Pid,
    ProjectName,
    MinistryDept,
    Type,
    Status,
    FundAvailable,
    StartDate,
    CompletionDate,
    ContractValue,
}

/// A spreadsheet column: header text and width in character units.
#[derive(Debug, Clone, Copy)]
pub struct SheetColumn {
    pub field: ExportField,
    pub header: &'static str,
    pub width: f64,
}

pub const SHEET_COLUMNS: [SheetColumn; 9] = [
    SheetColumn { field: ExportField::Pid, header: "PID", width: 10.0 },
    SheetColumn { field: ExportField::ProjectName, header: "Project Name", width: 30.0 },
    SheetColumn { field: ExportField::MinistryDept, header: "Ministry/Dept", width: 25.0 },
    SheetColumn { field: ExportField::Type, header: "Type", width: 15.0 },
    SheetColumn { field: ExportField::Status, header: "Status", width: 30.0 },
    SheetColumn { field: ExportField::FundAvailable, header: "Funding", width: 15.0 },
    SheetColumn { field: ExportField::StartDate, header: "Start Date", width: 15.0 },
    SheetColumn { field: ExportField::CompletionDate, header: "Completion Date", width: 15.0 },
    SheetColumn { field: ExportField::ContractValue, header: "Contract Value", width: 15.0 },
];

/// A PDF table column: header, left edge in points, optional text cap.
#[derive(Debug, Clone, Copy)]
pub struct PdfColumn {
    pub field: ExportField,
    pub header: &'static str,
    pub x: f32,
    pub max_chars: Option<usize>,
}

pub const PDF_COLUMNS: [PdfColumn; 7] = [
    PdfColumn { field: ExportField::Pid, header: "PID", x: 30.0, max_chars: None },
    PdfColumn { field: ExportField::ProjectName, header: "Project Name", x: 70.0, max_chars: Some(35) },
    PdfColumn { field: ExportField::MinistryDept, header: "Ministry", x: 250.0, max_chars: Some(25) },
    PdfColumn { field: ExportField::Type, header: "Type", x: 400.0, max_chars: None },
    PdfColumn { field: ExportField::FundAvailable, header: "Funding", x: 500.0, max_chars: None },
    PdfColumn { field: ExportField::ContractValue, header: "Value", x: 580.0, max_chars: None },
    PdfColumn { field: ExportField::StartDate, header: "Start Date", x: 650.0, max_chars: None },
];

/// Render an optional date as `YYYY-MM-DD`, or an empty string.
pub fn format_date(date: Option<Date>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Keep at most `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Replace characters the standard PDF Helvetica encoding cannot show.
///
/// Anything outside Latin-1 and all control characters become `?`.
pub fn pdf_safe_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if (c as u32) < 0x100 && !c.is_control() {
                c
            } else {
                '?'
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
