use cib_core::export::{ExportField, SHEET_COLUMNS, SHEET_NAME};
use cib_db::models::project::Project;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::cell_text;

/// Render `projects` as a single-sheet workbook and return the file bytes.
///
/// Row 0 is a bold header; each project takes one row below it. PIDs are
/// written as numbers, everything else as text.
pub fn render(projects: &[Project]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();

    for (col, column) in SHEET_COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, column.header, &header_format)?;
        worksheet.set_column_width(col, column.width)?;
    }

    for (index, project) in projects.iter().enumerate() {
        let row = (index + 1) as u32;
        for (col, column) in SHEET_COLUMNS.iter().enumerate() {
            let col = col as u16;
            match column.field {
                ExportField::Pid => {
                    worksheet.write_number(row, col, f64::from(project.pid))?;
                }
                field => {
                    worksheet.write_string(row, col, cell_text(project, field))?;
                }
            }
        }
    }

    workbook.save_to_buffer()
}
