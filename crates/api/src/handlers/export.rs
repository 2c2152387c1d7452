//! Report downloads for the project listing.
//!
//! Both exports re-run the listing query with the caller's filter and sort
//! but without pagination.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use cib_core::export::{PDF_CONTENT_TYPE, PDF_FILENAME, XLSX_CONTENT_TYPE, XLSX_FILENAME};
use cib_db::models::project::Project;
use cib_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::export;
use crate::extract::ApiQuery;
use crate::query::ProjectListParams;
use crate::state::AppState;

async fn fetch_rows(state: &AppState, params: &ProjectListParams) -> AppResult<Vec<Project>> {
    let filter = params.filter()?;
    let sort = params.sort()?;
    let rows = ProjectRepo::list_all(&state.pool, &filter, &sort).await?;
    tracing::debug!(rows = rows.len(), filtered = !filter.is_empty(), "Fetched rows for export");
    Ok(rows)
}

fn attachment(content_type: &'static str, filename: &str, bytes: Vec<u8>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, content_type.to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename={filename}")),
        ],
        bytes,
    )
}

/// GET /api/projects/export/excel
pub async fn excel(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ProjectListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = fetch_rows(&state, &params).await?;
    let bytes = export::xlsx::render(&rows)
        .map_err(|e| AppError::InternalError(format!("spreadsheet rendering failed: {e}")))?;

    tracing::info!(rows = rows.len(), size = bytes.len(), "Spreadsheet export generated");
    Ok(attachment(XLSX_CONTENT_TYPE, XLSX_FILENAME, bytes))
}

/// GET /api/projects/export/pdf
pub async fn pdf(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ProjectListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = fetch_rows(&state, &params).await?;
    let bytes = export::pdf::render(&rows);

    tracing::info!(rows = rows.len(), size = bytes.len(), "PDF export generated");
    Ok(attachment(PDF_CONTENT_TYPE, PDF_FILENAME, bytes))
}
