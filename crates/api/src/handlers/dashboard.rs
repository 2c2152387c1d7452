//! Handler for the projects dashboard.

use axum::extract::State;
use axum::Json;
use cib_db::models::dashboard::DashboardStats;
use cib_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/projects/dashboard
///
/// Published-project aggregates plus the draft count.
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
