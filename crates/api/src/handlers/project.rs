//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cib_core::error::CoreError;
use cib_core::types::DbId;
use cib_db::models::project::{CreateProject, Project, ProjectPage, UpdateProject};
use cib_db::repositories::ProjectRepo;
use validator::Validate;

use crate::error::{AppError, AppResult, DUPLICATE_PID_MESSAGE};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::ProjectListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// Turn a unique violation on `uq_projects_pid` into a duplicate-key error.
fn pid_conflict(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation() && db_err.constraint() == Some("uq_projects_pid") =>
        {
            AppError::Core(CoreError::DuplicateKey(DUPLICATE_PID_MESSAGE.into()))
        }
        _ => AppError::Database(err),
    }
}

/// GET /api/projects
///
/// Filtered, sorted, paginated listing with the filtered total.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ProjectListParams>,
) -> AppResult<Json<ProjectPage>> {
    let filter = params.filter()?;
    let sort = params.sort()?;
    let page = params.page_request();

    let result = ProjectRepo::list_page(&state.pool, &filter, &sort, &page).await?;
    Ok(Json(result))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.validate()?;

    let project = ProjectRepo::create(&state.pool, &input)
        .await
        .map_err(pid_conflict)?;
    tracing::info!(id = project.id, pid = project.pid, is_draft = project.is_draft, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    input.validate()?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await
        .map_err(pid_conflict)?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, pid = project.pid, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
