//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{chat, dashboard, export, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                  -> list (filter, sort, paginate)
/// POST   /                  -> create
/// GET    /dashboard         -> dashboard stats
/// GET    /export/excel      -> spreadsheet download
/// GET    /export/pdf        -> PDF download
/// POST   /chat              -> assistant chat relay
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/dashboard", get(dashboard::stats))
        .route("/export/excel", get(export::excel))
        .route("/export/pdf", get(export::pdf))
        .route("/chat", post(chat::send))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
}
