pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                            service health (also served at the root)
/// /projects                          list, create
/// /projects/{id}                     get, update, delete
/// /projects/dashboard                aggregate stats
/// /projects/export/excel             spreadsheet download
/// /projects/export/pdf               PDF download
/// /projects/chat                     assistant chat relay
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/projects", project::router())
}
