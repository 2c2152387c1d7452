use std::sync::Arc;

use cib_assistant::GeminiClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cib_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Chat relay client; `None` when no API key is configured.
    pub chat: Option<Arc<GeminiClient>>,
}
