use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cib_core::error::CoreError;
use serde_json::json;
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error", "code", "details"? }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cib_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Message for a unique violation on the project PID.
pub const DUPLICATE_PID_MESSAGE: &str = "A project with this PID already exists.";

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(validation_message(&errors)))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl From<cib_assistant::AssistantError> for AppError {
    fn from(err: cib_assistant::AssistantError) -> Self {
        AppError::Core(err.into())
    }
}

struct ErrorBody {
    status: StatusCode,
    code: &'static str,
    message: String,
    details: Option<String>,
}

impl ErrorBody {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An internal error occurred",
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => ErrorBody::new(
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    ErrorBody::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::DuplicateKey(msg) => {
                    ErrorBody::new(StatusCode::BAD_REQUEST, "DUPLICATE_KEY", msg.clone())
                }
                CoreError::Upstream(msg) => {
                    tracing::error!(error = %msg, "Upstream service error");
                    ErrorBody {
                        details: Some(msg.clone()),
                        ..ErrorBody::new(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "UPSTREAM_ERROR",
                            "Upstream service request failed",
                        )
                    }
                }
                CoreError::Config(msg) => {
                    tracing::error!(error = %msg, "Configuration error");
                    ErrorBody::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFIG_ERROR",
                        msg.clone(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ErrorBody::internal()
            }
        };

        let mut json = json!({
            "error": body.message,
            "code": body.code,
        });
        if let Some(details) = body.details {
            json["details"] = details.into();
        }

        (body.status, axum::Json(json)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (`23505`) on a `uq_` constraint map to 400 `DUPLICATE_KEY`.
/// - Check violations (`23514`) map to 400 `VALIDATION_ERROR`.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorBody {
    match err {
        sqlx::Error::RowNotFound => {
            ErrorBody::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found")
        }
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23505") if constraint.starts_with("uq_") => ErrorBody::new(
                    StatusCode::BAD_REQUEST,
                    "DUPLICATE_KEY",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                ),
                Some("23514") => ErrorBody::new(
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Value violates check constraint: {constraint}"),
                ),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    ErrorBody::internal()
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            ErrorBody::internal()
        }
    }
}

/// Flatten validator output into `field: message; field: message`.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let reason = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field}: {reason}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
