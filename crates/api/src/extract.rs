//! Request extractors that reject with [`AppError`].
//!
//! Axum's stock `Json`, `Query` and `Path` reject with plain-text bodies
//! (and `422` for an undeserializable JSON body). These wrappers run the
//! same extraction but convert every rejection into a `400
//! VALIDATION_ERROR` with the usual JSON error body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
