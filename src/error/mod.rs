//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type and the single translator from
//! internal failure to the wire error format. Domain failures (`NotFound`,
//! `BadRequest`) carry the exact message returned to the client; everything
//! else maps to a generic 500 with the cause logged server-side, so storage
//! level error detail never leaks to clients.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{dto::api::ErrorDto, error::config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or server I/O error during startup or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found.
    ///
    /// Results in 404 Not Found with the provided message as the response
    /// body, e.g. `"No review found for review 100"`.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request.
    ///
    /// Results in 400 Bad Request with the provided message as the response
    /// body, e.g. `"Bad request"` for a malformed id path segment.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// `NotFound` and `BadRequest` carry their message to the client verbatim in
/// a `{ "msg": ... }` body. All other variants are unexpected: they are
/// logged with full detail and answered with a generic 500 body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { msg })).into_response()
            }
            err => {
                tracing::error!("{}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        msg: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
