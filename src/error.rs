//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Empty or otherwise unusable mutation payload. Rejected before any
    /// statement is built.
    #[error("{0}")]
    MalformedRequest(String),
    /// Enum/vocabulary violation; `options` lists the accepted values.
    #[error("{message}")]
    Validation {
        message: String,
        options: &'static [&'static str],
    },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// Uniform error payload: `options` only for enum/vocabulary violations.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, options) = match self {
            AppError::MalformedRequest(m) => (StatusCode::BAD_REQUEST, m, None),
            AppError::Validation { message, options } => (
                StatusCode::BAD_REQUEST,
                message,
                Some(options.iter().map(|s| s.to_string()).collect()),
            ),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m, None),
            AppError::Conflict(m) => (StatusCode::CONFLICT, m, None),
            AppError::Db(sqlx::Error::RowNotFound) => {
                (StatusCode::NOT_FOUND, "Not found.".into(), None)
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".into(),
                    None,
                )
            }
        };
        (status, Json(ErrorBody { message, options })).into_response()
    }
}
