use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type.
///
/// The variants carry the full failure taxonomy (not-found, conflict,
/// validation, connectivity) so a boundary could map them to 404/409/400/500.
/// The HTTP adapter below deliberately does NOT: existing callers expect every
/// failure as a 500 with a "Failed to ..." text body and distinguish cases by
/// message alone. Keep that contract.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Connectivity(String),
}

impl AppError {
    /// Prefixes the boundary action ("Failed to get person by id") onto the
    /// message while keeping the error kind.
    pub fn failed(self, action: &str) -> AppError {
        match self {
            AppError::NotFound(msg) => AppError::NotFound(format!("{action}: {msg}")),
            AppError::Conflict(msg) => AppError::Conflict(format!("{action}: {msg}")),
            AppError::Validation(msg) => AppError::Validation(format!("{action}: {msg}")),
            AppError::Connectivity(msg) => AppError::Connectivity(format!("{action}: {msg}")),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Connectivity(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        if let AppError::Connectivity(_) = &self {
            tracing::error!("Connection failure: {message}");
        }
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
