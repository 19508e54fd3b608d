use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealioError {
    #[error("Missing identifier: {0} must not be blank")]
    MissingIdentifier(&'static str),

    #[error("Molecule not found: {0}")]
    MoleculeNotFound(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HealioError>;

/// Error returned by the JSON API handlers. Maps domain failures onto HTTP
/// status codes and a small `{error, message}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl From<HealioError> for ApiError {
    fn from(err: HealioError) -> Self {
        match err {
            HealioError::MissingIdentifier(_) => ApiError::Validation(err.to_string()),
            HealioError::MoleculeNotFound(_) => ApiError::NotFound(err.to_string()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };
        let body = Json(serde_json::json!({
            "error": kind,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
