//! Questline API — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use questline_core::error::EngineError;
use questline_story::StoryError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The story document failed to load or validate.
    #[error("story error: {0}")]
    Story(#[from] StoryError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Notice to show the user.
    pub message: &'static str,
}

/// HTTP-layer wrapper around `EngineError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub EngineError);

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            EngineError::SceneNotFound(_) | EngineError::SessionNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            EngineError::MalformedChoice(_) => StatusCode::BAD_REQUEST,
            EngineError::UnknownChoice { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = ErrorBody {
            error: self.0.code(),
            message: self.0.notice(),
        };

        (status, Json(body)).into_response()
    }
}
