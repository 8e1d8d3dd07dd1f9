use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::services::errors::game_service_errors::GameServiceError;
use tracing::warn;

const MALFORMED_BODY: &str = "Malformed request body.";

#[derive(Debug)]
pub enum ApiError {
    GameService(GameServiceError),
    /// The body was missing required fields or could not be decoded.
    Validation(String),
}

/// JSON body returned with every error status.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::Validation(MALFORMED_BODY.to_string())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::GameService(GameServiceError::ValidationError(_)) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::GameService(GameServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::GameService(GameServiceError::AlreadyExists(_)) => StatusCode::CONFLICT,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::GameService(err) => write!(f, "{}", err),
            ApiError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.to_string(),
            status: status_name(status),
            timestamp: Utc::now(),
        };

        (status, Json(body)).into_response()
    }
}

/// `404 Not Found` becomes `NOT_FOUND`.
fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_")
}
