use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::DomainError;

/// Client-facing errors carry their message; internal ones are logged and
/// replaced with a generic body.
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        match self {
            DomainError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, format!("Not found: {}", msg)).into_response()
            }
            DomainError::InvalidInput(msg) => {
                tracing::warn!("Validation error: {}", msg);
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            DomainError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, msg).into_response()
            }
            DomainError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string()).into_response()
            }
        }
    }
}
