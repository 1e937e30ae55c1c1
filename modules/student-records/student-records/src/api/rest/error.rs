//! REST error mapping for the Student Records module.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::dto::MessageResponse;
use crate::domain::error::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by handlers, rendered as `{ "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_) => Self::not_found(),
            e @ (DomainError::MissingFields(_) | DomainError::Validation { .. }) => {
                Self::bad_request(e.to_string())
            }
            e @ DomainError::AlreadyExists(_) => Self::new(StatusCode::CONFLICT, e.to_string()),
            DomainError::Internal(e) => {
                tracing::error!(error = ?e, "Internal error in student_records");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        Self::bad_request("Invalid request body")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_status_mapping() {
        let cases = [
            (DomainError::not_found("1"), StatusCode::NOT_FOUND),
            (DomainError::missing_fields(vec!["name"]), StatusCode::BAD_REQUEST),
            (
                DomainError::validation("age", "must be a number"),
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::already_exists("1"), StatusCode::CONFLICT),
            (
                DomainError::Internal(anyhow::anyhow!("lock poisoned")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (domain, status) in cases {
            assert_eq!(ApiError::from(domain).status, status);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::from(DomainError::not_found("7")).message, "Not found");
        assert_eq!(
            ApiError::from(DomainError::validation("age", "must be a number")).message,
            "Invalid age: must be a number"
        );
        let internal = ApiError::from(DomainError::Internal(anyhow::anyhow!("secret detail")));
        assert!(!internal.message.contains("secret"));
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
