//! Translation of domain errors to HTTP responses.
//!
//! Every route handler returns `Result<_, ApiError>`; this is the single
//! place where the error taxonomy becomes status codes.
//!
//! | Error code | HTTP status |
//! |------------|-------------|
//! | ValidationFailed, InvalidResetCode, SelfDemotion | 400 |
//! | InvalidCredentials, Unauthorized | 401 |
//! | Forbidden | 403 |
//! | *NotFound | 404 |
//! | EmailTaken | 409 |
//! | infrastructure errors | 500 (generic message, logged) |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error body: `{ "error": "...", "code": "..." }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Wrapper turning a `DomainError` into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::InvalidResetCode | ErrorCode::SelfDemotion => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::InvalidCredentials | ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::UserNotFound
        | ErrorCode::PostNotFound
        | ErrorCode::MediaNotFound
        | ErrorCode::VideoNotFound
        | ErrorCode::PageContentNotFound => StatusCode::NOT_FOUND,
        ErrorCode::EmailTaken => StatusCode::CONFLICT,
        ErrorCode::DatabaseError
        | ErrorCode::EmailDeliveryFailed
        | ErrorCode::StorageError
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code);

        // Internal detail stays in the log; clients get a generic message.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "Request failed");
            "Server error".to_string()
        } else {
            self.0.message.clone()
        };

        let body = ErrorResponse::new(self.0.code.to_string(), message);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let response = ApiError(DomainError::validation("email", "Email is required")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_credentials_maps_to_401() {
        let response = ApiError(DomainError::invalid_credentials()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let response =
            ApiError(DomainError::new(ErrorCode::Forbidden, "Admin access required")).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response =
            ApiError(DomainError::new(ErrorCode::UserNotFound, "User not found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn email_taken_maps_to_409() {
        let response =
            ApiError(DomainError::new(ErrorCode::EmailTaken, "User already exists")).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn self_demotion_maps_to_400() {
        let response =
            ApiError(DomainError::new(ErrorCode::SelfDemotion, "You cannot demote yourself."))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        let response = ApiError(DomainError::database("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
