//! API error type rendered as the `fail` envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::ApiResponse;
use crate::domain::UserError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Missing, malformed or incomplete request body
    pub fn invalid_payload() -> Self {
        Self::from(UserError::InvalidPayload)
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error; details stay in the logs
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::fail(self.message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match &err {
            UserError::InvalidPayload | UserError::DuplicateEmail => {
                Self::bad_request(err.to_string())
            }
            UserError::MalformedIdentifier | UserError::NotFound => {
                Self::not_found(err.to_string())
            }
            UserError::Storage(e) => {
                error!(error = %e, "User store failure");
                Self::internal()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_user_error_status_codes() {
        assert_eq!(ApiError::from(UserError::InvalidPayload).status, StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(UserError::DuplicateEmail).status, StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(UserError::MalformedIdentifier).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::from(UserError::NotFound).status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_user_error_messages() {
        assert_eq!(ApiError::invalid_payload().message, "Invalid payload.");
        assert_eq!(
            ApiError::from(UserError::DuplicateEmail).message,
            "Sorry. That email already exists."
        );
        assert_eq!(
            ApiError::from(UserError::MalformedIdentifier).message,
            "User format is not valid"
        );
        assert_eq!(ApiError::from(UserError::NotFound).message, "User does not exist");
    }

    #[test]
    fn test_storage_error_is_hidden() {
        let err = ApiError::from(UserError::Storage(DomainError::storage(
            "password authentication failed for user \"postgres\"",
        )));

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error.");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::not_found("User does not exist").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::invalid_payload().to_string(),
            "400: Invalid payload."
        );
    }
}
