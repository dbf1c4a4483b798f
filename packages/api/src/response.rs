// ABOUTME: Shared API response types and error handling
// ABOUTME: Provides consistent response format across all API endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;

use ideenportal_ideas::{ServiceError, StoreError, ValidationError};

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Field-level validation messages joined for the envelope
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convert service errors to HTTP responses
impl IntoResponse for ServiceErrorResponse {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self.0 {
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            ServiceError::Forbidden => (StatusCode::FORBIDDEN, self.0.to_string()),
            ServiceError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, format_validation_errors(errors))
            }
            ServiceError::Store(StoreError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, self.0.to_string())
            }
            ServiceError::Store(StoreError::Platform(e)) if e.is_auth_error() => (
                StatusCode::UNAUTHORIZED,
                "Platform session expired, please sign in again".to_string(),
            ),
            // The platform's own error text is surfaced as-is
            ServiceError::Store(StoreError::Platform(e)) => {
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
        };

        (status, ResponseJson(ApiResponse::<()>::error(message))).into_response()
    }
}

/// Newtype carrying a [`ServiceError`] into axum's response machinery
pub struct ServiceErrorResponse(pub ServiceError);

impl From<ServiceError> for ServiceErrorResponse {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}
