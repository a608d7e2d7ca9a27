//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::CallbackError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Control values could not be decoded for a callback
    Callback(CallbackError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", msg),
            ),
            AppError::Callback(e) => {
                let details = match &e {
                    CallbackError::UnknownInput(id) | CallbackError::MissingInput(id) => id.clone(),
                    CallbackError::InvalidInput { id, .. } => id.clone(),
                };
                (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("BAD_REQUEST", e.to_string()).with_details(details),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<CallbackError> for AppError {
    fn from(err: CallbackError) -> Self {
        AppError::Callback(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_error_is_bad_request() {
        let response = AppError::from(CallbackError::MissingInput("payload-slider".into()))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_details_skipped_when_absent() {
        let value = serde_json::to_value(ApiError::new("BAD_REQUEST", "nope")).unwrap();
        assert!(value.get("details").is_none());
        let value =
            serde_json::to_value(ApiError::new("BAD_REQUEST", "nope").with_details("x")).unwrap();
        assert_eq!(value["details"], "x");
    }
}
