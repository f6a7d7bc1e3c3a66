//! Application error type and its HTTP representation.
//!
//! Every layer returns [`AppError`]. Handlers let axum turn it into a JSON
//! response of the form:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": {} } }
//! ```
//!
//! Storage failures are logged with their cause but reach the client only as a
//! generic `storage_error`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::codec::CodecError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input: bad URL, bad request body, bad short code.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Unknown identity or short code.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Database or I/O failure.
    #[error("{message}")]
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Storage { message, details } => ("storage_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database operation failed");

        AppError::storage("Storage error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or(Value::Null);

        AppError::bad_request("Request validation failed", details)
    }
}

impl From<CodecError> for AppError {
    fn from(e: CodecError) -> Self {
        AppError::bad_request("Invalid short code", json!({ "reason": e.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::storage("boom", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::not_found("Short link not found", json!({ "code": "b" }))
            .to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Short link not found");
        assert_eq!(info.details["code"], "b");
    }

    #[test]
    fn test_sqlx_error_does_not_leak_cause() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        let info = err.to_error_info();

        assert!(matches!(err, AppError::Storage { .. }));
        assert_eq!(info.code, "storage_error");
        assert_eq!(info.message, "Storage error");
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_codec_error_is_validation() {
        let err: AppError = CodecError::Empty.into();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::bad_request("Invalid URL format", json!({}));
        assert_eq!(err.to_string(), "Invalid URL format");
    }
}
