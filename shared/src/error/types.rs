//! Error types and API error body

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type for the Reserve service, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a reservation-not-found error
    pub fn reservation_not_found(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ReservationNotFound, msg)
    }

    /// Create an ambiguous-match error
    pub fn ambiguous(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AmbiguousMatch, msg)
    }

    /// Create a schema mismatch error for a missing store column
    pub fn schema_mismatch(column: impl Into<String>) -> Self {
        let c = column.into();
        Self::with_message(
            ErrorCode::SchemaMismatch,
            format!("store header is missing required column '{}'", c),
        )
        .with_detail("column", c)
    }

    /// Create a store read error
    pub fn store_read(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreReadFailed, msg)
    }

    /// Create a store write error
    pub fn store_write(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreWriteFailed, msg)
    }

    /// Create a store unavailable error
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreUnavailable, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Wire-level error body
///
/// Business and transport failures share one shape on the wire:
/// `{"status": "error", "code": ..., "message": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `"error"`
    pub status: String,
    /// Numeric error code (see [`ErrorCode`])
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Additional error details (field-level errors, context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ErrorBody {
    /// Build the wire body for an error
    pub fn from_error(err: &AppError) -> Self {
        Self {
            status: "error".to_string(),
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ErrorBody::from_error(&self);

        // Log store and system errors
        if matches!(
            self.code.category(),
            super::category::ErrorCategory::Store | super::category::ErrorCategory::System
        ) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "Server-side error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}
