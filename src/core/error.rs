use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use rust_decimal::Decimal;
use std::fmt;

use crate::core::money::format_money;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Installment amounts that do not add back up to the quote total.
///
/// Both sides are already rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationMismatch {
    pub expected: Decimal,
    pub actual: Decimal,
}

impl fmt::Display for ReconciliationMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Installment total {} does not match quote total {}",
            format_money(self.actual),
            format_money(self.expected)
        )
    }
}

impl std::error::Error for ReconciliationMismatch {}

impl ReconciliationMismatch {
    /// Amount still missing from (positive) or exceeding (negative) the quote total
    pub fn difference(&self) -> Decimal {
        self.expected.saturating_sub(self.actual)
    }
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Installment plan does not reconcile with its source total
    #[error(transparent)]
    Reconciliation(#[from] ReconciliationMismatch),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Finance API answered with a non-success status
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        let body = match self {
            AppError::Reconciliation(mismatch) => serde_json::json!({
                "error": {
                    "message": error_message,
                    "code": status_code.as_u16(),
                    "expected": format_money(mismatch.expected),
                    "actual": format_money(mismatch.actual),
                    "difference": format_money(mismatch.difference()),
                }
            }),
            _ => serde_json::json!({
                "error": {
                    "message": error_message,
                    "code": status_code.as_u16(),
                }
            }),
        };

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Reconciliation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
