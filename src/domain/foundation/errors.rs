//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,

    // Not found errors
    ProfileNotFound,

    // Update pipeline errors
    AnalysisFailed,
    UpdateFailed,

    // Infrastructure errors
    StoreError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::ProfileNotFound => "PROFILE_NOT_FOUND",
            ErrorCode::AnalysisFailed => "ANALYSIS_FAILED",
            ErrorCode::UpdateFailed => "UPDATE_FAILED",
            ErrorCode::StoreError => "STORE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Creates a store error wrapping an adapter-level failure.
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}
