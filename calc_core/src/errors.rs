//! # Error Types
//!
//! Structured error types for calc_core. Evaluation failures never escape the
//! calculator as errors (they become the error marker on the display), but
//! the evaluator, the settings loader and the front-ends still need to talk
//! about what went wrong.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_precision(precision: usize) -> CalcResult<()> {
//!     if precision == 0 {
//!         return Err(CalcError::invalid_setting(
//!             "precision",
//!             precision.to_string(),
//!             "Precision must be at least one significant digit",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The evaluator rejected the expression (syntax, unknown name, arity)
    #[error("Invalid expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: String },

    /// The expression evaluated to NaN or an infinite value
    #[error("Non-finite result for '{expression}': {value}")]
    NonFiniteResult { expression: String, value: String },

    /// A settings value is out of range
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSetting {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidExpression error
    pub fn invalid_expression(expression: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidExpression {
            expression: expression.into(),
            reason: reason.into(),
        }
    }

    /// Create a NonFiniteResult error
    pub fn non_finite(expression: impl Into<String>, value: f64) -> Self {
        CalcError::NonFiniteResult {
            expression: expression.into(),
            value: value.to_string(),
        }
    }

    /// Create an InvalidSetting error
    pub fn invalid_setting(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidSetting {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for failures produced by evaluating an expression
    pub fn is_evaluation_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidExpression { .. } | CalcError::NonFiniteResult { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidExpression { .. } => "INVALID_EXPRESSION",
            CalcError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            CalcError::InvalidSetting { .. } => "INVALID_SETTING",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
