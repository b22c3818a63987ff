//! # Error Types
//!
//! Structured error types for stair_core. Note that *input validation* is
//! deliberately not represented here: the calculators cannot fail on finite
//! numeric input, and out-of-range values are reported by the `validate()`
//! methods as plain human-readable messages before a calculation is
//! attempted. `CalcError` covers the operations that genuinely can fail,
//! such as report rendering and file output.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::errors::{CalcError, CalcResult};
//!
//! fn write_report(path: &str, bytes: &[u8]) -> CalcResult<()> {
//!     std::fs::write(path, bytes).map_err(|e| {
//!         CalcError::file_error("write", path, e.to_string())
//!     })
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stair_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for operations that can fail.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Report rendering failed (Typst compilation or PDF export)
    #[error("Render failed during {stage}: {reason}")]
    RenderFailed { stage: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a RenderFailed error
    pub fn render_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::RenderFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::RenderFailed { .. } => "RENDER_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("total_rise_in", "-5.0", "Total rise must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::render_failed("compile", "missing font").error_code(),
            "RENDER_FAILED"
        );
        assert_eq!(
            CalcError::file_error("write", "report.pdf", "denied").error_code(),
            "FILE_ERROR"
        );
    }
}
