//! # Error Types
//!
//! Structured error types for section_core. Every failure of a calculation run
//! maps to one variant, so callers can tell a lookup miss from bad geometry
//! without parsing messages.
//!
//! ## Example
//!
//! ```rust
//! use section_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(tp_mm: f64) -> CalcResult<()> {
//!     if tp_mm < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "plate.thickness_mm",
//!             tp_mm.to_string(),
//!             "Plate thickness cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_thickness(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for section_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is non-positive, non-finite or inconsistent
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Designation not present in the section table
    #[error("Section not found: '{designation}'")]
    SectionNotFound { designation: String },

    /// The plastic neutral axis equation has no valid root
    #[error("Unsolvable geometry: {reason}")]
    UnsolvableGeometry { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(designation: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            designation: designation.into(),
        }
    }

    /// Create an UnsolvableGeometry error
    pub fn unsolvable(reason: impl Into<String>) -> Self {
        CalcError::UnsolvableGeometry {
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

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::UnsolvableGeometry { .. } => "UNSOLVABLE_GEOMETRY",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("fy_mpa", "-355", "Yield strength must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::section_not_found("305 x 305 x 1").error_code(), "SECTION_NOT_FOUND");
        assert_eq!(CalcError::unsolvable("no root").error_code(), "UNSOLVABLE_GEOMETRY");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::section_not_found("999 x 999 x 9");
        assert_eq!(error.to_string(), "Section not found: '999 x 999 x 9'");
    }
}
