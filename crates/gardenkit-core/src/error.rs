//! Error handling for GardenKit
//!
//! Provides the error types shared by all GardenKit crates:
//! - Validation errors (invalid bed group or location fields)
//! - Serialization errors (persisted values that no longer parse)
//!
//! Geometry and gesture handling never fail; they clamp or ignore
//! input instead. Errors only surface at the model and IO boundaries.

use thiserror::Error;

/// Validation error type
///
/// Raised when a model value breaks one of its field constraints.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty
    #[error("Field '{field}' must not be empty")]
    Empty {
        /// The offending field name.
        field: String,
    },

    /// A numeric field is outside its allowed range
    #[error("Field '{field}' out of range: {reason}")]
    OutOfRange {
        /// The offending field name.
        field: String,
        /// Which constraint was violated.
        reason: String,
    },
}

impl ValidationError {
    pub fn out_of_range(field: &str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Main error type for GardenKit
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
