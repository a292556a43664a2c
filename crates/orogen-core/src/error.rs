//! Error types for orogen-rs.

use thiserror::Error;

/// The main error type for orogen-rs operations.
#[derive(Error, Debug)]
pub enum OrogenError {
    /// A generation parameter is outside its valid range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Failed to encode or write an image.
    #[error("image write error: {0}")]
    ImageWriteError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl OrogenError {
    /// Builds an [`OrogenError::InvalidParameter`] for the named parameter.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for orogen-rs operations.
pub type Result<T> = std::result::Result<T, OrogenError>;
