//! Error types and handling
//!
//! Common error types used across the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures reported by the experience registry.
///
/// None of these are fatal: a failed call leaves the registry exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Draft handle was never issued by this registry")]
    InvalidHandle,

    #[error("Draft has been superseded, discarded or finalized")]
    StaleDraft,

    #[error("Caption is empty")]
    EmptyCaption,

    #[error("No media attached to the draft")]
    MissingMedia,

    #[error("Coordinate out of range: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

impl RegistryError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::InvalidHandle => "INVALID_HANDLE",
            RegistryError::StaleDraft => "STALE_DRAFT",
            RegistryError::EmptyCaption => "EMPTY_CAPTION",
            RegistryError::MissingMedia => "MISSING_MEDIA",
            RegistryError::InvalidCoordinate { .. } => "INVALID_COORDINATE",
        }
    }
}

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("Location error: {0}")]
    Location(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error response for a host UI layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let code = match &error {
            AppError::Registry(inner) => inner.code(),
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Capture(_) => "CAPTURE_ERROR",
            AppError::Location(_) => "LOCATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: error.to_string(),
        }
    }
}

impl From<RegistryError> for ErrorResponse {
    fn from(error: RegistryError) -> Self {
        AppError::from(error).into()
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
