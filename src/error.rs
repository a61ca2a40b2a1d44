//! Error types for rate conversion and projection

use thiserror::Error;

/// Result alias for computational operations
pub type RateResult<T> = Result<T, RateError>;

/// The only computational failure: an input that cannot be used.
///
/// Callers branch on this instead of receiving a panic; the UI shows an
/// empty matrix or the `Invalid Input` sentinel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    /// Non-numeric, negative, or non-finite value
    #[error("Invalid input for {field}: {value:?}")]
    InvalidInput {
        /// Which input was rejected (e.g. "nominal_Monthly", "principal")
        field: String,
        /// The offending value as received
        value: String,
    },
}

impl RateError {
    pub fn invalid(field: impl Into<String>, value: impl ToString) -> Self {
        RateError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

/// Failure to load a calculator configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown rate representation in config: {0}")]
    UnknownRepresentation(String),
}

/// Failure to turn user text into an edit event
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseEventError {
    #[error("Unknown rate representation: {0}")]
    UnknownRepresentation(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Expected <field>=<value>, got {0:?}")]
    Malformed(String),
}
