//! Error types for flock operations.

use thiserror::Error;

/// Main error type for flock_core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlockError {
    /// A caller-supplied value is out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The flock is not in a state that allows the operation
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Text input could not be understood
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for flock_core operations.
pub type Result<T> = std::result::Result<T, FlockError>;

impl FlockError {
    #[must_use]
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    #[must_use]
    pub fn illegal_state<S: Into<String>>(msg: S) -> Self {
        Self::IllegalState(msg.into())
    }

    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    #[must_use]
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<flock_data::ParseDirectionError> for FlockError {
    fn from(err: flock_data::ParseDirectionError) -> Self {
        Self::Parse(err.to_string())
    }
}
