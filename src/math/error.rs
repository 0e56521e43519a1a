// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Convex hull is degenerate: only {vertices} hull vertices found")]
    DegenerateHull { vertices: usize },

    #[error("No valid track after {attempts} attempts ({elapsed_ms} ms)")]
    Exhausted { attempts: usize, elapsed_ms: u128 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse track configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl TrackError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Caller errors: malformed input that is never retried internally.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            TrackError::InsufficientPoints { .. } | TrackError::InvalidArgument { .. }
        )
    }
}

pub type TrackResult<T> = Result<T, TrackError>;
