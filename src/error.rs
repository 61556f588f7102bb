//! SimMetrics Error Types
//!
//! Centralized error handling for metric construction and batch operations.

use thiserror::Error;

/// Central error type for SimMetrics
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for SimMetrics operations
pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    /// Shorthand for the "explain" family of unsupported operations
    pub fn not_implemented(what: &str) -> Self {
        SimError::NotImplemented(what.to_string())
    }

    /// Shorthand for a missing required argument
    pub fn missing(argument: &str) -> Self {
        SimError::InvalidArgument(format!("`{}` must not be absent", argument))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SimError::missing("set").to_string(),
            "Invalid argument: `set` must not be absent"
        );
        assert_eq!(
            SimError::not_implemented("explain").to_string(),
            "Not implemented: explain"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: SimError = serde_json::from_str::<serde_json::Value>("{ nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, SimError::Json(_)));
    }
}
