//! Error types for u-queens.

use thiserror::Error;

/// Errors raised by the search core and its configuration layer.
///
/// A search that ends in a local optimum is not an error: it is reported
/// through the result's final cost.
#[derive(Debug, Error)]
pub enum QueensError {
    /// Configuration rejected before any search started.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The run was stopped by an external cancel request.
    #[error("search was cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for u-queens operations.
pub type Result<T> = std::result::Result<T, QueensError>;

impl QueensError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        QueensError::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueensError::invalid("board_size must be at least 2, got 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: board_size must be at least 2, got 1"
        );
        assert_eq!(QueensError::Cancelled.to_string(), "search was cancelled");
    }
}
