//! Error types for tile splitting operations.
//!
//! This module provides structured error types for grid configuration
//! and splitting, enabling better error handling and debugging.

use thiserror::Error;

/// Main error type for tile splitting operations.
#[derive(Error, Debug)]
pub enum TileError {
    /// Invalid grid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for tile splitting operations.
pub type Result<T> = std::result::Result<T, TileError>;

impl TileError {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = TileError::invalid_configuration("test error");
        assert!(matches!(err, TileError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_error_display() {
        let err = TileError::invalid_configuration("tile width must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: tile width must be positive"
        );
    }
}
