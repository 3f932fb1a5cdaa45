//! Error handling module for linkdex
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All fallible operations in the crate should use these types for consistency.

use thiserror::Error;

/// Main error type for linkdex
#[derive(Error, Debug)]
pub enum LinkdexError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalogue errors (loading, parsing, validation)
    #[error("Catalogue error: {0}")]
    Catalogue(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for linkdex operations
pub type Result<T> = std::result::Result<T, LinkdexError>;

// Convenient error constructors
impl LinkdexError {
    /// Create a catalogue error
    pub fn catalogue(msg: impl Into<String>) -> Self {
        Self::Catalogue(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LinkdexError::catalogue("rating out of range");
        assert_eq!(err.to_string(), "Catalogue error: rating out of range");

        let err = LinkdexError::terminal("failed to enter raw mode");
        assert_eq!(err.to_string(), "Terminal error: failed to enter raw mode");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LinkdexError = io_err.into();
        assert!(matches!(err, LinkdexError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = LinkdexError::general("something odd");
        assert!(matches!(err, LinkdexError::General(_)));
        assert_eq!(err.to_string(), "something odd");
    }
}
