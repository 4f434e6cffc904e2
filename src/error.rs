//! Custom error types for Pocket Money
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Pocket Money operations
#[derive(Error, Debug)]
pub enum PocketError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Bad user input (amount, date, category, duplicate ids)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Corrupt or unparseable imported data
    #[error("Format error: {0}")]
    Format(String),

    /// Registration with a username that is already taken
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    /// Username/password pair did not match a registered user
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// A ledger operation was attempted without a session
    #[error("Not logged in. Run 'pocket login <username>' first")]
    NotLoggedIn,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PocketError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl From<std::io::Error> for PocketError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Pocket Money operations
pub type PocketResult<T> = Result<T, PocketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PocketError::Validation("Amount is required".into());
        assert_eq!(err.to_string(), "Validation error: Amount is required");
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = PocketError::transaction_not_found("abc-123");
        assert_eq!(err.to_string(), "Transaction not found: abc-123");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_auth_errors() {
        let err = PocketError::DuplicateUser("alice".into());
        assert_eq!(err.to_string(), "User already exists: alice");
        assert_eq!(
            PocketError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PocketError = io_err.into();
        assert!(matches!(err, PocketError::Io(_)));
    }
}
