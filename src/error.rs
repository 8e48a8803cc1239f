//! Custom error types for obra-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! The calculation core distinguishes exactly one error class: `InvalidInput`
//! (non-positive area/price, malformed dates, wrong phase count, bad batch
//! rows). An empty simulation store is not an error anywhere; callers get a
//! defined empty result instead.

use thiserror::Error;

/// The main error type for obra-cli operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Invalid input to a calculation (non-positive area/price, malformed
    /// date, wrong phase count, bad what-if spec)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV parsing errors during batch ingestion
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Authentication failures
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl BudgetError {
    /// Create an `InvalidInput` error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Check if this is an invalid-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is an authentication error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

// Malformed dates are invalid input per the core taxonomy.
impl From<chrono::ParseError> for BudgetError {
    fn from(err: chrono::ParseError) -> Self {
        Self::InvalidInput(format!("malformed date: {}", err))
    }
}

/// Result type alias for obra-cli operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::invalid_input("area must be positive");
        assert_eq!(err.to_string(), "Invalid input: area must be positive");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }

    #[test]
    fn test_from_chrono_parse_error() {
        let parse_err = chrono::NaiveDate::parse_from_str("not-a-date", "%Y-%m-%d").unwrap_err();
        let err: BudgetError = parse_err.into();
        assert!(err.is_invalid_input());
    }
}
