//! Custom error types for the finance tracker
//!
//! Defines the error hierarchy using thiserror. Lookups that miss (unknown
//! transaction id, unknown category name) are not errors inside the tracker,
//! which treats them as silent no-ops. The command line reports them through
//! `NotFound`.

use thiserror::Error;

/// Reasons a loose transaction input can be rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("transaction amount is missing")]
    MissingAmount,

    #[error("transaction type is missing")]
    MissingType,

    #[error("unrecognized transaction type '{0}' (expected 'income' or 'expense')")]
    UnknownType(String),

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("invalid date '{0}' (expected YYYY-MM-DD or RFC 3339)")]
    InvalidDate(String),
}

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A persisted value exists but does not match its expected shape
    #[error("Failed to decode stored '{key}': {message}")]
    Decode { key: String, message: String },

    /// Entity not found (command line lookups only)
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The largest transaction id has already been issued
    #[error("No transaction ids left to assign")]
    IdsExhausted,

    /// Rejected transaction input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence adapter errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinanceError {
    /// Create a decode error for a storage key
    pub fn decode(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            key: key.into(),
            message: message.to_string(),
        }
    }

    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finance tracker operations
pub type FinanceResult<T> = Result<T, FinanceError>;
