//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Validation failures get their own enum so
//! callers can match on the exact kind before it is folded into
//! [`ExpenseError`].

use thiserror::Error;

/// Field-level failures raised while validating user input for an expense
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty or absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The amount did not parse to a finite, non-negative number
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// The date did not parse under any accepted format, or is not a real calendar day
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Expense field validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed filter bound (date or amount)
    #[error("Invalid filter input: {0}")]
    FilterInput(String),

    /// Category name is already taken (soft failure)
    #[error("Category already exists: {0}")]
    CategoryExists(String),

    /// Database errors (connection, constraint, malformed row)
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a "missing field" validation error
    pub fn missing_field(field: &'static str) -> Self {
        Self::Validation(ValidationError::MissingField(field))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if this is the soft "category already exists" failure
    pub fn is_category_exists(&self) -> bool {
        matches!(self, Self::CategoryExists(_))
    }
}

// Implement From traits for common error types

impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
