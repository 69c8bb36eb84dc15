//! Error types for the budget ledger.

use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while operating on categories.
///
/// Insufficient funds is not an error; see [`crate::Outcome`].
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// An operation was given an argument it cannot act on
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No category with this name exists in the budget
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// A category with this name already exists in the budget
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),

    /// Invalid operation record in a script
    #[error("Invalid operation at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },
}
