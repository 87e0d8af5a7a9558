//! Error types for the outlay-core library.

use thiserror::Error;

/// Main error type for the outlay library.
#[derive(Error, Debug)]
pub enum OutlayError {
    /// Expense extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Expense storage error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to turning free-form text into an expense.
///
/// The extractor itself never fails; this only covers the precondition
/// checked before persisting an auto-extracted expense.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No recognizable amount in the input text.
    #[error("could not determine an amount from {text:?}")]
    NoAmount { text: String },
}

/// Errors related to the expense store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No record with the requested id.
    #[error("no expense with id {0}")]
    NotFound(u64),

    /// CSV read/write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error on the store file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the outlay library.
pub type Result<T> = std::result::Result<T, OutlayError>;
