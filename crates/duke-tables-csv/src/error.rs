//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while reading grids and building tables
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Parse error (strict coercion policy); `row` and `column` index the
    /// grid the failing segment was split from
    #[error("Parse error at row {row}, column {column}: {message}")]
    Parse {
        row: usize,
        column: usize,
        message: String,
    },

    /// Options that cannot apply to the input
    #[error("Invalid ingest options: {0}")]
    Config(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] duke_tables_core::Error),
}
