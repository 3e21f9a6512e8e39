//! Error types for the conversion pipeline

use thiserror::Error;

use crate::convert::ConvertError;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting one input file
#[derive(Debug, Error)]
pub enum Error {
    /// Table model error (join, transpose)
    #[error(transparent)]
    Core(#[from] duke_tables_core::Error),

    /// Grid reading or ingest error
    #[error(transparent)]
    Csv(#[from] duke_tables_csv::CsvError),

    /// Rendering error
    #[error(transparent)]
    Render(#[from] duke_tables_latex::RenderError),

    /// External converter error
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input holds no table with data rows
    #[error("No tables with data rows in {0}")]
    NoTables(String),
}
