//! Error types for duke-tables-core

use std::fmt;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Which axis of a table an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Row labels
    Index,
    /// Column labels
    Columns,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::Index => write!(f, "index"),
            AxisKind::Columns => write!(f, "columns"),
        }
    }
}

/// Errors that can occur in duke-tables-core
#[derive(Debug, Error)]
pub enum Error {
    /// Two positions on one axis carry the same label tuple
    #[error("Duplicate {axis} key: {key}")]
    DuplicateKey { axis: AxisKind, key: String },

    /// A label tuple does not have the axis level count
    #[error("Level mismatch on {axis}: expected {expected} levels, got {found}")]
    LevelMismatch {
        axis: AxisKind,
        expected: usize,
        found: usize,
    },

    /// Cell grid does not match the axis lengths
    #[error("Shape mismatch: expected {rows}x{cols} cells, got {message}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        message: String,
    },

    /// Join called without any table
    #[error("Cannot join an empty list of tables")]
    EmptyJoin,

    /// Join called with a first table that has no rows
    #[error("Cannot align on an empty index")]
    EmptyIndex,
}
