//! # duke-tables-core
//!
//! Core data structures for the duke-tables converter.
//!
//! This crate provides the table model shared by the other crates:
//! - [`Cell`] - A typed cell value (number, text or missing)
//! - [`Number`] - A decimal number of any magnitude
//! - [`LabelTuple`] - A multi-level row or column label
//! - [`Axis`] - An ordered set of unique labels with level names
//! - [`Table`] - Row axis, column axis and the cell grid
//! - [`join`] / [`transpose`] - Table assembly
//!
//! ## Example
//!
//! ```rust
//! use duke_tables_core::{Axis, AxisKind, Cell, LabelTuple, Table};
//!
//! let index = Axis::from_labels(AxisKind::Index, vec![LabelTuple::single("r1")]).unwrap();
//! let columns = Axis::from_labels(
//!     AxisKind::Columns,
//!     vec![LabelTuple::from(["A", "x"]), LabelTuple::from(["A", "y"])],
//! )
//! .unwrap();
//!
//! let table = Table::new(index, columns, vec![vec![Cell::from(1), Cell::from(2)]]).unwrap();
//! assert_eq!(table.transpose().nrows(), 2);
//! ```

pub mod assemble;
pub mod axis;
pub mod cell;
pub mod error;
pub mod label;
pub mod table;

// Re-exports for convenience
pub use assemble::{join, transpose};
pub use axis::Axis;
pub use cell::{parse_number, Cell, Number, SharedString, SpreadsheetError};
pub use error::{AxisKind, Error, Result};
pub use label::LabelTuple;
pub use table::Table;

pub use rust_decimal::Decimal;
