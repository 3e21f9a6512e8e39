//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - The typed value stored at a (row, column) position
//! - [`Number`] - Decimal numbers of any magnitude
//! - [`SpreadsheetError`] - Error markers exported by spreadsheet software
//! - [`parse_number`] - The single numeric parser used at ingest time

mod number;
mod value;

pub use number::{parse_number, Number, MAX_DIGITS};
pub use value::{Cell, SharedString, SpreadsheetError};
