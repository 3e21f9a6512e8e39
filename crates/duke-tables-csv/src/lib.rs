//! # duke-tables-csv
//!
//! Grid reader and table ingest for duke-tables.
//!
//! [`GridReader`] reads a tab-separated export into a [`Grid`] of raw
//! cells, [`split`] cuts it into the tables stacked in it, and [`build`]
//! turns each piece into a [`duke_tables_core::Table`].

mod error;
mod grid;
mod ingest;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use grid::{is_separator, Grid, GridRow};
pub use ingest::{build, detect_header_rows, split, MIN_SEGMENT_ROWS};
pub use options::{CoercionPolicy, GridReadOptions, IngestOptions};
pub use reader::GridReader;
