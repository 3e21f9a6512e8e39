//! # duke-tables
//!
//! Turn spreadsheet tables into LaTeX tabulars.
//!
//! A sheet exported as tab-separated text may hold several tables stacked
//! vertically. duke-tables splits them apart, rebuilds their multi-level
//! headers and row labels, joins them on the row labels of the first table
//! and renders the result as a booktabs `tabular` with merged cells.
//!
//! ## Features
//!
//! - Header row detection and forward-filled spanned labels
//! - Join of stacked tables on the first table's row index
//! - Merged header (`\multicolumn`) and index (`\multirow`) cells
//! - Magnitude dependent number formatting wrapped in `\np{...}`
//! - Conversion of spreadsheet formats through an external converter
//!
//! ## Example
//!
//! ```rust
//! use duke_tables::prelude::*;
//!
//! let grid = GridReader::read_str(
//!     "\tA\tA\tB\n\tx\ty\tx\nr1\t1\t2\t3\nr2\t4\t5\t6\n",
//!     &GridReadOptions::default(),
//! )
//! .unwrap();
//!
//! let table = TableJob::default().tables_from_grid(&grid).unwrap();
//! let tex = render(&table, &RenderOptions::default()).unwrap();
//! assert!(tex.contains(r"\multicolumn{2}{c}{$ A $}"));
//! ```

pub mod convert;
pub mod error;
pub mod pipeline;
pub mod prelude;

pub use convert::{ConvertError, Converter, ConverterConfig};
pub use error::{Error, Result};
pub use pipeline::{is_text_input, JobOptions, JobOutput, TableJob, TEXT_EXTENSIONS};

// Re-export core types
pub use duke_tables_core::{
    join, parse_number, transpose, Axis, AxisKind, Cell, Decimal, LabelTuple, Number, Table,
};

// Re-export ingest types
pub use duke_tables_csv::{
    build, split, CoercionPolicy, CsvError, Grid, GridReadOptions, GridReader, IngestOptions,
};

// Re-export rendering types
pub use duke_tables_latex::{
    escape_text, format_number, merge_wrap, render, sparsify, Alignment, FormatSpec,
    HeaderFormatter, Hooks, MergeOrientation, MissingDisplay, RenderContext, RenderError,
    RenderOptions, SparseLabel, TabularRenderer, Template, TextOrientation,
};
