//! Grid reading and ingest options

/// Options for reading a delimited grid
#[derive(Debug, Clone)]
pub struct GridReadOptions {
    /// Field delimiter (default: tab)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Fixed field count; `None` takes the count of the first record
    pub field_count: Option<usize>,
    /// Field values read as missing (compared after trimming)
    pub missing_tokens: Vec<String>,
    /// Also treat spreadsheet error markers (`#DIV/0!`, `Err:502`, ...) as missing
    pub spreadsheet_errors_missing: bool,
}

impl Default for GridReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            quote: b'"',
            field_count: None,
            missing_tokens: ["NA", "N/A", "NaN", "nan", "-nan", "null", "NULL"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            spreadsheet_errors_missing: true,
        }
    }
}

/// What to do with a data cell that does not parse as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoercionPolicy {
    /// Replace it with a missing value and report the count
    #[default]
    Coerce,
    /// Keep the original text
    Preserve,
    /// Fail the build
    Strict,
}

/// Options for turning a grid segment into a table
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Number of leading columns forming the row index (at least 1)
    pub index_columns: usize,
    /// Number of header rows; `None` detects them
    pub header_rows: Option<usize>,
    /// Handling of non-numeric data cells
    pub coercion: CoercionPolicy,
    /// Drop columns that are missing in every row before anything else
    pub drop_empty_columns: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            index_columns: 1,
            header_rows: None,
            coercion: CoercionPolicy::Coerce,
            drop_empty_columns: true,
        }
    }
}
