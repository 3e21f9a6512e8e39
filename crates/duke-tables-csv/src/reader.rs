//! Delimited grid reader

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use duke_tables_core::SpreadsheetError;

use crate::error::CsvResult;
use crate::grid::{Grid, GridRow};
use crate::options::GridReadOptions;

/// Reader for tab-separated (or otherwise delimited) grids
pub struct GridReader;

impl GridReader {
    /// Read a grid from a file
    pub fn read_file<P: AsRef<Path>>(path: P, options: &GridReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read a grid from a string
    pub fn read_str(text: &str, options: &GridReadOptions) -> CsvResult<Grid> {
        Self::read(text.as_bytes(), options)
    }

    /// Read a grid from a reader
    ///
    /// Records whose field count differs from the fixed count are dropped
    /// with a warning. Blank lines are kept as separator rows.
    pub fn read<R: Read>(reader: R, options: &GridReadOptions) -> CsvResult<Grid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let missing: HashSet<&str> = options.missing_tokens.iter().map(String::as_str).collect();
        let mut field_count = options.field_count;
        let mut rows: Vec<GridRow> = Vec::new();
        let mut dropped = 0usize;
        let mut record = csv::StringRecord::new();

        loop {
            let start_line = csv_reader.position().line();
            match csv_reader.read_record(&mut record) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    tracing::warn!("Dropping malformed record: {}", e);
                    dropped += 1;
                    continue;
                }
            }

            // Blank lines are skipped by the csv crate but separate tables,
            // so lines consumed beyond the record's own become one separator
            let consumed = csv_reader.position().line().saturating_sub(start_line);
            let embedded: u64 = record.iter().map(|f| f.matches('\n').count() as u64).sum();
            if consumed > embedded + 1 && !rows.is_empty() {
                rows.push(vec![None; field_count.unwrap_or(0)]);
            }

            let width = *field_count.get_or_insert(record.len());
            if record.len() != width {
                tracing::warn!(
                    "Dropping ragged row at line {}: expected {} fields, got {}",
                    start_line,
                    width,
                    record.len()
                );
                dropped += 1;
                continue;
            }

            rows.push(
                record
                    .iter()
                    .map(|field| Self::convert_field(field, &missing, options))
                    .collect(),
            );
        }

        if dropped > 0 {
            tracing::warn!("Dropped {} malformed row(s)", dropped);
        }

        Ok(Grid::new(rows))
    }

    /// Map a raw field to a cell, recognizing missing-value tokens
    fn convert_field(
        field: &str,
        missing: &HashSet<&str>,
        options: &GridReadOptions,
    ) -> Option<String> {
        let trimmed = field.trim();

        if trimmed.is_empty() || missing.contains(trimmed) {
            return None;
        }

        if options.spreadsheet_errors_missing && SpreadsheetError::parse(trimmed).is_some() {
            return None;
        }

        Some(field.to_string())
    }
}
