//! Turning raw grids into tables
//!
//! A source sheet may hold several tables stacked vertically, separated by
//! blank rows. [`split`] cuts the grid into segments and [`build`] turns one
//! segment into a [`Table`]: header rows are detected, spanned header and
//! index cells are reconstructed by forward-filling, and data cells are
//! parsed as numbers.

use duke_tables_core::{parse_number, Axis, AxisKind, Cell, LabelTuple, Table};

use crate::error::{CsvError, CsvResult};
use crate::grid::{is_separator, Grid, GridRow};
use crate::options::{CoercionPolicy, IngestOptions};

/// Segments shorter than this cannot hold a header and data
pub const MIN_SEGMENT_ROWS: usize = 2;

/// Split a grid into segments on all-missing rows
///
/// Order is preserved; segments with fewer than [`MIN_SEGMENT_ROWS`] rows
/// are dropped. Each segment records the grid row it starts at.
pub fn split(grid: &Grid) -> Vec<Grid> {
    let mut segments = Vec::new();
    let mut current: Vec<GridRow> = Vec::new();
    let mut start = 0;

    for (r, row) in grid.rows().iter().enumerate() {
        if is_separator(row) {
            flush_segment(&mut current, grid.origin() + start, &mut segments);
            start = r + 1;
        } else {
            current.push(row.clone());
        }
    }
    flush_segment(&mut current, grid.origin() + start, &mut segments);

    tracing::debug!("Split grid of {} rows into {} segment(s)", grid.len(), segments.len());
    segments
}

fn flush_segment(current: &mut Vec<GridRow>, origin: usize, segments: &mut Vec<Grid>) {
    if current.len() >= MIN_SEGMENT_ROWS {
        segments.push(Grid::new(std::mem::take(current)).with_origin(origin));
    } else {
        if !current.is_empty() {
            tracing::debug!("Dropping degenerate segment of {} row(s)", current.len());
        }
        current.clear();
    }
}

/// Build a table from one grid segment
///
/// Returns [`Table::empty`] when the segment has no data rows below its
/// header; callers are expected to skip such tables.
pub fn build(segment: &Grid, options: &IngestOptions) -> CsvResult<Table> {
    if options.index_columns == 0 {
        return Err(CsvError::Config(
            "at least one index column is required".to_string(),
        ));
    }

    let columns = kept_columns(segment, options.drop_empty_columns);
    if segment.is_empty() || columns.is_empty() {
        return Ok(Table::empty());
    }
    if options.index_columns > columns.len() {
        return Err(CsvError::Config(format!(
            "{} index columns requested but the segment has {} columns",
            options.index_columns,
            columns.len()
        )));
    }

    let rows: Vec<Vec<Option<&str>>> = segment
        .rows()
        .iter()
        .map(|row| columns.iter().map(|&c| row[c].as_deref()).collect())
        .collect();

    let header_rows = match options.header_rows {
        Some(n) => n.min(rows.len()),
        None => detect_header_rows(&rows),
    };
    tracing::debug!("Segment has {} header row(s)", header_rows);

    let data = &rows[header_rows..];
    if data.is_empty() {
        tracing::debug!("Segment has no data rows");
        return Ok(Table::empty());
    }

    let header = column_labels(&rows[..header_rows], columns.len(), options.index_columns);
    let (index_headers, data_headers) = header.split_at(options.index_columns);

    let names = index_headers.iter().map(LabelTuple::display_name).collect();
    let index = Axis::new(
        AxisKind::Index,
        names,
        index_labels(data, options.index_columns),
    )?;
    let column_axis = Axis::new(
        AxisKind::Columns,
        vec![String::new(); header_rows.max(1)],
        data_headers.to_vec(),
    )?;

    let mut coerced = 0usize;
    let mut cells = Vec::with_capacity(data.len());
    for (r, row) in data.iter().enumerate() {
        let mut out = Vec::with_capacity(data_headers.len());
        for (c, raw) in row.iter().enumerate().skip(options.index_columns) {
            let cell = match raw {
                None => Cell::Missing,
                Some(raw) => match parse_number(raw) {
                    Some(n) => Cell::Number(n),
                    None => match options.coercion {
                        CoercionPolicy::Coerce => {
                            coerced += 1;
                            Cell::Missing
                        }
                        CoercionPolicy::Preserve => Cell::text(raw),
                        CoercionPolicy::Strict => {
                            return Err(CsvError::Parse {
                                row: segment.origin() + header_rows + r,
                                column: columns[c],
                                message: format!("{:?} is not a number", raw),
                            })
                        }
                    },
                },
            };
            out.push(cell);
        }
        cells.push(out);
    }

    if coerced > 0 {
        tracing::warn!("Coerced {} non-numeric cell(s) to missing", coerced);
    }

    Ok(Table::new(index, column_axis, cells)?)
}

/// Count leading rows without any numeric value
///
/// A row that is entirely missing stays in the header.
pub fn detect_header_rows(rows: &[Vec<Option<&str>>]) -> usize {
    rows.iter()
        .take_while(|row| !row.iter().flatten().any(|v| parse_number(v).is_some()))
        .count()
}

/// Columns of the segment that survive empty-column dropping
fn kept_columns(segment: &Grid, drop_empty: bool) -> Vec<usize> {
    (0..segment.width())
        .filter(|&c| !drop_empty || segment.rows().iter().any(|row| row[c].is_some()))
        .collect()
}

/// One label tuple per column, forward-filling spanned header cells
///
/// Without header rows, data columns are labelled by their 1-based position
/// and index columns stay unnamed.
fn column_labels(
    header: &[Vec<Option<&str>>],
    width: usize,
    index_columns: usize,
) -> Vec<LabelTuple> {
    if header.is_empty() {
        return (0..width)
            .map(|c| match c.checked_sub(index_columns) {
                Some(pos) => LabelTuple::single((pos + 1).to_string()),
                None => LabelTuple::single(""),
            })
            .collect();
    }

    let filled: Vec<Vec<String>> = header
        .iter()
        .map(|row| forward_fill(row.iter().copied()))
        .collect();

    (0..width)
        .map(|c| filled.iter().map(|row| row[c].clone()).collect())
        .collect()
}

/// Row labels from the index columns
///
/// With more than one index column, each column is forward-filled top to
/// bottom independently.
fn index_labels(data: &[Vec<Option<&str>>], index_columns: usize) -> Vec<LabelTuple> {
    let levels: Vec<Vec<String>> = (0..index_columns)
        .map(|c| {
            if index_columns > 1 {
                forward_fill(data.iter().map(|row| row[c]))
            } else {
                data.iter()
                    .map(|row| row[c].unwrap_or_default().to_string())
                    .collect()
            }
        })
        .collect();

    (0..data.len())
        .map(|r| levels.iter().map(|level| level[r].clone()).collect())
        .collect()
}

/// Replace missing values with the nearest preceding value
///
/// Missing values before the first present one become `""`.
fn forward_fill<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut prev: Option<&str> = None;
    values
        .map(|value| {
            if let Some(v) = value {
                prev = Some(v);
            }
            prev.unwrap_or_default().to_string()
        })
        .collect()
}
