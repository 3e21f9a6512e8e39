//! Combining and reshaping tables

use crate::axis::Axis;
use crate::cell::Cell;
use crate::error::{AxisKind, Error, Result};
use crate::table::Table;

/// Join tables side by side, aligned on the index of the first table
///
/// The first table's index is authoritative: rows of later tables that it
/// does not contain are dropped, and its rows that a later table lacks get
/// [`Cell::Missing`] in that table's columns. Columns keep their order, table
/// by table. Later tables without columns contribute nothing; every other
/// table must match the first one's index and column level counts.
pub fn join(tables: &[Table]) -> Result<Table> {
    let first = tables.first().ok_or(Error::EmptyJoin)?;
    if first.index().is_empty() {
        return Err(Error::EmptyIndex);
    }

    let index = first.index().clone();
    let levels = first.columns().levels();
    let mut labels = Vec::new();
    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); index.len()];

    for table in tables {
        if table.columns().is_empty() {
            continue;
        }
        if table.index().levels() != index.levels() {
            return Err(Error::LevelMismatch {
                axis: AxisKind::Index,
                expected: index.levels(),
                found: table.index().levels(),
            });
        }
        if table.columns().levels() != levels {
            return Err(Error::LevelMismatch {
                axis: AxisKind::Columns,
                expected: levels,
                found: table.columns().levels(),
            });
        }

        labels.extend(table.columns().iter().cloned());

        // Position of each authoritative row in this table, if any
        let lookup: Vec<Option<usize>> = index
            .iter()
            .map(|label| table.index().position(label))
            .collect();

        for (row, source) in rows.iter_mut().zip(lookup) {
            match source.and_then(|r| table.row(r)) {
                Some(cells) => row.extend_from_slice(cells),
                None => row.extend(std::iter::repeat(Cell::Missing).take(table.ncols())),
            }
        }
    }

    let columns = Axis::new(
        AxisKind::Columns,
        first.columns().names().to_vec(),
        labels,
    )?;
    Table::new(index, columns, rows)
}

/// Swap the row and column axes of a table
pub fn transpose(table: &Table) -> Table {
    let nrows = table.nrows();
    let cells: Vec<Vec<Cell>> = (0..table.ncols())
        .map(|c| {
            (0..nrows)
                .map(|r| table.cell(r, c).cloned().unwrap_or(Cell::Missing))
                .collect()
        })
        .collect();

    let (index, columns, _) = table.clone().into_parts();
    Table::new(columns, index, cells).unwrap_or_else(|_| Table::empty())
}
