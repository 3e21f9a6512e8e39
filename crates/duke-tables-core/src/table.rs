//! Table type

use crate::axis::Axis;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::label::LabelTuple;

/// A table with a multi-level row index and a multi-level column header
///
/// Cells are stored row-major. Every (row, column) pair has a [`Cell`],
/// possibly [`Cell::Missing`]. Tables are not mutated after construction;
/// [`crate::join`] and [`Table::transpose`] produce new tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    index: Axis,
    columns: Axis,
    cells: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table, checking that the cell grid matches both axes
    pub fn new(index: Axis, columns: Axis, cells: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = index.len();
        let cols = columns.len();

        if cells.len() != rows {
            return Err(Error::ShapeMismatch {
                rows,
                cols,
                message: format!("{} rows", cells.len()),
            });
        }
        if let Some((r, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(Error::ShapeMismatch {
                rows,
                cols,
                message: format!("{} cells in row {}", row.len(), r),
            });
        }

        Ok(Self {
            index,
            columns,
            cells,
        })
    }

    /// Create a table without rows or columns
    pub fn empty() -> Self {
        Self {
            index: Axis::empty(0),
            columns: Axis::empty(0),
            cells: Vec::new(),
        }
    }

    /// Check whether the table has no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.index.is_empty() || self.columns.is_empty()
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.index.len()
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Row axis
    pub fn index(&self) -> &Axis {
        &self.index
    }

    /// Column axis
    pub fn columns(&self) -> &Axis {
        &self.columns
    }

    /// Cell at a (row, column) position
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Cell addressed by row and column labels
    pub fn get(&self, row: &LabelTuple, col: &LabelTuple) -> Option<&Cell> {
        let r = self.index.position(row)?;
        let c = self.columns.position(col)?;
        self.cell(r, c)
    }

    /// Cells of one row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// Iterate over rows as (label, cells)
    pub fn rows(&self) -> impl Iterator<Item = (&LabelTuple, &[Cell])> {
        self.index
            .iter()
            .zip(self.cells.iter().map(Vec::as_slice))
    }

    /// Iterate over the cells of one column
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter_map(move |row| row.get(col))
    }

    /// Swap rows and columns, including level structure
    pub fn transpose(&self) -> Table {
        crate::assemble::transpose(self)
    }

    /// Consume the table and return its parts
    pub fn into_parts(self) -> (Axis, Axis, Vec<Vec<Cell>>) {
        (self.index, self.columns, self.cells)
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::empty()
    }
}
