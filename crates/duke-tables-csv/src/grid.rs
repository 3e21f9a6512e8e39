//! Raw string grid

/// One grid row; `None` is a missing cell
pub type GridRow = Vec<Option<String>>;

/// A rectangular grid of raw string cells, as read from the source file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<GridRow>,
    width: usize,
    origin: usize,
}

impl Grid {
    /// Create a grid, padding every row to the widest one
    pub fn new(mut rows: Vec<GridRow>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, None);
        }
        Self {
            rows,
            width,
            origin: 0,
        }
    }

    /// Set the row of the enclosing grid that this grid's first row came from
    pub fn with_origin(mut self, origin: usize) -> Self {
        self.origin = origin;
        self
    }

    /// Row of the enclosing grid holding this grid's first row (0 for a whole grid)
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Build a grid from string slices; empty strings become missing cells
    pub fn from_strs<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|s| {
                        let s = s.as_ref();
                        if s.trim().is_empty() {
                            None
                        } else {
                            Some(s.to_string())
                        }
                    })
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    /// Rows in source order
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of fields per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell at a (row, column) position
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }
}

/// Check whether every cell of a row is missing
pub fn is_separator(row: &[Option<String>]) -> bool {
    row.iter().all(Option::is_none)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_strs_pads_and_marks_missing() {
        let grid = Grid::from_strs(vec![vec!["a", "", "b"], vec!["c"]]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.get(0, 2), Some("b"));
        assert_eq!(grid.rows()[1], vec![Some("c".to_string()), None, None]);
    }

    #[test]
    fn test_is_separator() {
        assert!(is_separator(&[None, None]));
        assert!(is_separator(&[]));
        assert!(!is_separator(&[None, Some("x".into())]));
    }
}
