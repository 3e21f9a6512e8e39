//! Per-column format resolution

use std::collections::BTreeMap;

use duke_tables_core::{Axis, Cell};
use serde::Serialize;

use crate::format::{escape_text, format_number, FormatSpec};

/// The format of every data column, resolved once per table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatPlan {
    columns: Vec<FormatSpec>,
}

impl FormatPlan {
    /// Resolve formats for a column axis
    ///
    /// A column takes the override registered for its leaf label, or the
    /// default format.
    pub fn resolve(
        columns: &Axis,
        default: &FormatSpec,
        overrides: &BTreeMap<String, FormatSpec>,
    ) -> Self {
        for key in overrides.keys() {
            if !columns.iter().any(|label| label.leaf() == key) {
                tracing::warn!("Format override for unknown column {:?}", key);
            }
        }

        let columns = columns
            .iter()
            .map(|label| {
                overrides
                    .get(label.leaf())
                    .unwrap_or(default)
                    .clone()
            })
            .collect();

        Self { columns }
    }

    /// Plan using one format for `ncols` columns
    pub fn uniform(spec: &FormatSpec, ncols: usize) -> Self {
        Self {
            columns: vec![spec.clone(); ncols],
        }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the plan covers no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Format of one column
    pub fn spec(&self, col: usize) -> Option<&FormatSpec> {
        self.columns.get(col)
    }

    /// Format one row of cells as markup
    ///
    /// Text cells are escaped; numbers and the missing marker are not.
    pub fn format_row(&self, cells: &[Cell]) -> Vec<String> {
        cells
            .iter()
            .zip(&self.columns)
            .map(|(cell, spec)| match cell {
                Cell::Text(text) => escape_text(text.as_str()),
                _ => format_number(cell, spec),
            })
            .collect()
    }
}
