//! Render options and the precomputed render context

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use duke_tables_core::{Cell, Table};
use serde::{Deserialize, Serialize};

use crate::format::{FormatSpec, HeaderFormatter};
use crate::hooks::Hooks;
use crate::plan::FormatPlan;
use crate::sparse::{dense, sparsify, SparseLabel};

/// Column alignment in a `tabular` descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// `l`
    Left,
    /// `c`
    Center,
    /// `r`
    Right,
}

impl Alignment {
    /// Parse from a LaTeX alignment character
    pub fn from_latex_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(Alignment::Left),
            'c' => Some(Alignment::Center),
            'r' => Some(Alignment::Right),
            _ => None,
        }
    }

    /// Convert to a LaTeX alignment character
    pub fn to_latex_char(self) -> char {
        match self {
            Alignment::Left => 'l',
            Alignment::Center => 'c',
            Alignment::Right => 'r',
        }
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Alignment::Left),
            "c" | "center" => Ok(Alignment::Center),
            "r" | "right" => Ok(Alignment::Right),
            other => Err(format!("unknown alignment: {}", other)),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_latex_char())
    }
}

/// Orientation of the text in merged index cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextOrientation {
    /// Upright text
    #[default]
    Horizontal,
    /// Text rotated by 90 degrees
    Vertical,
}

impl FromStr for TextOrientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(TextOrientation::Horizontal),
            "vertical" => Ok(TextOrientation::Vertical),
            other => Err(format!("unknown text orientation: {}", other)),
        }
    }
}

/// Options for rendering one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Format of data columns without an override
    pub format: FormatSpec,
    /// Format overrides keyed by leaf column label
    pub column_formats: BTreeMap<String, FormatSpec>,
    /// Header label display overrides
    pub headers: HeaderFormatter,
    /// Alignment of index columns
    pub index_align: Alignment,
    /// Alignment of data columns
    pub data_align: Alignment,
    /// Text orientation of merged index cells
    pub merge_text: TextOrientation,
    /// Merge repeated header labels
    pub sparsify_header: bool,
    /// Merge repeated index labels
    pub sparsify_index: bool,
    /// Template name or path
    pub template: String,
    /// Directories searched for named templates
    pub template_dirs: Vec<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: FormatSpec::default(),
            column_formats: BTreeMap::new(),
            headers: HeaderFormatter::default(),
            index_align: Alignment::Left,
            data_align: Alignment::Right,
            merge_text: TextOrientation::Horizontal,
            sparsify_header: true,
            sparsify_index: true,
            template: "tabular".to_string(),
            template_dirs: Vec::new(),
        }
    }
}

impl RenderOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default data format
    pub fn with_format(mut self, format: FormatSpec) -> Self {
        self.format = format;
        self
    }

    /// Override the format of columns with the given leaf label
    pub fn with_column_format<S: Into<String>>(mut self, leaf: S, format: FormatSpec) -> Self {
        self.column_formats.insert(leaf.into(), format);
        self
    }

    /// Set the header formatter
    pub fn with_headers(mut self, headers: HeaderFormatter) -> Self {
        self.headers = headers;
        self
    }

    /// Set the template name or path
    pub fn with_template<S: Into<String>>(mut self, template: S) -> Self {
        self.template = template.into();
        self
    }

    /// Formatting hooks matching these options
    pub fn hooks(&self) -> Hooks {
        Hooks::new(self.format.clone(), self.headers.clone())
    }
}

/// Everything a renderer needs, computed once per table
///
/// Serializes to JSON for renderers outside this crate.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    /// `tabular` column descriptor, e.g. `llrrr`
    pub column_spec: String,
    /// Index level names
    pub index_names: Vec<String>,
    /// Column level names
    pub column_names: Vec<String>,
    /// Header labels, one row per column level
    pub header: Vec<Vec<SparseLabel>>,
    /// Index labels, one row per table row
    pub index: Vec<Vec<SparseLabel>>,
    /// Typed data cells
    pub values: Vec<Vec<Cell>>,
    /// Formatted data cells
    pub cells: Vec<Vec<String>>,
    /// Resolved per-column formats
    pub plan: FormatPlan,
    /// Header label display overrides
    pub headers: HeaderFormatter,
    /// Text orientation of merged index cells
    pub merge_text: TextOrientation,
}

impl RenderContext {
    /// Build the context for a table
    pub fn new(table: &Table, options: &RenderOptions) -> Self {
        let columns = table.columns();
        let index = table.index();

        let header = if options.sparsify_header {
            sparsify(columns.labels(), false)
        } else {
            dense(columns.labels(), false)
        };
        let index_labels = if options.sparsify_index {
            sparsify(index.labels(), true)
        } else {
            dense(index.labels(), true)
        };

        let plan = FormatPlan::resolve(columns, &options.format, &options.column_formats);
        let values: Vec<Vec<Cell>> = table.rows().map(|(_, cells)| cells.to_vec()).collect();
        let cells = values.iter().map(|row| plan.format_row(row)).collect();

        let column_spec: String = std::iter::repeat(options.index_align.to_latex_char())
            .take(index.levels())
            .chain(std::iter::repeat(options.data_align.to_latex_char()).take(columns.len()))
            .collect();

        tracing::debug!(
            "Render context: {} header level(s), {} row(s), columns {}",
            header.len(),
            index_labels.len(),
            column_spec
        );

        Self {
            column_spec,
            index_names: index.names().to_vec(),
            column_names: columns.names().to_vec(),
            header,
            index: index_labels,
            values,
            cells,
            plan,
            headers: options.headers.clone(),
            merge_text: options.merge_text,
        }
    }

    /// Number of index levels
    pub fn index_levels(&self) -> usize {
        self.index_names.len()
    }

    /// Number of data columns
    pub fn ncols(&self) -> usize {
        self.plan.len()
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duke_tables_core::{Axis, AxisKind, LabelTuple};
    use pretty_assertions::assert_eq;

    fn sample() -> Table {
        let index = Axis::new(
            AxisKind::Index,
            vec!["model".into(), "h".into()],
            vec![
                LabelTuple::from(["BC", "0.5"]),
                LabelTuple::from(["BC", "0.25"]),
                LabelTuple::from(["VG", "0.5"]),
            ],
        )
        .unwrap();
        let columns = Axis::from_labels(
            AxisKind::Columns,
            vec![LabelTuple::from(["L1"]), LabelTuple::from(["L2"])],
        )
        .unwrap();
        let cells = vec![
            vec![Cell::from(1), Cell::from(2)],
            vec![Cell::from(3), Cell::Missing],
            vec![Cell::from(5), Cell::from(6)],
        ];
        Table::new(index, columns, cells).unwrap()
    }

    #[test]
    fn test_column_spec() {
        let ctx = RenderContext::new(&sample(), &RenderOptions::default());
        assert_eq!(ctx.column_spec, "llrr");

        let options = RenderOptions {
            index_align: Alignment::Center,
            data_align: Alignment::Left,
            ..Default::default()
        };
        assert_eq!(RenderContext::new(&sample(), &options).column_spec, "ccll");
    }

    #[test]
    fn test_sparse_index_by_row() {
        let ctx = RenderContext::new(&sample(), &RenderOptions::default());

        assert_eq!(ctx.index.len(), 3);
        assert_eq!(ctx.index[0][0], SparseLabel::new("BC", 2));
        assert_eq!(ctx.index[1][0], SparseLabel::new("", 0));
        assert_eq!(ctx.cells[1], vec!["\\np{3}", "NaN"]);
    }

    #[test]
    fn test_sparsification_toggle() {
        let options = RenderOptions {
            sparsify_index: false,
            ..Default::default()
        };
        let ctx = RenderContext::new(&sample(), &options);
        assert_eq!(ctx.index[1][0], SparseLabel::new("BC", 1));
    }

    #[test]
    fn test_json_export() {
        let ctx = RenderContext::new(&sample(), &RenderOptions::default());
        let json: serde_json::Value = serde_json::from_str(&ctx.to_json().unwrap()).unwrap();

        assert_eq!(json["column_spec"], "llrr");
        assert_eq!(json["index"][0][0]["span"], 2);
        assert_eq!(json["cells"][1][1], "NaN");
    }

    #[test]
    fn test_alignment_parsing() {
        assert_eq!("r".parse::<Alignment>().unwrap(), Alignment::Right);
        assert_eq!("Center".parse::<Alignment>().unwrap(), Alignment::Center);
        assert!("x".parse::<Alignment>().is_err());
        assert_eq!(Alignment::from_latex_char('l'), Some(Alignment::Left));
    }
}
