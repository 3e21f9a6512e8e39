//! Merge wrappers and header label markup

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::escape::escape_text;

/// Direction in which a merged cell extends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeOrientation {
    /// Across rows (`\multirow`)
    Vertical,
    /// Across columns (`\multicolumn`)
    Horizontal,
}

/// Wrap a cell for merging
///
/// Span 0 is a cell covered by an earlier merge and renders as nothing;
/// span 1 is a plain cell.
pub fn merge_wrap(value: &str, span: usize, orientation: MergeOrientation) -> String {
    match span {
        0 => String::new(),
        1 => value.to_string(),
        _ => match orientation {
            MergeOrientation::Vertical => multirow(value, span),
            MergeOrientation::Horizontal => multicolumn(value, span),
        },
    }
}

/// `\multirow{span}{*}{value}`
pub fn multirow(value: &str, span: usize) -> String {
    format!("\\multirow{{{}}}{{*}}{{{}}}", span, value)
}

/// `\multicolumn{span}{c}{value}`
pub fn multicolumn(value: &str, span: usize) -> String {
    format!("\\multicolumn{{{}}}{{c}}{{{}}}", span, value)
}

/// Rotate text by 90 degrees; empty text stays empty
pub fn vertical_text(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("\\rotatebox[origin=c]{{90}}{{{}}}", value)
    }
}

/// Resolves header labels to display markup
///
/// An override wins verbatim. Labels that already contain math (`$`) are
/// kept; other non-empty labels are typeset in math mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderFormatter {
    overrides: BTreeMap<String, String>,
}

impl HeaderFormatter {
    /// Create a formatter without overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter from an override map
    pub fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Add one override
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, label: K, display: V) {
        self.overrides.insert(label.into(), display.into());
    }

    /// Override map
    pub fn overrides(&self) -> &BTreeMap<String, String> {
        &self.overrides
    }

    /// Override registered for a label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.overrides.get(label).map(String::as_str)
    }

    /// Display markup for a column label
    pub fn format(&self, label: &str) -> String {
        if let Some(display) = self.get(label) {
            return display.to_string();
        }
        if label.contains('$') || label.is_empty() {
            return label.to_string();
        }
        format!("$ {} $", label)
    }

    /// Display markup for an index name or label: the override, or the
    /// escaped label
    pub fn format_index(&self, label: &str) -> String {
        match self.get(label) {
            Some(display) => display.to_string(),
            None => escape_text(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_wrap_spans() {
        assert_eq!(merge_wrap("A", 0, MergeOrientation::Vertical), "");
        assert_eq!(merge_wrap("A", 1, MergeOrientation::Vertical), "A");
        assert_eq!(
            merge_wrap("A", 3, MergeOrientation::Vertical),
            r"\multirow{3}{*}{A}"
        );
        assert_eq!(
            merge_wrap("A", 2, MergeOrientation::Horizontal),
            r"\multicolumn{2}{c}{A}"
        );
    }

    #[test]
    fn test_vertical_text() {
        assert_eq!(vertical_text("BC"), r"\rotatebox[origin=c]{90}{BC}");
        assert_eq!(vertical_text(""), "");
    }

    #[test]
    fn test_header_formatter() {
        let mut headers = HeaderFormatter::new();
        headers.insert("dt", r"$\Delta t$");

        assert_eq!(headers.format("dt"), r"$\Delta t$");
        assert_eq!(headers.format("$x_1$"), "$x_1$");
        assert_eq!(headers.format("h"), "$ h $");
        assert_eq!(headers.format(""), "");
    }

    #[test]
    fn test_header_formatter_index_labels() {
        let mut headers = HeaderFormatter::new();
        headers.insert("BC", "Brooks--Corey");

        assert_eq!(headers.get("BC"), Some("Brooks--Corey"));
        assert_eq!(headers.format_index("BC"), "Brooks--Corey");
        assert_eq!(headers.format_index("a_b"), r"a\_b");
    }
}
