//! Multi-level labels

use std::fmt;
use std::ops::Index;

/// Ordered per-level label identifying one row or one column
///
/// The outermost level comes first. All tuples on one axis have the same
/// number of levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelTuple(Vec<String>);

impl LabelTuple {
    /// Create a label tuple from its level values
    pub fn new(parts: Vec<String>) -> Self {
        LabelTuple(parts)
    }

    /// Create a single-level label
    pub fn single<S: Into<String>>(label: S) -> Self {
        LabelTuple(vec![label.into()])
    }

    /// Number of levels
    pub fn levels(&self) -> usize {
        self.0.len()
    }

    /// Label at a level
    pub fn get(&self, level: usize) -> Option<&str> {
        self.0.get(level).map(String::as_str)
    }

    /// Innermost label, or `""` for a zero-level tuple
    pub fn leaf(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or("")
    }

    /// Level values as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over level values
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Check whether every level is empty
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(String::is_empty)
    }

    /// Collapse the tuple into one display name
    ///
    /// A tuple with a single non-empty level yields that level, whichever
    /// position it sits at. A blank tuple yields `""`; several non-empty
    /// levels are joined with a space.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = self.iter().filter(|s| !s.is_empty()).collect();
        parts.join(" ")
    }

    /// Consume the tuple and return its levels
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Index<usize> for LabelTuple {
    type Output = str;

    fn index(&self, level: usize) -> &str {
        &self.0[level]
    }
}

impl fmt::Display for LabelTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", part)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl From<Vec<String>> for LabelTuple {
    fn from(parts: Vec<String>) -> Self {
        LabelTuple(parts)
    }
}

impl From<Vec<&str>> for LabelTuple {
    fn from(parts: Vec<&str>) -> Self {
        LabelTuple(parts.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LabelTuple {
    fn from(parts: [&str; N]) -> Self {
        LabelTuple(parts.iter().map(|s| s.to_string()).collect())
    }
}

impl FromIterator<String> for LabelTuple {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        LabelTuple(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for LabelTuple {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        LabelTuple(iter.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_single_component() {
        assert_eq!(LabelTuple::from(["", "h"]).display_name(), "h");
        assert_eq!(LabelTuple::from(["h", ""]).display_name(), "h");
        assert_eq!(LabelTuple::from(["", ""]).display_name(), "");
        assert_eq!(LabelTuple::from(["a", "b"]).display_name(), "a b");
    }

    #[test]
    fn test_accessors() {
        let t = LabelTuple::from(["A", "x"]);
        assert_eq!(t.levels(), 2);
        assert_eq!(t.get(0), Some("A"));
        assert_eq!(t.get(2), None);
        assert_eq!(&t[1], "x");
        assert_eq!(t.leaf(), "x");
        assert!(!t.is_blank());
        assert!(LabelTuple::from(["", ""]).is_blank());
    }

    #[test]
    fn test_display() {
        assert_eq!(LabelTuple::from(["A", "x"]).to_string(), r#"("A", "x")"#);
        assert_eq!(LabelTuple::single("r1").to_string(), r#"("r1",)"#);
    }
}
