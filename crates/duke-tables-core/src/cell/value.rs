//! Cell value types

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::number::Number;

/// Represents the value stored at one (row, column) position of a table
///
/// Numbers are kept as [`Number`] so the digits read from the source survive
/// until formatting. The variant is fixed when the table is ingested and is
/// never re-inferred downstream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Missing value (blank source cell, spreadsheet error, failed coercion)
    Missing,

    /// Numeric value
    Number(Number),

    /// Text kept as is (only under the preserve-as-text coercion policy)
    Text(SharedString),
}

impl Cell {
    /// Create a new text value
    pub fn text<S: AsRef<str>>(s: S) -> Self {
        Cell::Text(SharedString::new(s))
    }

    /// Check if the cell is missing
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Check if the cell holds a number
    pub fn is_number(&self) -> bool {
        matches!(self, Cell::Number(_))
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Cell::Number(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Missing
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => write!(f, ""),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => write!(f, "{}", s.as_str()),
        }
    }
}

impl From<Number> for Cell {
    fn from(n: Number) -> Self {
        Cell::Number(n)
    }
}

impl From<Decimal> for Cell {
    fn from(d: Decimal) -> Self {
        Cell::Number(Number::from(d))
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(Number::from(n))
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::Number(Number::from(n))
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::text(s)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::text(s)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Missing)
    }
}

/// Error markers written by spreadsheet software in place of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpreadsheetError {
    /// #NULL! - Incorrect range operator
    Null,
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Wrong type of argument or operand
    Value,
    /// #REF! - Invalid cell reference
    Ref,
    /// #NAME? - Unrecognized formula name
    Name,
    /// #NUM! - Invalid numeric value
    Num,
    /// #N/A - Value not available
    Na,
    /// Err:NNN - LibreOffice numbered error (e.g. Err:502)
    LibreOffice(u16),
}

impl SpreadsheetError {
    /// Parse an error marker
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(code) = s.strip_prefix("Err:") {
            return code.parse().ok().map(SpreadsheetError::LibreOffice);
        }
        match s.to_uppercase().as_str() {
            "#NULL!" => Some(SpreadsheetError::Null),
            "#DIV/0!" => Some(SpreadsheetError::Div0),
            "#VALUE!" => Some(SpreadsheetError::Value),
            "#REF!" => Some(SpreadsheetError::Ref),
            "#NAME?" => Some(SpreadsheetError::Name),
            "#NUM!" => Some(SpreadsheetError::Num),
            "#N/A" => Some(SpreadsheetError::Na),
            _ => None,
        }
    }
}

impl fmt::Display for SpreadsheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpreadsheetError::Null => write!(f, "#NULL!"),
            SpreadsheetError::Div0 => write!(f, "#DIV/0!"),
            SpreadsheetError::Value => write!(f, "#VALUE!"),
            SpreadsheetError::Ref => write!(f, "#REF!"),
            SpreadsheetError::Name => write!(f, "#NAME?"),
            SpreadsheetError::Num => write!(f, "#NUM!"),
            SpreadsheetError::Na => write!(f, "#N/A"),
            SpreadsheetError::LibreOffice(code) => write!(f, "Err:{}", code),
        }
    }
}

/// Shared immutable string for text cells
///
/// Text cells are cloned whenever a table is joined or transposed; sharing
/// the backing storage keeps those transforms cheap.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SharedString(Arc<str>);

impl SharedString {
    /// Create a new shared string
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        SharedString(Arc::from(s.as_ref()))
    }

    /// Get the string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the length of the string
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the string is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for SharedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SharedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedString {
    fn from(s: &str) -> Self {
        SharedString::new(s)
    }
}

impl From<String> for SharedString {
    fn from(s: String) -> Self {
        SharedString::new(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SharedString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SharedString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SharedString::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_accessors() {
        assert_eq!(Cell::from(5).as_number(), Some(Number::from(5)));
        assert_eq!(Cell::text("a").as_text(), Some("a"));
        assert!(Cell::default().is_missing());
        assert_eq!(Cell::from(None::<i64>), Cell::Missing);
        assert_eq!(Cell::from(Decimal::new(15, 1)).to_string(), "1.5");
    }

    #[test]
    fn test_spreadsheet_error_parse() {
        assert_eq!(SpreadsheetError::parse("#DIV/0!"), Some(SpreadsheetError::Div0));
        assert_eq!(SpreadsheetError::parse("#value!"), Some(SpreadsheetError::Value));
        assert_eq!(
            SpreadsheetError::parse("Err:502"),
            Some(SpreadsheetError::LibreOffice(502))
        );
        assert_eq!(SpreadsheetError::parse("Err:abc"), None);
        assert_eq!(SpreadsheetError::parse("1.0"), None);
    }

    #[test]
    fn test_spreadsheet_error_display() {
        assert_eq!(SpreadsheetError::Na.to_string(), "#N/A");
        assert_eq!(SpreadsheetError::LibreOffice(504).to_string(), "Err:504");
    }
}
