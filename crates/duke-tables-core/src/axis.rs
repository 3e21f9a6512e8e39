//! Table axes (row index and column header)

use ahash::AHashMap;

use crate::error::{AxisKind, Error, Result};
use crate::label::LabelTuple;

/// One axis of a table: ordered unique labels plus a name per level
#[derive(Debug, Clone)]
pub struct Axis {
    names: Vec<String>,
    labels: Vec<LabelTuple>,
    positions: AHashMap<LabelTuple, usize>,
}

impl Axis {
    /// Create an axis with explicit level names
    ///
    /// The level count is `names.len()`; every label must have exactly that
    /// many levels and labels must be unique.
    pub fn new(kind: AxisKind, names: Vec<String>, labels: Vec<LabelTuple>) -> Result<Self> {
        let levels = names.len();
        let mut positions = AHashMap::with_capacity(labels.len());

        for (pos, label) in labels.iter().enumerate() {
            if label.levels() != levels {
                return Err(Error::LevelMismatch {
                    axis: kind,
                    expected: levels,
                    found: label.levels(),
                });
            }
            if positions.insert(label.clone(), pos).is_some() {
                return Err(Error::DuplicateKey {
                    axis: kind,
                    key: label.to_string(),
                });
            }
        }

        Ok(Self {
            names,
            labels,
            positions,
        })
    }

    /// Create an axis with unnamed levels, taking the level count from the first label
    pub fn from_labels(kind: AxisKind, labels: Vec<LabelTuple>) -> Result<Self> {
        let levels = labels.first().map(LabelTuple::levels).unwrap_or(0);
        Self::new(kind, vec![String::new(); levels], labels)
    }

    /// Create an axis without positions
    pub fn empty(levels: usize) -> Self {
        Self {
            names: vec![String::new(); levels],
            labels: Vec::new(),
            positions: AHashMap::new(),
        }
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the axis has no positions
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of levels
    pub fn levels(&self) -> usize {
        self.names.len()
    }

    /// Level names, outermost first
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Labels in axis order
    pub fn labels(&self) -> &[LabelTuple] {
        &self.labels
    }

    /// Label at a position
    pub fn get(&self, pos: usize) -> Option<&LabelTuple> {
        self.labels.get(pos)
    }

    /// Position of a label
    pub fn position(&self, label: &LabelTuple) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Check if the axis contains a label
    pub fn contains(&self, label: &LabelTuple) -> bool {
        self.positions.contains_key(label)
    }

    /// Iterate over labels
    pub fn iter(&self) -> std::slice::Iter<'_, LabelTuple> {
        self.labels.iter()
    }

    /// Values of one level, in axis order
    pub fn level_values(&self, level: usize) -> Vec<&str> {
        self.labels
            .iter()
            .map(|label| label.get(level).unwrap_or(""))
            .collect()
    }
}

impl PartialEq for Axis {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names && self.labels == other.labels
    }
}
