//! Sparsification of hierarchical labels
//!
//! Repeated adjacent labels on a multi-level axis are shown once, as a
//! merged cell spanning the positions they cover. For every level a
//! position keeps its label only where it starts a new run; the other
//! positions get an empty placeholder.
//!
//! Spans follow from the sparse sequence: a non-empty position spans up to
//! the next non-empty one. Empty positions before the first non-empty one
//! are independent cells (span 1); every other empty position is absorbed
//! by the merge before it (span 0).

use duke_tables_core::LabelTuple;
use serde::Serialize;

/// A label with the number of consecutive positions it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparseLabel {
    /// Label text, `""` for placeholders
    pub label: String,
    /// Positions covered: 1 for a plain cell, 0 when absorbed by a merge
    pub span: usize,
}

impl SparseLabel {
    /// Create a sparse label
    pub fn new<S: Into<String>>(label: S, span: usize) -> Self {
        Self {
            label: label.into(),
            span,
        }
    }
}

/// Sparse label sequences, one per level
///
/// A position keeps its label at a level when it differs from the previous
/// position's label at that level, or when an outer level shows a label at
/// this position (so inner merges never cross an outer boundary).
pub fn sparse_levels(labels: &[LabelTuple]) -> Vec<Vec<String>> {
    let levels = labels.first().map(LabelTuple::levels).unwrap_or(0);
    let mut out = vec![Vec::with_capacity(labels.len()); levels];

    for (i, label) in labels.iter().enumerate() {
        let mut outer_shown = false;
        for (level, sparse) in out.iter_mut().enumerate() {
            let value = label.get(level).unwrap_or("");
            let changed = i == 0 || outer_shown || labels[i - 1].get(level) != Some(value);
            if changed {
                sparse.push(value.to_string());
                outer_shown |= !value.is_empty();
            } else {
                sparse.push(String::new());
            }
        }
    }

    out
}

/// Spans of one sparse level
pub fn spans<S: AsRef<str>>(sparse: &[S]) -> Vec<usize> {
    let starts: Vec<usize> = sparse
        .iter()
        .enumerate()
        .filter(|(_, label)| !label.as_ref().is_empty())
        .map(|(i, _)| i)
        .collect();
    let first = starts.first().copied().unwrap_or(sparse.len());

    let mut out = vec![0; sparse.len()];
    for (n, &start) in starts.iter().enumerate() {
        let end = starts.get(n + 1).copied().unwrap_or(sparse.len());
        out[start] = end - start;
    }
    for span in out.iter_mut().take(first) {
        *span = 1;
    }
    out
}

/// Sparsify an axis
///
/// Without `transpose` the result has one entry per level, each listing the
/// positions (header rows). With `transpose` it has one entry per position,
/// each listing the levels (index rows).
pub fn sparsify(labels: &[LabelTuple], transpose: bool) -> Vec<Vec<SparseLabel>> {
    let per_level = sparse_levels(labels)
        .into_iter()
        .map(|sparse| {
            let spans = spans(&sparse);
            sparse
                .into_iter()
                .zip(spans)
                .map(|(label, span)| SparseLabel { label, span })
                .collect()
        })
        .collect();

    orient(per_level, labels.len(), transpose)
}

/// Non-sparse counterpart of [`sparsify`]: every label shown, every span 1
pub fn dense(labels: &[LabelTuple], transpose: bool) -> Vec<Vec<SparseLabel>> {
    let levels = labels.first().map(LabelTuple::levels).unwrap_or(0);
    let per_level = (0..levels)
        .map(|level| {
            labels
                .iter()
                .map(|label| SparseLabel::new(label.get(level).unwrap_or(""), 1))
                .collect()
        })
        .collect();

    orient(per_level, labels.len(), transpose)
}

fn orient(
    per_level: Vec<Vec<SparseLabel>>,
    positions: usize,
    transpose: bool,
) -> Vec<Vec<SparseLabel>> {
    if !transpose {
        return per_level;
    }

    (0..positions)
        .map(|pos| per_level.iter().map(|level| level[pos].clone()).collect())
        .collect()
}
