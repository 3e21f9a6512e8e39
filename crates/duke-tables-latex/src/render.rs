//! Built-in booktabs `tabular` renderer

use std::fmt::Write;

use crate::context::{RenderContext, TextOrientation};
use crate::format::{merge_wrap, vertical_text, MergeOrientation};
use crate::sparse::SparseLabel;

/// Renders a [`RenderContext`] as a booktabs `tabular` environment
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularRenderer;

impl TabularRenderer {
    /// Create a renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the table body markup
    pub fn render(&self, ctx: &RenderContext) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\\begin{{tabular}}{{{}}}", ctx.column_spec);
        out.push_str("\\toprule\n");
        self.write_header(&mut out, ctx);
        out.push_str("\\midrule\n");
        self.write_body(&mut out, ctx);
        out.push_str("\\bottomrule\n");
        out.push_str("\\end{tabular}");

        out
    }

    fn write_header(&self, out: &mut String, ctx: &RenderContext) {
        let index_levels = ctx.index_levels();
        let last = ctx.header.len().saturating_sub(1);

        for (level, labels) in ctx.header.iter().enumerate() {
            let mut cells: Vec<String> = if level == last {
                ctx.index_names
                    .iter()
                    .map(|name| ctx.headers.format_index(name))
                    .collect()
            } else {
                vec![String::new(); index_levels]
            };

            let mut rules = Vec::new();
            for (pos, SparseLabel { label, span }) in labels.iter().enumerate() {
                // Covered header cells are left out of the row entirely
                if *span == 0 {
                    continue;
                }
                let text = ctx.headers.format(label);
                cells.push(merge_wrap(&text, *span, MergeOrientation::Horizontal));

                if *span > 1 && level < last && !label.is_empty() {
                    let first = index_levels + pos + 1;
                    let last_col = first + span - 1;
                    rules.push(format!("\\cmidrule(lr){{{}-{}}}", first, last_col));
                }
            }

            write_row(out, &cells);
            if !rules.is_empty() {
                out.push_str(&rules.join(" "));
                out.push('\n');
            }
        }
    }

    fn write_body(&self, out: &mut String, ctx: &RenderContext) {
        for (row, (labels, values)) in ctx.index.iter().zip(&ctx.cells).enumerate() {
            let starts_group = ctx.index_levels() > 1
                && labels
                    .first()
                    .map_or(false, |outer| outer.span > 0 && !outer.label.is_empty());
            if row > 0 && starts_group {
                out.push_str("\\midrule\n");
            }

            let mut cells: Vec<String> = labels
                .iter()
                .map(|SparseLabel { label, span }| {
                    let text = ctx.headers.format_index(label);
                    let text = if *span > 1 && ctx.merge_text == TextOrientation::Vertical {
                        vertical_text(&text)
                    } else {
                        text
                    };
                    merge_wrap(&text, *span, MergeOrientation::Vertical)
                })
                .collect();
            cells.extend(values.iter().cloned());

            write_row(out, &cells);
        }
    }
}

fn write_row(out: &mut String, cells: &[String]) {
    out.push_str(&cells.join(" & "));
    out.push_str(" \\\\\n");
}
