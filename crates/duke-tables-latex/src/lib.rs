//! # duke-tables-latex
//!
//! LaTeX output for duke-tables.
//!
//! [`sparsify`] merges repeated labels, [`format`] turns cells and labels
//! into markup, [`RenderContext`] gathers both for one table and
//! [`TabularRenderer`] writes a booktabs `tabular` from it. The result is
//! placed into a [`Template`].

mod context;
mod error;
pub mod format;
mod hooks;
mod plan;
mod render;
mod sparse;
mod template;

pub use context::{Alignment, RenderContext, RenderOptions, TextOrientation};
pub use error::{RenderError, RenderResult};
pub use format::{
    escape_text, format_decimal, format_number, merge_wrap, vertical_text, FormatSpec,
    HeaderFormatter, MergeOrientation, MissingDisplay, Notation,
};
pub use hooks::{Hooks, HOOK_NAMES};
pub use plan::FormatPlan;
pub use render::TabularRenderer;
pub use sparse::{dense, sparse_levels, sparsify, spans, SparseLabel};
pub use template::{Template, PLACEHOLDER};

use duke_tables_core::Table;

/// Render a table into a complete document fragment
pub fn render(table: &Table, options: &RenderOptions) -> RenderResult<String> {
    let context = RenderContext::new(table, options);
    render_context(&context, options)
}

/// Render a prepared context using the template named in the options
pub fn render_context(context: &RenderContext, options: &RenderOptions) -> RenderResult<String> {
    let template = Template::resolve(&options.template, &options.template_dirs)?;
    let body = TabularRenderer::new().render(context);
    Ok(template.apply(&body))
}
