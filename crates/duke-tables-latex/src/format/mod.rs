//! Cell and label formatting

mod escape;
mod markup;
mod number;

pub use escape::escape_text;
pub use markup::{
    merge_wrap, multicolumn, multirow, vertical_text, HeaderFormatter, MergeOrientation,
};
pub use number::{
    format_bare, format_decimal, format_number, format_str, select_notation, FormatSpec,
    MissingDisplay, Notation,
};
