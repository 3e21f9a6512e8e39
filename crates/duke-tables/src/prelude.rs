//! Prelude module - common imports for duke-tables users
//!
//! ```rust
//! use duke_tables::prelude::*;
//! ```

pub use crate::{
    // Rendering
    render,
    Alignment,
    // Table model
    Cell,
    CoercionPolicy,
    // Error types
    Error,
    FormatSpec,
    // Ingest
    Grid,
    GridReadOptions,
    GridReader,
    HeaderFormatter,
    IngestOptions,
    // Pipeline
    JobOptions,
    LabelTuple,
    MissingDisplay,
    RenderOptions,
    Result,
    Table,
    TableJob,
    TextOrientation,
};
