//! duke-tex CLI - spreadsheet tables to LaTeX

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use duke_tables::prelude::*;
use duke_tables::Decimal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "duke-tex")]
#[command(
    author,
    version,
    about = "Convert spreadsheet tables into LaTeX tabulars with merged headers"
)]
struct Cli {
    /// Input files (ods, xlsx, ... or tab-separated csv/tsv/txt)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of leading columns forming the row index
    #[arg(short, long, default_value = "1")]
    index_columns: usize,

    /// Number of header rows (default: detect rows without numbers)
    #[arg(long)]
    header_rows: Option<usize>,

    /// Swap rows and columns of the joined table
    #[arg(short, long)]
    transpose: bool,

    /// JSON file mapping header labels to LaTeX markup
    #[arg(long, value_name = "JSON")]
    headers: Option<PathBuf>,

    /// Decimals (fixed, scientific) or significant digits (general)
    #[arg(short, long, default_value = "2")]
    digits: u32,

    /// Format integral values like any other number
    #[arg(long)]
    no_int_collapse: bool,

    /// Always use fixed notation
    #[arg(long)]
    no_exponents: bool,

    /// Magnitudes below this use scientific notation
    #[arg(long, default_value = "0.25")]
    exp_low: Decimal,

    /// Magnitudes at or above this use general notation
    #[arg(long, default_value = "1000")]
    exp_high: Decimal,

    /// Leave missing cells empty
    #[arg(long)]
    hide_missing: bool,

    /// Text shown for missing cells
    #[arg(long, default_value = "NaN")]
    missing_token: String,

    /// Handling of non-numeric data cells
    #[arg(long, value_enum, default_value_t = CoerceArg::Coerce)]
    coerce: CoerceArg,

    /// Alignment of index columns (l, c, r)
    #[arg(long, default_value = "l")]
    index_align: Alignment,

    /// Text orientation in merged index cells
    #[arg(long, default_value = "horizontal")]
    merge: TextOrientation,

    /// Show every header label instead of merging repeats
    #[arg(long)]
    no_sparse_header: bool,

    /// Show every index label instead of merging repeats
    #[arg(long)]
    no_sparse_index: bool,

    /// Template name or path (built-in: tabular, table)
    #[arg(long, default_value = "tabular")]
    template: String,

    /// Directory searched for named templates (repeatable)
    #[arg(long)]
    template_dir: Vec<PathBuf>,

    /// Output directory (default: next to each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also write the render context as JSON
    #[arg(long)]
    emit_context: bool,

    /// Converter executable for non-text inputs
    #[arg(long, default_value = "unoconv")]
    converter: PathBuf,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum CoerceArg {
    /// Non-numeric cells become missing
    Coerce,
    /// Non-numeric cells keep their text
    Preserve,
    /// Non-numeric cells are an error
    Strict,
}

impl From<CoerceArg> for CoercionPolicy {
    fn from(arg: CoerceArg) -> Self {
        match arg {
            CoerceArg::Coerce => CoercionPolicy::Coerce,
            CoerceArg::Preserve => CoercionPolicy::Preserve,
            CoerceArg::Strict => CoercionPolicy::Strict,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let job = TableJob::new(job_options(&cli)?);
    tracing::debug!("Converting {} file(s)", cli.files.len());

    let mut failed = 0usize;
    for file in &cli.files {
        if let Err(e) = convert_file(&job, file) {
            eprintln!("Error: {:#}", e);
            failed += 1;
        }
    }

    if failed > 0 {
        eprintln!("{} of {} file(s) failed", failed, cli.files.len());
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn job_options(cli: &Cli) -> Result<JobOptions> {
    let mut options = JobOptions::default();

    options.ingest.index_columns = cli.index_columns;
    options.ingest.header_rows = cli.header_rows;
    options.ingest.coercion = cli.coerce.into();

    options.render.format = FormatSpec::default()
        .with_digits(cli.digits)
        .with_collapse_integers(!cli.no_int_collapse)
        .with_exponents(!cli.no_exponents)
        .with_thresholds(cli.exp_low, cli.exp_high)
        .with_missing(if cli.hide_missing {
            MissingDisplay::Hidden
        } else {
            MissingDisplay::Token(cli.missing_token.clone())
        });
    if let Some(path) = &cli.headers {
        options.render.headers = load_headers(path)?;
    }
    options.render.index_align = cli.index_align;
    options.render.merge_text = cli.merge;
    options.render.sparsify_header = !cli.no_sparse_header;
    options.render.sparsify_index = !cli.no_sparse_index;
    options.render.template = cli.template.clone();
    options.render.template_dirs = cli.template_dir.clone();

    options.transpose = cli.transpose;
    options.output_dir = cli.output_dir.clone();
    options.emit_context = cli.emit_context;
    options.converter.program = cli.converter.clone();

    Ok(options)
}

fn load_headers(path: &Path) -> Result<HeaderFormatter> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read header map '{}'", path.display()))?;
    let overrides: BTreeMap<String, String> = serde_json::from_str(&text)
        .with_context(|| format!("Invalid header map '{}'", path.display()))?;
    Ok(HeaderFormatter::with_overrides(overrides))
}

fn convert_file(job: &TableJob, input: &Path) -> Result<()> {
    let output = job
        .run(input)
        .with_context(|| format!("Failed to convert '{}'", input.display()))?;

    eprintln!(
        "Wrote {} table(s) to '{}'",
        output.tables,
        output.tex.display()
    );
    if let Some(context) = output.context {
        eprintln!("Wrote render context to '{}'", context.display());
    }
    Ok(())
}
