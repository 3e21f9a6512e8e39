//! Per-file conversion pipeline

use std::fs;
use std::path::{Path, PathBuf};

use duke_tables_core::{join, Table};
use duke_tables_csv::{build, split, Grid, GridReadOptions, GridReader, IngestOptions};
use duke_tables_latex::{render_context, RenderContext, RenderOptions};

use crate::convert::{Converter, ConverterConfig};
use crate::error::{Error, Result};

/// Extensions read directly as delimited text
pub const TEXT_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// Options for converting input files
#[derive(Debug, Clone, Default)]
pub struct JobOptions {
    /// Grid reading
    pub read: GridReadOptions,
    /// Table building
    pub ingest: IngestOptions,
    /// Rendering
    pub render: RenderOptions,
    /// Swap rows and columns of the joined table
    pub transpose: bool,
    /// Output directory; `None` writes next to each input
    pub output_dir: Option<PathBuf>,
    /// Also write the render context as `<stem>.json`
    pub emit_context: bool,
    /// External converter for non-text inputs
    pub converter: ConverterConfig,
    /// Directory for converter output; `None` uses a temporary directory
    pub work_dir: Option<PathBuf>,
}

/// Files written for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutput {
    /// The generated LaTeX file
    pub tex: PathBuf,
    /// The render context, when requested
    pub context: Option<PathBuf>,
    /// Number of tables joined
    pub tables: usize,
}

/// Converts input files into LaTeX tables
#[derive(Debug, Clone, Default)]
pub struct TableJob {
    options: JobOptions,
}

impl TableJob {
    /// Create a job
    pub fn new(options: JobOptions) -> Self {
        Self { options }
    }

    /// Job options
    pub fn options(&self) -> &JobOptions {
        &self.options
    }

    /// Convert one input file and write its outputs
    pub fn run<P: AsRef<Path>>(&self, input: P) -> Result<JobOutput> {
        let input = input.as_ref();
        let grid = self.load_grid(input)?;
        let (table, tables) = self.assemble(&grid, &input.display().to_string())?;

        let context = RenderContext::new(&table, &self.options.render);
        let tex = render_context(&context, &self.options.render)?;

        let tex_path = self.output_path(input, "tex");
        fs::write(&tex_path, tex)?;
        tracing::info!("Wrote {}", tex_path.display());

        let context_path = if self.options.emit_context {
            let path = self.output_path(input, "json");
            fs::write(&path, context.to_json().map_err(duke_tables_latex::RenderError::from)?)?;
            tracing::info!("Wrote {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(JobOutput {
            tex: tex_path,
            context: context_path,
            tables,
        })
    }

    /// Read the grid of an input, converting non-text formats first
    pub fn load_grid(&self, input: &Path) -> Result<Grid> {
        if is_text_input(input) {
            return Ok(GridReader::read_file(input, &self.options.read)?);
        }

        let converter = Converter::new(self.options.converter.clone());
        match &self.options.work_dir {
            Some(dir) => {
                let converted = converter.convert(input, dir)?;
                Ok(GridReader::read_file(converted, &self.options.read)?)
            }
            None => {
                let dir = tempfile::tempdir()?;
                let converted = converter.convert(input, dir.path())?;
                Ok(GridReader::read_file(converted, &self.options.read)?)
            }
        }
    }

    /// Build, join and optionally transpose the tables stacked in a grid
    pub fn tables_from_grid(&self, grid: &Grid) -> Result<Table> {
        self.assemble(grid, "grid").map(|(table, _)| table)
    }

    fn assemble(&self, grid: &Grid, source: &str) -> Result<(Table, usize)> {
        let mut tables = Vec::new();
        for (n, segment) in split(grid).iter().enumerate() {
            let table = build(segment, &self.options.ingest)?;
            if table.is_empty() {
                tracing::debug!("Skipping empty table {} in {}", n, source);
                continue;
            }
            tables.push(table);
        }

        if tables.is_empty() {
            return Err(Error::NoTables(source.to_string()));
        }

        tracing::debug!("Joining {} table(s) from {}", tables.len(), source);
        let joined = join(&tables)?;
        let table = if self.options.transpose {
            joined.transpose()
        } else {
            joined
        };

        Ok((table, tables.len()))
    }

    /// `<output_dir>/<stem>.<extension>`
    pub fn output_path(&self, input: &Path, extension: &str) -> PathBuf {
        let dir = match &self.options.output_dir {
            Some(dir) => dir.clone(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "table".to_string());
        dir.join(format!("{}.{}", stem, extension))
    }
}

/// Whether a path is read directly instead of being converted
pub fn is_text_input(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| TEXT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duke_tables_core::{Cell, LabelTuple};
    use pretty_assertions::assert_eq;

    fn stacked_grid() -> Grid {
        Grid::from_strs(vec![
            vec!["model", "L1"],
            vec!["BC", "1"],
            vec!["VG", "2"],
            vec!["", ""],
            vec!["model", "L2"],
            vec!["VG", "4"],
            vec!["BC", "3"],
        ])
    }

    #[test]
    fn test_tables_from_grid_joins_on_first_index() {
        let table = TableJob::default().tables_from_grid(&stacked_grid()).unwrap();

        assert_eq!(table.ncols(), 2);
        assert_eq!(
            table.index().labels(),
            &[LabelTuple::single("BC"), LabelTuple::single("VG")]
        );
        assert_eq!(
            table.get(&LabelTuple::single("BC"), &LabelTuple::single("L2")),
            Some(&Cell::from(3))
        );
    }

    #[test]
    fn test_transpose_option() {
        let job = TableJob::new(JobOptions {
            transpose: true,
            ..Default::default()
        });
        let table = job.tables_from_grid(&stacked_grid()).unwrap();

        assert_eq!(table.nrows(), 2);
        assert_eq!(table.columns().labels()[1], LabelTuple::single("VG"));
    }

    #[test]
    fn test_no_tables() {
        let grid = Grid::from_strs(vec![vec!["only a header", "x"]]);
        let err = TableJob::default().tables_from_grid(&grid).unwrap_err();
        assert!(matches!(err, Error::NoTables(_)));
    }

    #[test]
    fn test_output_path() {
        let job = TableJob::default();
        assert_eq!(
            job.output_path(Path::new("data/eoc.ods"), "tex"),
            PathBuf::from("data/eoc.tex")
        );

        let job = TableJob::new(JobOptions {
            output_dir: Some(PathBuf::from("out")),
            ..Default::default()
        });
        assert_eq!(
            job.output_path(Path::new("data/eoc.ods"), "json"),
            PathBuf::from("out/eoc.json")
        );
    }

    #[test]
    fn test_text_inputs() {
        assert!(is_text_input(Path::new("a.csv")));
        assert!(is_text_input(Path::new("a.TSV")));
        assert!(!is_text_input(Path::new("a.ods")));
        assert!(!is_text_input(Path::new("a")));
    }
}
