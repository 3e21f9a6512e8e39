//! External spreadsheet-to-text conversion

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors from the external converter
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Converter {} not found. Install unoconv or pass another converter.", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to start converter: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Converter exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Converter did not write {}", .0.display())]
    MissingOutput(PathBuf),
}

/// Configuration for the external converter
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Converter executable. Default: `unoconv` from PATH.
    pub program: PathBuf,
    /// Target format passed with `-f`. Default: `csv`.
    pub format: String,
    /// Export filter options: tab separator, double quotes, UTF-8, first row.
    pub filter_options: String,
    /// Extra arguments placed before the output and input paths.
    pub extra_args: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("unoconv"),
            format: "csv".to_string(),
            filter_options: "9,34,UNICODE,1".to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Runs the converter, one blocking child process per input
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a converter
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Converter configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Command line for one conversion
    pub fn command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.config.program);
        cmd.arg("-f")
            .arg(&self.config.format)
            .arg("-e")
            .arg(format!("FilterOptions={}", self.config.filter_options));

        for arg in &self.config.extra_args {
            cmd.arg(arg);
        }

        cmd.arg("-o").arg(output).arg(input);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd
    }

    /// Convert `input` into `<out_dir>/<stem>.csv` and return that path
    pub fn convert(&self, input: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError> {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string());
        let output = out_dir.join(format!("{}.csv", stem));

        let mut cmd = self.command(input, &output);
        tracing::info!("Converting {}: {:?}", input.display(), cmd);

        let result = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConvertError::NotFound(self.config.program.clone())
            } else {
                ConvertError::Spawn(e)
            }
        })?;

        if !result.status.success() {
            return Err(ConvertError::Failed {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        if !output.is_file() {
            return Err(ConvertError::MissingOutput(output));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_line() {
        let converter = Converter::default();
        let cmd = converter.command(Path::new("in.ods"), Path::new("/tmp/in.csv"));

        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(cmd.get_program(), "unoconv");
        assert_eq!(
            args,
            vec![
                "-f",
                "csv",
                "-e",
                "FilterOptions=9,34,UNICODE,1",
                "-o",
                "/tmp/in.csv",
                "in.ods"
            ]
        );
    }

    #[test]
    fn test_missing_program() {
        let converter = Converter::new(ConverterConfig {
            program: PathBuf::from("duke-tables-no-such-converter"),
            ..Default::default()
        });
        let dir = tempfile::tempdir().unwrap();

        let err = converter
            .convert(Path::new("table.ods"), dir.path())
            .unwrap_err();
        assert!(matches!(err, ConvertError::NotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit() {
        let converter = Converter::new(ConverterConfig {
            program: PathBuf::from("false"),
            ..Default::default()
        });
        let dir = tempfile::tempdir().unwrap();

        let err = converter
            .convert(Path::new("table.ods"), dir.path())
            .unwrap_err();
        assert!(matches!(err, ConvertError::Failed { .. }));
    }
}
