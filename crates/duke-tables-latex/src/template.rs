//! Document templates wrapped around the rendered table

use std::fs;
use std::path::Path;

use crate::error::{RenderError, RenderResult};

/// Placeholder replaced by the rendered table
pub const PLACEHOLDER: &str = "{{table}}";

const TABULAR: &str = "{{table}}\n";

const TABLE: &str = "\\begin{table}\n\\centering\n{{table}}\n\\end{table}\n";

/// A template: text with one or more `{{table}}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    text: String,
}

impl Template {
    /// Create a template from text
    pub fn new<N: Into<String>, T: Into<String>>(name: N, text: T) -> RenderResult<Self> {
        let name = name.into();
        let text = text.into();
        if !text.contains(PLACEHOLDER) {
            return Err(RenderError::MissingPlaceholder(name));
        }
        Ok(Self { name, text })
    }

    /// Built-in template by name (`tabular` or `table`)
    pub fn builtin(name: &str) -> Option<Self> {
        let text = match name {
            "tabular" => TABULAR,
            "table" => TABLE,
            _ => return None,
        };
        Some(Self {
            name: name.to_string(),
            text: text.to_string(),
        })
    }

    /// Find a template
    ///
    /// `name` is tried as a file path, then as `name` and `name.tex` in each
    /// search directory, then as a built-in template.
    pub fn resolve<P: AsRef<Path>>(name: &str, search_path: &[P]) -> RenderResult<Self> {
        let direct = Path::new(name);
        if direct.is_file() {
            return Self::read(direct);
        }

        let mut searched = Vec::new();
        for dir in search_path {
            for candidate in [name.to_string(), format!("{}.tex", name)] {
                let path = dir.as_ref().join(candidate);
                if path.is_file() {
                    return Self::read(&path);
                }
                searched.push(path);
            }
        }

        Self::builtin(name).ok_or_else(|| RenderError::TemplateNotFound {
            name: name.to_string(),
            searched,
        })
    }

    fn read(path: &Path) -> RenderResult<Self> {
        tracing::debug!("Loading template {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::new(path.display().to_string(), text)
    }

    /// Template name (the file path for file templates)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Substitute the rendered table
    pub fn apply(&self, table: &str) -> String {
        self.text.replace(PLACEHOLDER, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::PathBuf;

    const NO_DIRS: &[PathBuf] = &[];

    #[test]
    fn test_builtin_templates() {
        let bare = Template::resolve("tabular", NO_DIRS).unwrap();
        assert_eq!(bare.apply("T"), "T\n");

        let float = Template::resolve("table", NO_DIRS).unwrap();
        assert_eq!(
            float.apply("T"),
            "\\begin{table}\n\\centering\nT\n\\end{table}\n"
        );
    }

    #[test]
    fn test_search_directory_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("eoc.tex"), "% eoc\n{{table}}\n").unwrap();

        let template = Template::resolve("eoc", &[dir.path()]).unwrap();
        assert_eq!(template.apply("T"), "% eoc\nT\n");
    }

    #[test]
    fn test_direct_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "before {{{{table}}}} after").unwrap();

        let name = file.path().to_string_lossy().into_owned();
        let template = Template::resolve(&name, NO_DIRS).unwrap();
        assert_eq!(template.apply("T"), "before T after");
    }

    #[test]
    fn test_not_found_lists_searched_paths() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::resolve("missing", &[dir.path()]).unwrap_err();

        match err {
            RenderError::TemplateNotFound { name, searched } => {
                assert_eq!(name, "missing");
                assert_eq!(
                    searched,
                    vec![dir.path().join("missing"), dir.path().join("missing.tex")]
                );
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_placeholder() {
        assert!(matches!(
            Template::new("bad", "no table here"),
            Err(RenderError::MissingPlaceholder(name)) if name == "bad"
        ));
    }
}
