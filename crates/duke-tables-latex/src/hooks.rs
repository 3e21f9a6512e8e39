//! Named formatting callbacks for template engines

use crate::error::{RenderError, RenderResult};
use crate::format::{
    escape_text, format_str, multicolumn, multirow, vertical_text, FormatSpec, HeaderFormatter,
};

/// Hook names accepted by [`Hooks::apply`]
pub const HOOK_NAMES: &[&str] = &[
    "escape_tex",
    "np",
    "multirow",
    "multicolumn",
    "vertical_text",
    "header_fmt",
];

/// The formatting callbacks a renderer invokes per cell
#[derive(Debug, Clone, Default)]
pub struct Hooks {
    format: FormatSpec,
    headers: HeaderFormatter,
}

impl Hooks {
    /// Create hooks using a number format and header overrides
    pub fn new(format: FormatSpec, headers: HeaderFormatter) -> Self {
        Self { format, headers }
    }

    /// Escape free text
    pub fn escape_tex(&self, value: &str) -> String {
        escape_text(value)
    }

    /// Format numeric text, optionally with a different digit count
    pub fn np(&self, value: &str, digits: Option<u32>) -> String {
        match digits {
            Some(digits) => format_str(value, &self.format.clone().with_digits(digits)),
            None => format_str(value, &self.format),
        }
    }

    /// Merge across rows
    pub fn multirow(&self, value: &str, span: usize) -> String {
        multirow(value, span)
    }

    /// Merge across columns
    pub fn multicolumn(&self, value: &str, span: usize) -> String {
        multicolumn(value, span)
    }

    /// Rotate text
    pub fn vertical_text(&self, value: &str) -> String {
        vertical_text(value)
    }

    /// Header label markup
    pub fn header_fmt(&self, value: &str) -> String {
        self.headers.format(value)
    }

    /// Invoke a hook by name
    ///
    /// `multirow` and `multicolumn` take the span as their first argument;
    /// `np` takes an optional digit count.
    pub fn apply(&self, name: &str, value: &str, args: &[&str]) -> RenderResult<String> {
        match name {
            "escape_tex" => Ok(self.escape_tex(value)),
            "np" => {
                let digits = args
                    .first()
                    .map(|arg| parse_arg::<u32>(name, arg))
                    .transpose()?;
                Ok(self.np(value, digits))
            }
            "multirow" => Ok(self.multirow(value, span_arg(name, args)?)),
            "multicolumn" => Ok(self.multicolumn(value, span_arg(name, args)?)),
            "vertical_text" => Ok(self.vertical_text(value)),
            "header_fmt" => Ok(self.header_fmt(value)),
            _ => Err(RenderError::UnknownHook(name.to_string())),
        }
    }
}

fn span_arg(hook: &str, args: &[&str]) -> RenderResult<usize> {
    let arg = args.first().ok_or_else(|| RenderError::InvalidArgument {
        hook: hook.to_string(),
        message: "missing span".to_string(),
    })?;
    parse_arg(hook, arg)
}

fn parse_arg<T: std::str::FromStr>(hook: &str, arg: &str) -> RenderResult<T> {
    arg.trim()
        .parse()
        .map_err(|_| RenderError::InvalidArgument {
            hook: hook.to_string(),
            message: format!("expected a non-negative integer, got {:?}", arg),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_dispatches_by_name() {
        let hooks = Hooks::default();

        assert_eq!(hooks.apply("escape_tex", "a_b", &[]).unwrap(), r"a\_b");
        assert_eq!(hooks.apply("np", "0.5", &[]).unwrap(), r"\np{0.50}");
        assert_eq!(hooks.apply("np", "0.5", &["3"]).unwrap(), r"\np{0.500}");
        assert_eq!(
            hooks.apply("multirow", "BC", &["2"]).unwrap(),
            r"\multirow{2}{*}{BC}"
        );
        assert_eq!(hooks.apply("header_fmt", "h", &[]).unwrap(), "$ h $");
    }

    #[test]
    fn test_every_listed_hook_is_known() {
        let hooks = Hooks::default();
        for name in HOOK_NAMES {
            assert!(hooks.apply(name, "1", &["1"]).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_unknown_hook() {
        let err = Hooks::default().apply("bold", "x", &[]).unwrap_err();
        assert!(matches!(err, RenderError::UnknownHook(name) if name == "bold"));
    }

    #[test]
    fn test_invalid_span() {
        let hooks = Hooks::default();
        assert!(matches!(
            hooks.apply("multicolumn", "x", &[]),
            Err(RenderError::InvalidArgument { .. })
        ));
        assert!(matches!(
            hooks.apply("multirow", "x", &["two"]),
            Err(RenderError::InvalidArgument { .. })
        ));
    }
}
