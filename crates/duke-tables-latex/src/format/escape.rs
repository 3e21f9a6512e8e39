//! LaTeX escaping of free text

use once_cell::sync::Lazy;
use regex::Regex;

/// Substitutions applied in order, each to the output of the previous one.
/// The backslash rule runs first so the backslashes added later survive.
static SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\\", r"\textbackslash"),
        (r"([{}_#%&$])", r"\${1}"),
        (r"~", r"\~{}"),
        (r"\^", r"\^{}"),
        (r#"""#, "''"),
        (r"\.\.\.+", r"\ldots"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("escape pattern is valid"),
            replacement,
        )
    })
    .collect()
});

/// Escape text for use inside a LaTeX document
pub fn escape_text(value: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(value.to_string(), |text, (pattern, replacement)| {
            pattern.replace_all(&text, *replacement).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_special_characters_escaped_once() {
        assert_eq!(
            escape_text("a_b%c&d$e{f}g#h"),
            r"a\_b\%c\&d\$e\{f\}g\#h"
        );
    }

    #[test]
    fn test_backslash_not_reescaped() {
        assert_eq!(escape_text(r"a\b"), r"a\textbackslashb");
        assert_eq!(escape_text(r"\_"), r"\textbackslash\_");
    }

    #[test]
    fn test_spacing_forms() {
        assert_eq!(escape_text("~x^2"), r"\~{}x\^{}2");
    }

    #[test]
    fn test_quotes_and_ellipsis() {
        assert_eq!(escape_text(r#"say "hi"...."#), "say ''hi''\\ldots");
        assert_eq!(escape_text("a..b"), "a..b");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_text("Sample 1 (mg/l)"), "Sample 1 (mg/l)");
        assert_eq!(escape_text(""), "");
    }
}
