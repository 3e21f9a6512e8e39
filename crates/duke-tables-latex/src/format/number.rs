//! Numeric cell formatting

use std::cmp::Ordering;

use duke_tables_core::{parse_number, Cell, Number};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a missing cell is shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDisplay {
    /// Literal marker text
    Token(String),
    /// Empty cell
    Hidden,
}

impl Default for MissingDisplay {
    fn default() -> Self {
        MissingDisplay::Token("NaN".to_string())
    }
}

/// Notation chosen for a non-integral number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `digits` decimals (`12.35`)
    Fixed,
    /// One leading digit, `digits` decimals (`1.50e-3`)
    Scientific,
    /// Shortest of fixed and scientific with `digits` significant digits
    General,
}

/// Formatting rules for numeric cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSpec {
    /// Decimals (fixed, scientific) or significant digits (general)
    pub digits: u32,
    /// Render integral values as plain integers
    pub collapse_integers: bool,
    /// Select notation from the magnitude; `false` forces fixed
    pub exponents: bool,
    /// Magnitudes below this use scientific notation
    pub exp_low: Decimal,
    /// Magnitudes at or above this use general notation
    pub exp_high: Decimal,
    /// Missing cell display
    pub missing: MissingDisplay,
    /// Macro wrapped around numeric output (`np` gives `\np{...}`)
    pub wrapper: Option<String>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            digits: 2,
            collapse_integers: true,
            exponents: true,
            exp_low: Decimal::new(25, 2),
            exp_high: Decimal::from(1000),
            missing: MissingDisplay::default(),
            wrapper: Some("np".to_string()),
        }
    }
}

impl FormatSpec {
    /// Create the default format
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the digit count
    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    /// Enable or disable integer collapse
    pub fn with_collapse_integers(mut self, collapse: bool) -> Self {
        self.collapse_integers = collapse;
        self
    }

    /// Enable or disable magnitude based notation
    pub fn with_exponents(mut self, exponents: bool) -> Self {
        self.exponents = exponents;
        self
    }

    /// Set the notation thresholds
    pub fn with_thresholds(mut self, low: Decimal, high: Decimal) -> Self {
        self.exp_low = low;
        self.exp_high = high;
        self
    }

    /// Set the missing cell display
    pub fn with_missing(mut self, missing: MissingDisplay) -> Self {
        self.missing = missing;
        self
    }

    /// Set the numeric wrapper macro, `None` for bare numbers
    pub fn with_wrapper<S: Into<String>>(mut self, wrapper: Option<S>) -> Self {
        self.wrapper = wrapper.map(Into::into);
        self
    }

    /// Notation for a non-integral value
    pub fn notation<N: Into<Number>>(&self, value: N) -> Notation {
        select_notation(value, self)
    }
}

/// Pick the notation from the magnitude of a value
pub fn select_notation<N: Into<Number>>(value: N, spec: &FormatSpec) -> Notation {
    if !spec.exponents {
        return Notation::Fixed;
    }

    let magnitude = Digits::from_number(value.into());
    if magnitude.cmp_magnitude(&Digits::from_decimal(spec.exp_low)) == Ordering::Less {
        Notation::Scientific
    } else if magnitude.cmp_magnitude(&Digits::from_decimal(spec.exp_high)) == Ordering::Less {
        Notation::Fixed
    } else {
        Notation::General
    }
}

/// Format one cell
///
/// Missing cells give the missing marker, text cells their literal text
/// (unescaped), numbers the wrapped numeric text.
pub fn format_number(cell: &Cell, spec: &FormatSpec) -> String {
    match cell {
        Cell::Missing => match &spec.missing {
            MissingDisplay::Token(token) => token.clone(),
            MissingDisplay::Hidden => String::new(),
        },
        Cell::Number(value) => format_decimal(*value, spec),
        Cell::Text(text) => text.to_string(),
    }
}

/// Format a number, including the wrapper macro
pub fn format_decimal<N: Into<Number>>(value: N, spec: &FormatSpec) -> String {
    wrap(format_bare(value, spec), spec)
}

/// Format a number without the wrapper macro
pub fn format_bare<N: Into<Number>>(value: N, spec: &FormatSpec) -> String {
    let value = value.into();
    let digits = Digits::from_number(value);

    if spec.collapse_integers && value.is_integer() {
        return format!("{}{}", sign(value), digits.fixed_text(0));
    }

    match select_notation(value, spec) {
        Notation::Fixed => fixed(value, &digits, spec.digits),
        Notation::Scientific => scientific(value, &digits, spec.digits),
        Notation::General => general(value, &digits, spec.digits),
    }
}

/// Parse text as a number and format it, or return it unchanged
pub fn format_str(text: &str, spec: &FormatSpec) -> String {
    match parse_number(text) {
        Some(value) => format_decimal(value, spec),
        None => text.to_string(),
    }
}

fn wrap(body: String, spec: &FormatSpec) -> String {
    match spec.wrapper.as_deref() {
        Some(name) if !name.is_empty() => format!("\\{}{{{}}}", name, body),
        _ => body,
    }
}

fn fixed(value: Number, digits: &Digits, decimals: u32) -> String {
    let rounded = digits.round_at(-(decimals as i32));
    format!("{}{}", sign(value), rounded.fixed_text(decimals))
}

fn scientific(value: Number, digits: &Digits, decimals: u32) -> String {
    let rounded = digits.round_to(decimals as usize + 1);
    format!(
        "{}{}e{}",
        sign(value),
        rounded.mantissa_text(),
        exponent_text(rounded.exp)
    )
}

fn general(value: Number, digits: &Digits, significant: u32) -> String {
    let precision = significant.max(1) as usize;
    let rounded = digits.round_to(precision).trim_trailing_zeros();

    if (-4..precision as i32).contains(&rounded.exp) {
        format!("{}{}", sign(value), rounded.point_text())
    } else {
        format!(
            "{}{}e{}",
            sign(value),
            rounded.mantissa_text(),
            exponent_text(rounded.exp)
        )
    }
}

fn sign(value: Number) -> &'static str {
    if value.is_sign_negative() {
        "-"
    } else {
        ""
    }
}

/// Exponent with its sign and without leading zeros
fn exponent_text(exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}{}", sign, exp.unsigned_abs())
}

/// Decimal digits of a magnitude: `d0.d1d2... * 10^exp`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits {
    digits: Vec<u8>,
    exp: i32,
}

impl Digits {
    fn from_number(value: Number) -> Self {
        let (mantissa, power) = value.significand();
        if mantissa == 0 {
            return Self {
                digits: vec![0],
                exp: 0,
            };
        }

        let text = mantissa.to_string();
        Self {
            digits: text.bytes().map(|b| b - b'0').collect(),
            exp: text.len() as i32 - 1 + power,
        }
    }

    fn from_decimal(value: Decimal) -> Self {
        Self::from_number(Number::from(value))
    }

    fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Compare magnitudes
    fn cmp_magnitude(&self, other: &Digits) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.exp.cmp(&other.exp).then_with(|| {
                let len = self.digits.len().max(other.digits.len());
                self.padded(len).cmp(other.padded(len))
            }),
        }
    }

    fn padded(&self, len: usize) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().copied().chain(std::iter::repeat(0)).take(len)
    }

    /// Round half-even to `keep` significant digits, padding with zeros
    fn round_to(&self, keep: usize) -> Self {
        let keep = keep.max(1);
        let mut digits = self.digits.clone();
        let mut exp = self.exp;

        if digits.len() <= keep {
            digits.resize(keep, 0);
            return Self { digits, exp };
        }

        let tail = digits.split_off(keep);
        let rest_nonzero = tail[1..].iter().any(|&d| d != 0);
        let last_odd = digits.last().map_or(false, |d| d % 2 == 1);
        let round_up = tail[0] > 5 || (tail[0] == 5 && (rest_nonzero || last_odd));

        if round_up {
            let mut carry = true;
            for d in digits.iter_mut().rev() {
                if *d == 9 {
                    *d = 0;
                } else {
                    *d += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                digits.insert(0, 1);
                digits.pop();
                exp += 1;
            }
        }

        Self { digits, exp }
    }

    /// Round half-even at the `10^min_exp` place
    fn round_at(&self, min_exp: i32) -> Self {
        let keep = i64::from(self.exp) - i64::from(min_exp) + 1;
        if keep > 0 {
            return self.round_to(keep as usize);
        }

        // Everything lies below the rounding place: zero, or one unit when
        // the value exceeds half of it
        let above_half = keep == 0
            && (self.digits[0] > 5
                || (self.digits[0] == 5 && self.digits[1..].iter().any(|&d| d != 0)));
        Self {
            digits: vec![u8::from(above_half)],
            exp: min_exp,
        }
    }

    fn trim_trailing_zeros(mut self) -> Self {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        self
    }

    /// `d.ddd`
    fn mantissa_text(&self) -> String {
        let mut out = String::with_capacity(self.digits.len() + 1);
        for (i, d) in self.digits.iter().enumerate() {
            if i == 1 {
                out.push('.');
            }
            out.push(char::from(b'0' + d));
        }
        out
    }

    /// Positional text with the decimal point placed by the exponent
    fn point_text(&self) -> String {
        let text: String = self.digits.iter().map(|d| char::from(b'0' + d)).collect();

        if self.exp < 0 {
            let zeros = "0".repeat(self.exp.unsigned_abs() as usize - 1);
            return format!("0.{}{}", zeros, text);
        }

        let int_len = self.exp as usize + 1;
        if text.len() <= int_len {
            format!("{}{}", text, "0".repeat(int_len - text.len()))
        } else {
            format!("{}.{}", &text[..int_len], &text[int_len..])
        }
    }

    /// Positional text with exactly `decimals` digits after the point
    fn fixed_text(&self, decimals: u32) -> String {
        let low = -(decimals as i32);
        let high = self.exp.max(0);

        let mut out = String::new();
        for pos in (low..=high).rev() {
            if pos == -1 {
                out.push('.');
            }
            let digit = usize::try_from(i64::from(self.exp) - i64::from(pos))
                .ok()
                .and_then(|i| self.digits.get(i))
                .copied()
                .unwrap_or(0);
            out.push(char::from(b'0' + digit));
        }
        out
    }
}
