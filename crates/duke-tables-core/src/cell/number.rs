//! Numeric cell values of any magnitude

use std::fmt;

use rust_decimal::Decimal;

/// Significant digits kept in a coefficient; longer inputs are rounded
pub const MAX_DIGITS: usize = 28;

/// Largest scale a [`Decimal`] carries
const MAX_SCALE: i32 = 28;

/// A decimal number `coefficient * 10^exponent`
///
/// Values a [`Decimal`] can hold are stored with `exponent == 0`, keeping the
/// digits (and trailing zeros) read from the source. Values beyond its range
/// (`1e-30`, `3e29`) keep an integral coefficient without trailing zeros and
/// a non-zero exponent, so every value has exactly one representation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Number {
    coefficient: Decimal,
    exponent: i32,
}

impl Number {
    /// Coefficient; the whole value when [`Number::exponent`] is zero
    pub fn coefficient(&self) -> Decimal {
        self.coefficient
    }

    /// Power of ten applied to the coefficient
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The value as a [`Decimal`], if it fits one
    pub fn to_decimal(&self) -> Option<Decimal> {
        (self.exponent == 0).then_some(self.coefficient)
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Check if the value is below zero
    pub fn is_sign_negative(&self) -> bool {
        self.coefficient.is_sign_negative() && !self.is_zero()
    }

    /// Check if the value has no fractional part
    pub fn is_integer(&self) -> bool {
        match self.exponent {
            0 => self.coefficient.fract().is_zero(),
            e => e > 0,
        }
    }

    /// Unsigned digits and power of ten: `|self| == digits * 10^power`
    pub fn significand(&self) -> (u128, i32) {
        (
            self.coefficient.mantissa().unsigned_abs(),
            self.exponent - self.coefficient.scale() as i32,
        )
    }

    /// Build a number from decimal digits and the power of ten of the last one
    fn from_digits(negative: bool, digits: &[u8], mut exp: i32) -> Option<Self> {
        let Some(first) = digits.iter().position(|&d| d != 0) else {
            let scale = exp.clamp(-MAX_SCALE, 0).unsigned_abs();
            return Some(Number::from(Decimal::new(0, scale)));
        };

        let mut sig = digits[first..].to_vec();
        if sig.len() > MAX_DIGITS {
            let tail = sig.split_off(MAX_DIGITS);
            exp = exp.checked_add(i32::try_from(tail.len()).ok()?)?;
            if round_up(&sig, &tail) && increment(&mut sig) {
                sig.pop();
                exp = exp.checked_add(1)?;
            }
        }

        while exp < -MAX_SCALE && sig.last() == Some(&0) {
            sig.pop();
            exp += 1;
        }

        if (-MAX_SCALE..=0).contains(&exp) {
            let plain = Decimal::try_from_i128_with_scale(signed(negative, &sig), exp.unsigned_abs())
                .ok()?;
            return Some(Number::from(plain));
        }

        if exp > 0 {
            let integral = Decimal::try_from_i128_with_scale(signed(negative, &sig), 0).ok()?;
            let scaled = (0..exp).try_fold(integral, |acc, _| acc.checked_mul(Decimal::TEN));
            if let Some(plain) = scaled {
                return Some(Number::from(plain));
            }
        }

        let zeros = sig.iter().rev().take_while(|&&d| d == 0).count();
        sig.truncate(sig.len() - zeros);
        Some(Number {
            coefficient: Decimal::try_from_i128_with_scale(signed(negative, &sig), 0).ok()?,
            exponent: exp.checked_add(i32::try_from(zeros).ok()?)?,
        })
    }
}

/// Signed integer value of at most [`MAX_DIGITS`] digits
fn signed(negative: bool, digits: &[u8]) -> i128 {
    let magnitude = digits.iter().fold(0i128, |acc, &d| acc * 10 + i128::from(d));
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Half-even decision for dropping `tail` after `kept`
fn round_up(kept: &[u8], tail: &[u8]) -> bool {
    let rest_nonzero = tail[1..].iter().any(|&d| d != 0);
    let last_odd = kept.last().map_or(false, |d| d % 2 == 1);
    tail[0] > 5 || (tail[0] == 5 && (rest_nonzero || last_odd))
}

/// Add one unit in the last place; returns true when a new digit was prepended
fn increment(digits: &mut Vec<u8>) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    digits.insert(0, 1);
    true
}

impl From<Decimal> for Number {
    fn from(coefficient: Decimal) -> Self {
        Self {
            coefficient,
            exponent: 0,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::from(Decimal::from(n))
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::from(Decimal::from(n))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exponent {
            0 => write!(f, "{}", self.coefficient),
            e => write!(f, "{}e{}", self.coefficient, e),
        }
    }
}

/// Parse a field as a number
///
/// Accepts plain (`-12.50`, `.5`) and scientific (`1.5e-3`, `2E+4`)
/// notation of any magnitude, surrounding whitespace is ignored. Anything
/// else, including `inf` and `nan`, is not a number. Coefficients longer
/// than [`MAX_DIGITS`] significant digits are rounded half-even.
pub fn parse_number(field: &str) -> Option<Number> {
    let field = field.trim();
    let (mantissa, exponent) = match field.find(['e', 'E']) {
        Some(at) => (&field[..at], field[at + 1..].parse::<i32>().ok()?),
        None => (field, 0),
    };

    let (negative, unsigned) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes())
        .map(|b| b - b'0')
        .collect();
    let scale = i32::try_from(frac_part.len()).ok()?;
    Number::from_digits(negative, &digits, exponent.checked_sub(scale)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Number {
        parse_number(s).unwrap()
    }

    #[test]
    fn test_parse_plain_and_scientific() {
        assert_eq!(num("42"), Number::from(42));
        assert_eq!(num(" -1.50 ").to_decimal(), Some(Decimal::new(-150, 2)));
        assert_eq!(num("1.5e-3").to_decimal(), Some(Decimal::new(15, 4)));
        assert_eq!(num("2E+2").to_decimal(), Some(Decimal::from(200)));
        assert_eq!(num(".5").to_decimal(), Some(Decimal::new(5, 1)));
    }

    #[test]
    fn test_parse_rejects_text() {
        for field in ["", "   ", "abc", "nan", "inf", "e", "1e", "e5", ".", "-", "1.2.3", "1e2.5"] {
            assert_eq!(parse_number(field), None, "{:?}", field);
        }
    }

    #[test]
    fn test_parse_keeps_trailing_zeros() {
        let d = num("1.500").to_decimal().unwrap();
        assert_eq!(d.scale(), 3);
        assert_eq!(d.to_string(), "1.500");
    }

    #[test]
    fn test_parse_beyond_decimal_range() {
        let tiny = num("1e-30");
        assert_eq!((tiny.coefficient(), tiny.exponent()), (Decimal::ONE, -30));
        assert_eq!(tiny.to_decimal(), None);
        assert!(!tiny.is_integer());

        let huge = num("3e29");
        assert_eq!((huge.coefficient(), huge.exponent()), (Decimal::from(3), 29));
        assert!(huge.is_integer());

        assert_eq!(num("1.5e-29"), num("15e-30"));
        assert_eq!(num("-2.50e-40").to_string(), "-25e-41");
        assert!(num("-2.5e-40").is_sign_negative());
    }

    #[test]
    fn test_parse_normalizes_representable_values() {
        assert_eq!(num("1.0e-28").to_decimal(), Some(Decimal::new(1, 28)));
        assert_eq!(num("1e28").to_decimal(), Some(Decimal::from_i128_with_scale(10i128.pow(28), 0)));
        assert_eq!(num("0e-50").to_decimal(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_parse_rounds_long_coefficients() {
        let n = num("1234567890123456789012345678951");
        assert_eq!(n.exponent(), 3);
        assert_eq!(n.coefficient().to_string(), "1234567890123456789012345679");

        let carried = num("99999999999999999999999999999999");
        assert_eq!((carried.coefficient(), carried.exponent()), (Decimal::ONE, 32));
    }

    #[test]
    fn test_significand() {
        assert_eq!(num("1.50").significand(), (150, -2));
        assert_eq!(num("1e-30").significand(), (1, -30));
        assert_eq!(num("-7e40").significand(), (7, 40));
    }
}
