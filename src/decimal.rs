//! The `xsd:decimal` datatype.
//!
//! A decimal is kept as its sign plus the integer and fraction digit groups exactly as they
//! were written, so parsing is lossless and no precision limit applies. Zero trimming
//! happens only when the canonical literal is produced.
//!
//! | Literal | Canonical |
//! |---------|-----------|
//! | `0.0` | `0` |
//! | `-0.0` | `0` |
//! | `+007.100` | `7.1` |
//! | `.5` | `0.5` |
//! | `12.` | `12` |
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::{Decimal, XsdType};
//!
//! let value = Decimal::parse("+007.100").unwrap();
//! assert_eq!(value.integer_digits(), "007");
//! assert_eq!(value.fraction_digits(), "100");
//! assert_eq!(value.canonical_literal(), "7.1");
//! ```

use crate::lexical::owned;
use crate::matcher::{self, group};
use crate::{Datatype, Error, Result, XsdType};
use num_bigint::{BigInt, Sign};
use regex::Regex;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

pub(crate) const PATTERN: &str = r"^(?P<sign>[+-])?(?:(?P<integer>[0-9]+)(?:\.(?P<fraction>[0-9]*))?|\.(?P<bare_fraction>[0-9]+))$";

static MATCHER: LazyLock<Regex> = LazyLock::new(|| matcher::compile(PATTERN));

/// Captures of a decimal literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalCaptures<'t> {
    pub sign: Option<&'t str>,
    pub integer: Option<&'t str>,
    pub fraction: Option<&'t str>,
}

/// An exact decimal number.
///
/// Equality, hashing and ordering compare numeric values, so `1.50`, `+1.5` and `01.5`
/// are equal even though their digit groups differ.
#[derive(Clone, Debug)]
pub struct Decimal {
    negative: bool,
    integer: String,
    fraction: String,
}

impl Decimal {
    /// Creates a decimal from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either group contains a non-digit character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::{Decimal, XsdType};
    ///
    /// let value = Decimal::from_parts(true, "3", "140").unwrap();
    /// assert_eq!(value.canonical_literal(), "-3.14");
    /// assert!(Decimal::from_parts(false, "3", "1x").is_err());
    /// ```
    pub fn from_parts(negative: bool, integer: &str, fraction: &str) -> Result<Self> {
        let digits = |text: &str| text.bytes().all(|b| b.is_ascii_digit());
        if !digits(integer) || !digits(fraction) {
            return Err(Error::invalid_argument(
                Datatype::Decimal.name(),
                &format!("{integer}.{fraction}"),
                "digit groups must contain only ASCII digits",
            ));
        }
        Ok(Decimal {
            negative,
            integer: owned(integer)?,
            fraction: owned(fraction)?,
        })
    }

    /// Returns `true` if the literal carried a minus sign.
    ///
    /// This reflects the spelling: `-0.0` is negative here but [`Decimal::is_zero`] too.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the integer digits as written, leading zeros included.
    #[inline]
    #[must_use]
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Returns the fraction digits as written, trailing zeros included.
    #[inline]
    #[must_use]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    /// Returns `true` if the value is zero, whatever its sign.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.significant_integer().is_empty() && self.significant_fraction().is_empty()
    }

    fn significant_integer(&self) -> &str {
        self.integer.trim_start_matches('0')
    }

    fn significant_fraction(&self) -> &str {
        self.fraction.trim_end_matches('0')
    }

    fn is_effectively_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Converts to the nearest `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the magnitude exceeds the `f64` range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::{Decimal, XsdType};
    ///
    /// assert_eq!(Decimal::parse("-2.50").unwrap().to_f64().unwrap(), -2.5);
    /// ```
    pub fn to_f64(&self) -> Result<f64> {
        let canonical = self.to_canonical()?;
        match canonical.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(Error::out_of_range(canonical, "f64")),
        }
    }

    /// Returns the integer part, truncated toward zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::{Decimal, XsdType};
    /// use num_bigint::BigInt;
    ///
    /// assert_eq!(Decimal::parse("-12.9").unwrap().trunc(), BigInt::from(-12));
    /// ```
    #[must_use]
    pub fn trunc(&self) -> BigInt {
        let magnitude = BigInt::parse_bytes(self.significant_integer().as_bytes(), 10)
            .unwrap_or_default();
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant_integer(), other.significant_integer());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| self.significant_fraction().cmp(other.significant_fraction()))
    }
}

impl XsdType for Decimal {
    const DATATYPE: Datatype = Datatype::Decimal;
    type Captures<'t> = DecimalCaptures<'t>;

    fn captures(literal: &str) -> Option<DecimalCaptures<'_>> {
        let captures = MATCHER.captures(literal)?;
        Some(DecimalCaptures {
            sign: group(&captures, "sign"),
            integer: group(&captures, "integer"),
            fraction: group(&captures, "fraction").or_else(|| group(&captures, "bare_fraction")),
        })
    }

    fn from_captures(literal: &str, captures: DecimalCaptures<'_>) -> Result<Self> {
        if captures.integer.is_none() && captures.fraction.is_none() {
            return Err(Error::invalid_argument(
                Datatype::Decimal.name(),
                literal,
                "no digits",
            ));
        }
        Ok(Decimal {
            negative: captures.sign == Some("-"),
            integer: owned(captures.integer.unwrap_or_default())?,
            fraction: owned(captures.fraction.unwrap_or_default())?,
        })
    }

    fn write_canonical(&self, out: &mut String) {
        let integer = self.significant_integer();
        let fraction = self.significant_fraction();
        if self.negative && !(integer.is_empty() && fraction.is_empty()) {
            out.push('-');
        }
        if integer.is_empty() {
            out.push('0');
        } else {
            out.push_str(integer);
        }
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
    }

    fn canonical_len_hint(&self) -> usize {
        self.integer.len() + self.fraction.len() + 2
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_effectively_negative(), other.is_effectively_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_effectively_negative().hash(state);
        self.significant_integer().hash(state);
        self.significant_fraction().hash(state);
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal {
            negative: value < 0,
            integer: value.unsigned_abs().to_string(),
            fraction: String::new(),
        }
    }
}

impl From<&BigInt> for Decimal {
    fn from(value: &BigInt) -> Self {
        Decimal {
            negative: value.sign() == Sign::Minus,
            integer: value.magnitude().to_str_radix(10),
            fraction: String::new(),
        }
    }
}

impl_literal_traits!(Decimal);

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(literal: &str) -> String {
        let mut literal = literal.to_string();
        Decimal::canonicalize(&mut literal).unwrap();
        literal
    }

    #[test]
    fn test_captures() {
        let captures = Decimal::captures("-12.50").unwrap();
        assert_eq!(
            captures,
            DecimalCaptures {
                sign: Some("-"),
                integer: Some("12"),
                fraction: Some("50"),
            }
        );

        let captures = Decimal::captures(".5").unwrap();
        assert_eq!(captures.integer, None);
        assert_eq!(captures.fraction, Some("5"));
    }

    #[test]
    fn test_rejects_malformed() {
        for literal in ["", "+", "-", ".", "+.", "1.2.3", "1e5", " 1", "1 ", "0x1", "١"] {
            assert!(!Decimal::validate(literal), "{literal:?} should be invalid");
        }
    }

    #[test]
    fn test_parse_is_lossless() {
        let value = Decimal::parse("-000.0100").unwrap();
        assert!(value.is_negative());
        assert_eq!(value.integer_digits(), "000");
        assert_eq!(value.fraction_digits(), "0100");
    }

    #[test]
    fn test_canonical_forms() {
        assert_eq!(canonical("0.0"), "0");
        assert_eq!(canonical("-0.0"), "0");
        assert_eq!(canonical("+007.100"), "7.1");
        assert_eq!(canonical(".5"), "0.5");
        assert_eq!(canonical("-.5"), "-0.5");
        assert_eq!(canonical("12."), "12");
        assert_eq!(canonical("-0012.3400"), "-12.34");
        assert_eq!(canonical("100"), "100");
        assert_eq!(
            canonical("123456789012345678901234567890.000000000000000000001"),
            "123456789012345678901234567890.000000000000000000001"
        );
    }

    #[test]
    fn test_canonical_literal_reports_no_rewrite() {
        let mut literal = String::from("-1.5");
        assert_eq!(Decimal::canonicalize(&mut literal), Ok(false));
        assert_eq!(literal, "-1.5");
    }

    #[test]
    fn test_value_equality_and_order() {
        let a = Decimal::parse("1.50").unwrap();
        let b = Decimal::parse("+01.5").unwrap();
        assert_eq!(a, b);
        assert_eq!(Decimal::parse("-0").unwrap(), Decimal::parse("0.000").unwrap());

        let mut values: Vec<Decimal> = ["10", "-2.5", "0", "-10", "2.45", "2.5"]
            .iter()
            .map(|literal| Decimal::parse(literal).unwrap())
            .collect();
        values.sort();
        let sorted: Vec<String> = values.iter().map(Decimal::canonical_literal).collect();
        assert_eq!(sorted, ["-10", "-2.5", "0", "2.45", "2.5", "10"]);
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::HashSet;

        let set: HashSet<Decimal> = ["1.0", "01", "+1.000", "-0", "0"]
            .iter()
            .map(|literal| Decimal::parse(literal).unwrap())
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_numeric_conversions() {
        assert_eq!(Decimal::parse("0.125").unwrap().to_f64().unwrap(), 0.125);
        let huge = format!("1{}", "0".repeat(400));
        let err = Decimal::parse(&huge).unwrap().to_f64().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::OutOfRange);

        assert_eq!(Decimal::parse("0.9").unwrap().trunc(), BigInt::from(0));
        assert_eq!(Decimal::from(-42i64).canonical_literal(), "-42");
        assert_eq!(Decimal::from(&BigInt::from(7)).canonical_literal(), "7");
    }
}
