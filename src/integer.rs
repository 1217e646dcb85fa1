//! The `xsd:integer` datatype.
//!
//! Integers are unbounded ([`BigInt`]). Callers that need a native value within a range
//! use [`Integer::parse_bounded`], which fails instead of saturating.
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::{ErrorKind, Integer, XsdType};
//!
//! assert_eq!(Integer::parse("+0042").unwrap().canonical_literal(), "42");
//! assert_eq!(Integer::parse_bounded("255", 0, 255).unwrap(), 255);
//! assert_eq!(
//!     Integer::parse_bounded("256", 0, 255).unwrap_err().kind(),
//!     ErrorKind::OutOfRange
//! );
//! ```

use crate::matcher::{self, group};
use crate::{Datatype, Error, Result, XsdType};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const PATTERN: &str = r"^(?P<sign>[+-])?(?P<digits>[0-9]+)$";

static MATCHER: LazyLock<Regex> = LazyLock::new(|| matcher::compile(PATTERN));

/// Captures of an integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegerCaptures<'t> {
    pub sign: Option<&'t str>,
    pub digits: &'t str,
}

/// An arbitrary-precision integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Integer(BigInt);

impl Integer {
    /// Parses `literal` and converts it to an `i64` within `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an invalid literal and [`Error::OutOfRange`]
    /// for a valid literal outside the range.
    pub fn parse_bounded(literal: &str, min: i64, max: i64) -> Result<i64> {
        let value = Self::parse(literal)?;
        match value.0.to_i64() {
            Some(native) if (min..=max).contains(&native) => Ok(native),
            _ => Err(Error::out_of_range(&value.0, format!("[{min}, {max}]"))),
        }
    }

    /// Converts to an `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the value does not fit.
    pub fn to_i64(&self) -> Result<i64> {
        self.0
            .to_i64()
            .ok_or_else(|| Error::out_of_range(&self.0, "i64"))
    }

    /// Returns the underlying big integer.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

impl XsdType for Integer {
    const DATATYPE: Datatype = Datatype::Integer;
    type Captures<'t> = IntegerCaptures<'t>;

    fn captures(literal: &str) -> Option<IntegerCaptures<'_>> {
        let captures = MATCHER.captures(literal)?;
        Some(IntegerCaptures {
            sign: group(&captures, "sign"),
            digits: group(&captures, "digits")?,
        })
    }

    fn from_captures(literal: &str, captures: IntegerCaptures<'_>) -> Result<Self> {
        let magnitude = BigInt::parse_bytes(captures.digits.as_bytes(), 10)
            .ok_or_else(|| Error::no_match(Datatype::Integer.name(), literal))?;
        Ok(Integer(if captures.sign == Some("-") {
            -magnitude
        } else {
            magnitude
        }))
    }

    fn write_canonical(&self, out: &mut String) {
        out.push_str(&self.0.to_str_radix(10));
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer(BigInt::from(value))
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Integer(value)
    }
}

impl_literal_traits!(Integer);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_canonical_forms() {
        for (literal, canonical) in [
            ("0", "0"),
            ("-0", "0"),
            ("+0", "0"),
            ("007", "7"),
            ("-007", "-7"),
            ("123456789012345678901234567890", "123456789012345678901234567890"),
        ] {
            assert_eq!(Integer::parse(literal).unwrap().canonical_literal(), canonical);
        }
    }

    #[test]
    fn test_rejects_malformed() {
        for literal in ["", "+", "1.0", "1e3", " 1", "one", "--1"] {
            assert!(!Integer::validate(literal), "{literal:?} should be invalid");
        }
    }

    #[test]
    fn test_bounded_parse() {
        assert_eq!(Integer::parse_bounded("255", 0, 255), Ok(255));
        assert_eq!(Integer::parse_bounded("0", 0, 255), Ok(0));
        assert_eq!(
            Integer::parse_bounded("256", 0, 255).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            Integer::parse_bounded("-1", 0, 255).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            Integer::parse_bounded("99999999999999999999", i64::MIN, i64::MAX)
                .unwrap_err()
                .kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            Integer::parse_bounded("x", 0, 255).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_ordering_is_numeric() {
        let small = Integer::parse("-10").unwrap();
        let large = Integer::parse("9").unwrap();
        assert!(small < large);
        assert_eq!(Integer::parse("+09").unwrap(), Integer::from(9i64));
    }
}
