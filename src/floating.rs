//! The `xsd:double` and `xsd:float` datatypes.
//!
//! Both datatypes share one lexical grammar and one model, [`Floating`], which keeps the
//! special values out of the native floating-point representation: a
//! [`Floating::Finite`] never holds a NaN or an infinity.
//!
//! ## Canonical Form
//!
//! | Value | Canonical |
//! |-------|-----------|
//! | NaN | `NaN` |
//! | +∞ | `INF` |
//! | −∞ | `-INF` |
//! | ±0 | `0.0E0` |
//! | finite, non-zero | `[-]D.FE[-]X`, one non-zero digit before the point |
//!
//! The digits are the shortest ones that read back as the same native value, so literals
//! denoting the same value canonicalize identically.
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::{Double, Float, XsdType};
//!
//! assert_eq!(Double::parse("1500").unwrap().canonical_literal(), "1.5E3");
//! assert_eq!(Double::parse("-0.0").unwrap().canonical_literal(), "0.0E0");
//! assert_eq!(Float::parse("+INF").unwrap(), Float::PositiveInfinity);
//! ```

use crate::lexical::owned;
use crate::matcher::{self, group};
use crate::{Datatype, Error, Result, XsdType};
use num_traits::Float as NativeFloat;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub(crate) const PATTERN: &str = r"^(?:(?P<infinity_sign>[+-])?(?P<infinity>INF)|(?P<nan>NaN)|(?P<sign>[+-])?(?:(?P<integer>[0-9]+)(?:\.(?P<fraction>[0-9]*))?|\.(?P<bare_fraction>[0-9]+))(?:[eE](?P<exponent_sign>[+-])?(?P<exponent>[0-9]+))?)$";

static MATCHER: LazyLock<Regex> = LazyLock::new(|| matcher::compile(PATTERN));

/// Native floating-point types backing a floating datatype.
pub trait Native: NativeFloat + FromStr + fmt::LowerExp + fmt::Debug + Send + Sync + 'static {
    /// The datatype this native type backs.
    const DATATYPE: Datatype;
}

impl Native for f64 {
    const DATATYPE: Datatype = Datatype::Double;
}

impl Native for f32 {
    const DATATYPE: Datatype = Datatype::Float;
}

/// Special value named by a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Special {
    Infinity,
    NotANumber,
}

/// Captures of a floating-point literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatingCaptures<'t> {
    pub mantissa_sign: Option<&'t str>,
    pub mantissa_integer: Option<&'t str>,
    pub mantissa_fraction: Option<&'t str>,
    pub exponent_sign: Option<&'t str>,
    pub exponent: Option<&'t str>,
    pub special: Option<Special>,
}

/// A floating-point value with the special values as explicit tags.
///
/// Equality is tag equality for the special values (`NotANumber == NotANumber`) and IEEE
/// equality for finite values (`-0.0 == 0.0`).
#[derive(Clone, Copy, Debug)]
pub enum Floating<F> {
    Finite(F),
    PositiveInfinity,
    NegativeInfinity,
    NotANumber,
}

/// An `xsd:double` value.
pub type Double = Floating<f64>;

/// An `xsd:float` value.
pub type Float = Floating<f32>;

impl<F: Native> Floating<F> {
    /// Wraps a native value, mapping NaN and the infinities onto their tags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::Double;
    ///
    /// assert_eq!(Double::from_native(f64::NAN), Double::NotANumber);
    /// assert_eq!(Double::from_native(-f64::INFINITY), Double::NegativeInfinity);
    /// assert_eq!(Double::from_native(2.5), Double::Finite(2.5));
    /// ```
    #[must_use]
    pub fn from_native(value: F) -> Self {
        if value.is_nan() {
            Floating::NotANumber
        } else if value.is_infinite() {
            if value.is_sign_negative() {
                Floating::NegativeInfinity
            } else {
                Floating::PositiveInfinity
            }
        } else {
            Floating::Finite(value)
        }
    }

    /// Returns the native representation of this value.
    #[must_use]
    pub fn to_native(self) -> F {
        match self {
            Floating::Finite(value) => value,
            Floating::PositiveInfinity => F::infinity(),
            Floating::NegativeInfinity => F::neg_infinity(),
            Floating::NotANumber => F::nan(),
        }
    }

    /// Moves a `Finite` holding NaN or an infinity onto its tag.
    fn normalized(self) -> Self {
        match self {
            Floating::Finite(value) => Self::from_native(value),
            special => special,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self.normalized(), Floating::Finite(_))
    }

    #[inline]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self.normalized(), Floating::NotANumber)
    }

    #[inline]
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(
            self.normalized(),
            Floating::PositiveInfinity | Floating::NegativeInfinity
        )
    }

    /// Returns `true` for positive and negative zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Floating::Finite(value) if value.is_zero())
    }
}

impl Floating<f64> {
    /// Narrows to `xsd:float`.
    ///
    /// Precision may be lost; magnitude may not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if a finite value exceeds the `f32` range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::{Double, Float};
    ///
    /// assert_eq!(Double::Finite(0.5).to_float().unwrap(), Float::Finite(0.5));
    /// assert!(Double::Finite(1e300).to_float().is_err());
    /// ```
    pub fn to_float(self) -> Result<Float> {
        match self.normalized() {
            Floating::Finite(value) => {
                let narrowed = value as f32;
                if narrowed.is_infinite() {
                    Err(Error::out_of_range(value, "f32"))
                } else {
                    Ok(Floating::Finite(narrowed))
                }
            }
            Floating::PositiveInfinity => Ok(Floating::PositiveInfinity),
            Floating::NegativeInfinity => Ok(Floating::NegativeInfinity),
            Floating::NotANumber => Ok(Floating::NotANumber),
        }
    }
}

impl From<Float> for Double {
    fn from(value: Float) -> Self {
        match value.normalized() {
            Floating::Finite(value) => Floating::Finite(f64::from(value)),
            Floating::PositiveInfinity => Floating::PositiveInfinity,
            Floating::NegativeInfinity => Floating::NegativeInfinity,
            Floating::NotANumber => Floating::NotANumber,
        }
    }
}

impl<F: Native> PartialEq for Floating<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self.normalized(), other.normalized()) {
            (Floating::Finite(a), Floating::Finite(b)) => a == b,
            (Floating::PositiveInfinity, Floating::PositiveInfinity)
            | (Floating::NegativeInfinity, Floating::NegativeInfinity)
            | (Floating::NotANumber, Floating::NotANumber) => true,
            _ => false,
        }
    }
}

impl<F: Native> XsdType for Floating<F> {
    const DATATYPE: Datatype = F::DATATYPE;
    type Captures<'t> = FloatingCaptures<'t>;

    fn captures(literal: &str) -> Option<FloatingCaptures<'_>> {
        let captures = MATCHER.captures(literal)?;
        let special = if captures.name("infinity").is_some() {
            Some(Special::Infinity)
        } else if captures.name("nan").is_some() {
            Some(Special::NotANumber)
        } else {
            None
        };
        Some(FloatingCaptures {
            mantissa_sign: group(&captures, "sign").or_else(|| group(&captures, "infinity_sign")),
            mantissa_integer: group(&captures, "integer"),
            mantissa_fraction: group(&captures, "fraction")
                .or_else(|| group(&captures, "bare_fraction")),
            exponent_sign: group(&captures, "exponent_sign"),
            exponent: group(&captures, "exponent"),
            special,
        })
    }

    fn from_captures(literal: &str, captures: FloatingCaptures<'_>) -> Result<Self> {
        let negative = captures.mantissa_sign == Some("-");
        match captures.special {
            Some(Special::NotANumber) => return Ok(Floating::NotANumber),
            Some(Special::Infinity) if negative => return Ok(Floating::NegativeInfinity),
            Some(Special::Infinity) => return Ok(Floating::PositiveInfinity),
            None => {}
        }

        let mut scientific = owned(if negative { "-" } else { "" })?;
        scientific.try_reserve(literal.len() + 2)?;
        scientific.push_str(captures.mantissa_integer.unwrap_or("0"));
        if let Some(fraction) = captures.mantissa_fraction {
            scientific.push('.');
            scientific.push_str(fraction);
        }
        if let Some(exponent) = captures.exponent {
            scientific.push('e');
            if captures.exponent_sign == Some("-") {
                scientific.push('-');
            }
            scientific.push_str(exponent);
        }

        scientific.parse::<F>().map(Self::from_native).map_err(|_| {
            Error::invalid_argument(
                F::DATATYPE.name(),
                literal,
                "not convertible to a floating-point value",
            )
        })
    }

    fn write_canonical(&self, out: &mut String) {
        match self.normalized() {
            Floating::NotANumber => out.push_str("NaN"),
            Floating::PositiveInfinity => out.push_str("INF"),
            Floating::NegativeInfinity => out.push_str("-INF"),
            Floating::Finite(value) if value.is_zero() => out.push_str("0.0E0"),
            Floating::Finite(value) => {
                // LowerExp yields the shortest round-tripping digits, e.g. `-1.25e-7`.
                let formatted = format!("{value:e}");
                let (mantissa, exponent) = formatted
                    .split_once('e')
                    .unwrap_or((formatted.as_str(), "0"));
                out.push_str(mantissa);
                if !mantissa.contains('.') {
                    out.push_str(".0");
                }
                out.push('E');
                out.push_str(exponent);
            }
        }
    }

    fn canonical_len_hint(&self) -> usize {
        24
    }
}

impl_literal_traits!(Double, Float);
