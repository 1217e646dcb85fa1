//! Dynamic value representation.
//!
//! This module provides the [`XsdValue`] enum, which holds a parsed value of any datatype.
//! It's what [`Datatype::parse`] returns when the datatype is only known at runtime.
//!
//! ## Usage Patterns
//!
//! ### Parsing and type checking
//!
//! ```rust
//! use xsd_literal::{Datatype, XsdValue};
//!
//! let value = Datatype::Integer.parse("0042").unwrap();
//! assert!(value.is_numeric());
//! assert_eq!(value.datatype(), Datatype::Integer);
//! assert_eq!(value.to_string(), "42");
//! ```
//!
//! ### Extracting values
//!
//! ```rust
//! use xsd_literal::{Datatype, XsdValue};
//!
//! let value = Datatype::Decimal.parse("2.50").unwrap();
//! assert_eq!(value.as_f64(), Some(2.5));
//! assert_eq!(f64::try_from(value).unwrap(), 2.5);
//! ```

use crate::{
    Base64Binary, Boolean, Datatype, Date, DateTime, Decimal, Double, Duration, Error, Float,
    Integer, Result, Time, XsdString, XsdType,
};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Serialize, Serializer};
use std::fmt;

/// A parsed value of any built-in datatype.
#[derive(Clone, Debug, PartialEq)]
pub enum XsdValue {
    Base64Binary(Base64Binary),
    Boolean(Boolean),
    Date(Date),
    DateTime(DateTime),
    Decimal(Decimal),
    Double(Double),
    Duration(Duration),
    Float(Float),
    Integer(Integer),
    String(XsdString),
    Time(Time),
}

macro_rules! for_each_variant {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            XsdValue::Base64Binary($inner) => $body,
            XsdValue::Boolean($inner) => $body,
            XsdValue::Date($inner) => $body,
            XsdValue::DateTime($inner) => $body,
            XsdValue::Decimal($inner) => $body,
            XsdValue::Double($inner) => $body,
            XsdValue::Duration($inner) => $body,
            XsdValue::Float($inner) => $body,
            XsdValue::Integer($inner) => $body,
            XsdValue::String($inner) => $body,
            XsdValue::Time($inner) => $body,
        }
    };
}

impl XsdValue {
    /// Returns the datatype of this value.
    #[must_use]
    pub const fn datatype(&self) -> Datatype {
        match self {
            XsdValue::Base64Binary(_) => Datatype::Base64Binary,
            XsdValue::Boolean(_) => Datatype::Boolean,
            XsdValue::Date(_) => Datatype::Date,
            XsdValue::DateTime(_) => Datatype::DateTime,
            XsdValue::Decimal(_) => Datatype::Decimal,
            XsdValue::Double(_) => Datatype::Double,
            XsdValue::Duration(_) => Datatype::Duration,
            XsdValue::Float(_) => Datatype::Float,
            XsdValue::Integer(_) => Datatype::Integer,
            XsdValue::String(_) => Datatype::String,
            XsdValue::Time(_) => Datatype::Time,
        }
    }

    /// Returns the canonical literal of this value.
    #[must_use]
    pub fn canonical_literal(&self) -> String {
        for_each_variant!(self, inner => inner.canonical_literal())
    }

    /// Returns the canonical literal of this value, reporting allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] when the buffer cannot be allocated.
    pub fn to_canonical(&self) -> Result<String> {
        for_each_variant!(self, inner => inner.to_canonical())
    }

    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.datatype().is_numeric()
    }

    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, XsdValue::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, XsdValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, XsdValue::Base64Binary(_))
    }

    /// Returns `true` for `date`, `dateTime`, `time` and `duration` values.
    #[inline]
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(
            self,
            XsdValue::Date(_) | XsdValue::DateTime(_) | XsdValue::Time(_) | XsdValue::Duration(_)
        )
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// ```rust
    /// use xsd_literal::Datatype;
    ///
    /// assert_eq!(Datatype::Boolean.parse("1").unwrap().as_bool(), Some(true));
    /// assert_eq!(Datatype::Integer.parse("1").unwrap().as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            XsdValue::Boolean(b) => Some(b.value()),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            XsdValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// If the value is binary, returns its octets. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            XsdValue::Base64Binary(b) => Some(b.as_bytes()),
            _ => None,
        }
    }

    /// If the value is an integer, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            XsdValue::Integer(i) => Some(i.value()),
            _ => None,
        }
    }

    /// If the value is an integer that fits an `i64`, returns it. Otherwise returns `None`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_bigint().and_then(ToPrimitive::to_i64)
    }

    /// If the value is numeric and representable as an `f64`, returns it.
    ///
    /// `double` and `float` values always convert, their special values included. A
    /// decimal or integer beyond the `f64` range yields `None`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            XsdValue::Double(d) => Some(d.to_native()),
            XsdValue::Float(f) => Some(f64::from(f.to_native())),
            XsdValue::Decimal(d) => d.to_f64().ok(),
            XsdValue::Integer(i) => i.value().to_f64().filter(|value| value.is_finite()),
            _ => None,
        }
    }

    fn mismatch(&self, expected: &str) -> Error {
        Error::invalid_argument(
            self.datatype().name(),
            &self.canonical_literal(),
            &format!("expected {expected}"),
        )
    }
}

impl fmt::Display for XsdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for_each_variant!(self, inner => fmt::Display::fmt(inner, f))
    }
}

impl Serialize for XsdValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        for_each_variant!(self, inner => inner.serialize(serializer))
    }
}

impl TryFrom<XsdValue> for f64 {
    type Error = Error;

    fn try_from(value: XsdValue) -> Result<Self> {
        match &value {
            XsdValue::Decimal(d) => d.to_f64(),
            XsdValue::Integer(i) => i
                .value()
                .to_f64()
                .filter(|native| native.is_finite())
                .ok_or_else(|| Error::out_of_range(i.value(), "f64")),
            XsdValue::Double(_) | XsdValue::Float(_) => value
                .as_f64()
                .ok_or_else(|| value.mismatch("a number")),
            _ => Err(value.mismatch("a number")),
        }
    }
}

impl TryFrom<XsdValue> for i64 {
    type Error = Error;

    fn try_from(value: XsdValue) -> Result<Self> {
        match value {
            XsdValue::Integer(i) => i.to_i64(),
            other => Err(other.mismatch("an integer")),
        }
    }
}

impl TryFrom<XsdValue> for bool {
    type Error = Error;

    fn try_from(value: XsdValue) -> Result<Self> {
        match value {
            XsdValue::Boolean(b) => Ok(b.value()),
            other => Err(other.mismatch("a boolean")),
        }
    }
}

impl TryFrom<XsdValue> for String {
    type Error = Error;

    fn try_from(value: XsdValue) -> Result<Self> {
        match value {
            XsdValue::String(s) => Ok(s.into_inner()),
            other => Err(other.mismatch("a string")),
        }
    }
}

macro_rules! impl_from_model {
    ($($variant:ident($model:ty)),+ $(,)?) => {
        $(
            impl From<$model> for XsdValue {
                fn from(value: $model) -> Self {
                    XsdValue::$variant(value)
                }
            }
        )+
    };
}

impl_from_model!(
    Base64Binary(Base64Binary),
    Boolean(Boolean),
    Date(Date),
    DateTime(DateTime),
    Decimal(Decimal),
    Double(Double),
    Duration(Duration),
    Float(Float),
    Integer(Integer),
    String(XsdString),
    Time(Time),
);

impl From<bool> for XsdValue {
    fn from(value: bool) -> Self {
        XsdValue::Boolean(Boolean(value))
    }
}

impl From<i64> for XsdValue {
    fn from(value: i64) -> Self {
        XsdValue::Integer(Integer::from(value))
    }
}

impl From<f64> for XsdValue {
    fn from(value: f64) -> Self {
        XsdValue::Double(Double::from_native(value))
    }
}

impl From<f32> for XsdValue {
    fn from(value: f32) -> Self {
        XsdValue::Float(Float::from_native(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_matches_variant() {
        for (datatype, literal) in [
            (Datatype::Base64Binary, "AQID"),
            (Datatype::Boolean, "true"),
            (Datatype::Date, "2020-01-01"),
            (Datatype::DateTime, "2020-01-01T00:00:00"),
            (Datatype::Decimal, "1.0"),
            (Datatype::Double, "1"),
            (Datatype::Duration, "P1D"),
            (Datatype::Float, "1"),
            (Datatype::Integer, "1"),
            (Datatype::String, "one"),
            (Datatype::Time, "00:00:00"),
        ] {
            assert_eq!(datatype.parse(literal).unwrap().datatype(), datatype);
        }
    }

    #[test]
    fn test_accessors() {
        let value = XsdValue::from(true);
        assert!(value.is_boolean());
        assert_eq!(value.as_bool(), Some(true));
        assert_eq!(value.as_str(), None);

        let value = Datatype::Base64Binary.parse("AQID").unwrap();
        assert!(value.is_binary());
        assert_eq!(value.as_bytes(), Some(&[1u8, 2, 3][..]));

        let value = Datatype::Integer.parse("-0012").unwrap();
        assert_eq!(value.as_i64(), Some(-12));
        assert_eq!(value.as_f64(), Some(-12.0));
        assert!(Datatype::Duration.parse("PT1S").unwrap().is_temporal());
    }

    #[test]
    fn test_as_f64_specials() {
        assert_eq!(XsdValue::from(f64::INFINITY).as_f64(), Some(f64::INFINITY));
        assert!(XsdValue::from(f32::NAN).as_f64().unwrap().is_nan());
        assert_eq!(Datatype::String.parse("1").unwrap().as_f64(), None);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(i64::try_from(XsdValue::from(7i64)), Ok(7));
        assert_eq!(bool::try_from(XsdValue::from(false)), Ok(false));
        assert_eq!(
            String::try_from(Datatype::String.parse("text").unwrap()),
            Ok("text".to_string())
        );
        assert_eq!(f64::try_from(XsdValue::from(1.5f32)), Ok(1.5));

        let err = i64::try_from(XsdValue::from(true)).unwrap_err();
        assert!(err.to_string().contains("expected an integer"));

        let huge = Datatype::Integer.parse("99999999999999999999").unwrap();
        assert_eq!(
            i64::try_from(huge).unwrap_err().kind(),
            crate::ErrorKind::OutOfRange
        );
    }

    #[test]
    fn test_display_and_serialize_are_canonical() {
        let value = Datatype::Double.parse("100").unwrap();
        assert_eq!(value.to_string(), "1.0E2");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"1.0E2\"");
        assert_eq!(value.to_canonical().unwrap(), value.canonical_literal());
    }
}
