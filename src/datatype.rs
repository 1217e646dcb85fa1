//! Runtime selection of a datatype.
//!
//! [`Datatype`] names every datatype the crate knows and forwards the [`XsdType`]
//! operations to the matching model type, so a literal can be handled when its datatype is
//! only known at runtime (for example from an RDF literal's datatype IRI).
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::Datatype;
//!
//! let datatype: Datatype = "xsd:double".parse().unwrap();
//! assert_eq!(datatype, Datatype::Double);
//!
//! let mut literal = String::from("+INF");
//! assert!(datatype.canonicalize(&mut literal).unwrap());
//! assert_eq!(literal, "INF");
//! ```

use crate::{
    Base64Binary, Boolean, DatatypeRegistry, Date, DateTime, Decimal, Double, Duration, Error,
    Float, Integer, LexicalOptions, Result, Time, XsdString, XsdType, XsdValue,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The XML Schema namespace; a datatype's IRI is this namespace followed by its name.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

macro_rules! xsd_iri {
    ($name:literal) => {
        concat!("http://www.w3.org/2001/XMLSchema#", $name)
    };
}

/// Runs `$body` with `$model` bound to the model type of `$datatype`.
macro_rules! dispatch {
    ($datatype:expr, $model:ident => $body:expr) => {
        match $datatype {
            Datatype::Base64Binary => {
                type $model = Base64Binary;
                $body
            }
            Datatype::Boolean => {
                type $model = Boolean;
                $body
            }
            Datatype::Date => {
                type $model = Date;
                $body
            }
            Datatype::DateTime => {
                type $model = DateTime;
                $body
            }
            Datatype::Decimal => {
                type $model = Decimal;
                $body
            }
            Datatype::Double => {
                type $model = Double;
                $body
            }
            Datatype::Duration => {
                type $model = Duration;
                $body
            }
            Datatype::Float => {
                type $model = Float;
                $body
            }
            Datatype::Integer => {
                type $model = Integer;
                $body
            }
            Datatype::String => {
                type $model = XsdString;
                $body
            }
            Datatype::Time => {
                type $model = Time;
                $body
            }
        }
    };
}

/// A built-in XML Schema datatype.
///
/// Serializes as the datatype's local name (`dateTime`, `base64Binary`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Datatype {
    Base64Binary,
    Boolean,
    Date,
    DateTime,
    Decimal,
    Double,
    Duration,
    Float,
    Integer,
    String,
    Time,
}

impl Datatype {
    /// Every datatype, in name order.
    pub const ALL: [Datatype; 11] = [
        Datatype::Base64Binary,
        Datatype::Boolean,
        Datatype::Date,
        Datatype::DateTime,
        Datatype::Decimal,
        Datatype::Double,
        Datatype::Duration,
        Datatype::Float,
        Datatype::Integer,
        Datatype::String,
        Datatype::Time,
    ];

    /// The datatype's local name within the XML Schema namespace.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Datatype::Base64Binary => "base64Binary",
            Datatype::Boolean => "boolean",
            Datatype::Date => "date",
            Datatype::DateTime => "dateTime",
            Datatype::Decimal => "decimal",
            Datatype::Double => "double",
            Datatype::Duration => "duration",
            Datatype::Float => "float",
            Datatype::Integer => "integer",
            Datatype::String => "string",
            Datatype::Time => "time",
        }
    }

    /// The datatype's full IRI.
    ///
    /// ```rust
    /// use xsd_literal::Datatype;
    ///
    /// assert_eq!(Datatype::Decimal.iri(), "http://www.w3.org/2001/XMLSchema#decimal");
    /// ```
    #[must_use]
    pub const fn iri(self) -> &'static str {
        match self {
            Datatype::Base64Binary => xsd_iri!("base64Binary"),
            Datatype::Boolean => xsd_iri!("boolean"),
            Datatype::Date => xsd_iri!("date"),
            Datatype::DateTime => xsd_iri!("dateTime"),
            Datatype::Decimal => xsd_iri!("decimal"),
            Datatype::Double => xsd_iri!("double"),
            Datatype::Duration => xsd_iri!("duration"),
            Datatype::Float => xsd_iri!("float"),
            Datatype::Integer => xsd_iri!("integer"),
            Datatype::String => xsd_iri!("string"),
            Datatype::Time => xsd_iri!("time"),
        }
    }

    /// The anchored regular expression of the datatype's lexical space.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Datatype::Base64Binary => crate::base64_binary::PATTERN,
            Datatype::Boolean => crate::boolean::PATTERN,
            Datatype::Date => crate::date::PATTERN,
            Datatype::DateTime => crate::datetime::PATTERN,
            Datatype::Decimal => crate::decimal::PATTERN,
            Datatype::Double | Datatype::Float => crate::floating::PATTERN,
            Datatype::Duration => crate::duration::PATTERN,
            Datatype::Integer => crate::integer::PATTERN,
            Datatype::String => crate::string::PATTERN,
            Datatype::Time => crate::time::PATTERN,
        }
    }

    /// Looks a datatype up by its full IRI.
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Datatype> {
        iri.strip_prefix(XSD_NAMESPACE)?;
        DatatypeRegistry::standard().get(iri)
    }

    /// Returns `true` for `decimal`, `integer`, `double` and `float`.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Datatype::Decimal | Datatype::Integer | Datatype::Double | Datatype::Float
        )
    }

    /// See [`XsdType::matches`].
    #[must_use]
    pub fn matches(self, literal: &str) -> bool {
        dispatch!(self, Model => Model::matches(literal))
    }

    /// See [`XsdType::validate`].
    #[must_use]
    pub fn validate(self, literal: &str) -> bool {
        dispatch!(self, Model => Model::validate(literal))
    }

    /// See [`XsdType::validate_with`].
    #[must_use]
    pub fn validate_with(self, literal: &str, options: &LexicalOptions) -> bool {
        dispatch!(self, Model => Model::validate_with(literal, options))
    }

    /// Parses `literal` into a value of this datatype.
    ///
    /// # Errors
    ///
    /// See [`XsdType::parse`].
    pub fn parse(self, literal: &str) -> Result<XsdValue> {
        dispatch!(self, Model => Model::parse(literal).map(XsdValue::from))
    }

    /// Like [`Datatype::parse`], configured by `options`.
    ///
    /// # Errors
    ///
    /// See [`XsdType::parse`].
    pub fn parse_with(self, literal: &str, options: &LexicalOptions) -> Result<XsdValue> {
        dispatch!(self, Model => Model::parse_with(literal, options).map(XsdValue::from))
    }

    /// See [`XsdType::canonicalize`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a literal that is not valid.
    pub fn canonicalize(self, literal: &mut String) -> Result<bool> {
        dispatch!(self, Model => Model::canonicalize(literal))
    }

    /// See [`XsdType::canonicalize_with`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an invalid literal in strict mode.
    pub fn canonicalize_with(self, literal: &mut String, options: &LexicalOptions) -> Result<bool> {
        dispatch!(self, Model => Model::canonicalize_with(literal, options))
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Datatype {
    type Err = Error;

    /// Accepts a local name, an `xsd:` prefixed name or a full IRI.
    fn from_str(name: &str) -> Result<Self> {
        DatatypeRegistry::standard()
            .get(name)
            .ok_or_else(|| Error::invalid_argument("datatype", name, "unknown datatype name"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for datatype in Datatype::ALL {
            assert_eq!(datatype.name().parse::<Datatype>().unwrap(), datatype);
            assert_eq!(Datatype::from_iri(datatype.iri()), Some(datatype));
            assert_eq!(datatype.iri().strip_prefix(XSD_NAMESPACE), Some(datatype.name()));
        }
    }

    #[test]
    fn test_from_iri_requires_namespace() {
        assert_eq!(Datatype::from_iri("decimal"), None);
        assert_eq!(Datatype::from_iri("xsd:decimal"), None);
        assert_eq!(Datatype::from_iri("http://example.org/decimal"), None);
    }

    #[test]
    fn test_unknown_name() {
        assert!("xsd:gYear".parse::<Datatype>().is_err());
        assert!("Decimal".parse::<Datatype>().is_err());
    }

    #[test]
    fn test_serde_uses_local_names() {
        assert_eq!(
            serde_json::to_string(&Datatype::Base64Binary).unwrap(),
            "\"base64Binary\""
        );
        let datatype: Datatype = serde_json::from_str("\"dateTime\"").unwrap();
        assert_eq!(datatype, Datatype::DateTime);
    }

    #[test]
    fn test_dispatch() {
        assert!(Datatype::Decimal.validate("1.5"));
        assert!(!Datatype::Integer.validate("1.5"));
        assert!(Datatype::Date.matches("2023-04-31"));
        assert!(!Datatype::Date.validate("2023-04-31"));

        let value = Datatype::Float.parse("1e1").unwrap();
        assert_eq!(value.datatype(), Datatype::Float);

        let mut literal = String::from("0.0");
        assert_eq!(Datatype::Double.canonicalize(&mut literal), Ok(true));
        assert_eq!(literal, "0.0E0");
        assert_eq!(
            Datatype::Decimal.canonicalize(&mut literal),
            Err(Error::no_match("decimal", "0.0E0"))
        );
    }

    #[test]
    fn test_lenient_canonicalize() {
        let options = LexicalOptions::lenient();
        let mut literal = String::from("yes");
        assert_eq!(Datatype::Boolean.canonicalize_with(&mut literal, &options), Ok(false));
        assert_eq!(literal, "yes");
    }
}
