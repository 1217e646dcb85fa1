//! # xsd_literal
//!
//! Validation, parsing and canonicalization of W3C XML Schema literals.
//!
//! ## What does it do?
//!
//! Data formats built on XML Schema datatypes (XML documents, RDF literals, SOAP
//! payloads) spell one value in many ways: `1e3`, `1000.0` and `+1.0E3` are all the same
//! `xsd:double`. This crate decides whether a literal is valid for its datatype, turns it
//! into a typed value, and rewrites it into the single canonical spelling, so literals can
//! be compared and stored byte for byte.
//!
//! ## Key Features
//!
//! - **Exact decimals**: `xsd:decimal` digits are kept as written, never rounded
//! - **Explicit special values**: `INF`, `-INF` and `NaN` are tags, not bit patterns
//! - **Shortest round-trip digits**: canonical `double`/`float` literals are deterministic
//! - **In-place canonicalization**: reports whether the literal actually changed
//! - **Serde compatible**: every value serializes as its canonical literal
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ### Static dispatch through [`XsdType`]
//!
//! ```rust
//! use xsd_literal::{Decimal, Double, XsdType};
//!
//! assert!(Decimal::validate("+007.100"));
//! assert_eq!(Decimal::parse("+007.100").unwrap().canonical_literal(), "7.1");
//!
//! let mut literal = String::from("0.0");
//! assert!(Double::canonicalize(&mut literal).unwrap());
//! assert_eq!(literal, "0.0E0");
//!
//! // Already canonical: no rewrite.
//! assert!(!Double::canonicalize(&mut literal).unwrap());
//! ```
//!
//! ### Runtime dispatch through [`Datatype`]
//!
//! ```rust
//! use xsd_literal::{canonical_form, Datatype};
//!
//! let datatype = Datatype::from_iri("http://www.w3.org/2001/XMLSchema#dateTime").unwrap();
//! assert_eq!(
//!     canonical_form(datatype, "2002-10-10T12:00:00-05:00").unwrap(),
//!     "2002-10-10T17:00:00Z"
//! );
//! ```
//!
//! ### Whitespace and lenient mode
//!
//! ```rust
//! use xsd_literal::{Decimal, LexicalOptions, WhiteSpace, XsdType};
//!
//! let options = LexicalOptions::new().with_whitespace(WhiteSpace::Collapse);
//! let mut literal = String::from(" +007.100");
//! assert!(Decimal::canonicalize_with(&mut literal, &options).unwrap());
//! assert_eq!(literal, "7.1");
//!
//! let mut literal = String::from("seven");
//! assert!(!Decimal::canonicalize_with(&mut literal, &LexicalOptions::lenient()).unwrap());
//! assert_eq!(literal, "seven");
//! ```
//!
//! ## Supported datatypes
//!
//! `decimal`, `double`, `float`, `integer`, `boolean`, `string`, `base64Binary`, `date`,
//! `dateTime`, `time` and `duration`. See [`grammar`] for their lexical and canonical
//! forms, and [`binding`] for a flat interface with an `errno`-style error slot.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Patterns are compiled once and shared read-only between threads
//! - Invalid literals are never modified
//! - No panics in public API (except for logic errors that indicate bugs)

#[macro_use]
mod macros;

pub mod binding;
pub mod error;
pub mod grammar;
pub mod options;
pub mod registry;
pub mod value;

mod base64_binary;
mod boolean;
mod calendar;
mod datatype;
mod date;
mod datetime;
mod decimal;
mod duration;
mod floating;
mod integer;
mod lexical;
mod matcher;
mod string;
mod time;

pub use base64_binary::{Base64Binary, Base64Captures};
pub use boolean::{Boolean, BooleanCaptures};
pub use calendar::CalendarCaptures;
pub use datatype::{Datatype, XSD_NAMESPACE};
pub use date::Date;
pub use datetime::DateTime;
pub use decimal::{Decimal, DecimalCaptures};
pub use duration::{Duration, DurationCaptures};
pub use error::{Error, ErrorKind, Result};
pub use floating::{Double, Float, Floating, FloatingCaptures, Native, Special};
pub use integer::{Integer, IntegerCaptures};
pub use lexical::XsdType;
pub use options::{LexicalOptions, WhiteSpace};
pub use registry::DatatypeRegistry;
pub use string::{StringCaptures, XsdString};
pub use time::Time;
pub use value::XsdValue;

/// Returns `true` if `literal` is a valid lexical form of `datatype`.
///
/// # Examples
///
/// ```rust
/// use xsd_literal::{validate, Datatype};
///
/// assert!(validate(Datatype::Float, "-1.5e-3"));
/// assert!(!validate(Datatype::Float, "-NaN"));
/// ```
#[must_use]
pub fn validate(datatype: Datatype, literal: &str) -> bool {
    datatype.validate(literal)
}

/// Parses `literal` as a value of `datatype`.
///
/// # Examples
///
/// ```rust
/// use xsd_literal::{parse, Datatype};
///
/// let value = parse(Datatype::Boolean, "0").unwrap();
/// assert_eq!(value.as_bool(), Some(false));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the literal is not valid for `datatype`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(datatype: Datatype, literal: &str) -> Result<XsdValue> {
    datatype.parse(literal)
}

/// Rewrites `literal` into the canonical form of `datatype`, returning `true` if it
/// changed.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the literal is not valid for `datatype`; it is
/// then left unmodified.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn canonicalize(datatype: Datatype, literal: &mut String) -> Result<bool> {
    datatype.canonicalize(literal)
}

/// Returns the canonical form of `literal` without modifying it.
///
/// # Examples
///
/// ```rust
/// use xsd_literal::{canonical_form, Datatype};
///
/// assert_eq!(canonical_form(Datatype::Decimal, "-0.0").unwrap(), "0");
/// assert_eq!(canonical_form(Datatype::Double, "-0.0").unwrap(), "0.0E0");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the literal is not valid for `datatype`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn canonical_form(datatype: Datatype, literal: &str) -> Result<String> {
    datatype.parse(literal)?.to_canonical()
}
