//! The shared operation surface implemented by every datatype.
//!
//! A datatype plugs into the engine by implementing the four required items of
//! [`XsdType`]: its [`Datatype`] tag, a capture record, a parser from captures and a
//! canonical writer. Validation, parsing from text and canonicalization are provided
//! methods and behave identically for every datatype:
//!
//! ```text
//! literal ──match──▶ captures ──from_captures──▶ model ──write_canonical──▶ canonical literal
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::{Decimal, Double, XsdType};
//!
//! assert!(Decimal::validate("-0.50"));
//! assert!(!Decimal::validate("1e3"));
//!
//! let mut literal = String::from("1e3");
//! assert!(Double::canonicalize(&mut literal).unwrap());
//! assert_eq!(literal, "1.0E3");
//! ```

use crate::{Datatype, Error, ErrorKind, LexicalOptions, Result};

/// A W3C XML Schema datatype with a lexical grammar and a canonical form.
///
/// Implementors describe the datatype; callers use the provided methods.
pub trait XsdType: Sized {
    /// The datatype tag.
    const DATATYPE: Datatype;

    /// Named captures extracted from a matching literal.
    type Captures<'t>;

    /// Matches `literal` against the datatype's pattern, returning its captures.
    ///
    /// This is a purely syntactic check. Value-level checks (such as the number of days in
    /// a month) belong to [`XsdType::from_captures`].
    fn captures(literal: &str) -> Option<Self::Captures<'_>>;

    /// Builds a value from the captures of `literal`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the captures do not describe a value.
    fn from_captures(literal: &str, captures: Self::Captures<'_>) -> Result<Self>;

    /// Appends the canonical literal of this value to `out`.
    fn write_canonical(&self, out: &mut String);

    /// Expected length of the canonical literal, used to size its buffer.
    fn canonical_len_hint(&self) -> usize {
        16
    }

    /// Returns `true` if `literal` matches the datatype's lexical grammar.
    ///
    /// Never fails; the empty literal never matches.
    #[must_use]
    fn matches(literal: &str) -> bool {
        !literal.is_empty() && Self::captures(literal).is_some()
    }

    /// Returns `true` if `literal` is a valid lexical form of a value of this datatype.
    ///
    /// Never fails; any input that cannot be parsed yields `false`.
    #[must_use]
    fn validate(literal: &str) -> bool {
        Self::parse(literal).is_ok()
    }

    /// Like [`XsdType::validate`], with whitespace handled per `options`.
    #[must_use]
    fn validate_with(literal: &str, options: &LexicalOptions) -> bool {
        Self::parse_with(literal, options).is_ok()
    }

    /// Parses `literal` into a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when [`XsdType::validate`] would return `false`,
    /// and [`Error::OutOfMemory`] when a buffer cannot be allocated.
    fn parse(literal: &str) -> Result<Self> {
        parse_exact(literal)
    }

    /// Like [`XsdType::parse`], with whitespace handled per `options`.
    ///
    /// # Errors
    ///
    /// See [`XsdType::parse`].
    fn parse_with(literal: &str, options: &LexicalOptions) -> Result<Self> {
        parse_exact(&options.whitespace.apply(literal))
    }

    /// Returns the canonical literal of this value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] when the buffer cannot be allocated.
    fn to_canonical(&self) -> Result<String> {
        let mut out = String::new();
        out.try_reserve(self.canonical_len_hint())?;
        self.write_canonical(&mut out);
        Ok(out)
    }

    /// Returns the canonical literal of this value.
    #[must_use]
    fn canonical_literal(&self) -> String {
        let mut out = String::with_capacity(self.canonical_len_hint());
        self.write_canonical(&mut out);
        out
    }

    /// Rewrites `literal` in place into its canonical form.
    ///
    /// Returns `true` if the bytes of the literal changed and `false` if it was already
    /// canonical.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a literal that is not valid, leaving it
    /// unmodified.
    fn canonicalize(literal: &mut String) -> Result<bool> {
        Self::canonicalize_with(literal, &LexicalOptions::default())
    }

    /// Like [`XsdType::canonicalize`], configured by `options`.
    ///
    /// With `options.strict == false` an invalid literal is left unmodified and reported as
    /// `Ok(false)` instead of an error.
    ///
    /// # Errors
    ///
    /// See [`XsdType::canonicalize`].
    fn canonicalize_with(literal: &mut String, options: &LexicalOptions) -> Result<bool> {
        let value = match Self::parse_with(literal, options) {
            Ok(value) => value,
            Err(err) if !options.strict && err.kind() == ErrorKind::InvalidArgument => {
                return Ok(false)
            }
            Err(err) => return Err(err),
        };
        let canonical = value.to_canonical()?;
        if canonical == *literal {
            return Ok(false);
        }
        *literal = canonical;
        Ok(true)
    }
}

fn parse_exact<T: XsdType>(literal: &str) -> Result<T> {
    let datatype = T::DATATYPE.name();
    if literal.is_empty() {
        return Err(Error::invalid_argument(datatype, literal, "empty literal"));
    }
    let captures = T::captures(literal).ok_or_else(|| Error::no_match(datatype, literal))?;
    T::from_captures(literal, captures)
}

/// Copies a captured slice into an owned buffer, reporting allocation failure.
pub(crate) fn owned(text: &str) -> Result<String> {
    let mut buffer = String::new();
    buffer.try_reserve(text.len())?;
    buffer.push_str(text);
    Ok(buffer)
}
