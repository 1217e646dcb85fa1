//! The `xsd:base64Binary` datatype.
//!
//! The lexical grammar allows a single space after any alphabet character and requires the
//! unused bits of the last group to be zero, so every matching literal decodes. The
//! canonical form is the standard padded encoding with no whitespace.
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::{Base64Binary, XsdType};
//!
//! let value = Base64Binary::parse("SGVs bG8=").unwrap();
//! assert_eq!(value.as_bytes(), b"Hello");
//! assert_eq!(value.canonical_literal(), "SGVsbG8=");
//! ```

use crate::matcher;
use crate::{Datatype, Error, Result, XsdType};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const PATTERN: &str = r"^(?:(?:(?:[A-Za-z0-9+/] ?){4})*(?:(?:[A-Za-z0-9+/] ?){3}[A-Za-z0-9+/]|(?:[A-Za-z0-9+/] ?){2}[AEIMQUYcgkosw048] ?=|[A-Za-z0-9+/] ?[AQgw] ?= ?=))?$";

static MATCHER: LazyLock<Regex> = LazyLock::new(|| matcher::compile(PATTERN));

/// Captures of a base64 literal: the encoded text, spaces included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Base64Captures<'t> {
    pub encoded: &'t str,
}

/// An `xsd:base64Binary` value: the decoded octets, never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Base64Binary(Vec<u8>);

impl Base64Binary {
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl XsdType for Base64Binary {
    const DATATYPE: Datatype = Datatype::Base64Binary;
    type Captures<'t> = Base64Captures<'t>;

    fn captures(literal: &str) -> Option<Base64Captures<'_>> {
        MATCHER
            .is_match(literal)
            .then_some(Base64Captures { encoded: literal })
    }

    fn from_captures(literal: &str, captures: Base64Captures<'_>) -> Result<Self> {
        let mut compact = String::new();
        compact.try_reserve(captures.encoded.len())?;
        compact.extend(captures.encoded.chars().filter(|&ch| ch != ' '));
        STANDARD.decode(compact).map(Base64Binary).map_err(|err| {
            Error::invalid_argument(Datatype::Base64Binary.name(), literal, &err.to_string())
        })
    }

    fn write_canonical(&self, out: &mut String) {
        STANDARD.encode_string(&self.0, out);
    }

    fn canonical_len_hint(&self) -> usize {
        self.0.len().div_ceil(3) * 4
    }
}

impl TryFrom<Vec<u8>> for Base64Binary {
    type Error = Error;

    /// Fails on an empty octet sequence, whose encoding would be the empty literal.
    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::invalid_argument(
                Datatype::Base64Binary.name(),
                "",
                "empty octet sequence",
            ));
        }
        Ok(Base64Binary(bytes))
    }
}

impl TryFrom<&[u8]> for Base64Binary {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Base64Binary::try_from(bytes.to_vec())
    }
}

impl_literal_traits!(Base64Binary);
