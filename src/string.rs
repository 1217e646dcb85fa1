//! The `xsd:string` datatype.
//!
//! A string literal is valid when every character is an XML `Char`; its canonical form is
//! the literal itself.

use crate::lexical::owned;
use crate::matcher;
use crate::{Datatype, Result, XsdType};
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const PATTERN: &str =
    r"^[\t\n\r\x{20}-\x{D7FF}\x{E000}-\x{FFFD}\x{10000}-\x{10FFFF}]+$";

static MATCHER: LazyLock<Regex> = LazyLock::new(|| matcher::compile(PATTERN));

/// Captures of a string literal: the whole text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringCaptures<'t> {
    pub text: &'t str,
}

/// An `xsd:string` value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct XsdString(String);

impl XsdString {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl XsdType for XsdString {
    const DATATYPE: Datatype = Datatype::String;
    type Captures<'t> = StringCaptures<'t>;

    fn captures(literal: &str) -> Option<StringCaptures<'_>> {
        MATCHER
            .is_match(literal)
            .then_some(StringCaptures { text: literal })
    }

    fn from_captures(_literal: &str, captures: StringCaptures<'_>) -> Result<Self> {
        Ok(XsdString(owned(captures.text)?))
    }

    fn write_canonical(&self, out: &mut String) {
        out.push_str(&self.0);
    }

    fn canonical_len_hint(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<str> for XsdString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl_literal_traits!(XsdString);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_chars() {
        assert!(XsdString::validate("hello, world"));
        assert!(XsdString::validate("tab\there\r\n"));
        assert!(XsdString::validate("ünïcödé \u{1F600}"));
        assert!(!XsdString::validate(""));
        assert!(!XsdString::validate("bell\u{7}"));
        assert!(!XsdString::validate("nul\0"));
        assert!(!XsdString::validate("\u{FFFE}"));
    }

    #[test]
    fn test_canonical_is_identity() {
        let mut literal = String::from("  spaced  out ");
        assert_eq!(XsdString::canonicalize(&mut literal), Ok(false));
        assert_eq!(literal, "  spaced  out ");
        assert_eq!(XsdString::parse("x").unwrap().as_str(), "x");
    }
}
