//! The `xsd:boolean` datatype: `true`, `false`, `1` or `0`, canonically `true` or `false`.

use crate::matcher;
use crate::{Datatype, Result, XsdType};
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const PATTERN: &str = r"^(?:(?P<truthy>true|1)|(?P<falsy>false|0))$";

static MATCHER: LazyLock<Regex> = LazyLock::new(|| matcher::compile(PATTERN));

/// Captures of a boolean literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BooleanCaptures {
    pub truthy: bool,
}

/// An `xsd:boolean` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Boolean(pub bool);

impl Boolean {
    #[inline]
    #[must_use]
    pub const fn value(self) -> bool {
        self.0
    }
}

impl XsdType for Boolean {
    const DATATYPE: Datatype = Datatype::Boolean;
    type Captures<'t> = BooleanCaptures;

    fn captures(literal: &str) -> Option<BooleanCaptures> {
        let captures = MATCHER.captures(literal)?;
        Some(BooleanCaptures {
            truthy: captures.name("truthy").is_some(),
        })
    }

    fn from_captures(_literal: &str, captures: BooleanCaptures) -> Result<Self> {
        Ok(Boolean(captures.truthy))
    }

    fn write_canonical(&self, out: &mut String) {
        out.push_str(if self.0 { "true" } else { "false" });
    }

    fn canonical_len_hint(&self) -> usize {
        5
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Boolean(value)
    }
}

impl From<Boolean> for bool {
    fn from(value: Boolean) -> Self {
        value.0
    }
}

impl_literal_traits!(Boolean);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_space() {
        assert_eq!(Boolean::parse("true"), Ok(Boolean(true)));
        assert_eq!(Boolean::parse("1"), Ok(Boolean(true)));
        assert_eq!(Boolean::parse("false"), Ok(Boolean(false)));
        assert_eq!(Boolean::parse("0"), Ok(Boolean(false)));
        for literal in ["", "TRUE", "True", "yes", "01", " true"] {
            assert!(!Boolean::validate(literal), "{literal:?} should be invalid");
        }
    }

    #[test]
    fn test_canonical_forms() {
        let mut literal = String::from("0");
        assert_eq!(Boolean::canonicalize(&mut literal), Ok(true));
        assert_eq!(literal, "false");

        let mut literal = String::from("true");
        assert_eq!(Boolean::canonicalize(&mut literal), Ok(false));
    }
}
