//! Pattern compilation and capture extraction.
//!
//! Every datatype owns an anchored regular expression with named groups. Patterns are
//! compiled on first use into process-wide statics and never mutated afterwards, so
//! matching is safe from any thread.

use regex::{Captures, Regex};

/// Compiles one of the crate's built-in patterns.
///
/// The patterns are string constants covered by tests, so a compile failure is a bug in
/// this crate rather than a runtime condition.
pub(crate) fn compile(pattern: &'static str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("built-in pattern {pattern:?} does not compile: {err}"),
    }
}

/// Returns the text of a named group, treating an empty match as absent.
#[inline]
pub(crate) fn group<'t>(captures: &Captures<'t>, name: &str) -> Option<&'t str> {
    captures
        .name(name)
        .map(|m| m.as_str())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Datatype;

    #[test]
    fn test_all_builtin_patterns_compile() {
        for datatype in Datatype::ALL {
            let regex = compile(datatype.pattern());
            assert!(regex.as_str().starts_with('^'), "{datatype} is not anchored");
            assert!(regex.as_str().ends_with('$'), "{datatype} is not anchored");
        }
    }

    #[test]
    fn test_group_skips_empty_matches() {
        let regex = compile(r"^(?P<a>[0-9]*)(?P<b>x)?$");
        let captures = regex.captures("").unwrap();
        assert_eq!(group(&captures, "a"), None);
        assert_eq!(group(&captures, "b"), None);

        let captures = regex.captures("12x").unwrap();
        assert_eq!(group(&captures, "a"), Some("12"));
        assert_eq!(group(&captures, "b"), Some("x"));
    }
}
