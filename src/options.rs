//! Configuration options for literal processing.
//!
//! This module provides types to customize how literals are matched and canonicalized:
//!
//! - [`LexicalOptions`]: Main configuration struct
//! - [`WhiteSpace`]: Whitespace handling applied before matching
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::{Decimal, LexicalOptions, WhiteSpace, XsdType};
//!
//! let options = LexicalOptions::new().with_whitespace(WhiteSpace::Collapse);
//!
//! let mut literal = String::from(" +007.100 ");
//! assert!(Decimal::canonicalize_with(&mut literal, &options).unwrap());
//! assert_eq!(literal, "7.1");
//! ```

use std::borrow::Cow;

/// Whitespace normalization applied to a literal before it is matched.
///
/// - **Preserve**: Default, the literal is matched exactly as given
/// - **Collapse**: XML Schema `whiteSpace="collapse"`: leading and trailing whitespace is
///   removed and inner runs of whitespace are replaced by a single space
///
/// # Examples
///
/// ```rust
/// use xsd_literal::WhiteSpace;
///
/// assert_eq!(WhiteSpace::Preserve.apply(" 1 "), " 1 ");
/// assert_eq!(WhiteSpace::Collapse.apply(" 1 "), "1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WhiteSpace {
    #[default]
    Preserve,
    Collapse,
}

impl WhiteSpace {
    /// Applies this normalization, borrowing when the input needs no change.
    #[must_use]
    pub fn apply(self, literal: &str) -> Cow<'_, str> {
        match self {
            WhiteSpace::Preserve => Cow::Borrowed(literal),
            WhiteSpace::Collapse => collapse(literal),
        }
    }
}

#[inline]
fn is_xml_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

fn collapse(literal: &str) -> Cow<'_, str> {
    let trimmed = literal.trim_matches(is_xml_space);
    let mut previous_space = false;
    let clean = trimmed.chars().all(|ch| {
        let ok = ch != '\t' && ch != '\n' && ch != '\r' && !(ch == ' ' && previous_space);
        previous_space = ch == ' ';
        ok
    });
    if clean {
        return Cow::Borrowed(trimmed);
    }

    let mut collapsed = String::with_capacity(trimmed.len());
    for word in trimmed.split(is_xml_space).filter(|word| !word.is_empty()) {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }
    Cow::Owned(collapsed)
}

/// Configuration options for validation, parsing and canonicalization.
///
/// # Examples
///
/// ```rust
/// use xsd_literal::{LexicalOptions, WhiteSpace};
///
/// // Default: literals matched as given, invalid literals are errors
/// let options = LexicalOptions::new();
/// assert!(options.strict);
///
/// // Lenient canonicalization with whitespace collapsing
/// let options = LexicalOptions::new()
///     .with_whitespace(WhiteSpace::Collapse)
///     .with_strict(false);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexicalOptions {
    pub whitespace: WhiteSpace,
    pub strict: bool,
}

impl Default for LexicalOptions {
    fn default() -> Self {
        LexicalOptions {
            whitespace: WhiteSpace::default(),
            strict: true,
        }
    }
}

impl LexicalOptions {
    /// Creates default options (whitespace preserved, strict canonicalization).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::{LexicalOptions, WhiteSpace};
    ///
    /// let options = LexicalOptions::new();
    /// assert_eq!(options.whitespace, WhiteSpace::Preserve);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that collapse whitespace and canonicalize leniently.
    ///
    /// Suited to literals taken straight from XML element content.
    #[must_use]
    pub fn lenient() -> Self {
        LexicalOptions {
            whitespace: WhiteSpace::Collapse,
            strict: false,
        }
    }

    /// Sets the whitespace normalization applied before matching.
    #[must_use]
    pub fn with_whitespace(mut self, whitespace: WhiteSpace) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Selects strict or lenient canonicalization.
    ///
    /// When strict (the default), canonicalizing an invalid literal is an error. When
    /// lenient, the literal is left untouched and reported as not rewritten.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::{Double, LexicalOptions, XsdType};
    ///
    /// let mut literal = String::from("1.0.0");
    /// let options = LexicalOptions::new().with_strict(false);
    /// assert_eq!(Double::canonicalize_with(&mut literal, &options), Ok(false));
    /// assert_eq!(literal, "1.0.0");
    /// ```
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
