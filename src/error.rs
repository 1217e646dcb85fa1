//! Error types for literal validation, parsing and canonicalization.
//!
//! Every fallible operation in this crate reports one of three conditions:
//!
//! - **Invalid argument**: the literal does not match the datatype's lexical grammar, or its
//!   captures cannot be assembled into a value (e.g. `2023-02-30`)
//! - **Out of range**: a parsed value does not fit the requested native target, such as an
//!   integer outside a caller-supplied `[min, max]` or a double narrowed to `f32`
//! - **Out of memory**: a literal buffer could not be allocated
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::{Decimal, Error, ErrorKind, XsdType};
//!
//! let err = Decimal::parse("1.2.3").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! assert!(err.to_string().contains("decimal"));
//! ```

use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the lexical engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The literal is not a valid lexical form of the datatype
    #[error("invalid {datatype} literal {literal:?}: {reason}")]
    InvalidArgument {
        datatype: &'static str,
        literal: String,
        reason: String,
    },

    /// The value does not fit the requested target
    #[error("value {value} is out of range for {target}")]
    OutOfRange { value: String, target: String },

    /// Allocation of a literal buffer failed
    #[error("out of memory")]
    OutOfMemory,
}

/// The error taxonomy, without payload.
///
/// Used by the binding layer to report failures out of band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    OutOfMemory,
}

impl ErrorKind {
    /// Returns the errno-compatible code for this kind (`EINVAL`, `ERANGE`, `ENOMEM`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::InvalidArgument.code(), 22);
    /// assert_eq!(ErrorKind::OutOfRange.code(), 34);
    /// ```
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            ErrorKind::InvalidArgument => 22,
            ErrorKind::OutOfRange => 34,
            ErrorKind::OutOfMemory => 12,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::OutOfMemory => "out of memory",
        })
    }
}

impl Error {
    /// Creates an invalid-argument error for a literal of the given datatype.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::Error;
    ///
    /// let err = Error::invalid_argument("boolean", "yes", "expected true, false, 1 or 0");
    /// assert!(err.to_string().contains("\"yes\""));
    /// ```
    pub fn invalid_argument(datatype: &'static str, literal: &str, reason: &str) -> Self {
        Error::InvalidArgument {
            datatype,
            literal: literal.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid-argument error for a literal rejected by the datatype's pattern.
    pub fn no_match(datatype: &'static str, literal: &str) -> Self {
        Self::invalid_argument(datatype, literal, "does not match the lexical grammar")
    }

    /// Creates an out-of-range error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::Error;
    ///
    /// let err = Error::out_of_range(256, "[0, 255]");
    /// assert_eq!(err.to_string(), "value 256 is out of range for [0, 255]");
    /// ```
    pub fn out_of_range<V: fmt::Display, T: fmt::Display>(value: V, target: T) -> Self {
        Error::OutOfRange {
            value: value.to_string(),
            target: target.to_string(),
        }
    }

    /// Returns the taxonomy of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::OutOfMemory => ErrorKind::OutOfMemory,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

pub type Result<T> = std::result::Result<T, Error>;
