//! A narrow per-datatype interface with an out-of-band error code.
//!
//! Each submodule exposes plain functions over a literal: `validate` returns a `bool`,
//! `canonicalize` rewrites in place and returns the rewrite indicator, and `value` returns
//! the native value. Failures never surface as `Result`; instead the failing call returns
//! a zero value and records an [`ErrorKind`] in a thread-local slot, read with
//! [`last_error`]. Like `errno`, the slot is only written on failure, so callers clear it
//! before a call whose outcome they want to inspect.
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::binding::{self, integer};
//! use xsd_literal::ErrorKind;
//!
//! binding::clear_error();
//! assert_eq!(integer::value("255", 0, 255), 255);
//! assert_eq!(binding::last_error(), None);
//!
//! assert_eq!(integer::value("256", 0, 255), 0);
//! assert_eq!(binding::last_error(), Some(ErrorKind::OutOfRange));
//! ```

use crate::{Error, ErrorKind, Result, XsdType};
use std::cell::Cell;
use tracing::{debug, trace};

thread_local! {
    static LAST_ERROR: Cell<Option<ErrorKind>> = const { Cell::new(None) };
}

/// Returns the error recorded by the last failing call on this thread.
#[must_use]
pub fn last_error() -> Option<ErrorKind> {
    LAST_ERROR.with(Cell::get)
}

/// Resets this thread's error slot.
pub fn clear_error() {
    LAST_ERROR.with(|slot| slot.set(None));
}

fn record<T: XsdType>(err: &Error) {
    debug!(
        datatype = T::DATATYPE.name(),
        code = err.kind().code(),
        %err,
        "literal operation failed"
    );
    LAST_ERROR.with(|slot| slot.set(Some(err.kind())));
}

fn canonicalize<T: XsdType>(literal: &mut String) -> bool {
    match T::canonicalize(literal) {
        Ok(rewritten) => {
            if rewritten {
                trace!(datatype = T::DATATYPE.name(), canonical = %literal, "rewrote literal");
            }
            rewritten
        }
        Err(err) => {
            record::<T>(&err);
            false
        }
    }
}

fn value<T: XsdType, V: Default>(literal: &str, convert: impl FnOnce(T) -> Result<V>) -> V {
    match T::parse(literal).and_then(convert) {
        Ok(native) => native,
        Err(err) => {
            record::<T>(&err);
            V::default()
        }
    }
}

macro_rules! binding_module {
    ($(#[$doc:meta])* $module:ident => $model:ty $(, $extra:item)* $(,)?) => {
        $(#[$doc])*
        pub mod $module {
            #[allow(unused_imports)]
            use super::*;

            /// Returns `true` if `literal` is valid. Never touches the error slot.
            #[must_use]
            pub fn validate(literal: &str) -> bool {
                <$model as XsdType>::validate(literal)
            }

            /// Rewrites `literal` into canonical form, returning `true` if it changed.
            ///
            /// An invalid literal is left unmodified, `false` is returned and the error
            /// slot is set.
            pub fn canonicalize(literal: &mut String) -> bool {
                super::canonicalize::<$model>(literal)
            }

            $($extra)*
        }
    };
}

binding_module!(
    /// `xsd:decimal`; values convert to the nearest `f64`.
    decimal => crate::Decimal,
    pub fn value(literal: &str) -> f64 {
        super::value(literal, |decimal: crate::Decimal| decimal.to_f64())
    }
);

binding_module!(
    /// `xsd:double`; the special values convert to infinities and NaN.
    double => crate::Double,
    pub fn value(literal: &str) -> f64 {
        super::value(literal, |double: crate::Double| Ok(double.to_native()))
    }
);

binding_module!(
    /// `xsd:float`.
    float => crate::Float,
    pub fn value(literal: &str) -> f32 {
        super::value(literal, |float: crate::Float| Ok(float.to_native()))
    }
);

binding_module!(
    /// `xsd:integer`; values are bounded by the caller.
    integer => crate::Integer,
    /// Returns the value of `literal` if it lies in `[min, max]`.
    ///
    /// A value outside the range is never clamped: `0` is returned and the error slot is
    /// set to [`ErrorKind::OutOfRange`].
    pub fn value(literal: &str, min: i64, max: i64) -> i64 {
        match crate::Integer::parse_bounded(literal, min, max) {
            Ok(native) => native,
            Err(err) => {
                record::<crate::Integer>(&err);
                0
            }
        }
    }
);

binding_module!(
    /// `xsd:boolean`.
    boolean => crate::Boolean,
    pub fn value(literal: &str) -> bool {
        super::value(literal, |boolean: crate::Boolean| Ok(boolean.value()))
    }
);

binding_module!(
    /// `xsd:string`.
    string => crate::XsdString,
    /// Returns `literal` itself if it is a valid string, or `""`.
    pub fn value(literal: &str) -> &str {
        match <crate::XsdString as XsdType>::parse(literal) {
            Ok(_) => literal,
            Err(err) => {
                record::<crate::XsdString>(&err);
                ""
            }
        }
    }
);

binding_module!(
    /// `xsd:base64Binary`; values are the decoded octets.
    base64_binary => crate::Base64Binary,
    pub fn value(literal: &str) -> Vec<u8> {
        super::value(literal, |binary: crate::Base64Binary| Ok(binary.into_bytes()))
    }
);

binding_module!(
    /// `xsd:date`; values are Unix timestamps of the start of the day.
    date => crate::Date,
    pub fn value(literal: &str) -> i64 {
        super::value(literal, |date: crate::Date| Ok(date.timestamp()))
    }
);

binding_module!(
    /// `xsd:dateTime`; values are Unix timestamps in whole seconds.
    datetime => crate::DateTime,
    pub fn value(literal: &str) -> i64 {
        super::value(literal, |datetime: crate::DateTime| Ok(datetime.timestamp()))
    }
);

binding_module!(
    /// `xsd:time`; values are seconds since midnight UTC.
    time => crate::Time,
    pub fn value(literal: &str) -> i64 {
        super::value(literal, |time: crate::Time| Ok(time.seconds_from_midnight()))
    }
);

binding_module!(
    /// `xsd:duration`.
    duration => crate::Duration
);
