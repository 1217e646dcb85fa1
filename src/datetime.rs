//! The `xsd:dateTime` datatype.
//!
//! The canonical form of a timezoned value is its UTC instant written with `Z`. `24:00:00`
//! denotes the first instant of the following day. Trailing zeros of the fractional
//! seconds are dropped.
//!
//! | Literal | Canonical |
//! |---------|-----------|
//! | `2002-10-10T12:00:00-05:00` | `2002-10-10T17:00:00Z` |
//! | `2002-10-10T17:00:00.500Z` | `2002-10-10T17:00:00.5Z` |
//! | `1999-12-31T24:00:00` | `2000-01-01T00:00:00` |
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::{DateTime, XsdType};
//!
//! let value = DateTime::parse("2002-10-10T12:00:00-05:00").unwrap();
//! assert_eq!(value.canonical_literal(), "2002-10-10T17:00:00Z");
//! assert_eq!(value.timestamp(), 1_034_269_200);
//! ```

use crate::calendar::{
    parse_clock, parse_date, parse_timezone, write_fraction, write_year, CalendarCaptures,
};
use crate::lexical::owned;
use crate::matcher;
use crate::{Datatype, Error, Result, XsdType};
use chrono::{Datelike, FixedOffset, NaiveDateTime, TimeDelta, Timelike};
use regex::Regex;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

pub(crate) const PATTERN: &str = concat!(
    "^",
    date_pattern!(),
    "T",
    time_pattern!(),
    timezone_pattern!(),
    "$"
);

static MATCHER: LazyLock<Regex> = LazyLock::new(|| matcher::compile(PATTERN));

/// A date and time of day with an optional timezone offset.
///
/// Whole seconds are held by a [`NaiveDateTime`] in the literal's own timezone; the
/// fractional second digits are kept as written.
///
/// Equality and hashing compare instants: `12:00:00+02:00` equals `10:00:00Z`, and
/// `.50` equals `.5`.
#[derive(Clone, Debug)]
pub struct DateTime {
    datetime: NaiveDateTime,
    fraction: String,
    timezone: Option<FixedOffset>,
}

impl DateTime {
    /// Creates a value from local date and time, fractional second digits and timezone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `fraction` contains a non-digit or the UTC
    /// instant falls outside the supported calendar range.
    pub fn new(
        datetime: NaiveDateTime,
        fraction: &str,
        timezone: Option<FixedOffset>,
    ) -> Result<Self> {
        let value = DateTime {
            datetime: datetime.with_nanosecond(0).unwrap_or(datetime),
            fraction: owned(fraction)?,
            timezone,
        };
        if !fraction.bytes().all(|b| b.is_ascii_digit()) || value.utc().is_none() {
            return Err(Error::invalid_argument(
                Datatype::DateTime.name(),
                &value.datetime.to_string(),
                "not representable",
            ));
        }
        Ok(value)
    }

    /// Returns the local date and time, whole seconds only.
    #[inline]
    #[must_use]
    pub fn naive_local(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Returns the fractional second digits as written.
    #[inline]
    #[must_use]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    #[inline]
    #[must_use]
    pub fn timezone(&self) -> Option<FixedOffset> {
        self.timezone
    }

    fn utc(&self) -> Option<NaiveDateTime> {
        match self.timezone {
            Some(offset) => self
                .datetime
                .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc()))),
            None => Some(self.datetime),
        }
    }

    fn key(&self) -> (NaiveDateTime, &str, bool) {
        (
            self.utc().unwrap_or(self.datetime),
            self.fraction.trim_end_matches('0'),
            self.timezone.is_some(),
        )
    }

    /// Whole seconds since the Unix epoch. A value without timezone is taken to be in UTC.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.utc().unwrap_or(self.datetime).and_utc().timestamp()
    }
}

impl XsdType for DateTime {
    const DATATYPE: Datatype = Datatype::DateTime;
    type Captures<'t> = CalendarCaptures<'t>;

    fn captures(literal: &str) -> Option<CalendarCaptures<'_>> {
        let captures = MATCHER.captures(literal)?;
        Some(CalendarCaptures::from_regex(&captures))
    }

    fn from_captures(literal: &str, captures: CalendarCaptures<'_>) -> Result<Self> {
        let name = Datatype::DateTime.name();
        let date = parse_date(name, literal, &captures)?;
        let clock = parse_clock(name, literal, &captures)?;
        let date = if clock.end_of_day {
            date.succ_opt()
                .ok_or_else(|| Error::invalid_argument(name, literal, "year out of range"))?
        } else {
            date
        };

        let value = DateTime {
            datetime: date.and_time(clock.time),
            fraction: owned(clock.fraction)?,
            timezone: parse_timezone(name, literal, captures.timezone)?,
        };
        if value.utc().is_none() {
            return Err(Error::invalid_argument(name, literal, "year out of range"));
        }
        Ok(value)
    }

    fn write_canonical(&self, out: &mut String) {
        let instant = self.utc().unwrap_or(self.datetime);
        write_year(out, instant.year());
        out.push_str(&format!(
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            instant.month(),
            instant.day(),
            instant.hour(),
            instant.minute(),
            instant.second()
        ));
        write_fraction(out, &self.fraction);
        if self.timezone.is_some() {
            out.push('Z');
        }
    }

    fn canonical_len_hint(&self) -> usize {
        20 + self.fraction.len()
    }
}

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for DateTime {}

impl Hash for DateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<NaiveDateTime> for DateTime {
    fn from(datetime: NaiveDateTime) -> Self {
        DateTime {
            datetime: datetime.with_nanosecond(0).unwrap_or(datetime),
            fraction: String::new(),
            timezone: None,
        }
    }
}

impl_literal_traits!(DateTime);
