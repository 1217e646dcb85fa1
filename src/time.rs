//! The `xsd:time` datatype.
//!
//! Follows the time-of-day rules of `dateTime`: a timezoned value is normalized to UTC,
//! wrapping around midnight, and `24:00:00` is the same as `00:00:00`.
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::{Time, XsdType};
//!
//! assert_eq!(Time::parse("01:30:00+02:00").unwrap().canonical_literal(), "23:30:00Z");
//! assert_eq!(Time::parse("24:00:00").unwrap().canonical_literal(), "00:00:00");
//! ```

use crate::calendar::{
    parse_clock, parse_timezone, write_fraction, write_timezone, CalendarCaptures,
};
use crate::lexical::owned;
use crate::matcher;
use crate::{Datatype, Result, XsdType};
use chrono::{FixedOffset, NaiveTime, TimeDelta, Timelike};
use regex::Regex;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

pub(crate) const PATTERN: &str = concat!("^", time_pattern!(), timezone_pattern!(), "$");

static MATCHER: LazyLock<Regex> = LazyLock::new(|| matcher::compile(PATTERN));

/// A time of day with an optional timezone offset.
///
/// Equality compares the UTC time of day.
#[derive(Clone, Debug)]
pub struct Time {
    time: NaiveTime,
    fraction: String,
    timezone: Option<FixedOffset>,
}

impl Time {
    /// Returns the local time of day, whole seconds only.
    #[inline]
    #[must_use]
    pub fn naive_local(&self) -> NaiveTime {
        self.time
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

    fn utc(&self) -> NaiveTime {
        match self.timezone {
            Some(offset) => {
                let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
                self.time.overflowing_sub_signed(shift).0
            }
            None => self.time,
        }
    }

    fn key(&self) -> (NaiveTime, &str, bool) {
        (
            self.utc(),
            self.fraction.trim_end_matches('0'),
            self.timezone.is_some(),
        )
    }

    /// Whole seconds since midnight UTC. A value without timezone is taken to be in UTC.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::{Time, XsdType};
    ///
    /// assert_eq!(Time::parse("01:00:00+02:00").unwrap().seconds_from_midnight(), 82_800);
    /// ```
    #[must_use]
    pub fn seconds_from_midnight(&self) -> i64 {
        i64::from(self.utc().num_seconds_from_midnight())
    }
}

impl XsdType for Time {
    const DATATYPE: Datatype = Datatype::Time;
    type Captures<'t> = CalendarCaptures<'t>;

    fn captures(literal: &str) -> Option<CalendarCaptures<'_>> {
        let captures = MATCHER.captures(literal)?;
        Some(CalendarCaptures::from_regex(&captures))
    }

    fn from_captures(literal: &str, captures: CalendarCaptures<'_>) -> Result<Self> {
        let name = Datatype::Time.name();
        let clock = parse_clock(name, literal, &captures)?;
        Ok(Time {
            time: clock.time,
            fraction: owned(clock.fraction)?,
            timezone: parse_timezone(name, literal, captures.timezone)?,
        })
    }

    fn write_canonical(&self, out: &mut String) {
        let utc = self.utc();
        out.push_str(&format!(
            "{:02}:{:02}:{:02}",
            utc.hour(),
            utc.minute(),
            utc.second()
        ));
        write_fraction(out, &self.fraction);
        if self.timezone.is_some() {
            write_timezone(out, FixedOffset::east_opt(0));
        }
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Time {}

impl Hash for Time {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        Time {
            time: time.with_nanosecond(0).unwrap_or(time),
            fraction: String::new(),
            timezone: None,
        }
    }
}

impl_literal_traits!(Time);
