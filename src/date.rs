//! The `xsd:date` datatype.
//!
//! A calendar date with an optional timezone. The canonical form keeps the timezone,
//! spelling a zero offset as `Z`.
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::{Date, XsdType};
//!
//! assert_eq!(Date::parse("2024-02-29+00:00").unwrap().canonical_literal(), "2024-02-29Z");
//! assert!(!Date::validate("2023-02-29"));
//! ```

use crate::calendar::{parse_date, parse_timezone, write_timezone, write_year, CalendarCaptures};
use crate::matcher;
use crate::{Datatype, Result, XsdType};
use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const PATTERN: &str = concat!("^", date_pattern!(), timezone_pattern!(), "$");

static MATCHER: LazyLock<Regex> = LazyLock::new(|| matcher::compile(PATTERN));

/// A calendar date with an optional timezone offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Date {
    date: NaiveDate,
    timezone: Option<FixedOffset>,
}

impl Date {
    #[must_use]
    pub fn new(date: NaiveDate, timezone: Option<FixedOffset>) -> Self {
        Date { date, timezone }
    }

    #[inline]
    #[must_use]
    pub fn naive_date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    #[must_use]
    pub fn timezone(&self) -> Option<FixedOffset> {
        self.timezone
    }

    /// Seconds since the Unix epoch at the start of this date.
    ///
    /// A date without timezone is taken to be in UTC.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xsd_literal::{Date, XsdType};
    ///
    /// assert_eq!(Date::parse("1970-01-02").unwrap().timestamp(), 86_400);
    /// assert_eq!(Date::parse("1970-01-02+01:00").unwrap().timestamp(), 82_800);
    /// ```
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        let offset = self.timezone.map_or(0, |tz| tz.local_minus_utc());
        self.date.and_time(NaiveTime::default()).and_utc().timestamp() - i64::from(offset)
    }
}

impl XsdType for Date {
    const DATATYPE: Datatype = Datatype::Date;
    type Captures<'t> = CalendarCaptures<'t>;

    fn captures(literal: &str) -> Option<CalendarCaptures<'_>> {
        let captures = MATCHER.captures(literal)?;
        Some(CalendarCaptures::from_regex(&captures))
    }

    fn from_captures(literal: &str, captures: CalendarCaptures<'_>) -> Result<Self> {
        let name = Datatype::Date.name();
        Ok(Date {
            date: parse_date(name, literal, &captures)?,
            timezone: parse_timezone(name, literal, captures.timezone)?,
        })
    }

    fn write_canonical(&self, out: &mut String) {
        write_year(out, self.date.year());
        out.push_str(&format!("-{:02}-{:02}", self.date.month(), self.date.day()));
        write_timezone(out, self.timezone);
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::new(date, None)
    }
}

impl_literal_traits!(Date);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dates() {
        for literal in [
            "2024-02-29",
            "0001-01-01",
            "0000-01-01",
            "-0044-03-15",
            "12345-06-07",
            "2020-12-31Z",
            "2020-12-31-14:00",
        ] {
            assert!(Date::validate(literal), "{literal:?} should be valid");
        }
    }

    #[test]
    fn test_invalid_dates() {
        for literal in [
            "",
            "2023-02-29",
            "2023-04-31",
            "2023-13-01",
            "2023-00-10",
            "99-01-01",
            "02023-01-01",
            "2023-1-01",
            "2023-01-01T00:00:00",
            "2023-01-01+15:00",
            "2023-01-01z",
        ] {
            assert!(!Date::validate(literal), "{literal:?} should be invalid");
        }
    }

    #[test]
    fn test_month_day_mismatch_is_value_level() {
        assert!(Date::matches("2023-04-31"));
        assert!(!Date::validate("2023-04-31"));
    }

    #[test]
    fn test_canonical_forms() {
        for (literal, canonical) in [
            ("2024-02-29", "2024-02-29"),
            ("2024-02-29-00:00", "2024-02-29Z"),
            ("2024-02-29+05:30", "2024-02-29+05:30"),
            ("-0044-03-15", "-0044-03-15"),
        ] {
            assert_eq!(Date::parse(literal).unwrap().canonical_literal(), canonical);
        }
    }
}
