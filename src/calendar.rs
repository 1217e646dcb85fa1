//! Pieces shared by the calendar datatypes: captures, timezones, years and fractional
//! seconds.

use crate::matcher::group;
use crate::{Error, Result};
use chrono::{FixedOffset, NaiveDate, NaiveTime};
use regex::Captures;

const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Captures of a `date`, `dateTime` or `time` literal.
///
/// Fields a datatype's grammar does not have are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CalendarCaptures<'t> {
    pub year: Option<&'t str>,
    pub month: Option<&'t str>,
    pub day: Option<&'t str>,
    pub hour: Option<&'t str>,
    pub minute: Option<&'t str>,
    pub second: Option<&'t str>,
    pub fraction: Option<&'t str>,
    pub timezone: Option<&'t str>,
}

impl<'t> CalendarCaptures<'t> {
    pub(crate) fn from_regex(captures: &Captures<'t>) -> Self {
        CalendarCaptures {
            year: group(captures, "year"),
            month: group(captures, "month"),
            day: group(captures, "day"),
            hour: group(captures, "hour"),
            minute: group(captures, "minute"),
            second: group(captures, "second"),
            fraction: group(captures, "fraction"),
            timezone: group(captures, "timezone"),
        }
    }
}

#[inline]
fn number(text: Option<&str>) -> u32 {
    text.and_then(|text| text.parse().ok()).unwrap_or(0)
}

/// Parses a timezone designator: `Z` or `±hh:mm` with an offset of at most 14 hours.
pub(crate) fn parse_timezone(
    datatype: &'static str,
    literal: &str,
    text: Option<&str>,
) -> Result<Option<FixedOffset>> {
    let Some(text) = text else {
        return Ok(None);
    };
    if text == "Z" {
        return Ok(FixedOffset::east_opt(0));
    }

    let invalid = || Error::invalid_argument(datatype, literal, "timezone offset out of range");
    let (sign, rest) = text.split_at(1);
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    let total = hours * 60 + minutes;
    if minutes > 59 || total > MAX_OFFSET_MINUTES {
        return Err(invalid());
    }
    let seconds = if sign == "-" { -total * 60 } else { total * 60 };
    FixedOffset::east_opt(seconds).map(Some).ok_or_else(invalid)
}

/// Writes `Z` for a zero offset and `±hh:mm` otherwise.
pub(crate) fn write_timezone(out: &mut String, timezone: Option<FixedOffset>) {
    let Some(offset) = timezone else {
        return;
    };
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        out.push('Z');
        return;
    }
    let minutes = seconds.unsigned_abs() / 60;
    out.push(if seconds < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}:{:02}", minutes / 60, minutes % 60));
}

/// Builds the calendar date named by the `year`, `month` and `day` groups.
///
/// Years follow astronomical numbering: `0000` is 1 BCE and `-0001` is 2 BCE.
pub(crate) fn parse_date(
    datatype: &'static str,
    literal: &str,
    captures: &CalendarCaptures<'_>,
) -> Result<NaiveDate> {
    let year: i32 = captures
        .year
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| Error::invalid_argument(datatype, literal, "year out of range"))?;
    let month = number(captures.month);
    let day = number(captures.day);
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::invalid_argument(datatype, literal, "no such calendar date"))
}

/// Time of day named by the `hour`, `minute` and `second` groups.
pub(crate) struct ClockTime<'t> {
    pub time: NaiveTime,
    pub fraction: &'t str,
    /// `24:00:00`, the end of the day.
    pub end_of_day: bool,
}

pub(crate) fn parse_clock<'t>(
    datatype: &'static str,
    literal: &str,
    captures: &CalendarCaptures<'t>,
) -> Result<ClockTime<'t>> {
    let hour = number(captures.hour);
    let minute = number(captures.minute);
    let second = number(captures.second);
    let fraction = captures.fraction.unwrap_or_default();

    if hour == 24 {
        if minute == 0 && second == 0 && fraction.bytes().all(|b| b == b'0') {
            return Ok(ClockTime {
                time: NaiveTime::default(),
                fraction: "",
                end_of_day: true,
            });
        }
        return Err(Error::invalid_argument(
            datatype,
            literal,
            "24:00:00 is the only valid time in hour 24",
        ));
    }

    let time = NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| Error::invalid_argument(datatype, literal, "no such time of day"))?;
    Ok(ClockTime {
        time,
        fraction,
        end_of_day: false,
    })
}

/// Writes a year with at least four digits.
pub(crate) fn write_year(out: &mut String, year: i32) {
    if year < 0 {
        out.push('-');
    }
    out.push_str(&format!("{:04}", year.unsigned_abs()));
}

/// Writes `.digits` with trailing zeros removed, or nothing when no digit remains.
pub(crate) fn write_fraction(out: &mut String, fraction: &str) {
    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
}
