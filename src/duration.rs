//! The `xsd:duration` datatype.
//!
//! A duration is a signed pair of a month count and a second count. The canonical form
//! folds months into years and months, and seconds into days, hours, minutes and seconds,
//! omitting zero components.
//!
//! | Literal | Canonical |
//! |---------|-----------|
//! | `P13M` | `P1Y1M` |
//! | `PT36H` | `P1DT12H` |
//! | `-P0D` | `PT0S` |
//! | `PT1.500S` | `PT1.5S` |

use crate::lexical::owned;
use crate::matcher::{self, group};
use crate::{Datatype, Error, Result, XsdType};
use num_bigint::BigUint;
use num_traits::Zero;
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const PATTERN: &str = concat!(
    r"^(?P<sign>-)?P",
    r"(?:(?P<years>[0-9]+)Y)?(?:(?P<months>[0-9]+)M)?(?:(?P<days>[0-9]+)D)?",
    r"(?P<time>T(?:(?P<hours>[0-9]+)H)?(?:(?P<minutes>[0-9]+)M)?",
    r"(?:(?P<seconds>[0-9]+)(?:\.(?P<fraction>[0-9]+))?S)?)?$"
);

static MATCHER: LazyLock<Regex> = LazyLock::new(|| matcher::compile(PATTERN));

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u32 = 24 * SECONDS_PER_HOUR;

/// Captures of a duration literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DurationCaptures<'t> {
    pub negative: bool,
    pub years: Option<&'t str>,
    pub months: Option<&'t str>,
    pub days: Option<&'t str>,
    pub hours: Option<&'t str>,
    pub minutes: Option<&'t str>,
    pub seconds: Option<&'t str>,
    pub fraction: Option<&'t str>,
}

impl DurationCaptures<'_> {
    fn has_date_part(&self) -> bool {
        self.years.is_some() || self.months.is_some() || self.days.is_some()
    }

    fn has_time_part(&self) -> bool {
        self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some()
    }
}

/// An `xsd:duration` value.
///
/// Stored normalized: the sign is dropped from a zero duration and trailing zeros are
/// dropped from the fractional seconds, so derived equality compares values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Duration {
    negative: bool,
    months: BigUint,
    seconds: BigUint,
    fraction: String,
}

impl Duration {
    /// Creates a duration from total months, whole seconds and fractional second digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `fraction` holds anything but ASCII digits,
    /// or [`Error::OutOfMemory`] if it cannot be copied.
    pub fn new(negative: bool, months: BigUint, seconds: BigUint, fraction: &str) -> Result<Self> {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_argument(
                Datatype::Duration.name(),
                fraction,
                "fractional seconds must be decimal digits",
            ));
        }
        let fraction = owned(fraction.trim_end_matches('0'))?;
        let zero = months.is_zero() && seconds.is_zero() && fraction.is_empty();
        Ok(Duration {
            negative: negative && !zero,
            months,
            seconds,
            fraction,
        })
    }

    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Total months, years included.
    #[inline]
    #[must_use]
    pub fn months(&self) -> &BigUint {
        &self.months
    }

    /// Total whole seconds, days included.
    #[inline]
    #[must_use]
    pub fn seconds(&self) -> &BigUint {
        &self.seconds
    }

    #[inline]
    #[must_use]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.months.is_zero() && self.seconds.is_zero() && self.fraction.is_empty()
    }
}

fn number(text: Option<&str>) -> BigUint {
    text.and_then(|text| text.parse().ok()).unwrap_or_default()
}

fn div_rem(value: &BigUint, divisor: u32) -> (BigUint, BigUint) {
    let divisor = BigUint::from(divisor);
    (value / &divisor, value % &divisor)
}

fn write_component(out: &mut String, amount: &BigUint, designator: char) {
    if !amount.is_zero() {
        out.push_str(&amount.to_string());
        out.push(designator);
    }
}

impl XsdType for Duration {
    const DATATYPE: Datatype = Datatype::Duration;
    type Captures<'t> = DurationCaptures<'t>;

    fn captures(literal: &str) -> Option<DurationCaptures<'_>> {
        let found = MATCHER.captures(literal)?;
        let captures = DurationCaptures {
            negative: group(&found, "sign").is_some(),
            years: group(&found, "years"),
            months: group(&found, "months"),
            days: group(&found, "days"),
            hours: group(&found, "hours"),
            minutes: group(&found, "minutes"),
            seconds: group(&found, "seconds"),
            fraction: group(&found, "fraction"),
        };
        // `P` and a `T` with nothing after it are not durations.
        let bare_time = group(&found, "time").is_some() && !captures.has_time_part();
        if bare_time || !(captures.has_date_part() || captures.has_time_part()) {
            return None;
        }
        Some(captures)
    }

    fn from_captures(_literal: &str, captures: DurationCaptures<'_>) -> Result<Self> {
        let months = number(captures.years) * 12u32 + number(captures.months);
        let seconds = number(captures.days) * SECONDS_PER_DAY
            + number(captures.hours) * SECONDS_PER_HOUR
            + number(captures.minutes) * SECONDS_PER_MINUTE
            + number(captures.seconds);
        Duration::new(
            captures.negative,
            months,
            seconds,
            captures.fraction.unwrap_or_default(),
        )
    }

    fn write_canonical(&self, out: &mut String) {
        if self.is_zero() {
            out.push_str("PT0S");
            return;
        }
        if self.negative {
            out.push('-');
        }
        out.push('P');

        let (years, months) = div_rem(&self.months, 12);
        let (days, clock) = div_rem(&self.seconds, SECONDS_PER_DAY);
        let (hours, rest) = div_rem(&clock, SECONDS_PER_HOUR);
        let (minutes, seconds) = div_rem(&rest, SECONDS_PER_MINUTE);
        write_component(out, &years, 'Y');
        write_component(out, &months, 'M');
        write_component(out, &days, 'D');

        if clock.is_zero() && self.fraction.is_empty() {
            return;
        }
        out.push('T');
        write_component(out, &hours, 'H');
        write_component(out, &minutes, 'M');
        if !seconds.is_zero() || !self.fraction.is_empty() {
            out.push_str(&seconds.to_string());
            if !self.fraction.is_empty() {
                out.push('.');
                out.push_str(&self.fraction);
            }
            out.push('S');
        }
    }
}

impl_literal_traits!(Duration);

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(literal: &str) -> String {
        Duration::parse(literal).unwrap().canonical_literal()
    }

    #[test]
    fn test_lexical_space() {
        for literal in [
            "P1Y2M3DT10H30M",
            "P0Y",
            "-P120D",
            "PT0.5S",
            "P1DT2S",
            "PT100000000000000000000H",
        ] {
            assert!(Duration::validate(literal), "{literal:?} should be valid");
        }
        for literal in [
            "", "P", "PT", "P1YT", "1Y", "P-1Y", "P1.5Y", "PT1.S", "PT.5S", "P1D2Y", "+P1D",
            "P1DT", "p1d",
        ] {
            assert!(!Duration::validate(literal), "{literal:?} should be invalid");
        }
    }

    #[test]
    fn test_canonical_folding() {
        for (literal, expected) in [
            ("P1Y2M3DT10H30M", "P1Y2M3DT10H30M"),
            ("P13M", "P1Y1M"),
            ("P12M", "P1Y"),
            ("PT36H", "P1DT12H"),
            ("PT90M", "PT1H30M"),
            ("PT3661S", "PT1H1M1S"),
            ("PT1.500S", "PT1.5S"),
            ("PT0.0S", "PT0S"),
            ("P0Y", "PT0S"),
            ("-P0D", "PT0S"),
            ("-PT1S", "-PT1S"),
            ("P0DT0.25S", "PT0.25S"),
        ] {
            assert_eq!(canonical(literal), expected, "canonical form of {literal:?}");
        }
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(
            Duration::parse("PT60M").unwrap(),
            Duration::parse("PT1H").unwrap()
        );
        assert_eq!(Duration::parse("-P0D").unwrap(), Duration::parse("PT0S").unwrap());
        assert_ne!(Duration::parse("P1M").unwrap(), Duration::parse("P30D").unwrap());
    }

    #[test]
    fn test_new_rejects_non_digit_fraction() {
        for fraction in ["x", "5a", "-1", " 5", "\u{0665}"] {
            let err = Duration::new(false, 0u32.into(), 0u32.into(), fraction).unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::InvalidArgument, "{fraction:?}");
        }

        let value = Duration::new(true, 0u32.into(), 90u32.into(), "250").unwrap();
        assert_eq!(value.canonical_literal(), "-PT1M30.25S");
        assert_eq!(Duration::parse(&value.canonical_literal()).unwrap(), value);
    }

    #[test]
    fn test_totals() {
        let value = Duration::parse("-P1Y1DT1M").unwrap();
        assert!(value.is_negative());
        assert_eq!(value.months(), &BigUint::from(12u32));
        assert_eq!(value.seconds(), &BigUint::from(86_460u32));
    }
}
