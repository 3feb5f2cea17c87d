//! This module implements parsing for relative-date expressions and
//! building/formatting of interval specification strings.

use alloc::format;
use alloc::string::String;

use writeable::{impl_display_with_writeable, Writeable};

use crate::{DateTimeError, DateTimeResult};

// ==== Relative-date expression parsing ====

/// Signed per-unit totals accumulated from a relative-date expression.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RelativeDateRecord {
    pub(crate) years: i64,
    pub(crate) months: i64,
    pub(crate) weeks: i64,
    pub(crate) days: i64,
    pub(crate) hours: i64,
    pub(crate) minutes: i64,
    pub(crate) seconds: i64,
    pub(crate) ago: bool,
}

/// Parses a relative-date expression such as `"3 days"`, `"2 weeks"`, or
/// `"1 day 2 hours ago"`.
///
/// The grammar is a sequence of `<signed count> <unit>` terms separated
/// by whitespace or commas, with an optional terminating `ago` that
/// reverses the direction of the whole expression. Terms for the same
/// unit accumulate.
pub(crate) fn parse_relative_date(source: &str) -> DateTimeResult<RelativeDateRecord> {
    let mut record = RelativeDateRecord::default();
    let mut saw_term = false;
    let mut tokens = source
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|token| !token.is_empty());

    while let Some(token) = tokens.next() {
        if token.eq_ignore_ascii_case("ago") {
            if !saw_term {
                return Err(DateTimeError::syntax()
                    .with_message("\"ago\" must follow at least one count-unit term."));
            }
            if tokens.next().is_some() {
                return Err(DateTimeError::syntax()
                    .with_message("\"ago\" must terminate a relative-date expression."));
            }
            record.ago = true;
            break;
        }

        let count = token.parse::<i64>().map_err(|_| {
            DateTimeError::syntax()
                .with_message(format!("expected a signed count, found \"{token}\"."))
        })?;
        let Some(unit) = tokens.next() else {
            return Err(DateTimeError::syntax()
                .with_message("abrupt end while parsing a relative-date expression."));
        };

        let slot = match_unit(unit, &mut record)?;
        *slot = slot.checked_add(count).ok_or(
            DateTimeError::range().with_message("relative-date count exceeded a valid range."),
        )?;
        saw_term = true;
    }

    if !saw_term {
        return Err(DateTimeError::syntax().with_message("empty relative-date expression."));
    }
    Ok(record)
}

fn match_unit<'r>(
    unit: &str,
    record: &'r mut RelativeDateRecord,
) -> DateTimeResult<&'r mut i64> {
    const UNITS: [(&[&str], fn(&mut RelativeDateRecord) -> &mut i64); 7] = [
        (&["year", "years"], |r| &mut r.years),
        (&["month", "months"], |r| &mut r.months),
        (&["week", "weeks"], |r| &mut r.weeks),
        (&["day", "days"], |r| &mut r.days),
        (&["hour", "hours"], |r| &mut r.hours),
        (&["minute", "minutes", "min", "mins"], |r| &mut r.minutes),
        (&["second", "seconds", "sec", "secs"], |r| &mut r.seconds),
    ];

    for (names, accessor) in UNITS {
        if names.iter().any(|name| unit.eq_ignore_ascii_case(name)) {
            return Ok(accessor(record));
        }
    }
    Err(DateTimeError::syntax().with_message(format!("unknown relative-date unit \"{unit}\".")))
}

// ==== Interval specification building ====

/// Builder for an interval specification string following the grammar
/// `P[{Y}Y][{M}M][{W}W][{D}D][T[{H}H][{Mi}M][{S}S]]`.
///
/// Component tokens are omitted when their value is zero or negative,
/// and the `T` section is omitted entirely when the hour, minute, and
/// second components are all zero. Requesting both weeks and days is
/// rejected, as the two units are conflicting in the target grammar.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntervalSpecBuilder {
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl IntervalSpecBuilder {
    #[must_use]
    pub fn with_years(mut self, years: i64) -> Self {
        self.years = years;
        self
    }

    #[must_use]
    pub fn with_months(mut self, months: i64) -> Self {
        self.months = months;
        self
    }

    #[must_use]
    pub fn with_weeks(mut self, weeks: i64) -> Self {
        self.weeks = weeks;
        self
    }

    #[must_use]
    pub fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    #[must_use]
    pub fn with_hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    #[must_use]
    pub fn with_minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    #[must_use]
    pub fn with_seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Builds the specification string.
    pub fn build(self) -> DateTimeResult<String> {
        if self.weeks != 0 && self.days != 0 {
            return Err(DateTimeError::runtime()
                .with_message("an interval specification cannot carry both weeks and days."));
        }
        Ok(FormattableIntervalSpec {
            years: self.years,
            months: self.months,
            weeks: self.weeks,
            days: self.days,
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        }
        .write_to_string()
        .into_owned())
    }
}

#[derive(Debug, Clone, Copy)]
struct FormattableIntervalSpec {
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Writeable for FormattableIntervalSpec {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_char('P')?;
        checked_write_i64_with_suffix(self.years, 'Y', sink)?;
        checked_write_i64_with_suffix(self.months, 'M', sink)?;
        checked_write_i64_with_suffix(self.weeks, 'W', sink)?;
        checked_write_i64_with_suffix(self.days, 'D', sink)?;
        if self.hours == 0 && self.minutes == 0 && self.seconds == 0 {
            return Ok(());
        }
        sink.write_char('T')?;
        checked_write_i64_with_suffix(self.hours, 'H', sink)?;
        checked_write_i64_with_suffix(self.minutes, 'M', sink)?;
        checked_write_i64_with_suffix(self.seconds, 'S', sink)
    }
}

impl_display_with_writeable!(FormattableIntervalSpec);

// ==== Interval formatting ====

/// A formattable record of an interval's components.
#[derive(Debug, Clone, Copy)]
pub struct FormattableInterval {
    pub inverted: bool,
    pub years: u32,
    pub months: u32,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub microseconds: u32,
}

impl Writeable for FormattableInterval {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.inverted {
            sink.write_char('-')?;
        }
        sink.write_char('P')?;
        checked_write_u64_with_suffix(u64::from(self.years), 'Y', sink)?;
        checked_write_u64_with_suffix(u64::from(self.months), 'M', sink)?;
        checked_write_u64_with_suffix(self.days, 'D', sink)?;

        let date_is_zero = self.years == 0 && self.months == 0 && self.days == 0;
        let write_second = self.seconds != 0
            || self.microseconds != 0
            || (date_is_zero && self.hours == 0 && self.minutes == 0);
        if self.hours == 0 && self.minutes == 0 && !write_second {
            return Ok(());
        }

        sink.write_char('T')?;
        checked_write_u64_with_suffix(self.hours, 'H', sink)?;
        checked_write_u64_with_suffix(self.minutes, 'M', sink)?;
        if write_second {
            self.seconds.write_to(sink)?;
            if self.microseconds != 0 {
                sink.write_char('.')?;
                write_microseconds(self.microseconds, sink)?;
            }
            sink.write_char('S')?;
        }
        Ok(())
    }
}

impl_display_with_writeable!(FormattableInterval);

fn checked_write_i64_with_suffix<W: core::fmt::Write + ?Sized>(
    val: i64,
    suffix: char,
    sink: &mut W,
) -> core::fmt::Result {
    if val <= 0 {
        return Ok(());
    }
    val.write_to(sink)?;
    sink.write_char(suffix)
}

fn checked_write_u64_with_suffix<W: core::fmt::Write + ?Sized>(
    val: u64,
    suffix: char,
    sink: &mut W,
) -> core::fmt::Result {
    if val == 0 {
        return Ok(());
    }
    val.write_to(sink)?;
    sink.write_char(suffix)
}

/// Writes a microsecond value as fractional-second digits, zero padded
/// on the left and trimmed of trailing zeros.
fn write_microseconds<W: core::fmt::Write + ?Sized>(
    microseconds: u32,
    sink: &mut W,
) -> core::fmt::Result {
    let (digits, precision) = u32_to_micro_digits(microseconds);
    for digit in digits.iter().take(precision) {
        digit.write_to(sink)?;
    }
    Ok(())
}

fn u32_to_micro_digits(mut value: u32) -> ([u8; 6], usize) {
    let mut output = [0; 6];
    let mut precision = 0;
    let mut i = 6;
    while i != 0 {
        let v = (value % 10) as u8;
        value /= 10;
        if precision == 0 && v != 0 {
            precision = i;
        }
        output[i - 1] = v;
        i -= 1;
    }

    (output, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_single_term() {
        let record = parse_relative_date("3 days").unwrap();
        assert_eq!(record.days, 3);
        assert!(!record.ago);

        let record = parse_relative_date("2 weeks").unwrap();
        assert_eq!(record.weeks, 2);
    }

    #[test]
    fn relative_multiple_terms() {
        let record = parse_relative_date("1 day, 2 hours 30 minutes").unwrap();
        assert_eq!(record.days, 1);
        assert_eq!(record.hours, 2);
        assert_eq!(record.minutes, 30);
    }

    #[test]
    fn relative_accumulates_repeated_units() {
        let record = parse_relative_date("1 day 2 days").unwrap();
        assert_eq!(record.days, 3);
    }

    #[test]
    fn relative_ago() {
        let record = parse_relative_date("3 days ago").unwrap();
        assert_eq!(record.days, 3);
        assert!(record.ago);

        // A bare or leading "ago" is not a valid expression.
        assert!(parse_relative_date("ago").is_err());
        assert!(parse_relative_date("3 days ago 2 hours").is_err());
    }

    #[test]
    fn relative_signed_counts() {
        let record = parse_relative_date("-2 days").unwrap();
        assert_eq!(record.days, -2);
        let record = parse_relative_date("+4 hours").unwrap();
        assert_eq!(record.hours, 4);
    }

    #[test]
    fn relative_rejects_garbage() {
        assert!(parse_relative_date("").is_err());
        assert!(parse_relative_date("soon").is_err());
        assert!(parse_relative_date("3 dayz").is_err());
        assert!(parse_relative_date("3").is_err());
    }

    #[test]
    fn spec_builder_grammar() {
        let spec = IntervalSpecBuilder::default()
            .with_years(1)
            .with_days(2)
            .with_hours(3)
            .build()
            .unwrap();
        assert_eq!(spec, "P1Y2DT3H");

        let spec = IntervalSpecBuilder::default().build().unwrap();
        assert_eq!(spec, "P");

        let spec = IntervalSpecBuilder::default()
            .with_weeks(2)
            .with_minutes(5)
            .build()
            .unwrap();
        assert_eq!(spec, "P2WT5M");
    }

    #[test]
    fn spec_builder_omits_non_positive_components() {
        let spec = IntervalSpecBuilder::default()
            .with_years(-1)
            .with_months(6)
            .with_seconds(30)
            .build()
            .unwrap();
        assert_eq!(spec, "P6MT30S");
    }

    #[test]
    fn spec_builder_rejects_weeks_with_days() {
        let err = IntervalSpecBuilder::default()
            .with_weeks(1)
            .with_days(1)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Runtime);
    }

    #[test]
    fn micro_digit_trimming() {
        assert_eq!(u32_to_micro_digits(250_000), ([2, 5, 0, 0, 0, 0], 2));
        assert_eq!(u32_to_micro_digits(1), ([0, 0, 0, 0, 0, 1], 6));
        assert_eq!(u32_to_micro_digits(0), ([0; 6], 0));
    }
}
