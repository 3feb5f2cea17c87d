//! This module implements `Interval` along with its measurement and
//! normalization operations.

use alloc::format;
use core::cmp::Ordering;
use core::str::FromStr;

use ixdtf::{parsers::IsoDurationParser, records::TimeDurationRecord};
use num_traits::AsPrimitive;
use writeable::Writeable;

use crate::{
    parsers::{parse_relative_date, FormattableInterval},
    primitive::FiniteF64,
    DateTimeError, DateTimeResult, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};


/// A duration value with calendar and clock components.
///
/// Components are unsigned magnitudes; the direction of the interval is
/// carried separately by the `invert` flag. An interval produced by
/// date arithmetic that already resolved calendar ambiguity may carry a
/// resolved total-day count in `total_days`, which takes precedence over
/// the calendar components during measurement.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Interval {
    /// The `years` component.
    pub years: u32,
    /// The `months` component.
    pub months: u32,
    /// The `days` component.
    pub days: u64,
    /// The `hours` component.
    pub hours: u64,
    /// The `minutes` component.
    pub minutes: u64,
    /// The `seconds` component.
    pub seconds: u64,
    /// The fractional-seconds component, `0.0 <= f < 1.0`.
    pub fraction: FiniteF64,
    /// Whether the interval points backward in time.
    pub invert: bool,
    /// A resolved total-day count, when one is known.
    pub total_days: Option<u64>,
}

/// The accepted input shapes for [`Interval::normalize`].
#[derive(Debug, Clone, Copy)]
pub enum IntervalInput<'a> {
    /// An interval already in canonical form.
    Interval(Interval),
    /// A signed count of days.
    Days(i64),
    /// A relative-date expression, e.g. `"3 days"`.
    Relative(&'a str),
}

impl<'a> From<Interval> for IntervalInput<'a> {
    fn from(value: Interval) -> Self {
        Self::Interval(value)
    }
}

impl<'a> From<i64> for IntervalInput<'a> {
    fn from(value: i64) -> Self {
        Self::Days(value)
    }
}

impl<'a> From<&'a str> for IntervalInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Relative(value)
    }
}

// ==== Creation methods ====

impl Interval {
    /// Creates a new `Interval` from component magnitudes.
    #[inline]
    #[must_use]
    pub const fn new(
        years: u32,
        months: u32,
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            fraction: FiniteF64(0.0),
            invert: false,
            total_days: None,
        }
    }

    /// Creates an `Interval` equivalent to the provided count of days.
    #[inline]
    #[must_use]
    pub fn from_days(days: i64) -> Self {
        Self {
            days: days.unsigned_abs(),
            invert: days < 0,
            ..Self::default()
        }
    }

    /// Creates an `Interval` from a relative-date expression such as
    /// `"3 days"` or `"1 day 2 hours ago"`.
    ///
    /// Terms accumulate per unit and weeks fold into days. The net
    /// components must all share one direction; an expression mixing
    /// directions cannot be represented by a single interval value.
    pub fn from_relative_str(source: &str) -> DateTimeResult<Self> {
        let record = parse_relative_date(source)?;
        let days = record
            .weeks
            .checked_mul(7)
            .and_then(|weeks| weeks.checked_add(record.days))
            .ok_or(
                DateTimeError::range().with_message("relative-date days exceeded a valid range."),
            )?;

        let components = [
            record.years,
            record.months,
            days,
            record.hours,
            record.minutes,
            record.seconds,
        ];
        let mut invert = false;
        if components.iter().any(|&component| component < 0) {
            if components.iter().any(|&component| component > 0) {
                return Err(DateTimeError::r#type().with_message(
                    "relative-date expression mixes directions and has no interval form.",
                ));
            }
            invert = true;
        }
        invert ^= record.ago;

        let years = u32::try_from(components[0].unsigned_abs())
            .map_err(|_| DateTimeError::range().with_message("years exceeded a valid range."))?;
        let months = u32::try_from(components[1].unsigned_abs())
            .map_err(|_| DateTimeError::range().with_message("months exceeded a valid range."))?;

        Ok(Self {
            invert,
            ..Self::new(
                years,
                months,
                components[2].unsigned_abs(),
                components[3].unsigned_abs(),
                components[4].unsigned_abs(),
                components[5].unsigned_abs(),
            )
        })
    }

    /// Normalizes any accepted input shape into a canonical `Interval`.
    ///
    /// An interval value passes through unchanged, an integer becomes a
    /// day count, and a string is parsed as a relative-date expression.
    pub fn normalize<'a>(value: impl Into<IntervalInput<'a>>) -> DateTimeResult<Self> {
        match value.into() {
            IntervalInput::Interval(interval) => Ok(interval),
            IntervalInput::Days(days) => Ok(Self::from_days(days)),
            IntervalInput::Relative(source) => Self::from_relative_str(source),
        }
    }

    /// Attaches a fractional-seconds component.
    pub fn with_fraction(mut self, fraction: FiniteF64) -> DateTimeResult<Self> {
        if fraction < 0.0 || fraction >= 1.0 {
            return Err(DateTimeError::range()
                .with_message("fractional seconds must be within 0.0 and 1.0."));
        }
        self.fraction = fraction;
        Ok(self)
    }

    /// Attaches a resolved total-day count.
    #[inline]
    #[must_use]
    pub fn with_total_days(mut self, total_days: u64) -> Self {
        self.total_days = Some(total_days);
        self
    }
}

// ==== Measurement methods ====

impl Interval {
    /// Computes the total duration of this interval in whole seconds.
    ///
    /// A resolved total-day count, when present, supplies the day
    /// contribution even when calendar components are also set. Without
    /// one, non-zero year or month components make the conversion
    /// ambiguous, as those units have no fixed length in seconds. The
    /// direction flag is not applied; the result is a magnitude.
    pub fn to_seconds(&self) -> DateTimeResult<i64> {
        let days = match self.total_days {
            Some(days) => days,
            None => {
                if self.years != 0 || self.months != 0 {
                    return Err(DateTimeError::runtime().with_message(
                        "ambiguous interval: years and months have no fixed length in seconds.",
                    ));
                }
                self.days
            }
        };

        let total = i128::from(days) * i128::from(SECONDS_PER_DAY)
            + i128::from(self.hours) * i128::from(SECONDS_PER_HOUR)
            + i128::from(self.minutes) * i128::from(SECONDS_PER_MINUTE)
            + i128::from(self.seconds);
        i64::try_from(total)
            .map_err(|_| DateTimeError::range().with_message("interval seconds exceeded a valid range."))
    }

    /// Computes the total duration in seconds carrying the
    /// fractional-seconds component.
    pub fn to_seconds_f64(&self) -> DateTimeResult<FiniteF64> {
        FiniteF64::try_from(self.to_seconds()?)?.checked_add(&self.fraction)
    }

    /// Compares two intervals by their total seconds.
    ///
    /// The direction flags are deliberately not consulted: two intervals
    /// of equal magnitude pointing in opposite directions compare equal.
    /// A conversion failure on either operand propagates.
    pub fn compare(&self, other: &Self) -> DateTimeResult<Ordering> {
        Ok(self.to_seconds()?.cmp(&other.to_seconds()?))
    }

    /// Returns whether two intervals are equal in both magnitude and
    /// direction.
    ///
    /// Unlike [`Interval::compare`], a conversion failure on either
    /// operand is swallowed and reported as inequality, keeping this a
    /// total predicate.
    pub fn equals(&self, other: &Self) -> bool {
        match (self.to_seconds(), other.to_seconds()) {
            (Ok(a), Ok(b)) => a == b && self.invert == other.invert,
            _ => {
                #[cfg(feature = "log")]
                log::warn!("interval equality treated an unmeasurable operand as unequal");
                false
            }
        }
    }

    /// Returns this interval's total seconds as a bucketing key.
    ///
    /// A zero-length interval keys to `0`. The key is cheap, not
    /// cryptographic or collision-free: intervals of equal seconds
    /// collide regardless of direction.
    pub fn hash_key(&self) -> DateTimeResult<i64> {
        self.to_seconds()
    }
}

// ==== Public `Interval` methods ====

impl Interval {
    /// Returns whether every component of this interval is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.fraction.is_zero()
    }

    /// Returns an `Interval` pointing in the opposite direction.
    ///
    /// Negating a zero interval is a no-op.
    #[inline]
    #[must_use]
    pub fn negated(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        Self {
            invert: !self.invert,
            ..*self
        }
    }
}

/// Projects an `Interval` onto its formattable record.
#[must_use]
pub fn interval_to_formattable(interval: &Interval) -> FormattableInterval {
    let microseconds: i64 = interval.fraction.unchecked_mul(1_000_000.0).as_();
    FormattableInterval {
        inverted: interval.invert,
        years: interval.years,
        months: interval.months,
        days: interval.days,
        hours: interval.hours,
        minutes: interval.minutes,
        seconds: interval.seconds,
        microseconds: microseconds as u32,
    }
}

impl core::fmt::Display for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        interval_to_formattable(self).write_to(f)
    }
}

// ==== FromStr trait impl ====

impl FromStr for Interval {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_record = IsoDurationParser::from_str(s)
            .parse()
            .map_err(|e| DateTimeError::syntax().with_message(format!("{e}")))?;

        let (hours, minutes, seconds, fraction_ns) = match parse_record.time {
            Some(TimeDurationRecord::Hours { hours, fraction }) => {
                let unadjusted_fraction =
                    u64::from(fraction.and_then(|x| x.to_nanoseconds()).unwrap_or(0));
                let fractional_hours_ns = unadjusted_fraction * 3600;
                let minutes = fractional_hours_ns.div_euclid(60 * 1_000_000_000);
                let fractional_minutes_ns = fractional_hours_ns.rem_euclid(60 * 1_000_000_000);

                let seconds = fractional_minutes_ns.div_euclid(1_000_000_000);
                let nanoseconds = fractional_minutes_ns.rem_euclid(1_000_000_000);

                (hours, minutes, seconds, nanoseconds as u32)
            }
            Some(TimeDurationRecord::Minutes {
                hours,
                minutes,
                fraction,
            }) => {
                let unadjusted_fraction =
                    u64::from(fraction.and_then(|x| x.to_nanoseconds()).unwrap_or(0));
                let fractional_minutes_ns = unadjusted_fraction * 60;
                let seconds = fractional_minutes_ns.div_euclid(1_000_000_000);
                let nanoseconds = fractional_minutes_ns.rem_euclid(1_000_000_000);

                (hours, minutes, seconds, nanoseconds as u32)
            }
            Some(TimeDurationRecord::Seconds {
                hours,
                minutes,
                seconds,
                fraction,
            }) => {
                let nanoseconds = fraction.and_then(|x| x.to_nanoseconds()).unwrap_or(0);
                (hours, minutes, seconds, nanoseconds)
            }
            None => (0, 0, 0, 0),
        };

        let (years, months, weeks, days) = if let Some(date) = parse_record.date {
            (date.years, date.months, date.weeks, date.days)
        } else {
            (0, 0, 0, 0)
        };

        // Weeks have a fixed length; fold them into the day component.
        let days = u64::from(weeks)
            .checked_mul(7)
            .and_then(|week_days| week_days.checked_add(days))
            .ok_or(DateTimeError::range().with_message("days exceeded a valid range."))?;

        let fraction = FiniteF64::try_from(f64::from(fraction_ns) / 1_000_000_000.0)?;

        Ok(Self {
            invert: (parse_record.sign as i8) < 0,
            ..Self::new(years, months, days, hours, minutes, seconds)
        }
        .with_fraction(fraction)?)
    }
}
