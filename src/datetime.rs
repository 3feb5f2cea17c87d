//! This module implements `ZonedDateTime`, the point-in-time value the
//! accessor helpers operate over.

use tinystr::{tinystr, TinyAsciiStr};

use crate::{
    iso::{IsoDate, IsoDateTime, IsoTime},
    utils, DateTimeError, DateTimeResult,
};

const DAY_NAMES: [TinyAsciiStr<9>; 7] = [
    tinystr!(9, "Sunday"),
    tinystr!(9, "Monday"),
    tinystr!(9, "Tuesday"),
    tinystr!(9, "Wednesday"),
    tinystr!(9, "Thursday"),
    tinystr!(9, "Friday"),
    tinystr!(9, "Saturday"),
];

const MONTH_NAMES: [TinyAsciiStr<9>; 12] = [
    tinystr!(9, "January"),
    tinystr!(9, "February"),
    tinystr!(9, "March"),
    tinystr!(9, "April"),
    tinystr!(9, "May"),
    tinystr!(9, "June"),
    tinystr!(9, "July"),
    tinystr!(9, "August"),
    tinystr!(9, "September"),
    tinystr!(9, "October"),
    tinystr!(9, "November"),
    tinystr!(9, "December"),
];

// Bounds the representable range; a day count past this has no valid
// calendar year projection.
const MAX_EPOCH_DAYS: i64 = 100_000_000;

/// A calendar date and wall-clock time with an associated UTC offset and
/// daylight-saving flag.
///
/// The value is immutable: it is `Copy`, every accessor takes `&self`,
/// and no operation mutates the underlying slots. The offset and
/// daylight-saving flag are supplied at construction; no time zone
/// database is consulted.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedDateTime {
    iso: IsoDateTime,
    offset_seconds: i32,
    dst: bool,
}

// ==== Creation methods ====

impl ZonedDateTime {
    /// Creates a new validated `ZonedDateTime`.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
        microsecond: i32,
        offset_seconds: i32,
        dst: bool,
    ) -> DateTimeResult<Self> {
        let date = IsoDate::try_new(year, month, day)?;
        let time = IsoTime::try_new(hour, minute, second, microsecond)?;
        Ok(Self {
            iso: IsoDateTime::new_unchecked(date, time),
            offset_seconds,
            dst,
        })
    }

    /// Creates a new validated `ZonedDateTime` at UTC with no daylight
    /// saving in effect.
    pub fn try_new_utc(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> DateTimeResult<Self> {
        Self::try_new(year, month, day, hour, minute, second, 0, 0, false)
    }

    /// Derives the local calendar fields from a Unix timestamp and an
    /// offset from UTC.
    pub fn from_epoch_seconds(
        epoch_seconds: i64,
        offset_seconds: i32,
        dst: bool,
    ) -> DateTimeResult<Self> {
        let local = epoch_seconds
            .checked_add(i64::from(offset_seconds))
            .ok_or(DateTimeError::range().with_message("epoch seconds exceeded a valid range."))?;
        let days = local.div_euclid(86_400);
        if days.abs() > MAX_EPOCH_DAYS {
            return Err(
                DateTimeError::range().with_message("epoch seconds exceeded a valid range.")
            );
        }
        let (year, month, day) = utils::epoch_days_to_date(days);

        let seconds_of_day = local.rem_euclid(86_400) as u32;
        let time = IsoTime::new_unchecked(
            (seconds_of_day / 3_600) as u8,
            (seconds_of_day / 60 % 60) as u8,
            (seconds_of_day % 60) as u8,
            0,
        );

        Ok(Self {
            iso: IsoDateTime::new_unchecked(IsoDate::new_unchecked(year, month, day), time),
            offset_seconds,
            dst,
        })
    }
}

// ==== Field accessors ====

impl ZonedDateTime {
    /// Returns the calendar year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.iso.date.year
    }

    /// Returns the month of the year, 1 through 12.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.iso.date.month
    }

    /// Returns the day of the month, 1 through 31.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.iso.date.day
    }

    /// Returns the hour of the day.
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.iso.time.hour
    }

    /// Returns the minute of the hour.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.iso.time.minute
    }

    /// Returns the second of the minute.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.iso.time.second
    }

    /// Returns the microsecond of the second.
    #[inline]
    #[must_use]
    pub const fn microsecond(&self) -> u32 {
        self.iso.time.microsecond
    }

    /// Returns the day of the week, 0 = Sunday through 6 = Saturday.
    #[inline]
    #[must_use]
    pub fn day_of_week(&self) -> u8 {
        utils::day_of_week_for_epoch_days(self.iso.date.to_epoch_days())
    }

    /// Returns the zero-based day of the year, 0 through 365.
    #[inline]
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        utils::day_of_year(self.year(), self.month(), self.day())
    }

    /// Returns the number of days in the value's month, 28 through 31.
    #[inline]
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        utils::iso_days_in_month(self.year(), self.month())
    }

    /// Returns the number of days in the value's year, 365 or 366.
    #[inline]
    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        utils::days_in_year(self.year())
    }

    /// Returns whether the value's year is a leap year.
    #[inline]
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        utils::in_leap_year(self.year())
    }

    /// Returns the full weekday name.
    #[inline]
    #[must_use]
    pub fn day_name(&self) -> TinyAsciiStr<9> {
        DAY_NAMES[usize::from(self.day_of_week())]
    }

    /// Returns the full month name.
    #[inline]
    #[must_use]
    pub fn month_name(&self) -> TinyAsciiStr<9> {
        MONTH_NAMES[usize::from(self.month() - 1)]
    }

    /// Returns the offset from UTC in seconds, negative west of
    /// Greenwich.
    #[inline]
    #[must_use]
    pub const fn offset_seconds(&self) -> i32 {
        self.offset_seconds
    }

    /// Returns whether the value falls on a weekday.
    #[inline]
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        !matches!(self.day_of_week(), 0 | 6)
    }

    /// Returns whether daylight saving is in effect for the value.
    #[inline]
    #[must_use]
    pub const fn is_daylight_savings(&self) -> bool {
        self.dst
    }

    /// Returns the Unix timestamp of the value in whole seconds.
    #[inline]
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.iso.to_epoch_seconds() - i64::from(self.offset_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::ZonedDateTime;

    // 2024-01-03 was a Wednesday.
    fn reference() -> ZonedDateTime {
        ZonedDateTime::try_new_utc(2024, 1, 3, 12, 30, 45).unwrap()
    }

    #[test]
    fn reference_accessors() {
        let zdt = reference();
        assert_eq!(zdt.year(), 2024);
        assert_eq!(zdt.month(), 1);
        assert_eq!(zdt.day(), 3);
        assert_eq!(zdt.day_of_week(), 3);
        assert_eq!(zdt.day_of_year(), 2);
        assert_eq!(zdt.days_in_month(), 31);
        assert_eq!(zdt.days_in_year(), 366);
        assert!(zdt.in_leap_year());
        assert!(zdt.is_weekday());
        assert!(!zdt.is_daylight_savings());
        assert_eq!(zdt.offset_seconds(), 0);
    }

    #[test]
    fn reference_names() {
        let zdt = reference();
        assert_eq!(zdt.day_name().as_str(), "Wednesday");
        assert_eq!(zdt.month_name().as_str(), "January");

        let sept = ZonedDateTime::try_new_utc(2024, 9, 1, 0, 0, 0).unwrap();
        assert_eq!(sept.day_name().as_str(), "Sunday");
        assert_eq!(sept.month_name().as_str(), "September");
    }

    #[test]
    fn weekend_predicate() {
        let saturday = ZonedDateTime::try_new_utc(2024, 1, 6, 0, 0, 0).unwrap();
        assert_eq!(saturday.day_of_week(), 6);
        assert!(!saturday.is_weekday());

        let sunday = ZonedDateTime::try_new_utc(2024, 1, 7, 0, 0, 0).unwrap();
        assert_eq!(sunday.day_of_week(), 0);
        assert!(!sunday.is_weekday());
    }

    #[test]
    fn epoch_seconds_applies_offset() {
        let utc = reference();
        assert_eq!(utc.epoch_seconds(), 1_704_285_045);

        // The same wall-clock time one hour east of Greenwich is one
        // hour earlier as an instant.
        let east = ZonedDateTime::try_new(2024, 1, 3, 12, 30, 45, 0, 3_600, false).unwrap();
        assert_eq!(east.epoch_seconds(), 1_704_285_045 - 3_600);

        let west = ZonedDateTime::try_new(2024, 1, 3, 12, 30, 45, 0, -18_000, false).unwrap();
        assert_eq!(west.epoch_seconds(), 1_704_285_045 + 18_000);
    }

    #[test]
    fn epoch_round_trip() {
        let zdt = ZonedDateTime::from_epoch_seconds(1_704_285_045, 0, false).unwrap();
        assert_eq!(zdt, reference());

        let east = ZonedDateTime::from_epoch_seconds(1_704_285_045 - 3_600, 3_600, false).unwrap();
        assert_eq!(east.hour(), 12);
        assert_eq!(east.epoch_seconds(), 1_704_285_045 - 3_600);
    }

    #[test]
    fn pre_epoch_round_trip() {
        let zdt = ZonedDateTime::from_epoch_seconds(-1, 0, false).unwrap();
        assert_eq!(zdt.year(), 1969);
        assert_eq!(zdt.month(), 12);
        assert_eq!(zdt.day(), 31);
        assert_eq!(zdt.hour(), 23);
        assert_eq!(zdt.second(), 59);
        assert_eq!(zdt.epoch_seconds(), -1);
    }

    #[test]
    fn daylight_savings_flag_is_carried() {
        let zdt = ZonedDateTime::try_new(2024, 7, 1, 12, 0, 0, 0, 7_200, true).unwrap();
        assert!(zdt.is_daylight_savings());
    }

    #[test]
    fn invalid_fields_are_rejected() {
        assert!(ZonedDateTime::try_new_utc(2023, 2, 29, 0, 0, 0).is_err());
        assert!(ZonedDateTime::try_new_utc(2023, 1, 1, 24, 0, 0).is_err());
    }
}
