//! This module implements the internal ISO field slots.
//!
//! The three slot records are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` represents a calendar year, month, and day; an `IsoTime`
//! a wall-clock hour, minute, second, and microsecond. An `IsoDateTime`
//! has the slots of both.

use crate::{utils, DateTimeError, DateTimeResult};

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` slots.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Creates a new validated `IsoDateTime`.
    pub fn new(date: IsoDate, time: IsoTime) -> DateTimeResult<Self> {
        if !date.is_valid() {
            return Err(DateTimeError::range().with_message("not a valid ISO date."));
        }
        if !time.is_valid() {
            return Err(DateTimeError::range().with_message("not a valid ISO time."));
        }
        Ok(Self::new_unchecked(date, time))
    }

    /// Returns the epoch seconds of this date and time, prior to any
    /// offset adjustment.
    pub(crate) fn to_epoch_seconds(self) -> i64 {
        self.date.to_epoch_days() * 86_400 + i64::from(self.time.seconds_of_day())
    }
}

// ==== `IsoDate` section ====

/// `IsoDate` serves as a record for a calendar year, month, and day.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, rejecting any invalid field combination.
    pub fn try_new(year: i32, month: i32, day: i32) -> DateTimeResult<Self> {
        if !is_valid_date(year, month, day) {
            return Err(DateTimeError::range().with_message("not a valid ISO date."));
        }
        // NOTE: Values have been verified to be in a u8 range.
        Ok(Self::new_unchecked(year, month as u8, day as u8))
    }

    /// Functionally the same as Date's abstract operation `MakeDay`.
    #[inline]
    pub(crate) fn to_epoch_days(self) -> i64 {
        utils::epoch_days_from_date(self.year, self.month, self.day)
    }

    /// Returns if the current `IsoDate` is valid.
    pub(crate) fn is_valid(self) -> bool {
        is_valid_date(self.year, self.month.into(), self.day.into())
    }
}

// ==== `IsoTime` section ====

/// An `IsoTime` record that contains wall-clock time slots.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoTime {
    pub hour: u8,         // 0..=23
    pub minute: u8,       // 0..=59
    pub second: u8,       // 0..=59
    pub microsecond: u32, // 0..=999_999
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, microsecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// Creates a new `IsoTime`, rejecting any invalid field combination.
    pub fn try_new(hour: i32, minute: i32, second: i32, microsecond: i32) -> DateTimeResult<Self> {
        if !is_valid_time(hour, minute, second, microsecond) {
            return Err(DateTimeError::range().with_message("not a valid ISO time."));
        }
        Ok(Self::new_unchecked(
            hour as u8,
            minute as u8,
            second as u8,
            microsecond as u32,
        ))
    }

    /// Returns if the current `IsoTime` is valid.
    pub(crate) fn is_valid(self) -> bool {
        is_valid_time(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
            self.microsecond as i32,
        )
    }

    /// Returns the whole seconds elapsed since the start of the day.
    #[inline]
    pub(crate) fn seconds_of_day(&self) -> u32 {
        u32::from(self.hour) * 3_600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

// ==== Validation utilities ====

// Determines if the month and day are valid for the given year.
#[inline]
fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    let days_in_month = i32::from(utils::iso_days_in_month(year, month as u8));
    (1..=days_in_month).contains(&day)
}

#[inline]
fn is_valid_time(hour: i32, minute: i32, second: i32, microsecond: i32) -> bool {
    if !(0..=23).contains(&hour) {
        return false;
    }

    let min_sec = 0..=59;
    if !min_sec.contains(&minute) || !min_sec.contains(&second) {
        return false;
    }

    (0..=999_999).contains(&microsecond)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_validation() {
        assert!(IsoDate::try_new(2024, 2, 29).is_ok());
        assert!(IsoDate::try_new(2023, 2, 29).is_err());
        assert!(IsoDate::try_new(2023, 13, 1).is_err());
        assert!(IsoDate::try_new(2023, 0, 1).is_err());
        assert!(IsoDate::try_new(2023, 4, 31).is_err());
    }

    #[test]
    fn time_validation() {
        assert!(IsoTime::try_new(23, 59, 59, 999_999).is_ok());
        assert!(IsoTime::try_new(24, 0, 0, 0).is_err());
        assert!(IsoTime::try_new(0, 60, 0, 0).is_err());
        assert!(IsoTime::try_new(0, 0, 0, 1_000_000).is_err());
    }

    #[test]
    fn epoch_seconds_for_midnight() {
        let dt = IsoDateTime::new(
            IsoDate::new_unchecked(2024, 1, 1),
            IsoTime::default(),
        )
        .unwrap();
        assert_eq!(dt.to_epoch_seconds(), 1_704_067_200);
    }
}
