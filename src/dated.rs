//! This module implements the write-once date/time capability for
//! owning entities.

use tinystr::TinyAsciiStr;

use crate::{DateTimeError, DateTimeResult, ZonedDateTime};

/// A write-once holder for an entity's point-in-time value.
///
/// The slot is created unset and accepts exactly one assignment. The
/// stored value is an owned copy, so later mutation of the source
/// cannot reach through it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeSlot {
    value: Option<ZonedDateTime>,
}

impl DateTimeSlot {
    /// Creates an unset slot.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Stores a value into the slot.
    ///
    /// The transition is permitted exactly once; a second assignment is
    /// rejected. Exclusive access through `&mut self` is what upholds
    /// the invariant under aliasing.
    pub fn set(&mut self, value: ZonedDateTime) -> DateTimeResult<()> {
        if self.value.is_some() {
            return Err(DateTimeError::runtime().with_message("cannot modify date once set."));
        }
        self.value = Some(value);
        Ok(())
    }

    /// Returns the stored value.
    pub fn get(&self) -> DateTimeResult<&ZonedDateTime> {
        self.value
            .as_ref()
            .ok_or(DateTimeError::runtime().with_message("date has not been set."))
    }

    /// Returns whether the slot holds a value.
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

/// A capability granting an entity a write-once point-in-time value and
/// the full set of accessors over it.
///
/// Implementers embed a [`DateTimeSlot`] and expose it through the two
/// required methods; every accessor is provided.
pub trait Dated {
    /// Returns the entity's embedded slot.
    fn date_time_slot(&self) -> &DateTimeSlot;

    /// Returns the entity's embedded slot for assignment.
    fn date_time_slot_mut(&mut self) -> &mut DateTimeSlot;

    /// Stores the entity's point-in-time value; valid exactly once.
    fn set_date_time(&mut self, value: ZonedDateTime) -> DateTimeResult<()> {
        self.date_time_slot_mut().set(value)
    }

    /// Returns the stored point-in-time value.
    fn date_time(&self) -> DateTimeResult<&ZonedDateTime> {
        self.date_time_slot().get()
    }

    /// Returns the Unix timestamp of the stored value.
    fn timestamp(&self) -> DateTimeResult<i64> {
        Ok(self.date_time()?.epoch_seconds())
    }

    /// Returns the calendar year of the stored value.
    fn year(&self) -> DateTimeResult<i32> {
        Ok(self.date_time()?.year())
    }

    /// Returns the month of the stored value, 1 through 12.
    fn month(&self) -> DateTimeResult<u8> {
        Ok(self.date_time()?.month())
    }

    /// Returns the day of the month of the stored value.
    fn day(&self) -> DateTimeResult<u8> {
        Ok(self.date_time()?.day())
    }

    /// Returns the day of the week of the stored value, 0 = Sunday.
    fn day_of_week(&self) -> DateTimeResult<u8> {
        Ok(self.date_time()?.day_of_week())
    }

    /// Returns the zero-based day of the year of the stored value.
    fn day_of_year(&self) -> DateTimeResult<u16> {
        Ok(self.date_time()?.day_of_year())
    }

    /// Returns the number of days in the stored value's month.
    fn days_in_month(&self) -> DateTimeResult<u8> {
        Ok(self.date_time()?.days_in_month())
    }

    /// Returns the full weekday name of the stored value.
    fn day_name(&self) -> DateTimeResult<TinyAsciiStr<9>> {
        Ok(self.date_time()?.day_name())
    }

    /// Returns the full month name of the stored value.
    fn month_name(&self) -> DateTimeResult<TinyAsciiStr<9>> {
        Ok(self.date_time()?.month_name())
    }

    /// Returns the stored value's offset from UTC in seconds.
    fn timezone_offset(&self) -> DateTimeResult<i32> {
        Ok(self.date_time()?.offset_seconds())
    }

    /// Returns whether the stored value falls on a weekday.
    fn is_weekday(&self) -> DateTimeResult<bool> {
        Ok(self.date_time()?.is_weekday())
    }

    /// Returns whether daylight saving is in effect for the stored
    /// value.
    fn is_daylight_savings(&self) -> DateTimeResult<bool> {
        Ok(self.date_time()?.is_daylight_savings())
    }
}

#[cfg(test)]
mod tests {
    use super::{Dated, DateTimeSlot};
    use crate::{error::ErrorKind, ZonedDateTime};

    #[derive(Debug, Default)]
    struct Event {
        slot: DateTimeSlot,
    }

    impl Dated for Event {
        fn date_time_slot(&self) -> &DateTimeSlot {
            &self.slot
        }

        fn date_time_slot_mut(&mut self) -> &mut DateTimeSlot {
            &mut self.slot
        }
    }

    fn reference() -> ZonedDateTime {
        ZonedDateTime::try_new_utc(2024, 1, 3, 12, 30, 45).unwrap()
    }

    #[test]
    fn set_is_write_once() {
        let mut event = Event::default();
        assert!(!event.date_time_slot().is_set());

        event.set_date_time(reference()).unwrap();
        assert!(event.date_time_slot().is_set());

        let err = event.set_date_time(reference()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Runtime);
    }

    #[test]
    fn reads_before_set_are_defined_failures() {
        let event = Event::default();
        assert_eq!(event.date_time().unwrap_err().kind(), ErrorKind::Runtime);
        assert!(event.year().is_err());
        assert!(event.timestamp().is_err());
    }

    #[test]
    fn accessors_delegate_to_the_stored_value() {
        let mut event = Event::default();
        let value = reference();
        event.set_date_time(value).unwrap();

        assert_eq!(*event.date_time().unwrap(), value);
        assert_eq!(event.year().unwrap(), value.year());
        assert_eq!(event.month().unwrap(), 1);
        assert_eq!(event.day().unwrap(), 3);
        assert_eq!(event.day_of_week().unwrap(), 3);
        assert_eq!(event.day_of_year().unwrap(), 2);
        assert_eq!(event.days_in_month().unwrap(), 31);
        assert_eq!(event.day_name().unwrap().as_str(), "Wednesday");
        assert_eq!(event.month_name().unwrap().as_str(), "January");
        assert_eq!(event.timezone_offset().unwrap(), 0);
        assert!(event.is_weekday().unwrap());
        assert!(!event.is_daylight_savings().unwrap());
        assert_eq!(event.timestamp().unwrap(), 1_704_285_045);
    }

    #[test]
    fn stored_value_is_an_owned_copy() {
        let mut event = Event::default();
        let mut value = reference();
        event.set_date_time(value).unwrap();

        // Rebinding the source cannot reach the stored copy.
        value = ZonedDateTime::try_new_utc(1999, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(event.year().unwrap(), 2024);
        assert_eq!(value.year(), 1999);
    }
}
