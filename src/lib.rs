//! The `datetime_utils` crate provides convenience helpers for interval
//! and date/time values.
//!
//! ```rust
//! use datetime_utils::{Interval, IntervalSpecBuilder};
//! use core::str::FromStr;
//!
//! // Normalize a day count into a canonical interval.
//! let interval = Interval::normalize(3).unwrap();
//! assert_eq!(interval.to_seconds().unwrap(), 259_200);
//!
//! // Build an interval specification string and construct an interval
//! // from it.
//! let spec = IntervalSpecBuilder::default()
//!     .with_years(1)
//!     .with_days(2)
//!     .with_hours(3)
//!     .build()
//!     .unwrap();
//! assert_eq!(spec, "P1Y2DT3H");
//! let parsed = Interval::from_str(&spec).unwrap();
//! assert_eq!(parsed.years, 1);
//! ```
//!
//! The crate has three surfaces: measurement and normalization helpers
//! over [`Interval`] values, field accessors over [`ZonedDateTime`]
//! values, and the [`Dated`] capability attaching a write-once
//! [`ZonedDateTime`] to any owning entity.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod iso;
pub mod parsers;
pub mod primitive;

mod dated;
mod datetime;
mod interval;

#[doc(hidden)]
pub(crate) mod utils;

/// Re-export of `TinyAsciiStr` from `tinystr`, the name type returned
/// by the weekday and month name accessors.
pub use tinystr::TinyAsciiStr;

#[doc(inline)]
pub use error::DateTimeError;

/// The crate result type.
pub type DateTimeResult<T> = Result<T, DateTimeError>;

pub use crate::{
    dated::{Dated, DateTimeSlot},
    datetime::ZonedDateTime,
    interval::{interval_to_formattable, Interval, IntervalInput},
    parsers::IntervalSpecBuilder,
};

// Relevant numeric constants
/// Seconds per day constant: 86,400
pub const SECONDS_PER_DAY: i64 = 86_400;
/// Seconds per hour constant: 3,600
pub const SECONDS_PER_HOUR: i64 = 3_600;
/// Seconds per minute constant: 60
pub const SECONDS_PER_MINUTE: i64 = 60;
