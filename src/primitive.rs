//! Implementation of the `FiniteF64` primitive.

use crate::{DateTimeError, DateTimeResult};
use num_traits::{AsPrimitive, FromPrimitive};

/// A float that is guaranteed to be finite.
///
/// Used for the fractional-seconds component of an interval, where
/// `NaN`/infinity would poison every downstream measurement.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct FiniteF64(pub(crate) f64);

impl FiniteF64 {
    /// Returns the wrapped value.
    #[inline]
    #[must_use]
    pub fn as_inner(&self) -> f64 {
        self.0
    }

    /// Returns whether the value is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    #[inline]
    pub fn checked_add(&self, other: &Self) -> DateTimeResult<Self> {
        let result = Self(self.0 + other.0);
        if !result.0.is_finite() {
            return Err(DateTimeError::range().with_message("number value is not a finite value."));
        }
        Ok(result)
    }

    #[inline]
    pub(crate) fn unchecked_mul(&self, other: f64) -> Self {
        Self(self.0 * other)
    }
}

impl AsPrimitive<i64> for FiniteF64 {
    fn as_(self) -> i64 {
        self.0 as i64
    }
}

impl TryFrom<f64> for FiniteF64 {
    type Error = DateTimeError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DateTimeError::range().with_message("number value is not a finite value."));
        }
        Ok(Self(value))
    }
}

impl TryFrom<i64> for FiniteF64 {
    type Error = DateTimeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let result = f64::from_i64(value)
            .ok_or(DateTimeError::range().with_message("value exceeded a valid range."))?;
        Ok(Self(result))
    }
}

impl From<u32> for FiniteF64 {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl PartialEq<f64> for FiniteF64 {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for FiniteF64 {
    fn partial_cmp(&self, other: &f64) -> Option<core::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

#[cfg(test)]
mod tests {
    use super::FiniteF64;

    #[test]
    fn rejects_non_finite() {
        assert!(FiniteF64::try_from(f64::NAN).is_err());
        assert!(FiniteF64::try_from(f64::INFINITY).is_err());
        assert!(FiniteF64::try_from(0.25).is_ok());
    }

    #[test]
    fn checked_add_overflow() {
        let max = FiniteF64::try_from(f64::MAX).unwrap();
        assert!(max.checked_add(&max).is_err());
        let half = FiniteF64::try_from(0.5).unwrap();
        assert_eq!(half.checked_add(&half).unwrap(), 1.0);
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(FiniteF64::from(250_000u32), 250_000.0);
        assert_eq!(FiniteF64::try_from(86_400i64).unwrap(), 86_400.0);
    }
}
