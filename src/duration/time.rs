//! Implementation of a `TimeDuration`

use crate::{designator::Designator, DurationResult};

use super::validate_magnitude;

/// `TimeDuration` holds the unsigned magnitudes of the time section of a
/// `Duration`: hours, minutes and seconds.
///
/// Sub-fields are never carried over, `PT1H60M` keeps its sixty minutes.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeDuration {
    hours: f64,
    minutes: f64,
    seconds: f64,
}

impl TimeDuration {
    /// Creates a new, non-validated `TimeDuration`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(hours: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Creates a new `TimeDuration` with provided values.
    ///
    /// Every magnitude must be finite and non-negative.
    pub fn new(hours: f64, minutes: f64, seconds: f64) -> DurationResult<Self> {
        Ok(Self::new_unchecked(
            validate_magnitude(Designator::Hour, hours)?,
            validate_magnitude(Designator::Minute, minutes)?,
            validate_magnitude(Designator::Second, seconds)?,
        ))
    }

    /// Returns the magnitudes in canonical order.
    #[inline]
    #[must_use]
    pub const fn fields(&self) -> [f64; 3] {
        [self.hours, self.minutes, self.seconds]
    }

    /// Returns whether every magnitude is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.fields().iter().all(|v| *v == 0.0)
    }

    #[inline]
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.hours
    }

    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> f64 {
        self.minutes
    }

    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Returns the magnitude for `designator`, or zero for a date designator.
    #[must_use]
    pub const fn get(&self, designator: Designator) -> f64 {
        match designator {
            Designator::Hour => self.hours,
            Designator::Minute => self.minutes,
            Designator::Second => self.seconds,
            Designator::Year | Designator::Month | Designator::Week | Designator::Day => 0.0,
        }
    }

    pub(crate) fn set(&mut self, designator: Designator, value: f64) {
        debug_assert_eq!(designator.section(), crate::Section::Time);
        match designator {
            Designator::Hour => self.hours = value,
            Designator::Minute => self.minutes = value,
            Designator::Second => self.seconds = value,
            Designator::Year | Designator::Month | Designator::Week | Designator::Day => {}
        }
    }
}
