//! Implementation of a `DateDuration`

use crate::{designator::Designator, DurationResult};

use super::validate_magnitude;

/// `DateDuration` holds the unsigned magnitudes of the date section of a
/// `Duration`: years, months, weeks and days.
///
/// A designator that was not written is zero.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct DateDuration {
    years: f64,
    months: f64,
    weeks: f64,
    days: f64,
}

impl DateDuration {
    /// Creates a new, non-validated `DateDuration`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(years: f64, months: f64, weeks: f64, days: f64) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
        }
    }

    /// Creates a new `DateDuration` with provided values.
    ///
    /// Every magnitude must be finite and non-negative.
    pub fn new(years: f64, months: f64, weeks: f64, days: f64) -> DurationResult<Self> {
        Ok(Self::new_unchecked(
            validate_magnitude(Designator::Year, years)?,
            validate_magnitude(Designator::Month, months)?,
            validate_magnitude(Designator::Week, weeks)?,
            validate_magnitude(Designator::Day, days)?,
        ))
    }

    /// Returns the magnitudes in canonical order.
    #[inline]
    #[must_use]
    pub const fn fields(&self) -> [f64; 4] {
        [self.years, self.months, self.weeks, self.days]
    }

    /// Returns whether every magnitude is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.fields().iter().all(|v| *v == 0.0)
    }

    #[inline]
    #[must_use]
    pub const fn years(&self) -> f64 {
        self.years
    }

    #[inline]
    #[must_use]
    pub const fn months(&self) -> f64 {
        self.months
    }

    #[inline]
    #[must_use]
    pub const fn weeks(&self) -> f64 {
        self.weeks
    }

    #[inline]
    #[must_use]
    pub const fn days(&self) -> f64 {
        self.days
    }

    /// Returns the magnitude for `designator`, or zero for a time designator.
    #[must_use]
    pub const fn get(&self, designator: Designator) -> f64 {
        match designator {
            Designator::Year => self.years,
            Designator::Month => self.months,
            Designator::Week => self.weeks,
            Designator::Day => self.days,
            Designator::Hour | Designator::Minute | Designator::Second => 0.0,
        }
    }

    /// Stores `value` for a date designator.
    pub(crate) fn set(&mut self, designator: Designator, value: f64) {
        debug_assert_eq!(designator.section(), crate::Section::Date);
        match designator {
            Designator::Year => self.years = value,
            Designator::Month => self.months = value,
            Designator::Week => self.weeks = value,
            Designator::Day => self.days = value,
            Designator::Hour | Designator::Minute | Designator::Second => {}
        }
    }
}
