//! This module implements `Duration` along with its construction and
//! conversion methods.

use core::{fmt, str::FromStr};

use writeable::Writeable;

use crate::{
    designator::Designator,
    elapsed::{self, ElapsedTime},
    parsers::{parse_duration, FormattableDuration},
    DurationError, DurationResult, Sign,
};

mod date;
mod time;


#[doc(inline)]
pub use date::DateDuration;
#[doc(inline)]
pub use time::TimeDuration;

/// An ISO 8601 duration.
///
/// `Duration` is made up of a `DateDuration` and a `TimeDuration`, both
/// holding unsigned magnitudes, and an overall `Sign`. Every accessor
/// returns the magnitude with the sign already applied.
///
/// A `Duration` is immutable: it is built whole (from fields, from text or
/// from an [`ElapsedTime`]) and read whole (to text or to an `ElapsedTime`).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Duration {
    date: DateDuration,
    time: TimeDuration,
    sign: Sign,
}

// ==== Private Creation methods ====

impl Duration {
    /// Creates a new `Duration` from already validated parts.
    #[inline]
    pub(crate) const fn new_unchecked(date: DateDuration, time: TimeDuration, sign: Sign) -> Self {
        Self { date, time, sign }
    }
}

// ==== Public Duration API ====

impl Duration {
    /// Creates a new validated `Duration`.
    ///
    /// Magnitudes must be finite and non-negative, the direction is given
    /// by `sign` alone. Note that `days` comes before `weeks` here, unlike
    /// the canonical order used by [`DateDuration::new`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        years: f64,
        months: f64,
        days: f64,
        weeks: f64,
        hours: f64,
        minutes: f64,
        seconds: f64,
        sign: Sign,
    ) -> DurationResult<Self> {
        Ok(Self::new_unchecked(
            DateDuration::new(years, months, weeks, days)?,
            TimeDuration::new(hours, minutes, seconds)?,
            sign,
        ))
    }

    /// Creates a `Duration` from its two sections and a sign.
    #[inline]
    #[must_use]
    pub const fn from_parts(date: DateDuration, time: TimeDuration, sign: Sign) -> Self {
        Self::new_unchecked(date, time, sign)
    }

    /// Creates a `Duration` by breaking `elapsed` down into the largest
    /// units first.
    ///
    /// Years, months, weeks, days, hours and minutes receive whole numbers,
    /// the remainder is kept in fractional seconds. This never fails.
    #[must_use]
    pub fn from_elapsed(elapsed: ElapsedTime) -> Self {
        elapsed::decompose(elapsed)
    }

    /// Parses `source`, panicking if it is not a valid duration.
    ///
    /// Meant for literals known to be well formed. Use [`Duration::from_str`]
    /// for input that may be malformed.
    ///
    /// # Panics
    ///
    /// Panics with the parse error's message when `source` is invalid.
    #[must_use]
    pub fn must_parse(source: &str) -> Self {
        match parse_duration(source) {
            Ok(duration) => duration,
            Err(err) => panic!("invalid ISO 8601 duration {source:?}: {err}"),
        }
    }
}

// ==== Public `Duration` Getters ====

impl Duration {
    /// Returns a reference to the inner `DateDuration`.
    #[inline]
    #[must_use]
    pub const fn date(&self) -> &DateDuration {
        &self.date
    }

    /// Returns a reference to the inner `TimeDuration`.
    #[inline]
    #[must_use]
    pub const fn time(&self) -> &TimeDuration {
        &self.time
    }

    /// Returns the overall sign.
    #[inline]
    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the signed value for `designator`.
    #[must_use]
    pub fn get(&self, designator: Designator) -> f64 {
        let magnitude = match designator.section() {
            crate::Section::Date => self.date.get(designator),
            crate::Section::Time => self.time.get(designator),
        };
        magnitude * self.sign.as_multiplier()
    }

    /// Returns the signed `years` field of duration.
    #[inline]
    #[must_use]
    pub fn years(&self) -> f64 {
        self.get(Designator::Year)
    }

    /// Returns the signed `months` field of duration.
    #[inline]
    #[must_use]
    pub fn months(&self) -> f64 {
        self.get(Designator::Month)
    }

    /// Returns the signed `weeks` field of duration.
    #[inline]
    #[must_use]
    pub fn weeks(&self) -> f64 {
        self.get(Designator::Week)
    }

    /// Returns the signed `days` field of duration.
    #[inline]
    #[must_use]
    pub fn days(&self) -> f64 {
        self.get(Designator::Day)
    }

    /// Returns the signed `hours` field of duration.
    #[inline]
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.get(Designator::Hour)
    }

    /// Returns the signed `minutes` field of duration.
    #[inline]
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.get(Designator::Minute)
    }

    /// Returns the signed `seconds` field of duration.
    #[inline]
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.get(Designator::Second)
    }
}

// ==== Public Duration methods ====

impl Duration {
    /// Returns whether every field of the current `Duration` is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.date.is_zero() && self.time.is_zero()
    }

    /// Returns the total length of this `Duration` in nanoseconds.
    ///
    /// Each field is converted with its fixed unit length and rounded to
    /// the nearest whole nanosecond.
    #[must_use]
    pub fn to_elapsed(&self) -> ElapsedTime {
        elapsed::total(&self.date, &self.time, self.sign)
    }

    /// Returns a `Writeable` rendering this `Duration` in canonical form.
    #[inline]
    #[must_use]
    pub const fn as_formattable(&self) -> FormattableDuration {
        FormattableDuration {
            sign: self.sign,
            date: self.date,
            time: self.time,
        }
    }
}

/// Checks that a magnitude can be stored, collapsing `-0.0` to `0.0`.
pub(crate) fn validate_magnitude(designator: Designator, value: f64) -> DurationResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(DurationError::InvalidMagnitude { designator, value });
    }
    if value == 0.0 {
        return Ok(0.0);
    }
    Ok(value)
}

impl From<ElapsedTime> for Duration {
    fn from(value: ElapsedTime) -> Self {
        Self::from_elapsed(value)
    }
}

impl From<core::time::Duration> for Duration {
    fn from(value: core::time::Duration) -> Self {
        Self::from_elapsed(ElapsedTime::from(value))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_formattable().write_to(f)
    }
}

// ==== FromStr trait impl ====

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}
