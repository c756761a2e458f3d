//! The elapsed-time value and its conversion to and from a `Duration`.

use alloc::string::{String, ToString};
use core::ops::Neg;

use core_maths::CoreFloat;

use crate::{
    designator::Designator,
    duration::{DateDuration, Duration, TimeDuration},
    Sign, NS_PER_SECOND,
};

/// A signed span of time counted in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct ElapsedTime(pub(crate) i128);

impl From<i128> for ElapsedTime {
    fn from(value: i128) -> Self {
        Self(value)
    }
}

impl From<core::time::Duration> for ElapsedTime {
    fn from(value: core::time::Duration) -> Self {
        // `u64::MAX` seconds in nanoseconds stays well below `i128::MAX`.
        Self(value.as_nanos() as i128)
    }
}

impl Neg for ElapsedTime {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

impl ElapsedTime {
    pub const ZERO: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn from_nanoseconds(nanoseconds: i128) -> Self {
        Self(nanoseconds)
    }

    #[inline]
    #[must_use]
    pub const fn as_nanoseconds(&self) -> i128 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the magnitude as a `core::time::Duration`, saturating at
    /// `core::time::Duration::MAX`.
    #[must_use]
    pub fn unsigned_abs(&self) -> core::time::Duration {
        let nanos = self.0.unsigned_abs();
        let per_second = NS_PER_SECOND as u128;
        match u64::try_from(nanos / per_second) {
            Ok(secs) => core::time::Duration::new(secs, (nanos % per_second) as u32),
            Err(_) => core::time::Duration::MAX,
        }
    }
}

/// Formats `elapsed` as a canonical ISO 8601 duration string.
///
/// Shorthand for breaking the value down with [`Duration::from_elapsed`]
/// and rendering the result.
#[must_use]
pub fn format_elapsed(elapsed: ElapsedTime) -> String {
    Duration::from_elapsed(elapsed).to_string()
}

/// Sums every field of a duration in nanoseconds and applies `sign`.
pub(crate) fn total(date: &DateDuration, time: &TimeDuration, sign: Sign) -> ElapsedTime {
    let date_terms = Designator::DATE
        .iter()
        .map(|designator| term(date.get(*designator), *designator));
    let time_terms = Designator::TIME
        .iter()
        .map(|designator| term(time.get(*designator), *designator));

    let nanoseconds = date_terms
        .chain(time_terms)
        .fold(0i128, i128::saturating_add);
    ElapsedTime(sign.apply(nanoseconds))
}

/// Converts one magnitude to the nearest whole nanosecond.
fn term(magnitude: f64, designator: Designator) -> i128 {
    (magnitude * designator.nanoseconds() as f64).round() as i128
}

/// Breaks `elapsed` down greedily, from years to minutes, leaving the rest
/// in seconds.
pub(crate) fn decompose(elapsed: ElapsedTime) -> Duration {
    let sign = Sign::from(elapsed.is_negative());
    let mut remaining = elapsed.0.unsigned_abs();

    let mut take = |designator: Designator| -> f64 {
        let unit = designator.nanoseconds() as u128;
        let count = remaining / unit;
        remaining -= count * unit;
        count as f64
    };

    let date = DateDuration::new_unchecked(
        take(Designator::Year),
        take(Designator::Month),
        take(Designator::Week),
        take(Designator::Day),
    );
    let hours = take(Designator::Hour);
    let minutes = take(Designator::Minute);
    let seconds = remaining as f64 / NS_PER_SECOND as f64;

    #[cfg(feature = "log")]
    log::trace!("decomposed {} ns into {date:?}, {hours}h {minutes}m {seconds}s", elapsed.0);

    Duration::from_parts(
        date,
        TimeDuration::new_unchecked(hours, minutes, seconds),
        sign,
    )
}
