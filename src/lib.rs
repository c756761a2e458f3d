//! The `iso_duration` crate parses, formats and converts durations written
//! in the ISO 8601 duration notation.
//!
//! ```rust
//! use iso_duration::{Designator, Duration, ElapsedTime};
//! use core::str::FromStr;
//!
//! let duration = Duration::from_str("P1Y1.5M1W7DT1H60M30S").unwrap();
//! assert_eq!(duration.months(), 1.5);
//! assert_eq!(duration.get(Designator::Minute), 60.0);
//! assert_eq!(duration.to_string(), "P1Y1.5M1W7DT1H60M30S");
//!
//! // Convert a raw interval into its largest-unit-first breakdown.
//! let elapsed = ElapsedTime::from_nanoseconds(90_061_500_000_000);
//! assert_eq!(Duration::from_elapsed(elapsed).to_string(), "P1DT1H1M1.5S");
//! ```
//!
//! Years and months are fixed-length approximations (a year is 365 days and
//! a month is a twelfth of a year), so conversions to and from an
//! [`ElapsedTime`] carry no calendar semantics.
//!
//! The grammar accepted by the parser is:
//!
//! ```text
//! [sign]P[<n>Y][<n>M][<n>W][<n>D][T[<n>H][<n>M][<n>S]]
//! ```
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // Magnitudes are floating point while the elapsed unit is an integer.
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
)]

extern crate alloc;
extern crate core;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod designator;
pub mod elapsed;
pub mod error;
pub mod parsers;

mod duration;

#[cfg(feature = "serde")]
mod serde_impl;

#[doc(inline)]
pub use designator::{Designator, Section};
#[doc(inline)]
pub use duration::{DateDuration, Duration, TimeDuration};
#[doc(inline)]
pub use elapsed::{format_elapsed, ElapsedTime};
#[doc(inline)]
pub use error::DurationError;

/// The `iso_duration` result type
pub type DurationResult<T> = Result<T, DurationError>;

/// The overall sign of a `Duration`.
///
/// Magnitudes are stored unsigned, the sign is applied when a value is read.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    #[default]
    Positive = 1,
    Negative = -1,
}

impl From<bool> for Sign {
    /// Maps an `is_negative` flag to a `Sign`.
    fn from(is_negative: bool) -> Self {
        if is_negative {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

impl Sign {
    /// Returns the sign as a floating point multiplier, `1.0` or `-1.0`.
    #[inline]
    #[must_use]
    pub const fn as_multiplier(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    pub(crate) const fn apply(self, nanoseconds: i128) -> i128 {
        match self {
            Self::Positive => nanoseconds,
            Self::Negative => -nanoseconds,
        }
    }
}

// Relevant numeric constants
/// Nanoseconds per second constant: 1e+9
pub const NS_PER_SECOND: i128 = 1_000_000_000;
/// Nanoseconds per minute constant: 6e+10
pub const NS_PER_MINUTE: i128 = 60 * NS_PER_SECOND;
/// Nanoseconds per hour constant: 3.6e+12
pub const NS_PER_HOUR: i128 = 60 * NS_PER_MINUTE;
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: i128 = 24 * NS_PER_HOUR;
/// Nanoseconds per week constant: 6.048e+14
pub const NS_PER_WEEK: i128 = 7 * NS_PER_DAY;
/// Nanoseconds per year constant, using a 365 day year: 3.1536e+16
pub const NS_PER_YEAR: i128 = 365 * NS_PER_DAY;
/// Nanoseconds per month constant, a twelfth of a year (730 hours): 2.628e+15
pub const NS_PER_MONTH: i128 = NS_PER_YEAR / 12;
