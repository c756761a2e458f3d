//! This module implements the error type of `iso_duration`.

use alloc::string::String;
use core::fmt;

use crate::designator::{Designator, Section};

/// The error returned when a duration cannot be parsed or constructed.
///
/// Every kind is its own variant so callers can branch on the failure with
/// a `match` rather than on the message.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum DurationError {
    /// The input is empty, does not start with `P`, or repeats a section
    /// marker.
    NotIsoFormat,
    /// The date section was opened but no designator followed, e.g. `P`.
    PeriodIsEmpty,
    /// The time section was opened but no designator followed, e.g. `P1YT`.
    TimeIsEmpty,
    /// A numeral could not be read as a non-negative real number.
    IncorrectIsoFormat(String),
    /// A letter is not a designator of the section it appears in.
    IncorrectDesignator { section: Section, letter: char },
    /// A numeral was never closed by a designator.
    DesignatorNotFound { section: Section, pending: String },
    /// A designator appeared without a numeral in front of it.
    DesignatorValueNotFound {
        section: Section,
        designator: Designator,
    },
    /// A designator appeared twice in the same duration.
    DesignatorMet(Designator),
    /// A magnitude handed to a constructor is negative or not finite.
    InvalidMagnitude { designator: Designator, value: f64 },
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotIsoFormat => f.write_str("incorrect ISO 8601 duration format"),
            Self::PeriodIsEmpty => f.write_str(
                "incorrect ISO 8601 duration format, date section opened with 'P' but it is empty",
            ),
            Self::TimeIsEmpty => f.write_str(
                "incorrect ISO 8601 duration format, time section opened with 'T' but it is empty",
            ),
            Self::IncorrectIsoFormat(text) => write!(
                f,
                "incorrect ISO 8601 duration format, invalid numeral {text:?}"
            ),
            Self::IncorrectDesignator { section, letter } => write!(
                f,
                "invalid designator '{letter}' in the {section} section"
            ),
            Self::DesignatorNotFound { section, pending } => write!(
                f,
                "no designator found after {pending:?} in the {section} section"
            ),
            Self::DesignatorValueNotFound {
                section,
                designator,
            } => write!(
                f,
                "designator '{designator}' in the {section} section has no value"
            ),
            Self::DesignatorMet(designator) => {
                write!(f, "designator '{designator}' appears more than once")
            }
            Self::InvalidMagnitude { designator, value } => write!(
                f,
                "magnitude {value} for designator '{designator}' must be finite and non-negative"
            ),
        }
    }
}

impl core::error::Error for DurationError {}
