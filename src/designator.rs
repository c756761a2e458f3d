//! The registry of ISO 8601 duration designators.
//!
//! Each [`Designator`] knows the letter it is written as, the [`Section`]
//! it may appear in, and its length in nanoseconds. The order of the
//! variants is the canonical order used both to validate and to render a
//! duration.

use core::fmt;

use crate::{
    NS_PER_DAY, NS_PER_HOUR, NS_PER_MINUTE, NS_PER_MONTH, NS_PER_SECOND, NS_PER_WEEK, NS_PER_YEAR,
};

/// The marker opening the date section, and the duration itself.
pub const DATE_MARKER: char = 'P';
/// The marker opening the time section.
pub const TIME_MARKER: char = 'T';

/// The two sections of a duration string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// The years, months, weeks and days following `P`.
    Date,
    /// The hours, minutes and seconds following `T`.
    Time,
}

impl Section {
    /// Returns the marker character that opens this section.
    #[inline]
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Date => DATE_MARKER,
            Self::Time => TIME_MARKER,
        }
    }

    /// Returns the designators valid in this section, in canonical order.
    #[inline]
    #[must_use]
    pub const fn designators(self) -> &'static [Designator] {
        match self {
            Self::Date => &Designator::DATE,
            Self::Time => &Designator::TIME,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => f.write_str("date"),
            Self::Time => f.write_str("time"),
        }
    }
}

/// A duration designator: the unit letter following a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Designator {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Designator {
    /// Every designator in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// The date section designators in canonical order.
    pub const DATE: [Self; 4] = [Self::Year, Self::Month, Self::Week, Self::Day];

    /// The time section designators in canonical order.
    pub const TIME: [Self; 3] = [Self::Hour, Self::Minute, Self::Second];

    /// Looks up the designator written as `letter` within `section`.
    ///
    /// `M` resolves to `Month` in the date section and `Minute` in the time
    /// section. Letters that are unknown, or that only belong to the other
    /// section, return `None`.
    #[must_use]
    pub const fn from_letter(section: Section, letter: char) -> Option<Self> {
        match (section, letter) {
            (Section::Date, 'Y') => Some(Self::Year),
            (Section::Date, 'M') => Some(Self::Month),
            (Section::Date, 'W') => Some(Self::Week),
            (Section::Date, 'D') => Some(Self::Day),
            (Section::Time, 'H') => Some(Self::Hour),
            (Section::Time, 'M') => Some(Self::Minute),
            (Section::Time, 'S') => Some(Self::Second),
            _ => None,
        }
    }

    /// Returns the letter this designator is written as.
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Year => 'Y',
            Self::Month | Self::Minute => 'M',
            Self::Week => 'W',
            Self::Day => 'D',
            Self::Hour => 'H',
            Self::Second => 'S',
        }
    }

    /// Returns the section this designator belongs to.
    #[inline]
    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::Year | Self::Month | Self::Week | Self::Day => Section::Date,
            Self::Hour | Self::Minute | Self::Second => Section::Time,
        }
    }

    /// Returns the length of one unit of this designator in nanoseconds.
    #[inline]
    #[must_use]
    pub const fn nanoseconds(self) -> i128 {
        match self {
            Self::Year => NS_PER_YEAR,
            Self::Month => NS_PER_MONTH,
            Self::Week => NS_PER_WEEK,
            Self::Day => NS_PER_DAY,
            Self::Hour => NS_PER_HOUR,
            Self::Minute => NS_PER_MINUTE,
            Self::Second => NS_PER_SECOND,
        }
    }

    /// Returns the position of this designator in canonical order.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    #[inline]
    pub(crate) const fn flag(self) -> DesignatorSet {
        DesignatorSet::from_bits_retain(1 << (self as u8))
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        f.write_char(self.letter())
    }
}

bitflags::bitflags! {
    /// The designators already consumed by a parse.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct DesignatorSet: u8 {
        const YEAR = 1 << 0;
        const MONTH = 1 << 1;
        const WEEK = 1 << 2;
        const DAY = 1 << 3;
        const HOUR = 1 << 4;
        const MINUTE = 1 << 5;
        const SECOND = 1 << 6;
    }
}
