//! This module implements ISO 8601 duration parsing and formatting.
//!
//! Parsing is a small state machine that walks the input one character at
//! a time. Formatting goes through [`FormattableDuration`], a `Writeable`.

use alloc::string::ToString;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    designator::{Designator, DesignatorSet, Section, DATE_MARKER, TIME_MARKER},
    duration::{DateDuration, Duration, TimeDuration},
    DurationError, DurationResult, Sign,
};

/// Parses a duration string with an optional leading `+` or `-`.
///
/// The sign is resolved before scanning and is not part of the grammar of
/// the scanner itself.
pub fn parse_duration(source: &str) -> DurationResult<Duration> {
    let (sign, body) = split_sign(source);
    let result = DurationScanner::new(body).scan(sign);

    #[cfg(feature = "log")]
    if let Err(err) = &result {
        log::debug!("rejected duration {source:?}: {err}");
    }

    result
}

fn split_sign(source: &str) -> (Sign, &str) {
    if let Some(rest) = source.strip_prefix('-') {
        (Sign::Negative, rest)
    } else if let Some(rest) = source.strip_prefix('+') {
        (Sign::Positive, rest)
    } else {
        (Sign::Positive, source)
    }
}

/// The states of the duration scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Nothing consumed yet; only `P` may follow.
    Unstarted,
    InDateSection,
    InTimeSection,
}

impl ScanState {
    const fn section(self) -> Option<Section> {
        match self {
            Self::Unstarted => None,
            Self::InDateSection => Some(Section::Date),
            Self::InTimeSection => Some(Section::Time),
        }
    }
}

impl From<Section> for ScanState {
    fn from(value: Section) -> Self {
        match value {
            Section::Date => Self::InDateSection,
            Section::Time => Self::InTimeSection,
        }
    }
}

/// Scans an unsigned duration string into its date and time magnitudes.
///
/// The pending numeral is tracked as a byte offset into `source`: every
/// character between the last designator (or marker) and the current
/// position belongs to it.
#[derive(Debug)]
struct DurationScanner<'a> {
    source: &'a str,
    state: ScanState,
    pending_start: usize,
    /// The section of the last designator successfully consumed.
    closed: Option<Section>,
    met: DesignatorSet,
    date: DateDuration,
    time: TimeDuration,
}

impl<'a> DurationScanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            state: ScanState::Unstarted,
            pending_start: 0,
            closed: None,
            met: DesignatorSet::empty(),
            date: DateDuration::default(),
            time: TimeDuration::default(),
        }
    }

    fn scan(mut self, sign: Sign) -> DurationResult<Duration> {
        for (index, ch) in self.source.char_indices() {
            self.step(index, ch)?;
        }
        self.finish(sign)
    }

    fn pending(&self, end: usize) -> &'a str {
        &self.source[self.pending_start..end]
    }

    fn step(&mut self, index: usize, ch: char) -> DurationResult<()> {
        let next = index + ch.len_utf8();
        let Some(section) = self.state.section() else {
            if ch == DATE_MARKER {
                self.enter(Section::Date, next);
                return Ok(());
            }
            return Err(DurationError::NotIsoFormat);
        };

        match ch {
            TIME_MARKER if section == Section::Date => {
                let pending = self.pending(index);
                if !pending.is_empty() {
                    return Err(DurationError::DesignatorNotFound {
                        section,
                        pending: pending.to_string(),
                    });
                }
                self.enter(Section::Time, next);
                Ok(())
            }
            DATE_MARKER | TIME_MARKER => Err(DurationError::NotIsoFormat),
            letter if letter.is_alphabetic() => self.close_designator(section, letter, index, next),
            // Anything else joins the numeral and is judged when it is parsed.
            _ => Ok(()),
        }
    }

    fn enter(&mut self, section: Section, next: usize) {
        #[cfg(feature = "log")]
        log::trace!("entering {section} section at byte {next}");
        self.state = ScanState::from(section);
        self.pending_start = next;
    }

    fn close_designator(
        &mut self,
        section: Section,
        letter: char,
        index: usize,
        next: usize,
    ) -> DurationResult<()> {
        let designator = Designator::from_letter(section, letter)
            .ok_or(DurationError::IncorrectDesignator { section, letter })?;

        let pending = self.pending(index);
        if pending.is_empty() {
            return Err(DurationError::DesignatorValueNotFound {
                section,
                designator,
            });
        }
        let value = parse_magnitude(pending)?;

        if self.met.contains(designator.flag()) {
            return Err(DurationError::DesignatorMet(designator));
        }
        self.met.insert(designator.flag());

        match section {
            Section::Date => self.date.set(designator, value),
            Section::Time => self.time.set(designator, value),
        }
        self.closed = Some(section);
        self.pending_start = next;
        Ok(())
    }

    fn finish(self, sign: Sign) -> DurationResult<Duration> {
        let Some(section) = self.state.section() else {
            return Err(DurationError::NotIsoFormat);
        };

        let pending = &self.source[self.pending_start..];
        if !pending.is_empty() {
            return Err(DurationError::DesignatorNotFound {
                section,
                pending: pending.to_string(),
            });
        }

        if self.closed != Some(section) {
            return Err(match section {
                Section::Date => DurationError::PeriodIsEmpty,
                Section::Time => DurationError::TimeIsEmpty,
            });
        }

        Ok(Duration::from_parts(self.date, self.time, sign))
    }
}

/// Reads a numeral as a finite, non-negative magnitude. `-0` reads as `0`.
fn parse_magnitude(text: &str) -> DurationResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value == 0.0 => Ok(0.0),
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(DurationError::IncorrectIsoFormat(text.to_string())),
    }
}

/// A `Writeable` rendering a duration in canonical form.
///
/// Zero fields are omitted, an all-zero duration renders as `PT0S`. A
/// leading `-` is only written when both sections hold a non-zero field.
#[derive(Debug, Clone, Copy)]
pub struct FormattableDuration {
    pub sign: Sign,
    pub date: DateDuration,
    pub time: TimeDuration,
}

impl Writeable for FormattableDuration {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let has_date = !self.date.is_zero();
        let has_time = !self.time.is_zero();

        // TODO: write the sign for single-section negative durations too, once
        // callers no longer rely on `-P1Y` rendering as `P1Y`.
        if self.sign == Sign::Negative && has_date && has_time {
            sink.write_char('-')?;
        }
        sink.write_char(DATE_MARKER)?;
        for designator in Designator::DATE {
            checked_write_f64_with_suffix(self.date.get(designator), designator.letter(), sink)?;
        }

        if has_time {
            sink.write_char(TIME_MARKER)?;
            for designator in Designator::TIME {
                checked_write_f64_with_suffix(
                    self.time.get(designator),
                    designator.letter(),
                    sink,
                )?;
            }
        } else if !has_date {
            sink.write_str("T0S")?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        // `P` plus either `T0S` or at least one value and designator.
        LengthHint::at_least(3)
    }
}

impl_display_with_writeable!(FormattableDuration);

/// Writes `val` followed by `suffix`, or nothing when `val` is zero.
///
/// `f64`'s `Display` produces the shortest representation that reads back
/// to the same value and never uses exponent notation.
fn checked_write_f64_with_suffix<W: core::fmt::Write + ?Sized>(
    val: f64,
    suffix: char,
    sink: &mut W,
) -> core::fmt::Result {
    if val == 0.0 {
        return Ok(());
    }
    write!(sink, "{val}")?;
    sink.write_char(suffix)
}

#[cfg(test)]
mod tests {
    use super::{parse_duration, parse_magnitude, FormattableDuration};
    use crate::{
        designator::{Designator, Section},
        duration::{DateDuration, TimeDuration},
        Duration, DurationError, Sign,
    };
    use alloc::string::ToString;
    use writeable::assert_writeable_eq;

    #[test]
    fn full_duration() {
        let duration = parse_duration("P1Y1.5M1W7DT1H60M30S").unwrap();
        assert_eq!(
            duration,
            Duration::new(1.0, 1.5, 7.0, 1.0, 1.0, 60.0, 30.0, Sign::Positive).unwrap()
        );
        assert_eq!(duration.minutes(), 60.0);
    }

    #[test]
    fn signed_duration() {
        let duration = parse_duration("-P1Y1.5M1W7DT1H60M30S").unwrap();
        assert_eq!(duration.sign(), Sign::Negative);
        assert_eq!(duration.years(), -1.0);
        assert_eq!(duration.months(), -1.5);
        assert_eq!(duration.seconds(), -30.0);

        let duration = parse_duration("+PT5M").unwrap();
        assert_eq!(duration.sign(), Sign::Positive);
        assert_eq!(duration.minutes(), 5.0);
    }

    #[test]
    fn single_section_durations() {
        let duration = parse_duration("PT1H60M30S").unwrap();
        assert_eq!(duration.date(), &DateDuration::default());
        assert_eq!(duration.hours(), 1.0);

        let duration = parse_duration("P1Y1.5M1W7D").unwrap();
        assert_eq!(duration.time(), &TimeDuration::default());
        assert_eq!(duration.days(), 7.0);

        // `M` is a month before `T` and a minute after it.
        let duration = parse_duration("P2MT3M").unwrap();
        assert_eq!(duration.months(), 2.0);
        assert_eq!(duration.minutes(), 3.0);
    }

    #[test]
    fn zero_duration() {
        let duration = parse_duration("PT0S").unwrap();
        assert!(duration.is_zero());
        for designator in Designator::ALL {
            assert_eq!(duration.get(designator), 0.0);
        }
    }

    #[test]
    fn marker_errors() {
        assert_eq!(parse_duration(""), Err(DurationError::NotIsoFormat));
        assert_eq!(parse_duration("-"), Err(DurationError::NotIsoFormat));
        assert_eq!(parse_duration("PPP"), Err(DurationError::NotIsoFormat));
        assert_eq!(parse_duration("T1H"), Err(DurationError::NotIsoFormat));
        assert_eq!(parse_duration("1Y"), Err(DurationError::NotIsoFormat));
        assert_eq!(parse_duration("p1y"), Err(DurationError::NotIsoFormat));
        assert_eq!(parse_duration("--P1Y"), Err(DurationError::NotIsoFormat));
        assert_eq!(parse_duration("PT1HT2M"), Err(DurationError::NotIsoFormat));
        assert_eq!(parse_duration("P1YP"), Err(DurationError::NotIsoFormat));
    }

    #[test]
    fn empty_sections() {
        assert_eq!(parse_duration("P"), Err(DurationError::PeriodIsEmpty));
        assert_eq!(parse_duration("-P"), Err(DurationError::PeriodIsEmpty));
        assert_eq!(parse_duration("PT"), Err(DurationError::TimeIsEmpty));
        assert_eq!(parse_duration("P1Y1.5M1W7DT"), Err(DurationError::TimeIsEmpty));
    }

    #[test]
    fn dangling_numerals() {
        assert_eq!(
            parse_duration("PT10"),
            Err(DurationError::DesignatorNotFound {
                section: Section::Time,
                pending: "10".to_string(),
            })
        );
        assert_eq!(
            parse_duration("P20T10H"),
            Err(DurationError::DesignatorNotFound {
                section: Section::Date,
                pending: "20".to_string(),
            })
        );
        assert_eq!(
            parse_duration("P1Y2"),
            Err(DurationError::DesignatorNotFound {
                section: Section::Date,
                pending: "2".to_string(),
            })
        );
    }

    #[test]
    fn designator_errors() {
        assert_eq!(
            parse_duration("PT10H9H"),
            Err(DurationError::DesignatorMet(Designator::Hour))
        );
        assert_eq!(
            parse_duration("P1Y2Y"),
            Err(DurationError::DesignatorMet(Designator::Year))
        );
        // A zero value still counts as set.
        assert_eq!(
            parse_duration("PT0M10M"),
            Err(DurationError::DesignatorMet(Designator::Minute))
        );
        assert_eq!(
            parse_duration("PT1HM"),
            Err(DurationError::DesignatorValueNotFound {
                section: Section::Time,
                designator: Designator::Minute,
            })
        );
        assert_eq!(
            parse_duration("PY"),
            Err(DurationError::DesignatorValueNotFound {
                section: Section::Date,
                designator: Designator::Year,
            })
        );
        assert_eq!(
            parse_duration("P1H"),
            Err(DurationError::IncorrectDesignator {
                section: Section::Date,
                letter: 'H',
            })
        );
        assert_eq!(
            parse_duration("PT10D"),
            Err(DurationError::IncorrectDesignator {
                section: Section::Time,
                letter: 'D',
            })
        );
        assert_eq!(
            parse_duration("P1V"),
            Err(DurationError::IncorrectDesignator {
                section: Section::Date,
                letter: 'V',
            })
        );
    }

    #[test]
    fn numeral_errors() {
        assert_eq!(
            parse_duration("P10,5Y"),
            Err(DurationError::IncorrectIsoFormat("10,5".to_string()))
        );
        assert_eq!(
            parse_duration("PT10, 5H"),
            Err(DurationError::IncorrectIsoFormat("10, 5".to_string()))
        );
        assert_eq!(
            parse_duration("P1.2.3D"),
            Err(DurationError::IncorrectIsoFormat("1.2.3".to_string()))
        );
        assert_eq!(
            parse_duration("P-1Y"),
            Err(DurationError::IncorrectIsoFormat("-1".to_string()))
        );
    }

    #[test]
    fn magnitudes() {
        assert_eq!(parse_magnitude("0"), Ok(0.0));
        assert_eq!(parse_magnitude("10.5"), Ok(10.5));
        assert_eq!(parse_magnitude(".5"), Ok(0.5));
        assert!(parse_magnitude("1e400").is_err());
        assert!(parse_magnitude("").is_err());
        assert!(parse_magnitude("NaN").is_err());

        let zero = parse_magnitude("-0").unwrap();
        assert_eq!(zero, 0.0);
        assert!(!zero.is_sign_negative());
    }

    #[test]
    fn negative_zero_numeral() {
        let duration = parse_duration("P-0Y").unwrap();
        assert!(duration.is_zero());
        assert!(!duration.date().years().is_sign_negative());
        assert_eq!(duration.to_string(), "PT0S");

        let duration = parse_duration("PT-0.0S5M").unwrap();
        assert_eq!(duration.seconds(), 0.0);
        assert_eq!(duration.minutes(), 5.0);
        assert_eq!(
            parse_duration("PT-0S0S"),
            Err(DurationError::DesignatorMet(Designator::Second))
        );
    }

    #[test]
    fn designators_in_any_order() {
        let duration = parse_duration("P1D1Y").unwrap();
        assert_eq!(duration.years(), 1.0);
        assert_eq!(duration.days(), 1.0);
        assert_eq!(duration, parse_duration("P1Y1D").unwrap());
        assert_eq!(duration.to_string(), "P1Y1D");

        let duration = parse_duration("-P3W2MT30S1H").unwrap();
        assert_eq!(duration.months(), -2.0);
        assert_eq!(duration.weeks(), -3.0);
        assert_eq!(duration.hours(), -1.0);
        assert_eq!(duration.seconds(), -30.0);
        assert_writeable_eq!(duration.as_formattable(), "-P2M3WT1H30S");
    }

    #[test]
    fn format_fields_in_order() {
        let duration = Duration::new(2.0, 6.0, 32.0, 2.0, 1.0, 65.0, 30.0, Sign::Positive).unwrap();
        assert_writeable_eq!(duration.as_formattable(), "P2Y6M2W32DT1H65M30S");

        let duration = Duration::new(2.0, 6.0, 32.6, 2.0, 1.0, 65.6, 5.0, Sign::Negative).unwrap();
        assert_writeable_eq!(duration.as_formattable(), "-P2Y6M2W32.6DT1H65.6M5S");
    }

    #[test]
    fn format_zero() {
        let formattable = FormattableDuration {
            sign: Sign::Positive,
            date: DateDuration::default(),
            time: TimeDuration::default(),
        };
        assert_writeable_eq!(formattable, "PT0S");

        let formattable = FormattableDuration {
            sign: Sign::Negative,
            ..formattable
        };
        assert_writeable_eq!(formattable, "PT0S");
    }

    #[test]
    fn format_omits_zero_fields() {
        let duration = Duration::new(0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.25, Sign::Positive).unwrap();
        assert_writeable_eq!(duration.as_formattable(), "P3MT0.25S");

        let duration = Duration::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, Sign::Positive).unwrap();
        assert_writeable_eq!(duration.as_formattable(), "P1Y");
    }

    #[test]
    fn format_negative_single_section() {
        let duration = Duration::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, Sign::Negative).unwrap();
        assert_writeable_eq!(duration.as_formattable(), "P1Y");

        let duration = Duration::new(0.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, Sign::Negative).unwrap();
        assert_writeable_eq!(duration.as_formattable(), "PT4H");
    }
}
