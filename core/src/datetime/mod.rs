//! Canonical timestamps and their display forms
//!
//! The canonical layout is `YYYY-MM-DD HH:MM:SS`: exactly 19 ASCII bytes
//! with `-`, ` ` and `:` at fixed positions.
//!
//! Two ways in:
//! - **`format`**: `to_12_hour` / `to_long_date` work on the text by fixed
//!   offsets and report malformed input as display text. Field contents are
//!   not validated (a non-numeric hour reads as 0).
//! - **`DateTime::parse`**: strict parse into checked fields, rejecting
//!   malformed input with a `ParseError`. Its `display_time` and
//!   `display_date` render the same text as the positional functions for
//!   any well-formed input.

use core::fmt;

use hal_abstractions::CalendarTime;

use crate::time::calendar::{calendar_to_unix, days_in_month};

pub mod format;

pub use format::{
    to_12_hour, to_long_date, DisplayDate, DisplayText, DisplayTime, Meridiem, INVALID_DATETIME,
    INVALID_MONTH, MONTH_NAMES,
};

/// Length of `YYYY-MM-DD HH:MM:SS`
pub const CANONICAL_LEN: usize = 19;

/// Length of the `YYYY-MM-DD` date prefix
pub const DATE_LEN: usize = 10;

/// Separator bytes and their positions in the canonical layout
const SEPARATORS: [(usize, u8); 5] = [(4, b'-'), (7, b'-'), (10, b' '), (13, b':'), (16, b':')];

/// Timestamp field, used to report which one is out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        };
        f.write_str(name)
    }
}

/// Canonical timestamp parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Input is not exactly 19 bytes
    Length,
    /// Expected separator missing at this byte offset
    Separator { position: u8 },
    /// Expected ASCII digit missing at this byte offset
    Digit { position: u8 },
    /// Field parsed but lies outside its valid range
    OutOfRange(Field),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "Expected {} characters", CANONICAL_LEN),
            Self::Separator { position } => write!(f, "Missing separator at {}", position),
            Self::Digit { position } => write!(f, "Expected digit at {}", position),
            Self::OutOfRange(field) => write!(f, "{} out of range", field),
        }
    }
}

impl core::error::Error for ParseError {}

/// Validated local date and time
///
/// Invariants: month 1-12, day within the month (leap years included),
/// hour 0-23, minute and second 0-59, year 0-9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl DateTime {
    /// Build from individual fields, checking every range
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ParseError> {
        if year > 9999 {
            return Err(ParseError::OutOfRange(Field::Year));
        }
        if !(1..=12).contains(&month) {
            return Err(ParseError::OutOfRange(Field::Month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(ParseError::OutOfRange(Field::Day));
        }
        if hour > 23 {
            return Err(ParseError::OutOfRange(Field::Hour));
        }
        if minute > 59 {
            return Err(ParseError::OutOfRange(Field::Minute));
        }
        if second > 59 {
            return Err(ParseError::OutOfRange(Field::Second));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Parse exactly `YYYY-MM-DD HH:MM:SS`
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let bytes = text.as_bytes();
        if bytes.len() != CANONICAL_LEN {
            return Err(ParseError::Length);
        }

        for (position, separator) in SEPARATORS {
            if bytes[position] != separator {
                return Err(ParseError::Separator {
                    position: position as u8,
                });
            }
        }

        let year = digits(bytes, 0, 4)?;
        let month = digits(bytes, 5, 2)?;
        let day = digits(bytes, 8, 2)?;
        let hour = digits(bytes, 11, 2)?;
        let minute = digits(bytes, 14, 2)?;
        let second = digits(bytes, 17, 2)?;

        Self::new(
            year,
            month as u8,
            day as u8,
            hour as u8,
            minute as u8,
            second as u8,
        )
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// 12-hour clock form, `H:MM:SS AM|PM`
    pub fn display_time(&self) -> DisplayTime {
        DisplayTime::new(self.hour, self.minute, self.second)
    }

    /// Long date form, `DD Month, YYYY`
    pub fn display_date(&self) -> DisplayDate {
        DisplayDate::new(self.year, self.month, self.day)
    }

    /// Seconds since 1970-01-01 00:00:00 in the same local time
    ///
    /// Dates before 1970 clamp to 0.
    pub fn unix_secs(&self) -> u64 {
        calendar_to_unix(&CalendarTime::from(*self))
    }
}

/// Parse `len` ASCII digits starting at `start`
fn digits(bytes: &[u8], start: usize, len: usize) -> Result<u16, ParseError> {
    bytes[start..start + len]
        .iter()
        .enumerate()
        .try_fold(0u16, |acc, (offset, &b)| {
            if b.is_ascii_digit() {
                Ok(acc * 10 + u16::from(b - b'0'))
            } else {
                Err(ParseError::Digit {
                    position: (start + offset) as u8,
                })
            }
        })
}

impl core::str::FromStr for DateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats back into the canonical layout
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl TryFrom<CalendarTime> for DateTime {
    type Error = ParseError;

    fn try_from(time: CalendarTime) -> Result<Self, Self::Error> {
        Self::new(
            time.year,
            time.month,
            time.day,
            time.hour,
            time.minute,
            time.second,
        )
    }
}

impl From<DateTime> for CalendarTime {
    fn from(dt: DateTime) -> Self {
        CalendarTime::new(dt.year, dt.month, dt.day, dt.hour, dt.minute, dt.second)
    }
}
