//! Display formatting for canonical timestamps
//!
//! `to_12_hour` and `to_long_date` slice the canonical text at fixed byte
//! offsets. Malformed input is reported in-band as display text
//! (`"Invalid datetime"`, `"Invalid month"`) so callers can render the
//! result directly.

use core::fmt::{self, Write as _};

use heapless::String;

use super::{CANONICAL_LEN, DATE_LEN};

/// Fits every output of this module (longest is `DD September, YYYY`)
pub const DISPLAY_TEXT_LEN: usize = 24;

/// Rendered display text
pub type DisplayText = String<DISPLAY_TEXT_LEN>;

/// Returned for input shorter than the layout requires
pub const INVALID_DATETIME: &str = "Invalid datetime";

/// Returned by `to_long_date` when the month is not 1-12
pub const INVALID_MONTH: &str = "Invalid month";

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Half of the day on a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a 24-hour value onto the 12-hour clock
///
/// 0 is 12 AM, 12 is 12 PM, 13 and up subtract 12 with PM. Anything else
/// passes through unchanged with AM; values above 23 are not rejected here.
pub fn twelve_hour(hour: i32) -> (i32, Meridiem) {
    match hour {
        0 => (12, Meridiem::Am),
        12 => (12, Meridiem::Pm),
        h if h > 12 => (h - 12, Meridiem::Pm),
        h => (h, Meridiem::Am),
    }
}

/// Month name for 1-12
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

/// Convert `YYYY-MM-DD HH:MM:SS` to `H:MM:SS AM|PM`
///
/// Input shorter than 19 bytes gives `"Invalid datetime"`. Hour, minute and
/// second are taken from offsets 11, 14 and 17; minute and second are copied
/// through untouched.
///
/// ```
/// use aquarium_core::to_12_hour;
///
/// assert_eq!(to_12_hour("2024-03-07 00:05:09"), "12:05:09 AM");
/// assert_eq!(to_12_hour("2024-03-07 23:59:59"), "11:59:59 PM");
/// assert_eq!(to_12_hour("bad"), "Invalid datetime");
/// ```
pub fn to_12_hour(datetime: &str) -> DisplayText {
    if datetime.len() < CANONICAL_LEN {
        return text(INVALID_DATETIME);
    }

    // `get` refuses ranges that split a multi-byte character
    let (Some(hour), Some(minute), Some(second)) = (
        datetime.get(11..13),
        datetime.get(14..16),
        datetime.get(17..19),
    ) else {
        return text(INVALID_DATETIME);
    };

    let (hour, meridiem) = twelve_hour(leading_int(hour));
    compose(format_args!("{}:{}:{} {}", hour, minute, second, meridiem))
}

/// Convert `YYYY-MM-DD` (optionally followed by a time) to `DD Month, YYYY`
///
/// Input shorter than 10 bytes gives `"Invalid datetime"`; a month outside
/// 1-12 gives `"Invalid month"`. The day keeps its zero padding.
///
/// ```
/// use aquarium_core::to_long_date;
///
/// assert_eq!(to_long_date("2024-03-07"), "07 March, 2024");
/// assert_eq!(to_long_date("2024-13-07"), "Invalid month");
/// ```
pub fn to_long_date(datetime: &str) -> DisplayText {
    if datetime.len() < DATE_LEN {
        return text(INVALID_DATETIME);
    }

    let (Some(year), Some(month), Some(day)) = (
        datetime.get(0..4),
        datetime.get(5..7),
        datetime.get(8..10),
    ) else {
        return text(INVALID_DATETIME);
    };

    let name = u8::try_from(leading_int(month)).ok().and_then(month_name);
    match name {
        Some(name) => compose(format_args!("{} {}, {}", day, name, year)),
        None => text(INVALID_MONTH),
    }
}

/// Integer value of the leading digits of `field`
///
/// Skips leading whitespace, accepts one sign, stops at the first
/// non-digit. No digits reads as 0.
fn leading_int(field: &str) -> i32 {
    let mut chars = field
        .trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
        .chars()
        .peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let magnitude = chars
        .map_while(|c| c.to_digit(10))
        .fold(0i32, |acc, d| acc.saturating_mul(10).saturating_add(d as i32));

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn text(s: &str) -> DisplayText {
    let mut out = DisplayText::new();
    // All fixed messages are shorter than the buffer
    let _ = out.push_str(s);
    out
}

fn compose(args: fmt::Arguments<'_>) -> DisplayText {
    let mut out = DisplayText::new();
    if out.write_fmt(args).is_err() {
        return text(INVALID_DATETIME);
    }
    out
}

/// Time of day on the 12-hour clock, renders as `H:MM:SS AM|PM`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl DisplayTime {
    pub(crate) const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub fn to_text(&self) -> DisplayText {
        compose(format_args!("{}", self))
    }
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, meridiem) = twelve_hour(i32::from(self.hour));
        write!(
            f,
            "{}:{:02}:{:02} {}",
            hour, self.minute, self.second, meridiem
        )
    }
}

/// Long-form date, renders as `DD Month, YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayDate {
    year: u16,
    month: u8,
    day: u8,
}

impl DisplayDate {
    pub(crate) const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    pub fn to_text(&self) -> DisplayText {
        compose(format_args!("{}", self))
    }
}

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match month_name(self.month) {
            Some(name) => write!(f, "{:02} {}, {:04}", self.day, name, self.year),
            None => f.write_str(INVALID_MONTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::DateTime;

    #[test]
    fn test_midnight_is_12_am() {
        assert_eq!(to_12_hour("2024-03-07 00:05:09"), "12:05:09 AM");
    }

    #[test]
    fn test_noon_is_12_pm() {
        assert_eq!(to_12_hour("2024-03-07 12:00:00"), "12:00:00 PM");
    }

    #[test]
    fn test_afternoon_subtracts_12() {
        assert_eq!(to_12_hour("2024-03-07 23:59:59"), "11:59:59 PM");
        for hour in 13..=23 {
            let input = std::format!("2024-03-07 {:02}:30:15", hour);
            let expected = std::format!("{}:30:15 PM", hour - 12);
            assert_eq!(to_12_hour(&input), expected.as_str());
        }
    }

    #[test]
    fn test_morning_is_unchanged() {
        for hour in 1..=11 {
            let input = std::format!("2024-03-07 {:02}:00:01", hour);
            let expected = std::format!("{}:00:01 AM", hour);
            assert_eq!(to_12_hour(&input), expected.as_str());
        }
    }

    #[test]
    fn test_short_input_is_invalid() {
        assert_eq!(to_12_hour("bad"), INVALID_DATETIME);
        assert_eq!(to_12_hour(""), INVALID_DATETIME);
        assert_eq!(to_12_hour("2024-03-07 00:05:0"), INVALID_DATETIME);
        assert_eq!(to_long_date("bad"), INVALID_DATETIME);
        assert_eq!(to_long_date("2024-03-0"), INVALID_DATETIME);
    }

    #[test]
    fn test_long_date() {
        assert_eq!(to_long_date("2024-03-07"), "07 March, 2024");
        assert_eq!(to_long_date("2024-12-25 08:00:00"), "25 December, 2024");
        assert_eq!(to_long_date("2024-01-01"), "01 January, 2024");
        assert_eq!(to_long_date("2024-09-30"), "30 September, 2024");
    }

    #[test]
    fn test_long_date_invalid_month() {
        assert_eq!(to_long_date("2024-13-07"), INVALID_MONTH);
        assert_eq!(to_long_date("2024-00-07"), INVALID_MONTH);
        assert_eq!(to_long_date("2024-xx-07"), INVALID_MONTH);
        assert_eq!(to_long_date("2024--1-07"), INVALID_MONTH);
    }

    #[test]
    fn test_fields_are_not_validated() {
        // Non-numeric hour reads as 0
        assert_eq!(to_12_hour("2024-03-07 ab:05:09"), "12:05:09 AM");
        // Out-of-range hours fall through the >12 rule
        assert_eq!(to_12_hour("2024-03-07 25:00:00"), "13:00:00 PM");
        // Separators are never checked
        assert_eq!(to_12_hour("2024/03/07T07.15.30"), "7:15:30 AM");
        // Leading digits only
        assert_eq!(to_12_hour("2024-03-07 7x:15:30"), "7:15:30 AM");
        assert_eq!(to_long_date("2024- 3-07"), "07 March, 2024");
    }

    #[test]
    fn test_split_character_is_invalid() {
        // 'é' straddles offsets 11 and 12 of a 19-byte string
        assert_eq!(to_12_hour("2024-03-07 xé:05:0"), "Invalid datetime");
    }

    #[test]
    fn test_repeated_calls_agree() {
        let input = "2024-03-07 18:45:00";
        assert_eq!(to_12_hour(input), to_12_hour(input));
        assert_eq!(to_long_date(input), to_long_date(input));
    }

    #[test]
    fn test_twelve_hour() {
        assert_eq!(twelve_hour(0), (12, Meridiem::Am));
        assert_eq!(twelve_hour(12), (12, Meridiem::Pm));
        assert_eq!(twelve_hour(13), (1, Meridiem::Pm));
        assert_eq!(twelve_hour(11), (11, Meridiem::Am));
        assert_eq!(twelve_hour(-1), (-1, Meridiem::Am));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_structured_matches_positional() {
        for input in [
            "2024-03-07 00:05:09",
            "2024-03-07 12:00:00",
            "2024-03-07 23:59:59",
            "1999-12-31 09:09:09",
            "2000-02-29 13:00:00",
        ] {
            let dt = DateTime::parse(input).unwrap();
            assert_eq!(dt.display_time().to_text(), to_12_hour(input));
            assert_eq!(dt.display_date().to_text(), to_long_date(input));
        }
    }
}
