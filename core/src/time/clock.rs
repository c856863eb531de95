//! Canonical clock text
//!
//! Produces `YYYY-MM-DD HH:MM:SS` from the device clock. Each call reads the
//! clock again and returns an independent value.

use core::fmt::Write as _;

use hal_abstractions::{CalendarTime, ClockError, LocalClock, UnixTimeSource};
use heapless::String;

use super::calendar::unix_to_calendar;
use crate::datetime::{DateTime, CANONICAL_LEN};

/// Canonical datetime text; empty when the clock could not be read
pub type CanonicalText = String<CANONICAL_LEN>;

/// Read the clock and format it as canonical text
///
/// Returns an empty string if the clock is unavailable. Callers must check
/// for emptiness before handing the text to the display formatters.
pub fn current_datetime_text<C: LocalClock>(clock: &mut C) -> CanonicalText {
    let mut text = CanonicalText::new();

    let time = match clock.local_time() {
        Ok(time) => time,
        Err(e) => {
            error!("Failed to obtain time: {}", e);
            return text;
        }
    };

    if write_canonical(&mut text, &time).is_err() {
        // Only a year past 9999 can overflow the buffer
        error!("Failed to obtain time: year {} out of range", time.year);
        text.clear();
    }
    text
}

/// Read the clock as a validated `DateTime`
///
/// A clock that reports impossible fields (month 13, hour 24, ...) is
/// treated as a hardware fault.
pub fn current_datetime<C: LocalClock>(clock: &mut C) -> Result<DateTime, ClockError> {
    let time = clock.local_time()?;
    DateTime::try_from(time).map_err(|e| {
        error!("Clock reported an invalid time: {}", e);
        ClockError::HardwareError
    })
}

fn write_canonical(out: &mut CanonicalText, time: &CalendarTime) -> core::fmt::Result {
    write!(
        out,
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        time.year, time.month, time.day, time.hour, time.minute, time.second
    )
}

/// `LocalClock` backed by an epoch-second counter
///
/// For RTCs that count seconds (or SNTP-disciplined counters). The count
/// must already include the local UTC offset.
pub struct EpochClock<S> {
    source: S,
}

impl<S: UnixTimeSource> EpochClock<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: UnixTimeSource> LocalClock for EpochClock<S> {
    fn local_time(&mut self) -> Result<CalendarTime, ClockError> {
        self.source.unix_secs().map(unix_to_calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(Result<CalendarTime, ClockError>);

    impl LocalClock for FixedClock {
        fn local_time(&mut self) -> Result<CalendarTime, ClockError> {
            self.0
        }
    }

    struct Counter(Option<u64>);

    impl UnixTimeSource for Counter {
        fn unix_secs(&mut self) -> Result<u64, ClockError> {
            self.0.ok_or(ClockError::NotSynced)
        }
    }

    #[test]
    fn test_canonical_text() {
        let mut clock = FixedClock(Ok(CalendarTime::new(2024, 3, 7, 0, 5, 9)));
        let text = current_datetime_text(&mut clock);
        assert_eq!(text.as_str(), "2024-03-07 00:05:09");
        assert_eq!(text.len(), CANONICAL_LEN);
    }

    #[test]
    fn test_unsynced_clock_gives_empty_text() {
        let mut clock = FixedClock(Err(ClockError::NotSynced));
        assert!(current_datetime_text(&mut clock).is_empty());
    }

    #[test]
    fn test_year_overflow_gives_empty_text() {
        let mut clock = FixedClock(Ok(CalendarTime::new(10_000, 1, 1, 0, 0, 0)));
        assert!(current_datetime_text(&mut clock).is_empty());
    }

    #[test]
    fn test_each_read_is_fresh() {
        let mut clock = FixedClock(Ok(CalendarTime::new(2024, 3, 7, 23, 59, 59)));
        let first = current_datetime_text(&mut clock);
        clock.0 = Ok(CalendarTime::new(2024, 3, 8, 0, 0, 0));
        let second = current_datetime_text(&mut clock);
        assert_eq!(first.as_str(), "2024-03-07 23:59:59");
        assert_eq!(second.as_str(), "2024-03-08 00:00:00");
    }

    #[test]
    fn test_current_datetime() {
        let mut clock = FixedClock(Ok(CalendarTime::new(2024, 3, 7, 12, 0, 0)));
        let now = current_datetime(&mut clock).unwrap();
        assert_eq!(now.hour(), 12);

        clock.0 = Ok(CalendarTime::new(2024, 2, 30, 12, 0, 0));
        assert_eq!(current_datetime(&mut clock), Err(ClockError::HardwareError));

        clock.0 = Err(ClockError::NotSynced);
        assert_eq!(current_datetime(&mut clock), Err(ClockError::NotSynced));
    }

    #[test]
    fn test_epoch_clock() {
        let mut clock = EpochClock::new(Counter(Some(1_709_769_909)));
        assert_eq!(
            current_datetime_text(&mut clock).as_str(),
            "2024-03-07 00:05:09"
        );

        // Reading back through the structured value gives the same count
        let now = current_datetime(&mut clock).unwrap();
        assert_eq!(now.unix_secs(), 1_709_769_909);
        assert_eq!(clock.into_inner().0, Some(1_709_769_909));

        let mut unsynced = EpochClock::new(Counter(None));
        assert_eq!(unsynced.local_time(), Err(ClockError::NotSynced));
        assert!(current_datetime_text(&mut unsynced).is_empty());
    }
}
