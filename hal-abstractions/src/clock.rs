//! Wall-clock abstractions
//!
//! Time reported through these traits is already localized. Timezone and
//! synchronization policy belong to whoever implements them.

use core::fmt;

/// Broken-down local calendar time with 1-second resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0-23
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CalendarTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

/// Clock read errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Clock has not been synchronized yet
    NotSynced,
    /// RTC hardware error
    HardwareError,
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSynced => write!(f, "Clock not synchronized"),
            Self::HardwareError => write!(f, "RTC hardware error"),
        }
    }
}

impl core::error::Error for ClockError {}

/// Source of localized calendar time
pub trait LocalClock {
    /// Read the current local time
    fn local_time(&mut self) -> Result<CalendarTime, ClockError>;
}

/// Source of seconds since 1970-01-01 00:00:00 (local, not UTC)
///
/// For RTCs and SNTP-backed counters that keep an epoch count instead of
/// calendar registers.
pub trait UnixTimeSource {
    fn unix_secs(&mut self) -> Result<u64, ClockError>;
}
