//! Wall-clock time
//!
//! - **`clock`**: canonical `YYYY-MM-DD HH:MM:SS` text from a `LocalClock`
//! - **`calendar`**: O(1) civil calendar math
//!
//! The clock is assumed to be synchronized and localized by whoever
//! implements `LocalClock`. Reads before that happen report
//! `ClockError::NotSynced`.

pub mod calendar;
pub mod clock;

pub use clock::{current_datetime, current_datetime_text, CanonicalText, EpochClock};
