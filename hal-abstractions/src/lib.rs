//! Hardware abstraction traits for the aquarium controller firmware
//!
//! This crate defines traits that abstract over hardware differences
//! between boards. BSPs implement these traits; `aquarium-core` consumes
//! them.
//!
//! - **`wifi`**: station-mode radio with a polled link status
//! - **`clock`**: localized wall-clock reads from an RTC or a synced source

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(warnings)]

pub mod clock;
pub mod wifi;

pub use clock::{CalendarTime, ClockError, LocalClock, UnixTimeSource};
pub use wifi::{Credentials, CredentialsError, LinkStatus, WifiStation};
