//! Platform-agnostic core logic for the aquarium controller firmware
//!
//! This crate contains business logic that can be shared across all
//! supported boards. It has NO hardware dependencies; boards plug in
//! through the traits in `hal-abstractions`.
//!
//! - **`network`**: Wi-Fi bootstrap that blocks boot until the link is up
//! - **`time`**: canonical clock text and calendar conversions
//! - **`datetime`**: display formatting of canonical timestamps
//! - **`config`**: compiled-in credentials and bootstrap settings

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(warnings)]

// Must come first so the logging macros are visible to the other modules
#[macro_use]
mod fmt;

pub mod config;
pub mod datetime;
pub mod network;
pub mod time;

pub use config::{compiled_credentials, BootstrapConfig, RetryPolicy};
pub use datetime::{to_12_hour, to_long_date, DateTime, DisplayText, ParseError};
pub use network::{BootstrapError, BootstrapState, WifiBootstrapper};
pub use time::{current_datetime, current_datetime_text, CanonicalText, EpochClock};
