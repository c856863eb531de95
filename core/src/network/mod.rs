//! Network bring-up
//!
//! - **`bootstrap`**: `WifiBootstrapper` state machine with blocking and
//!   async polling drivers
//! - **`error`**: error enum for bootstrap failures
//!
//! The radio itself lives behind `hal_abstractions::WifiStation`; this
//! module only requests the connection and waits for the stack to report
//! the link up.

pub mod bootstrap;
pub mod error;

pub use bootstrap::{BootstrapState, WifiBootstrapper};
pub use error::BootstrapError;
