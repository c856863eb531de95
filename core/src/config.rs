//! Firmware configuration
//!
//! Credentials are fixed at build time. Override the factory values by
//! exporting `AQUARIUM_WIFI_SSID` / `AQUARIUM_WIFI_PASSWORD` before building.

use hal_abstractions::Credentials;

/// Factory SSID used when no override is compiled in
pub const DEFAULT_WIFI_SSID: &str = "MHR";

/// Factory password used when no override is compiled in
pub const DEFAULT_WIFI_PASSWORD: &str = "12345678";

/// Interval between link status polls while waiting for association
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1000;

const WIFI_SSID: &str = match option_env!("AQUARIUM_WIFI_SSID") {
    Some(ssid) => ssid,
    None => DEFAULT_WIFI_SSID,
};

const WIFI_PASSWORD: &str = match option_env!("AQUARIUM_WIFI_PASSWORD") {
    Some(password) => password,
    None => DEFAULT_WIFI_PASSWORD,
};

/// Credentials baked into this firmware image
pub const fn compiled_credentials() -> Credentials<'static> {
    Credentials::new(WIFI_SSID, WIFI_PASSWORD)
}

/// How long the bootstrapper keeps polling before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RetryPolicy {
    /// Poll until the link comes up, however long that takes
    Forever,
    /// Give up after this many unsuccessful polls
    MaxPolls(u32),
}

/// Wi-Fi bootstrap configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BootstrapConfig {
    /// Delay between link status polls in milliseconds
    pub poll_interval_ms: u32,
    /// Stop condition for the polling loop
    pub policy: RetryPolicy,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            policy: RetryPolicy::Forever,
        }
    }
}
