//! Wi-Fi bootstrap
//!
//! Brings the station interface up before anything that needs the network
//! runs. One connection request is issued, then the link status is polled
//! until the stack reports it connected.
//!
//! ## States
//! ```text
//! Disconnected --begin()--> Connecting --status() == Connected--> Connected
//! ```
//! `Connected` is terminal. The transition out of `Connecting` is driven by
//! the network stack and only observed here.
//!
//! ## Console output
//! - Banner with the SSID and password in clear text
//! - One `.` per unsuccessful poll
//! - The assigned IPv4 address followed by an empty line
//!
//! ## Usage
//! ```ignore
//! let credentials = config::compiled_credentials();
//! let mut boot = WifiBootstrapper::new(radio, uart, &credentials, BootstrapConfig::default());
//! let ip = boot.connect_blocking(&mut delay)?;
//! ```

use core::fmt::Write as _;
use core::net::Ipv4Addr;

use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;
use embedded_io::Write;
use hal_abstractions::{Credentials, WifiStation};
use heapless::String;

use super::error::BootstrapError;
use crate::config::{BootstrapConfig, RetryPolicy};

/// Longest dotted-quad IPv4 address ("255.255.255.255")
const IPV4_TEXT_MAX_LEN: usize = 15;

/// Bootstrap progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    /// No connection request issued yet
    Disconnected,
    /// Request issued, waiting for the stack to report the link up
    Connecting {
        /// Unsuccessful status polls so far
        polls: u32,
    },
    /// Link is up with the given address
    Connected(Ipv4Addr),
}

/// Drives a `WifiStation` from disconnected to connected
pub struct WifiBootstrapper<'a, S, W> {
    station: S,
    console: W,
    credentials: Credentials<'a>,
    config: BootstrapConfig,
    state: BootstrapState,
}

impl<'a, S, W> WifiBootstrapper<'a, S, W>
where
    S: WifiStation,
    W: Write,
{
    pub fn new(
        station: S,
        console: W,
        credentials: &Credentials<'a>,
        config: BootstrapConfig,
    ) -> Self {
        Self {
            station,
            console,
            credentials: *credentials,
            config,
            state: BootstrapState::Disconnected,
        }
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    /// Give back the station and console
    pub fn into_parts(self) -> (S, W) {
        (self.station, self.console)
    }

    /// Advance the state machine by one transition without sleeping
    ///
    /// From `Disconnected` this validates the credentials, issues the single
    /// connection request and, once the station accepts it, prints the
    /// banner. A rejected request leaves the console untouched and the state
    /// at `Disconnected`. From `Connecting` it polls the link status once; an
    /// unsuccessful poll prints a progress mark and counts against the retry
    /// policy. The caller decides how long to wait between calls.
    pub fn step(&mut self) -> Result<BootstrapState, BootstrapError<S::Error>> {
        match self.state {
            BootstrapState::Disconnected => self.request()?,
            BootstrapState::Connecting { polls } => self.poll(polls)?,
            BootstrapState::Connected(_) => {}
        }
        Ok(self.state)
    }

    /// Block until the link is up
    ///
    /// With `RetryPolicy::Forever` this never returns an error once the
    /// request has been accepted; it waits as long as it takes.
    pub fn connect_blocking<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<Ipv4Addr, BootstrapError<S::Error>> {
        if self.state == BootstrapState::Disconnected {
            self.step()?;
        }

        loop {
            if let BootstrapState::Connected(ip) = self.step()? {
                return Ok(ip);
            }
            delay.delay_ms(self.config.poll_interval_ms);
        }
    }

    /// Wait for the link to come up without blocking the executor
    ///
    /// Dropping the returned future abandons the wait; the request already
    /// issued to the station is not withdrawn.
    pub async fn connect<D: AsyncDelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<Ipv4Addr, BootstrapError<S::Error>> {
        if self.state == BootstrapState::Disconnected {
            self.step()?;
        }

        loop {
            if let BootstrapState::Connected(ip) = self.step()? {
                return Ok(ip);
            }
            delay.delay_ms(self.config.poll_interval_ms).await;
        }
    }

    fn request(&mut self) -> Result<(), BootstrapError<S::Error>> {
        self.credentials.validate()?;

        self.station
            .begin(&self.credentials)
            .map_err(BootstrapError::Station)?;

        info!("Connecting to WiFi network '{}'", self.credentials.ssid);
        let (ssid, password) = (self.credentials.ssid, self.credentials.password);
        self.print("Connecting to WiFi-> SSID: ");
        self.print(ssid);
        self.print(" Pass: ");
        self.print(password);

        self.state = BootstrapState::Connecting { polls: 0 };
        Ok(())
    }

    fn poll(&mut self, polls: u32) -> Result<(), BootstrapError<S::Error>> {
        if self.station.status().is_connected() {
            let ip = self.station.local_ipv4();
            let octets = ip.octets();
            info!(
                "WiFi is UP! IP: {}.{}.{}.{}",
                octets[0], octets[1], octets[2], octets[3]
            );

            let mut text: String<IPV4_TEXT_MAX_LEN> = String::new();
            if write!(text, "{}", ip).is_err() {
                warn!("IP address did not fit the console buffer");
            }
            self.print(&text);
            self.print("\r\n\r\n");
            self.state = BootstrapState::Connected(ip);
            return Ok(());
        }

        if let RetryPolicy::MaxPolls(max) = self.config.policy {
            if polls >= max {
                warn!("WiFi link still down after {} polls, giving up", polls);
                return Err(BootstrapError::Timeout { polls });
            }
        }

        self.print(".");
        // Saturates under `Forever`; the count only matters for `MaxPolls`
        self.state = BootstrapState::Connecting {
            polls: polls.saturating_add(1),
        };
        Ok(())
    }

    /// Console output is diagnostic; failures are logged and dropped
    fn print(&mut self, text: &str) {
        let written = self.console.write_all(text.as_bytes());
        if written.and_then(|_| self.console.flush()).is_err() {
            debug!("Console write failed");
        }
    }
}
