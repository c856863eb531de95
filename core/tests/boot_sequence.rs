//! Boot sequence as a board would run it: bring Wi-Fi up, then render the
//! clock for the display.

use core::convert::Infallible;
use core::net::Ipv4Addr;

use aquarium_core::{
    current_datetime_text, to_12_hour, to_long_date, BootstrapConfig, EpochClock,
    WifiBootstrapper,
};
use embedded_hal::delay::DelayNs;
use hal_abstractions::{ClockError, Credentials, LinkStatus, UnixTimeSource, WifiStation};

struct Radio {
    polls_until_up: u32,
}

impl WifiStation for Radio {
    type Error = Infallible;

    fn begin(&mut self, _credentials: &Credentials<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn status(&mut self) -> LinkStatus {
        if self.polls_until_up == 0 {
            LinkStatus::Connected
        } else {
            self.polls_until_up -= 1;
            LinkStatus::Disconnected
        }
    }

    fn local_ipv4(&mut self) -> Ipv4Addr {
        Ipv4Addr::new(10, 0, 0, 7)
    }
}

struct Uart(Vec<u8>);

impl embedded_io::ErrorType for Uart {
    type Error = Infallible;
}

impl embedded_io::Write for Uart {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// RTC counting local epoch seconds, synced after the link comes up
struct Rtc(Option<u64>);

impl UnixTimeSource for Rtc {
    fn unix_secs(&mut self) -> Result<u64, ClockError> {
        self.0.ok_or(ClockError::NotSynced)
    }
}

#[test]
fn test_boot_then_display_time() {
    let credentials = Credentials::new("ReefNet", "coral-reef");
    let mut boot = WifiBootstrapper::new(
        Radio { polls_until_up: 2 },
        Uart(Vec::new()),
        &credentials,
        BootstrapConfig::default(),
    );

    let ip = boot.connect_blocking(&mut NoDelay).unwrap();
    assert_eq!(ip, Ipv4Addr::new(10, 0, 0, 7));

    let (_, uart) = boot.into_parts();
    assert_eq!(
        String::from_utf8(uart.0).unwrap(),
        "Connecting to WiFi-> SSID: ReefNet Pass: coral-reef..10.0.0.7\r\n\r\n"
    );

    // Clock not synced yet: callers see an empty string and must not format it
    let mut clock = EpochClock::new(Rtc(None));
    assert!(current_datetime_text(&mut clock).is_empty());

    // 2024-03-07 23:59:59
    let mut clock = EpochClock::new(Rtc(Some(1_709_855_999)));
    let now = current_datetime_text(&mut clock);
    assert_eq!(now.as_str(), "2024-03-07 23:59:59");
    assert_eq!(to_12_hour(&now), "11:59:59 PM");
    assert_eq!(to_long_date(&now), "07 March, 2024");
}
