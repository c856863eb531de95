//! Wi-Fi station abstraction
//!
//! The radio driver owns association and DHCP. Callers only request a
//! connection once and then observe the link status.

use core::fmt;
use core::net::Ipv4Addr;

/// Longest SSID allowed by IEEE 802.11
pub const SSID_MAX_LEN: usize = 32;

/// Longest WPA2 passphrase (64 hex digits for a raw PSK)
pub const PASSWORD_MAX_LEN: usize = 64;

/// Network identifier and secret used to join the access point
///
/// Plain text with no secrecy protection. Built once at startup and passed
/// by reference to whatever brings the link up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Credentials<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    pub const fn new(ssid: &'a str, password: &'a str) -> Self {
        Self { ssid, password }
    }

    /// Check the credentials against 802.11 limits
    ///
    /// An empty password is accepted (open network).
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.ssid.is_empty() {
            return Err(CredentialsError::EmptySsid);
        }
        if self.ssid.len() > SSID_MAX_LEN {
            return Err(CredentialsError::SsidTooLong);
        }
        if self.password.len() > PASSWORD_MAX_LEN {
            return Err(CredentialsError::PasswordTooLong);
        }
        Ok(())
    }
}

/// Credential validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CredentialsError {
    /// SSID is empty
    EmptySsid,
    /// SSID longer than 32 bytes
    SsidTooLong,
    /// Password longer than 64 bytes
    PasswordTooLong,
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySsid => write!(f, "SSID is empty"),
            Self::SsidTooLong => write!(f, "SSID exceeds {} bytes", SSID_MAX_LEN),
            Self::PasswordTooLong => write!(f, "Password exceeds {} bytes", PASSWORD_MAX_LEN),
        }
    }
}

impl core::error::Error for CredentialsError {}

/// Link status as reported by the network stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    Disconnected,
    Connected,
}

impl LinkStatus {
    pub fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Station-mode Wi-Fi radio
///
/// Implementations must not block in any of these methods. `begin` starts
/// association in the background; progress is observed through `status`.
pub trait WifiStation {
    /// Driver-specific error for a rejected connection request
    type Error: fmt::Debug;

    /// Request association with the given network
    fn begin(&mut self, credentials: &Credentials<'_>) -> Result<(), Self::Error>;

    /// Current link status
    fn status(&mut self) -> LinkStatus;

    /// Address assigned by DHCP, `0.0.0.0` when none has been assigned
    fn local_ipv4(&mut self) -> Ipv4Addr;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_factory_credentials() {
        assert_eq!(Credentials::new("MHR", "12345678").validate(), Ok(()));
    }

    #[test]
    fn test_validate_accepts_open_network() {
        assert_eq!(Credentials::new("cafe", "").validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_lengths() {
        assert_eq!(
            Credentials::new("", "secret").validate(),
            Err(CredentialsError::EmptySsid)
        );

        let long_ssid = "s".repeat(SSID_MAX_LEN + 1);
        assert_eq!(
            Credentials::new(&long_ssid, "secret").validate(),
            Err(CredentialsError::SsidTooLong)
        );

        let long_password = "p".repeat(PASSWORD_MAX_LEN + 1);
        assert_eq!(
            Credentials::new("tank", &long_password).validate(),
            Err(CredentialsError::PasswordTooLong)
        );
    }

    #[test]
    fn test_link_status() {
        assert!(LinkStatus::Connected.is_connected());
        assert!(!LinkStatus::Disconnected.is_connected());
    }
}
