//! Bootstrap error types

use core::fmt;

use hal_abstractions::CredentialsError;

/// Wi-Fi bootstrap errors
///
/// `E` is the station driver's error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootstrapError<E> {
    /// Credentials rejected before any request was issued
    InvalidCredentials(CredentialsError),
    /// The station driver refused the connection request
    Station(E),
    /// Poll budget exhausted without the link coming up
    Timeout {
        /// Unsuccessful polls before giving up
        polls: u32,
    },
}

impl<E> From<CredentialsError> for BootstrapError<E> {
    fn from(e: CredentialsError) -> Self {
        Self::InvalidCredentials(e)
    }
}

impl<E: fmt::Debug> fmt::Display for BootstrapError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials(e) => write!(f, "Invalid credentials: {}", e),
            Self::Station(e) => write!(f, "Station error: {:?}", e),
            Self::Timeout { polls } => write!(f, "Link not up after {} polls", polls),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for BootstrapError<E> {}
