//! # locate
//!
//! Best-effort IP geolocation for vitae.
//!
//! The wizard asks once per session for a human-readable location string to
//! pre-fill the personal info form. Every failure is reported as an error;
//! callers decide whether to surface it (the wizard shows one warning and
//! leaves the field alone).
//!
//! ## Example
//!
//! ```
//! use locate::{Client, GeoLocation, MockBackend};
//!
//! let client = Client::with_backend(Box::new(MockBackend::succeeding(
//!     GeoLocation::new("Recife", "Pernambuco", "Brazil"),
//! )));
//! assert_eq!(client.locate().unwrap(), "Recife, Pernambuco, Brazil");
//! ```
//!
//! ## Backends
//!
//! | Backend        | Source                  | Notes                        |
//! |----------------|-------------------------|------------------------------|
//! | `IpApiBackend` | `https://ipapi.co/json/`| default, blocking `ureq`     |
//! | `MockBackend`  | in memory               | fixed answer, call counter   |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod error;
pub mod types;

pub use error::{Error, ErrorCategory, Result};
pub use types::GeoLocation;

use backend::Backend;
pub use backend::MockBackend;
use backend::ipapi::IpApiBackend;
use std::time::Duration;

/// High-level client for location lookups.
pub struct Client {
    backend: Box<dyn Backend>,
}

impl Client {
    /// Create a client using `ipapi.co` with the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: Box::new(IpApiBackend::new()),
        }
    }

    /// Create a client for a custom endpoint and timeout.
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            backend: Box::new(IpApiBackend::with_endpoint(endpoint, timeout)),
        }
    }

    /// Create a client with a custom backend (useful for testing).
    #[must_use]
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Resolve the current location as structured data.
    ///
    /// # Errors
    ///
    /// Fails when the backend fails or resolves to an all-empty location.
    pub fn lookup(&self) -> Result<GeoLocation> {
        let location = self.backend.lookup()?;
        if location.is_empty() {
            return Err(Error::Unresolved("empty location".to_string()));
        }
        Ok(location)
    }

    /// Resolve the current location as `"<city>, <region>, <country>"`.
    ///
    /// # Errors
    ///
    /// Same as [`Client::lookup`].
    pub fn locate(&self) -> Result<String> {
        match self.lookup() {
            Ok(location) => {
                let text = location.display();
                log::info!("Location resolved: {text}");
                Ok(text)
            }
            Err(e) => {
                log::warn!("Location lookup failed ({}): {e}", e.category());
                Err(e)
            }
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_formats_location() {
        let client = Client::with_backend(Box::new(MockBackend::succeeding(GeoLocation::new(
            "Austin", "Texas", "United States",
        ))));
        assert_eq!(client.locate().unwrap(), "Austin, Texas, United States");
    }

    #[test]
    fn test_locate_propagates_failure() {
        let mock = MockBackend::failing("HTTP 429");
        let client = Client::with_backend(Box::new(mock.clone()));
        assert!(client.locate().is_err());
        assert_eq!(mock.calls(), 1);
    }

    #[test]
    fn test_empty_location_is_failure() {
        let client = Client::with_backend(Box::new(MockBackend::succeeding(GeoLocation::default())));
        let err = client.locate().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Unresolved);
    }
}
