//! Backend trait and implementations for location lookups.
//!
//! The default implementation is [`ipapi::IpApiBackend`], which asks
//! `ipapi.co` to place the caller's public IP address.
//!
//! # Testing
//!
//! Use [`MockBackend`] for testing without network access:
//!
//! ```
//! use locate::backend::{Backend, MockBackend};
//! use locate::GeoLocation;
//!
//! let mock = MockBackend::succeeding(GeoLocation::new("Lisbon", "Lisbon", "Portugal"));
//! let found = mock.lookup().unwrap();
//! assert_eq!(found.city, "Lisbon");
//! assert_eq!(mock.calls(), 1);
//! ```

pub mod ipapi;

use crate::error::{Error, Result};
use crate::types::GeoLocation;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Backend trait for resolving the caller's location.
///
/// Implementations block; callers that must stay responsive run them on a
/// worker thread.
pub trait Backend: Send + Sync {
    /// Resolve the current location.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, an unusable response, or when
    /// the service cannot place the caller.
    fn lookup(&self) -> Result<GeoLocation>;
}

#[derive(Debug, Clone)]
enum Outcome {
    Found(GeoLocation),
    Fail(String),
}

/// Mock backend for testing without network access.
///
/// Returns a fixed outcome and counts how often it was asked. Clones share
/// the counter, so a test can keep one clone and hand the other to a client.
#[derive(Debug, Clone)]
pub struct MockBackend {
    outcome: Outcome,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl MockBackend {
    /// A backend that always resolves to `location`.
    #[must_use]
    pub fn succeeding(location: GeoLocation) -> Self {
        Self {
            outcome: Outcome::Found(location),
            delay: None,
            calls: Arc::default(),
        }
    }

    /// A backend that always fails with an HTTP error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(message.into()),
            delay: None,
            calls: Arc::default(),
        }
    }

    /// Sleep for `delay` before answering.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of lookups served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Backend for MockBackend {
    fn lookup(&self) -> Result<GeoLocation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        match &self.outcome {
            Outcome::Found(location) => Ok(location.clone()),
            Outcome::Fail(message) => Err(Error::Http {
                message: message.clone(),
                status: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_backend_succeeding() {
        let mock = MockBackend::succeeding(GeoLocation::new("Oslo", "Oslo", "Norway"));
        assert_eq!(mock.calls(), 0);
        let loc = mock.lookup().unwrap();
        assert_eq!(loc.country, "Norway");
        assert_eq!(mock.calls(), 1);
    }

    #[test]
    fn test_mock_backend_failing() {
        let mock = MockBackend::failing("connection refused");
        let err = mock.lookup().unwrap_err();
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(mock.calls(), 1);
    }

    #[test]
    fn test_mock_backend_clones_share_counter() {
        let mock = MockBackend::failing("offline");
        let other = mock.clone();
        let _ = other.lookup();
        let _ = other.lookup();
        assert_eq!(mock.calls(), 2);
    }
}
