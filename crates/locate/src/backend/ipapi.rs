//! `ipapi.co` backend.
//!
//! Unauthenticated requests are rate limited (roughly a thousand a day per
//! address), which is plenty for one lookup per wizard session. When the
//! service cannot answer it still replies `200` with `{"error": true}`.

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::types::GeoLocation;
use serde::Deserialize;
use std::time::Duration;

/// Default lookup endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://ipapi.co/json/";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// `ipapi.co` location backend.
///
/// # Example
///
/// ```no_run
/// use locate::backend::Backend;
/// use locate::backend::ipapi::IpApiBackend;
///
/// let backend = IpApiBackend::new();
/// let location = backend.lookup().unwrap();
/// println!("{location}");
/// ```
pub struct IpApiBackend {
    /// HTTP agent for requests.
    agent: ureq::Agent,
    /// Lookup URL.
    endpoint: String,
}

/// Response body fields we read.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IpApiResponse {
    city: Option<String>,
    region: Option<String>,
    country_name: Option<String>,
    error: bool,
    reason: Option<String>,
}

impl IpApiBackend {
    /// Create a backend for the default endpoint and timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    /// Create a backend for a custom endpoint (mirrors, local test servers).
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    /// Get the lookup URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for IpApiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for IpApiBackend {
    fn lookup(&self) -> Result<GeoLocation> {
        log::debug!("Requesting location from {}", self.endpoint);

        let body: String = self
            .agent
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .header("User-Agent", concat!("vitae/", env!("CARGO_PKG_VERSION")))
            .call()?
            .body_mut()
            .read_to_string()?;

        parse_response(&body)
    }
}

/// Turn a response body into a location.
fn parse_response(body: &str) -> Result<GeoLocation> {
    let response: IpApiResponse = serde_json::from_str(body)?;

    if response.error {
        let reason = response.reason.unwrap_or_else(|| "unknown reason".to_string());
        return Err(Error::Unresolved(reason));
    }

    let location = GeoLocation {
        city: response.city.unwrap_or_default(),
        region: response.region.unwrap_or_default(),
        country: response.country_name.unwrap_or_default(),
    };

    if location.is_empty() {
        return Err(Error::Unresolved("response carried no location fields".to_string()));
    }
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let backend = IpApiBackend::with_endpoint("http://localhost:9/json", Duration::from_millis(10));
        assert_eq!(backend.endpoint(), "http://localhost:9/json");
        assert_eq!(IpApiBackend::new().endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "ip": "203.0.113.7",
            "city": "Porto Alegre",
            "region": "Rio Grande do Sul",
            "country_name": "Brazil",
            "country_code": "BR"
        }"#;
        let loc = parse_response(body).unwrap();
        assert_eq!(loc.display(), "Porto Alegre, Rio Grande do Sul, Brazil");
    }

    #[test]
    fn test_parse_null_fields() {
        let body = r#"{"city": null, "region": null, "country_name": "Iceland"}"#;
        let loc = parse_response(body).unwrap();
        assert_eq!(loc.display(), "Iceland");
    }

    #[test]
    fn test_parse_error_flag() {
        let body = r#"{"ip": "127.0.0.1", "error": true, "reason": "Reserved IP Address"}"#;
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, Error::Unresolved(ref r) if r == "Reserved IP Address"));
    }

    #[test]
    fn test_parse_empty_is_error() {
        let err = parse_response(r#"{"city": "", "region": "", "country_name": ""}"#).unwrap_err();
        assert!(matches!(err, Error::Unresolved(_)));
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_response("<html>Too Many Requests</html>").unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn test_unreachable_endpoint_is_network_error() {
        // Port 9 (discard) is closed on test machines.
        let backend = IpApiBackend::with_endpoint("http://127.0.0.1:9/json", Duration::from_millis(500));
        let err = backend.lookup().unwrap_err();
        assert!(err.category().is_transient());
    }
}
