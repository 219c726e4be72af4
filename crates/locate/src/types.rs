//! Core types for location lookups.

use serde::{Deserialize, Serialize};

/// A resolved location.
///
/// Any component may be empty when the service could not place it; a
/// location with every component empty is never returned by a [`Client`](crate::Client).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// City name
    pub city: String,
    /// Region, state or province
    pub region: String,
    /// Country display name
    pub country: String,
}

impl GeoLocation {
    /// Create a location from its three components.
    pub fn new(city: impl Into<String>, region: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            region: region.into(),
            country: country.into(),
        }
    }

    /// True when no component carries any text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.city, &self.region, &self.country]
            .iter()
            .all(|s| s.trim().is_empty())
    }

    /// Human-readable form: `"<city>, <region>, <country>"`.
    ///
    /// Empty components are skipped so a partial answer does not render as
    /// `", , Brazil"`.
    #[must_use]
    pub fn display(&self) -> String {
        [&self.city, &self.region, &self.country]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
