//! Location-area listing DTOs
//!
//! Defines the structure of `GET /location-area` response bodies.

use serde::Deserialize;

/// A named link to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. `canalave-city-area`
    pub name: String,
    /// Absolute URL of the resource
    #[serde(default)]
    pub url: String,
}

/// One page of the paginated location-area listing.
///
/// `next` and `previous` are absolute URLs, `null` at either end of the listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    #[serde(default)]
    pub count: u64,
    /// URL of the following page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the preceding page
    #[serde(default)]
    pub previous: Option<String>,
    /// Location areas on this page
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Iterates over the location names on this page, in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.name.as_str())
    }
}
