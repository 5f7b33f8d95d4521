//! GeoJSON page model returned by the query endpoint.

use serde::{Deserialize, Serialize};

/// One page of events as returned by the query endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Page metadata, when the service includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PageMetadata>,
    /// The events in this page.
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Decodes a page from its JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a GeoJSON feature collection.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Returns the number of records the service reports for this page,
    /// falling back to the number of decoded features.
    #[must_use]
    pub fn returned_count(&self) -> u64 {
        self.metadata
            .as_ref()
            .and_then(|m| m.count)
            .unwrap_or(self.features.len() as u64)
    }
}

/// Metadata block of a feature collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Number of features in the page.
    #[serde(default)]
    pub count: Option<u64>,
    /// HTTP status reported by the service.
    #[serde(default)]
    pub status: Option<u16>,
    /// API version that produced the page.
    #[serde(default)]
    pub api: Option<String>,
}

/// A single event record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Feature {
    /// Event identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Event properties.
    #[serde(default)]
    pub properties: Properties,
    /// Event location.
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl Feature {
    /// Returns the coordinate at `index`, if present and non-null.
    ///
    /// Index 0 is longitude, 1 is latitude, 2 is depth.
    #[must_use]
    pub fn coordinate(&self, index: usize) -> Option<f64> {
        self.geometry
            .as_ref()
            .and_then(|g| g.coordinates.get(index).copied().flatten())
    }
}

/// Event properties.
///
/// Only the fields consumed downstream are modelled; everything else in
/// the payload is ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Properties {
    /// Magnitude. Missing and `null` both decode to `None`.
    #[serde(default)]
    pub mag: Option<f64>,
    /// Origin time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub time: Option<i64>,
}

/// Point geometry: `[longitude, latitude, depth]`.
///
/// The service occasionally sends `null` for a coordinate it does not know
/// (usually depth), so each element is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    /// Coordinates in GeoJSON order.
    #[serde(default)]
    pub coordinates: Vec<Option<f64>>,
}
