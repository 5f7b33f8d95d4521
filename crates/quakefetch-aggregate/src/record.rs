//! Extracted event records.

use quakefetch_types::Feature;
use serde::{Deserialize, Serialize};

/// The fields of interest of a single event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Event magnitude.
    pub magnitude: f64,
    /// Origin time in milliseconds since the Unix epoch.
    pub time: Option<i64>,
    /// Longitude (geometry coordinate 0).
    pub longitude: Option<f64>,
    /// Latitude (geometry coordinate 1).
    pub latitude: Option<f64>,
    /// Depth (geometry coordinate 2).
    pub depth: Option<f64>,
}

impl ExtractedRecord {
    /// Extracts a record from a feature.
    ///
    /// Returns `None` when the feature has no magnitude, whether the field
    /// is missing or `null`. Such features are skipped, not treated as errors.
    #[must_use]
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        let magnitude = feature.properties.mag?;
        Some(Self {
            magnitude,
            time: feature.properties.time,
            longitude: feature.coordinate(0),
            latitude: feature.coordinate(1),
            depth: feature.coordinate(2),
        })
    }
}
