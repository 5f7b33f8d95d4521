//! Page-to-column aggregation.

use quakefetch_types::FeatureCollection;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ExtractedRecord;

/// Parallel columns built from extracted records.
///
/// Index `i` of every column refers to the same source event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Magnitudes.
    pub magnitudes: Vec<f64>,
    /// Origin times in milliseconds since the Unix epoch.
    pub times: Vec<Option<i64>>,
    /// Longitudes.
    pub longitudes: Vec<Option<f64>>,
    /// Latitudes.
    pub latitudes: Vec<Option<f64>>,
    /// Depths.
    pub depths: Vec<Option<f64>>,
}

impl AggregateResult {
    /// Creates an empty result.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            magnitudes: Vec::new(),
            times: Vec::new(),
            longitudes: Vec::new(),
            latitudes: Vec::new(),
            depths: Vec::new(),
        }
    }

    /// Appends one record to every column.
    pub fn push(&mut self, record: ExtractedRecord) {
        self.magnitudes.push(record.magnitude);
        self.times.push(record.time);
        self.longitudes.push(record.longitude);
        self.latitudes.push(record.latitude);
        self.depths.push(record.depth);
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Returns true if no record was extracted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Returns the record stored at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ExtractedRecord> {
        Some(ExtractedRecord {
            magnitude: *self.magnitudes.get(index)?,
            time: *self.times.get(index)?,
            longitude: *self.longitudes.get(index)?,
            latitude: *self.latitudes.get(index)?,
            depth: *self.depths.get(index)?,
        })
    }

    /// Iterates over the stored records row by row.
    pub fn records(&self) -> impl Iterator<Item = ExtractedRecord> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }
}

/// Aggregates pages one at a time.
#[derive(Debug, Default)]
pub struct RecordAggregator {
    result: AggregateResult,
    skipped: usize,
}

impl RecordAggregator {
    /// Creates a new, empty aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            result: AggregateResult::new(),
            skipped: 0,
        }
    }

    /// Extracts every feature of `page` that carries a magnitude.
    pub fn process(&mut self, page: &FeatureCollection) {
        for feature in &page.features {
            match ExtractedRecord::from_feature(feature) {
                Some(record) => self.result.push(record),
                None => self.skipped += 1,
            }
        }
    }

    /// Returns the number of features skipped for lack of a magnitude.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Finishes aggregation and returns the columns.
    #[must_use]
    pub fn finish(self) -> AggregateResult {
        self.result
    }
}

/// Aggregates a settled batch in a single pass.
///
/// Absent pages contribute nothing. Output order follows the order of
/// `pages`, then the order of features within each page.
#[must_use]
pub fn aggregate(pages: &[Option<FeatureCollection>]) -> AggregateResult {
    let mut aggregator = RecordAggregator::new();
    for page in pages.iter().flatten() {
        aggregator.process(page);
    }
    debug!(
        records = aggregator.result.len(),
        skipped = aggregator.skipped(),
        "aggregated pages"
    );
    aggregator.finish()
}
