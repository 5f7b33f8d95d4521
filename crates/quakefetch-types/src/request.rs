//! Endpoints, page requests and page batches.

use std::num::NonZeroU32;

use crate::DateRange;

/// Logical endpoints of the event service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Reports the service API version as plain text.
    Version,
    /// Reports the number of events matching a query.
    Count,
    /// Returns one page of matching events.
    Query,
}

impl Endpoint {
    /// Returns the path segment appended to the service base URL.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Count => "count",
            Self::Query => "query",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Response format requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseFormat {
    /// QuakeML. Used for metadata-only calls, where the body is plain text.
    QuakeMl,
    /// GeoJSON feature collections.
    #[default]
    GeoJson,
}

impl ResponseFormat {
    /// Returns the value of the `format` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::QuakeMl => "quakeml",
            Self::GeoJson => "geojson",
        }
    }
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for a single page of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// Response format.
    pub format: ResponseFormat,
    /// Queried date range.
    pub range: DateRange,
    /// Maximum number of records in the page.
    pub limit: NonZeroU32,
    /// 1-based index of the first record in the page.
    pub offset: u64,
}

impl PageRequest {
    /// Creates a new page request.
    #[must_use]
    pub const fn new(
        format: ResponseFormat,
        range: DateRange,
        limit: NonZeroU32,
        offset: u64,
    ) -> Self {
        Self {
            format,
            range,
            limit,
            offset,
        }
    }

    /// Returns the query-string pairs for this page.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("format", self.format.as_str().to_string()),
            ("starttime", self.range.start_param()),
            ("endtime", self.range.end_param()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

/// The ordered set of pages covering one query.
///
/// A batch is built once per query and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageBatch {
    pages: Vec<PageRequest>,
}

impl PageBatch {
    /// Creates a batch from already planned pages.
    #[must_use]
    pub const fn new(pages: Vec<PageRequest>) -> Self {
        Self { pages }
    }

    /// Returns the planned pages in submission order.
    #[must_use]
    pub fn pages(&self) -> &[PageRequest] {
        &self.pages
    }

    /// Returns the number of pages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true if the batch has no pages.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns an iterator over the pages.
    pub fn iter(&self) -> std::slice::Iter<'_, PageRequest> {
        self.pages.iter()
    }
}

impl<'a> IntoIterator for &'a PageBatch {
    type Item = &'a PageRequest;
    type IntoIter = std::slice::Iter<'a, PageRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
