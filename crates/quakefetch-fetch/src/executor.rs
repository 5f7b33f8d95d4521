//! Concurrent page fetching over a bounded worker pool.

use futures::stream::{self, StreamExt};
use quakefetch_types::{Endpoint, FeatureCollection, PageBatch, PageRequest, QuakeError, Result};
use std::num::NonZeroUsize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::Transport;

/// Default number of requests allowed in flight at once.
pub const DEFAULT_CONCURRENCY: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Bounded worker pool that a batch is dispatched over.
///
/// At most `max_concurrency` page requests are in flight at any time; the
/// rest wait until a slot frees up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    max_concurrency: NonZeroUsize,
    page_timeout: Option<Duration>,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(DEFAULT_CONCURRENCY)
    }
}

impl WorkerPool {
    /// Creates a pool with the given concurrency ceiling and no page timeout.
    #[must_use]
    pub const fn new(max_concurrency: NonZeroUsize) -> Self {
        Self {
            max_concurrency,
            page_timeout: None,
        }
    }

    /// Bounds every page request by `timeout`. A page that exceeds it
    /// settles as failed.
    #[must_use]
    pub const fn with_page_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.page_timeout = timeout;
        self
    }

    /// Returns the concurrency ceiling.
    #[must_use]
    pub const fn max_concurrency(&self) -> usize {
        self.max_concurrency.get()
    }

    /// Returns the per-page timeout, if any.
    #[must_use]
    pub const fn page_timeout(&self) -> Option<Duration> {
        self.page_timeout
    }
}

/// Fetches every page of `batch` and waits for all of them to settle.
///
/// The returned vector has one slot per page, in submission order
/// regardless of completion order. A page that failed, timed out, or could
/// not be decoded leaves its slot `None`; it never fails the batch. An
/// empty batch returns immediately without dispatching anything.
pub async fn fetch_all<T: Transport + ?Sized>(
    transport: &T,
    batch: &PageBatch,
    pool: &WorkerPool,
) -> Vec<Option<FeatureCollection>> {
    let mut slots: Vec<Option<FeatureCollection>> =
        std::iter::repeat_with(|| None).take(batch.len()).collect();
    if batch.is_empty() {
        return slots;
    }

    let page_timeout = pool.page_timeout();
    let mut settled = stream::iter(batch.iter().enumerate())
        .map(move |(index, page)| async move {
            (index, fetch_page(transport, page, page_timeout).await)
        })
        .buffer_unordered(pool.max_concurrency());

    while let Some((index, result)) = settled.next().await {
        let page = &batch.pages()[index];
        match result {
            Ok(collection) => {
                if is_short_page(batch, index, &collection) {
                    warn!(
                        offset = page.offset,
                        returned = collection.returned_count(),
                        limit = page.limit.get(),
                        "non-final page returned fewer records than its limit"
                    );
                }
                slots[index] = Some(collection);
            }
            Err(error) => {
                warn!(offset = page.offset, %error, "page failed, skipping");
            }
        }
    }

    slots
}

/// Returns true if the page at `index` is not the last of `batch` and came
/// back with fewer records than its limit.
pub(crate) fn is_short_page(
    batch: &PageBatch,
    index: usize,
    collection: &FeatureCollection,
) -> bool {
    let Some(page) = batch.pages().get(index) else {
        return false;
    };
    index + 1 < batch.len() && collection.returned_count() < u64::from(page.limit.get())
}

/// Fetches and decodes a single page.
async fn fetch_page<T: Transport + ?Sized>(
    transport: &T,
    page: &PageRequest,
    page_timeout: Option<Duration>,
) -> Result<FeatureCollection> {
    debug!(offset = page.offset, limit = page.limit.get(), "dispatching page");
    let query = page.query_pairs();
    let request = transport.get(Endpoint::Query, &query);

    let body = match page_timeout {
        Some(limit) => tokio::time::timeout(limit, request)
            .await
            .map_err(|_| QuakeError::Timeout {
                offset: page.offset,
            })??,
        None => request.await?,
    };

    FeatureCollection::from_json(&body)
        .map_err(|e| QuakeError::MalformedPageResponse(e.to_string()))
}
