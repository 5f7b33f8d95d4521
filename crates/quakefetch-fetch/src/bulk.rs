//! End-to-end bulk fetch: probe, plan, fetch, aggregate.

use quakefetch_aggregate::{AggregateResult, aggregate};
use quakefetch_types::{DateRange, FeatureCollection, PageBatch, Result};
use std::num::{NonZeroU32, NonZeroUsize};
use std::time::Duration;
use tracing::info;

use crate::executor::is_short_page;
use crate::url::{INITIAL_OFFSET, SERVICE_LIMIT};
use crate::{
    DEFAULT_CONCURRENCY, Transport, WorkerPool, build_pages_from, checked_page_count, fetch_all,
    probe_count,
};

/// Options for one bulk fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Records per page.
    pub page_size: NonZeroU32,
    /// Offset of the first page.
    pub initial_offset: u64,
    /// Maximum number of page requests in flight.
    pub max_concurrency: NonZeroUsize,
    /// Optional bound on each page request.
    pub page_timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page_size: SERVICE_LIMIT,
            initial_offset: INITIAL_OFFSET,
            max_concurrency: DEFAULT_CONCURRENCY,
            page_timeout: None,
        }
    }
}

impl FetchOptions {
    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: NonZeroU32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the concurrency ceiling.
    #[must_use]
    pub const fn with_max_concurrency(mut self, max_concurrency: NonZeroUsize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Sets the per-page timeout.
    #[must_use]
    pub const fn with_page_timeout(mut self, page_timeout: Option<Duration>) -> Self {
        self.page_timeout = page_timeout;
        self
    }

    /// Returns the worker pool described by these options.
    #[must_use]
    pub const fn worker_pool(&self) -> WorkerPool {
        WorkerPool::new(self.max_concurrency).with_page_timeout(self.page_timeout)
    }
}

/// Summary of how a batch went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    total_count: u64,
    pages_planned: usize,
    failed_offsets: Vec<u64>,
    short_pages: Vec<u64>,
}

impl FetchReport {
    /// Builds a report from a batch and its settled results.
    ///
    /// `results` must be indexed like `batch`.
    #[must_use]
    pub fn new(
        total_count: u64,
        batch: &PageBatch,
        results: &[Option<FeatureCollection>],
    ) -> Self {
        let mut failed_offsets = Vec::new();
        let mut short_pages = Vec::new();

        for (index, (page, result)) in batch.iter().zip(results).enumerate() {
            match result {
                None => failed_offsets.push(page.offset),
                Some(collection) if is_short_page(batch, index, collection) => {
                    short_pages.push(page.offset);
                }
                Some(_) => {}
            }
        }

        Self {
            total_count,
            pages_planned: batch.len(),
            failed_offsets,
            short_pages,
        }
    }

    /// Returns the record count reported by the probe.
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Returns the number of pages planned.
    #[must_use]
    pub const fn pages_planned(&self) -> usize {
        self.pages_planned
    }

    /// Returns the number of pages that contributed nothing.
    #[must_use]
    pub const fn pages_failed(&self) -> usize {
        self.failed_offsets.len()
    }

    /// Returns the offsets of the failed pages, in submission order.
    #[must_use]
    pub fn failed_offsets(&self) -> &[u64] {
        &self.failed_offsets
    }

    /// Returns the offsets of non-final pages that came back short.
    #[must_use]
    pub fn short_pages(&self) -> &[u64] {
        &self.short_pages
    }

    /// Returns true if every planned page was fetched.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failed_offsets.is_empty()
    }
}

impl std::fmt::Display for FetchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} pages fetched ({} failed)",
            self.pages_planned - self.pages_failed(),
            self.pages_planned,
            self.pages_failed()
        )
    }
}

/// Result of a bulk fetch.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Extracted columns.
    pub data: AggregateResult,
    /// How the batch went.
    pub report: FetchReport,
}

/// Fetches every event in `range` and aggregates the fields of interest.
///
/// Probes the record count, plans one page per `page_size` records,
/// fetches all pages over the options' worker pool and aggregates once the
/// whole batch has settled.
///
/// # Errors
///
/// Only the count probe can fail the operation, either because the probe
/// itself failed or because its count needs more than
/// [`MAX_PAGES`](crate::MAX_PAGES) pages. Page failures are reported in
/// [`FetchReport`].
pub async fn fetch_events<T: Transport + ?Sized>(
    transport: &T,
    range: DateRange,
    options: &FetchOptions,
) -> Result<FetchOutcome> {
    let total_count = probe_count(transport, &range).await?;
    info!(%range, total_count, "Total records found for your search: {total_count}");

    checked_page_count(total_count, options.page_size)?;
    let batch = build_pages_from(range, total_count, options.page_size, options.initial_offset);
    info!(
        pages = batch.len(),
        concurrency = options.max_concurrency.get(),
        "fetching pages"
    );

    let results = fetch_all(transport, &batch, &options.worker_pool()).await;
    let report = FetchReport::new(total_count, &batch, &results);
    let data = aggregate(&results);
    info!(records = data.len(), "{report}");

    Ok(FetchOutcome { data, report })
}
