//! Concurrent paginated downloader for USGS earthquake event data.
//!
//! This is a facade crate that re-exports functionality from the quakefetch
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use quakefetch_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = ServiceClient::with_defaults()?;
//!     let range = DateRange::parse("2017-10-01", "2017-10-31")?;
//!
//!     let outcome = fetch_events(&client, range, &FetchOptions::default()).await?;
//!     println!("{} events, {}", outcome.data.len(), outcome.report);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quakefetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use quakefetch_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use quakefetch_fetch::{
    ClientConfig, DEFAULT_CONCURRENCY, FetchOptions, FetchOutcome, FetchReport, MAX_PAGES,
    ServiceClient, ServiceVersion, Transport, WorkerPool, build_pages, build_pages_from,
    check_version, checked_page_count, fetch_all, fetch_events, page_count, parse_count,
    probe_count, url,
};

// Re-export aggregation
#[cfg(feature = "aggregate")]
pub use quakefetch_aggregate::{AggregateResult, ExtractedRecord, RecordAggregator, aggregate};

/// Prelude module for convenient imports.
///
/// ```
/// use quakefetch_lib::prelude::*;
/// ```
pub mod prelude {
    pub use quakefetch_types::{
        DateRange, DateRangeError, PageBatch, PageRequest, QuakeError, Result, parse_date,
    };

    #[cfg(feature = "fetch")]
    pub use quakefetch_fetch::{
        ClientConfig, FetchOptions, FetchOutcome, FetchReport, ServiceClient, Transport,
        WorkerPool, check_version, fetch_events, probe_count,
    };

    #[cfg(feature = "aggregate")]
    pub use quakefetch_aggregate::{AggregateResult, ExtractedRecord, aggregate};
}
