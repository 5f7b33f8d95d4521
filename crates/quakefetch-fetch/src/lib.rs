//! Count probing, page planning and concurrent page fetching for quakefetch.
//!
//! This crate provides the bulk download pipeline:
//!
//! - [`url`] - Service address and constants
//! - [`Transport`] / [`ServiceClient`] - HTTP transport seam and its reqwest implementation
//! - [`probe_count`] - Asks the service how many records a query matches
//! - [`build_pages`] - Plans one page request per `limit` records
//! - [`fetch_all`] - Fetches a batch over a bounded [`WorkerPool`]
//! - [`fetch_events`] - The whole pipeline, ending in aggregated columns

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quakefetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bulk;
mod client;
mod executor;
mod pages;
mod probe;
#[cfg(test)]
mod testing;
mod transport;
pub mod url;

pub use bulk::{FetchOptions, FetchOutcome, FetchReport, fetch_events};
pub use client::{ClientConfig, ServiceClient};
pub use executor::{DEFAULT_CONCURRENCY, WorkerPool, fetch_all};
pub use pages::{MAX_PAGES, build_pages, build_pages_from, checked_page_count, page_count};
pub use probe::{ServiceVersion, check_version, parse_count, probe_count};
pub use transport::Transport;
