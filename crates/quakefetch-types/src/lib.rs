//! Core types for the quakefetch event downloader.
//!
//! This crate provides the fundamental data structures used throughout quakefetch:
//!
//! - [`DateRange`] - Validated date range for an event query
//! - [`PageRequest`] - Query parameters for a single page
//! - [`PageBatch`] - The ordered set of pages covering one query
//! - [`FeatureCollection`] - A page of events as returned by the service
//! - [`QuakeError`] - Errors raised while planning or fetching a batch

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quakefetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod page;
mod request;

pub use date_range::{DATE_FORMAT, DateRange, parse_date};
pub use error::{DateRangeError, QuakeError, Result};
pub use page::{Feature, FeatureCollection, Geometry, PageMetadata, Properties};
pub use request::{Endpoint, PageBatch, PageRequest, ResponseFormat};
