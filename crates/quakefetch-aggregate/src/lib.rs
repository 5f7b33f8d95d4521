//! Record extraction and aggregation for quakefetch.
//!
//! This crate turns fetched pages into analysis-ready columns:
//!
//! - [`ExtractedRecord`] - The fields of interest of one event
//! - [`AggregateResult`] - Parallel columns built from many records
//! - [`RecordAggregator`] - Page-at-a-time aggregator
//! - [`aggregate`] - One-pass aggregation of a settled batch

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/quakefetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod record;

pub use aggregator::{AggregateResult, RecordAggregator, aggregate};
pub use record::ExtractedRecord;
