//! Fetch command implementation.
//!
//! This module runs the bulk pipeline for a date range and hands the
//! extracted columns to stdout as JSON.

use crate::display::{resolve_range, spinner, write_columns};
use anyhow::{Context, Result};
use quakefetch_lib::prelude::*;
use quakefetch_lib::url::SERVICE_API_VERSION;
use std::num::{NonZeroU32, NonZeroUsize};
use std::time::Duration;
use tracing::warn;

/// Arguments of the fetch command.
pub(crate) struct FetchArgs {
    pub(crate) start: Option<String>,
    pub(crate) end: Option<String>,
    pub(crate) page_size: NonZeroU32,
    pub(crate) concurrency: NonZeroUsize,
    pub(crate) page_timeout_secs: Option<u64>,
    pub(crate) pretty: bool,
    pub(crate) skip_version_check: bool,
}

/// Fetch every event in the range and print the aggregated columns.
pub(crate) async fn fetch(config: &ClientConfig, args: FetchArgs, quiet: bool) -> Result<()> {
    let range = resolve_range(args.start.as_deref(), args.end.as_deref())?;
    let client = super::client(config)?;

    if !args.skip_version_check {
        match check_version(&client).await {
            Ok(version) if !version.is_expected() => warn!(
                %version,
                expected = SERVICE_API_VERSION,
                "service API version differs from the one quakefetch targets"
            ),
            Ok(_) => {}
            Err(error) => warn!(%error, "could not check service API version"),
        }
    }

    let options = FetchOptions::default()
        .with_page_size(args.page_size)
        .with_max_concurrency(args.concurrency)
        .with_page_timeout(args.page_timeout_secs.map(Duration::from_secs));

    let progress = spinner(quiet, format!("Fetching events {range}"));
    let outcome = fetch_events(&client, range, &options)
        .await
        .with_context(|| format!("Failed to fetch events for {range}"));
    progress.finish_and_clear();
    let outcome = outcome?;

    if !quiet {
        eprintln!(
            "Fetched {} events with a magnitude ({} records reported, {})",
            outcome.data.len(),
            outcome.report.total_count(),
            outcome.report
        );
    }
    if !outcome.report.is_complete() {
        warn!(
            failed_offsets = ?outcome.report.failed_offsets(),
            "some pages failed; results are incomplete"
        );
    }

    write_columns(&outcome.data, args.pretty)
}
