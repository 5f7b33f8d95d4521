//! Count command implementation.

use crate::display::resolve_range;
use anyhow::{Context, Result};
use quakefetch_lib::page_count;
use quakefetch_lib::prelude::*;
use std::num::NonZeroU32;

/// Print the number of events in a date range and the pages it needs.
pub(crate) async fn count(
    config: &ClientConfig,
    start: Option<&str>,
    end: Option<&str>,
    page_size: NonZeroU32,
) -> Result<()> {
    let range = resolve_range(start, end)?;
    let client = super::client(config)?;

    let total = probe_count(&client, &range)
        .await
        .with_context(|| format!("Failed to count events for {range}"))?;

    println!("Total records found for your search: {total}");
    println!(
        "Pages needed at {} records per page: {}",
        page_size,
        page_count(total, page_size)
    );
    Ok(())
}
