//! Date input and output helpers for the quakefetch CLI.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Text;
use inquire::validator::Validation;
use quakefetch_lib::prelude::*;
use std::io::Write;
use std::time::Duration;

/// Resolves the query range from flags, prompting for any missing date.
pub(crate) fn resolve_range(start: Option<&str>, end: Option<&str>) -> Result<DateRange> {
    let start = match start {
        Some(s) => s.to_string(),
        None => prompt_date("Enter start date in YYYY-MM-DD format:")?,
    };
    let end = match end {
        Some(s) => s.to_string(),
        None => prompt_date("Enter end date in YYYY-MM-DD format:")?,
    };

    DateRange::parse(&start, &end)
        .with_context(|| format!("Invalid date range: {start} to {end}"))
}

/// Prompts for a single date, re-asking until the input parses.
fn prompt_date(message: &str) -> Result<String> {
    let answer = Text::new(message)
        .with_validator(|input: &str| {
            Ok(match parse_date(input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()
        .context("Failed to read date")?;
    Ok(answer)
}

/// Creates the spinner shown while a batch is in flight.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) =
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Writes the aggregated columns as one JSON object to stdout.
pub(crate) fn write_columns(data: &AggregateResult, pretty: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, data)?;
    } else {
        serde_json::to_writer(&mut out, data)?;
    }
    writeln!(out)?;
    Ok(())
}
