//! Version command implementation.

use anyhow::{Context, Result};
use quakefetch_lib::prelude::*;
use quakefetch_lib::url::SERVICE_API_VERSION;

/// Print the service API version and whether it is the one we target.
pub(crate) async fn version(config: &ClientConfig) -> Result<()> {
    let client = super::client(config)?;
    let version = check_version(&client)
        .await
        .context("Failed to query service version")?;

    if version.is_expected() {
        println!("{version}");
    } else {
        println!("{version} (expected {SERVICE_API_VERSION})");
    }
    Ok(())
}
