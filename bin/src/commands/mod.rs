//! CLI command implementations.

pub(crate) mod count;
pub(crate) mod fetch;
pub(crate) mod version;

use anyhow::{Context, Result};
use quakefetch_lib::prelude::*;

/// Builds the service client.
pub(crate) fn client(config: &ClientConfig) -> Result<ServiceClient> {
    ServiceClient::new(config.clone()).context("Failed to create HTTP client")
}
