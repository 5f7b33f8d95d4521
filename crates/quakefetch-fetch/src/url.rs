//! Service address and constants.

use std::num::NonZeroU32;

use quakefetch_types::Endpoint;

/// Base URL of the USGS FDSN event web service.
pub const SERVICE_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/";

/// API version this crate was written against.
pub const SERVICE_API_VERSION: &str = "1.5.8";

/// Maximum page size accepted by the service.
pub const SERVICE_LIMIT: NonZeroU32 = match NonZeroU32::new(20_000) {
    Some(limit) => limit,
    None => unreachable!(),
};

/// Offset of the first record. The service paginates from 1.
pub const INITIAL_OFFSET: u64 = 1;

/// Builds the URL of an endpoint below `base_url`.
///
/// # Example
///
/// ```
/// use quakefetch_fetch::url::{SERVICE_URL, endpoint_url};
/// use quakefetch_types::Endpoint;
///
/// let url = endpoint_url(SERVICE_URL, Endpoint::Count);
/// assert_eq!(url, "https://earthquake.usgs.gov/fdsnws/event/1/count");
/// ```
#[must_use]
pub fn endpoint_url(base_url: &str, endpoint: Endpoint) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint.path())
}
