//! Count probing and version checks.

use quakefetch_types::{DateRange, Endpoint, QuakeError, ResponseFormat, Result};
use tracing::debug;

use crate::Transport;
use crate::url::SERVICE_API_VERSION;

/// Asks the `count` endpoint how many events match `range`.
///
/// This is a single metadata-only request. There is no retry; without a
/// count no batch can be planned, so any failure is fatal.
///
/// # Errors
///
/// Returns [`QuakeError::ServiceUnavailable`] for a non-success status and
/// [`QuakeError::MalformedCountResponse`] if the body is not a number.
pub async fn probe_count<T: Transport + ?Sized>(transport: &T, range: &DateRange) -> Result<u64> {
    let query = [
        ("format", ResponseFormat::QuakeMl.as_str().to_string()),
        ("starttime", range.start_param()),
        ("endtime", range.end_param()),
    ];
    let body = transport.get(Endpoint::Count, &query).await?;
    let count = parse_count(&body)?;
    debug!(%range, count, "probed record count");
    Ok(count)
}

/// Largest float an integer count may be written as and still be exact.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Parses the body of the `count` endpoint.
///
/// Integral floating-point text such as `"25000.0"` is accepted as well, as
/// long as it is exactly representable.
///
/// # Errors
///
/// Returns [`QuakeError::MalformedCountResponse`] if the body is not a
/// non-negative whole number.
pub fn parse_count(body: &str) -> Result<u64> {
    let text = body.trim();
    if let Ok(count) = text.parse::<u64>() {
        return Ok(count);
    }

    match text.parse::<f64>() {
        Ok(value) if (0.0..=MAX_EXACT_FLOAT).contains(&value) && value.fract() == 0.0 => {
            Ok(value as u64)
        }
        _ => Err(QuakeError::MalformedCountResponse {
            body: body.to_string(),
        }),
    }
}

/// API version reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceVersion(String);

impl ServiceVersion {
    /// Returns the version text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the service runs the API version this crate targets.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        self.0 == SERVICE_API_VERSION
    }
}

impl std::fmt::Display for ServiceVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Queries the `version` endpoint.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn check_version<T: Transport + ?Sized>(transport: &T) -> Result<ServiceVersion> {
    let body = transport.get(Endpoint::Version, &[]).await?;
    Ok(ServiceVersion(body.trim().to_string()))
}
