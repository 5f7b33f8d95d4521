//! Transport abstraction over the event service.

use async_trait::async_trait;
use quakefetch_types::{Endpoint, Result};

/// Issues GET requests against the service's logical endpoints.
///
/// Implementations return the response body of a successful request and
/// [`QuakeError::ServiceUnavailable`](quakefetch_types::QuakeError::ServiceUnavailable)
/// for any non-success status. No retries are expected.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request to `endpoint` with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    async fn get(&self, endpoint: Endpoint, query: &[(&'static str, String)]) -> Result<String>;
}
