//! HTTP client for the event service.

use async_trait::async_trait;
use quakefetch_types::{Endpoint, QuakeError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::Transport;
use crate::url::{SERVICE_URL, endpoint_url};

/// Configuration for the service client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service; endpoint paths are appended to it.
    pub base_url: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: SERVICE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            user_agent: format!("quakefetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the whole-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// reqwest-backed [`Transport`] with connection pooling.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: Client,
    config: ClientConfig,
}

impl ServiceClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> std::result::Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> std::result::Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the full URL of an endpoint.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        endpoint_url(&self.config.base_url, endpoint)
    }
}

#[async_trait]
impl Transport for ServiceClient {
    async fn get(&self, endpoint: Endpoint, query: &[(&'static str, String)]) -> Result<String> {
        let url = self.endpoint_url(endpoint);
        debug!(%url, ?query, "sending request");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| QuakeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuakeError::ServiceUnavailable {
                endpoint,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| QuakeError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, SERVICE_URL);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.request_timeout.is_none());
        assert!(config.user_agent.starts_with("quakefetch/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = ServiceClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_endpoint_urls() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9000/fdsnws/event/1")
            .with_request_timeout(Some(Duration::from_secs(30)));
        let client = ServiceClient::new(config).unwrap();

        assert_eq!(
            client.endpoint_url(Endpoint::Count),
            "http://127.0.0.1:9000/fdsnws/event/1/count"
        );
        assert_eq!(
            client.config().request_timeout,
            Some(Duration::from_secs(30))
        );
    }
}
