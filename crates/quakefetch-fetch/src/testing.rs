//! Instrumented in-memory transport for tests.

use async_trait::async_trait;
use quakefetch_types::{Endpoint, QuakeError, Result};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::Transport;

/// Canned reply for one request.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Body(String),
    Status(u16),
}

/// Transport stub keyed by endpoint and `offset` that records how many
/// requests were in flight at once.
#[derive(Debug, Default)]
pub(crate) struct StubTransport {
    count: Option<Reply>,
    pages: HashMap<u64, Reply>,
    delays: HashMap<u64, Duration>,
    default_delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
    offsets_seen: Mutex<Vec<u64>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_count(mut self, reply: Reply) -> Self {
        self.count = Some(reply);
        self
    }

    pub(crate) fn with_page(mut self, offset: u64, reply: Reply) -> Self {
        self.pages.insert(offset, reply);
        self
    }

    pub(crate) fn with_delay(mut self, offset: u64, delay: Duration) -> Self {
        self.delays.insert(offset, delay);
        self
    }

    pub(crate) fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    pub(crate) fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn offsets_seen(&self) -> Vec<u64> {
        self.offsets_seen.lock().unwrap().clone()
    }
}

fn offset_of(query: &[(&'static str, String)]) -> u64 {
    query
        .iter()
        .find(|(key, _)| *key == "offset")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or_default()
}

fn answer(endpoint: Endpoint, reply: Option<&Reply>) -> Result<String> {
    match reply {
        Some(Reply::Body(body)) => Ok(body.clone()),
        Some(Reply::Status(status)) => Err(QuakeError::ServiceUnavailable {
            endpoint,
            status: *status,
        }),
        None => Err(QuakeError::ServiceUnavailable {
            endpoint,
            status: 404,
        }),
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, endpoint: Endpoint, query: &[(&'static str, String)]) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if endpoint != Endpoint::Query {
            return answer(endpoint, self.count.as_ref());
        }

        let offset = offset_of(query);
        self.offsets_seen.lock().unwrap().push(offset);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        let delay = self
            .delays
            .get(&offset)
            .copied()
            .unwrap_or(self.default_delay);
        tokio::time::sleep(delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        answer(endpoint, self.pages.get(&offset))
    }
}

/// Builds a GeoJSON page body with one feature per `(mag, time, coords)`.
pub(crate) fn page_body(features: &[(Option<f64>, i64, [f64; 3])]) -> Reply {
    let features: Vec<_> = features
        .iter()
        .map(|(mag, time, coords)| {
            json!({
                "type": "Feature",
                "properties": {"mag": mag, "time": time},
                "geometry": {"type": "Point", "coordinates": coords},
            })
        })
        .collect();
    Reply::Body(
        json!({
            "type": "FeatureCollection",
            "metadata": {"count": features.len()},
            "features": features,
        })
        .to_string(),
    )
}
