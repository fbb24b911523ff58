//! HTTP transport for GraphQL documents.
//!
//! A document is wrapped in a `{"query": ...}` envelope and POSTed as JSON.
//! The response body is handed back unparsed; decoding belongs to the caller
//! because create, update, and list responses have different shapes.
use anyhow::{Context, Result};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Fixed per-request timeout covering connect, send, and body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Executes a GraphQL document and returns the raw response body.
pub trait GraphqlTransport {
    fn execute(&self, document: &str) -> Result<Vec<u8>>;
}

#[derive(Serialize)]
struct QueryEnvelope<'a> {
    query: &'a str,
}

/// Blocking HTTP transport bound to a single endpoint.
pub struct HttpTransport {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }
}

impl GraphqlTransport for HttpTransport {
    fn execute(&self, document: &str) -> Result<Vec<u8>> {
        let start = Instant::now();
        let mut response = self
            .agent
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .send_json(QueryEnvelope { query: document })
            .with_context(|| format!("send GraphQL request to {}", self.endpoint))?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_vec()
            .context("read GraphQL response body")?;

        tracing::debug!(
            elapsed_ms = start.elapsed().as_millis(),
            document_bytes = document.len(),
            response_bytes = body.len(),
            status = status.as_u16(),
            "graphql request complete"
        );
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "endpoint returned a non-success status");
        }

        Ok(body)
    }
}
