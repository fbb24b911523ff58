//! GraphQL response envelope.
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// `{"data": ..., "errors": [...]}` as returned by the endpoint.
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<ResponseError>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ResponseError {
    pub message: String,
}

impl<T: DeserializeOwned> Response<T> {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).context("decode GraphQL response")
    }
}

impl<T> Response<T> {
    /// Joined error messages, or `None` when the response carries none.
    pub fn error_summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        Some(messages.join("; "))
    }

    /// Take `data`, treating its absence as an error that names the server's complaints.
    pub fn into_data(self) -> Result<T> {
        let summary = self.error_summary();
        self.data.ok_or_else(|| match summary {
            Some(summary) => anyhow!("GraphQL errors: {summary}"),
            None => anyhow!("GraphQL response has no data"),
        })
    }
}
