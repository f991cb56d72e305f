//! Contract of the JSON-over-HTTP transport.

use async_trait::async_trait;
use caminio_model::Conditions;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single GET round-trip.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("request to {url} failed with status {status}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }
}

/// Source of JSON documents addressed by collection path.
///
/// `path` is relative to the configured API namespace (e.g. `shop_items`,
/// `mediafiles`); conditions are sent as query parameters.
#[async_trait]
pub trait JsonSource: Send + Sync + std::fmt::Debug {
    async fn get_json(
        &self,
        path: &str,
        query: &Conditions,
    ) -> Result<Value, FetchError>;
}
