use async_trait::async_trait;
use contracts::shared::datasets::DatasetKind;
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::{data_base, dataset_url};

/// Why a dataset could not be retrieved. Never leaves the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Malformed(String),
}

/// Where raw dataset JSON comes from.
///
/// The returned futures are not `Send`; everything runs on the UI event loop.
#[async_trait(?Send)]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self, kind: DatasetKind) -> Result<serde_json::Value, FetchError>;
}

/// Fetches `/data/<kind>.json` over HTTP
#[derive(Debug, Clone)]
pub struct HttpDatasetSource {
    base: String,
}

impl HttpDatasetSource {
    /// Source rooted at the page's own origin
    pub fn from_location() -> Self {
        Self::with_base(data_base())
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait(?Send)]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self, kind: DatasetKind) -> Result<serde_json::Value, FetchError> {
        let url = dataset_url(&self.base, kind);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }
}
