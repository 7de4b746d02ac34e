//! Request gateway for the commit analysis backend.
//!
//! Every call issues exactly one HTTP request: no retries, no caching, no
//! deduplication. Failures are normalized into [`ErrorKind`] here so that
//! nothing above this module sees a transport error.

use std::num::NonZeroU32;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::error::ErrorKind;
use crate::types::{AnalysisResult, AnalyzeRequest, BackendStatus, HistoryEntry, HistoryResponse};

/// The two remote calls the session and history flows depend on.
#[allow(async_fn_in_trait)]
pub trait AnalysisApi {
    /// Analyze the staged changes at the backend's default location.
    async fn analyze(&self) -> Result<AnalysisResult, ErrorKind>;

    /// Fetch up to `limit` past results. An empty list is a success.
    async fn fetch_history(&self, limit: NonZeroU32) -> Result<Vec<HistoryEntry>, ErrorKind>;
}

/// Error payload shape the backend uses for non-2xx responses.
#[derive(Deserialize)]
struct ErrorPayload {
    detail: serde_json::Value,
}

/// Map a failed response to the error taxonomy.
///
/// Only a JSON body with a non-empty string `detail` counts as a structured
/// error. Anything else (HTML error pages, validation arrays, empty bodies)
/// is `Unreachable`.
pub fn classify_failure(status: u16, body: &str) -> ErrorKind {
    match serde_json::from_str::<ErrorPayload>(body) {
        Ok(ErrorPayload {
            detail: serde_json::Value::String(detail),
        }) => ErrorKind::remote(detail),
        Ok(_) => {
            log::warn!("HTTP {} with non-string detail: {}", status, body);
            ErrorKind::Unreachable
        }
        Err(e) => {
            log::warn!("HTTP {} without structured error payload: {}", status, e);
            ErrorKind::Unreachable
        }
    }
}

/// Decode a response body according to its status code.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ErrorKind> {
    if !(200..300).contains(&status) {
        return Err(classify_failure(status, body));
    }
    serde_json::from_str(body).map_err(|e| {
        log::warn!("Malformed response body (HTTP {}): {}", status, e);
        ErrorKind::Unreachable
    })
}

/// HTTP implementation of [`AnalysisApi`] against a configurable base URL.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpGateway {
    /// `base_url` should end with `/`; see `ComposerConfig::base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn analyze_url(&self) -> Result<Url, ErrorKind> {
        self.endpoint("analyze")
    }

    pub fn history_url(&self, limit: NonZeroU32) -> Result<Url, ErrorKind> {
        let mut url = self.endpoint("history")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.get().to_string());
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ErrorKind> {
        self.base_url.join(path).map_err(|e| {
            log::warn!("Cannot build endpoint '{}' from {}: {}", path, self.base_url, e);
            ErrorKind::Unreachable
        })
    }

    /// `GET /` on the backend.
    pub async fn check_health(&self) -> Result<BackendStatus, ErrorKind> {
        let request = self.client.get(self.base_url.clone());
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ErrorKind> {
        let response = request.send().await.map_err(|e| {
            log::warn!("Request to backend failed: {}", e);
            ErrorKind::Unreachable
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            log::warn!("Failed to read response body (HTTP {}): {}", status, e);
            ErrorKind::Unreachable
        })?;
        decode_response(status, &body)
    }
}

impl AnalysisApi for HttpGateway {
    async fn analyze(&self) -> Result<AnalysisResult, ErrorKind> {
        let url = self.analyze_url()?;
        log::debug!("POST {}", url);
        let request = self.client.post(url).json(&AnalyzeRequest::default());
        self.execute(request).await
    }

    async fn fetch_history(&self, limit: NonZeroU32) -> Result<Vec<HistoryEntry>, ErrorKind> {
        let url = self.history_url(limit)?;
        log::debug!("GET {}", url);
        let response: HistoryResponse = self.execute(self.client.get(url)).await?;
        Ok(response.history)
    }
}
