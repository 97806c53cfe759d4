/// Remote CV API gateway, the single point of entry for all calls to the
/// remote CV service (AI generation and PDF rendering).
///
/// ARCHITECTURAL RULE: No other module may issue HTTP requests directly.
/// `ai_assist` and `export` depend on the `RemoteApi` trait, never on reqwest.
///
/// Retry policy is NOT applied here: each caller owns its own policy
/// (AI-Assist retries transport failures, export never retries).
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
pub mod testing;

pub const GENERATE_PATH: &str = "/cv/ai/generate";
pub const PDF_PATH: &str = "/cv/generate-pdf";

/// A request that never produced an HTTP response (connect, timeout, body read).
#[derive(Debug, Clone, Error)]
#[error("Transport error: {0}")]
pub struct RemoteError(pub String);

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        RemoteError(e.to_string())
    }
}

/// Any HTTP response, successful or not. Status interpretation is the caller's job.
#[derive(Debug, Clone)]
pub struct RemoteResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Message { message: String },
    Nested { error: NestedError },
    Flat { error: String },
}

#[derive(Debug, Deserialize)]
struct NestedError {
    message: String,
}

impl RemoteResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Best human-readable message for a failed response: the service's own
    /// `message` / `error` field if present, the raw body otherwise.
    pub fn error_message(&self) -> String {
        if let Ok(parsed) = self.json::<ErrorBody>() {
            return match parsed {
                ErrorBody::Message { message } => message,
                ErrorBody::Nested { error } => error.message,
                ErrorBody::Flat { error } => error,
            };
        }
        let raw = String::from_utf8_lossy(&self.body).trim().to_string();
        if raw.is_empty() {
            format!("Request failed with status {}", self.status)
        } else {
            raw
        }
    }
}

#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// POSTs a JSON body to `path` (relative to the service base URL).
    async fn post_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &Value,
    ) -> Result<RemoteResponse, RemoteError>;
}

/// reqwest-backed gateway to the remote CV service.
#[derive(Clone)]
pub struct HttpRemote {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpRemote {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RemoteApi for HttpRemote {
    async fn post_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &Value,
    ) -> Result<RemoteResponse, RemoteError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {url} query={query:?}");

        let mut request = self.client.post(&url).query(query).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        debug!("POST {url} -> {status} ({} bytes)", body.len());

        Ok(RemoteResponse {
            status,
            content_type,
            body,
        })
    }
}
