//! Scripted in-memory `RemoteApi` for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use tokio::sync::Notify;

use crate::remote::{RemoteApi, RemoteError, RemoteResponse};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Value,
}

/// Replays queued outcomes in order; once the queue is empty every call
/// fails with a transport error.
#[derive(Default)]
pub struct ScriptedRemote {
    outcomes: Mutex<VecDeque<Result<RemoteResponse, RemoteError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(outcomes: Vec<Result<RemoteResponse, RemoteError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RemoteApi for ScriptedRemote {
    async fn post_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &Value,
    ) -> Result<RemoteResponse, RemoteError> {
        self.calls.lock().unwrap().push(RecordedCall {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: body.clone(),
        });
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(network_down()))
    }
}

/// A `ScriptedRemote` whose calls park until `release`, so a test can change
/// the session while a request is in flight.
#[derive(Default)]
pub struct GatedRemote {
    inner: ScriptedRemote,
    entered: Notify,
    gate: Notify,
}

impl GatedRemote {
    pub fn with(outcomes: Vec<Result<RemoteResponse, RemoteError>>) -> Self {
        Self {
            inner: ScriptedRemote::with(outcomes),
            ..Self::default()
        }
    }

    /// Resolves once a call is parked at the gate.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Lets one parked (or the next) call through.
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl RemoteApi for GatedRemote {
    async fn post_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &Value,
    ) -> Result<RemoteResponse, RemoteError> {
        self.entered.notify_one();
        self.gate.notified().await;
        self.inner.post_json(path, query, body).await
    }
}

pub fn network_down() -> RemoteError {
    RemoteError("connection refused".to_string())
}

pub fn json_response(status: u16, body: Value) -> RemoteResponse {
    RemoteResponse {
        status,
        content_type: Some("application/json".to_string()),
        body: Bytes::from(body.to_string()),
    }
}

pub fn generated(result: &str) -> RemoteResponse {
    json_response(
        200,
        serde_json::json!({ "success": true, "data": { "result": result } }),
    )
}

pub fn pdf_response(bytes: &'static [u8]) -> RemoteResponse {
    RemoteResponse {
        status: 200,
        content_type: Some("application/pdf".to_string()),
        body: Bytes::from_static(bytes),
    }
}
