//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use formflow::transport::{ServiceResponse, TransportError};
use formflow::{FormValues, Submitter};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Build a value map from literal pairs.
pub fn values(pairs: &[(&str, &str)]) -> FormValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn reply(body: Value) -> Result<ServiceResponse, TransportError> {
    Ok(ServiceResponse { status: 200, body })
}

#[derive(Default)]
struct ScriptState {
    calls: AtomicUsize,
    received: Mutex<Vec<FormValues>>,
    replies: Mutex<VecDeque<Result<ServiceResponse, TransportError>>>,
}

/// Submitter that records calls and plays back queued replies.
///
/// With no reply queued it answers `200 {}`. Cloned handles share state.
#[derive(Clone, Default)]
pub struct ScriptedSubmitter {
    state: Arc<ScriptState>,
    delay: Duration,
}

impl ScriptedSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every reply; use with a paused clock.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn enqueue(&self, result: Result<ServiceResponse, TransportError>) {
        self.state.replies.lock().push_back(result);
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<FormValues> {
        self.state.received.lock().clone()
    }
}

#[async_trait]
impl Submitter for ScriptedSubmitter {
    type Response = ServiceResponse;
    type Error = TransportError;

    async fn submit(&self, values: &FormValues) -> Result<ServiceResponse, TransportError> {
        self.state.calls.fetch_add(1, Ordering::SeqCst);
        self.state.received.lock().push(values.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let next = self.state.replies.lock().pop_front();
        next.unwrap_or_else(|| reply(json!({})))
    }
}
