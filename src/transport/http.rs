use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tokio::time::timeout;

use crate::config::ServiceConfig;
use crate::submit::Submitter;
use crate::validation::FormValues;

use super::error::TransportError;

/// Decoded service reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    pub status: u16,
    /// JSON body; a non-JSON body is kept as a string, an empty one as null.
    pub body: Value,
}

impl ServiceResponse {
    /// String value of a top-level body field.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.body.get(key).and_then(Value::as_str)
    }
}

/// Submits form values as a JSON object with `POST`.
pub struct HttpSubmitter {
    client: Client,
    url: String,
    request_timeout: Duration,
}

impl HttpSubmitter {
    pub fn new(service: &ServiceConfig, endpoint: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(service.connect_timeout())
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            client,
            url: service.endpoint_url(endpoint),
            request_timeout: service.request_timeout(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, values: &FormValues) -> Result<ServiceResponse, TransportError> {
        let response = self
            .client
            .post(&self.url)
            .json(values)
            .send()
            .await
            .map_err(|source| TransportError::Connection {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|source| TransportError::Body {
            url: self.url.clone(),
            source,
        })?;
        let body = decode_body(&bytes);

        tracing::debug!(url = %self.url, status = status.as_u16(), "Service responded");

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(ServiceResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    type Response = ServiceResponse;
    type Error = TransportError;

    async fn submit(&self, values: &FormValues) -> Result<ServiceResponse, TransportError> {
        match timeout(self.request_timeout, self.post(values)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}

fn decode_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Best human-readable message from an error body.
fn error_message(body: &Value) -> String {
    ["err", "error", "msg", "message"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_string)
        .or_else(|| body.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
