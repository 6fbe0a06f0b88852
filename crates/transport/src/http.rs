//! reqwest-backed transport
//!
//! Resolves the relative path against a base URL, picks the HTTP method from
//! the payload's `method` field (GET when absent), and sends the remaining
//! fields as query parameters (GET/HEAD/DELETE) or as a JSON body. Every
//! request runs on its own tokio task so `fetch` never blocks the caller.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;
use tokio::runtime::Handle;
use tracing::{Instrument, Span, debug, info_span, warn};

use crate::continuation::Continuations;
use crate::error::{Result, TransportError};
use crate::{METHOD_KEY, Payload, Transport};

/// Transport that performs real HTTP requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    runtime: Handle,
}

impl HttpTransport {
    /// Create a transport with a fresh reqwest client.
    ///
    /// Must be called from within a tokio runtime; the runtime is captured so
    /// that `fetch` can spawn requests from any thread.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url, timeout)
    }

    /// Create a transport sharing an existing reqwest client.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(TransportError::InvalidBaseUrl(format!(
                "base URL must start with http:// or https://, got: {base_url}"
            )));
        }
        let runtime = Handle::try_current().map_err(|e| TransportError::Runtime(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout,
            runtime,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, path: &str, payload: &Payload, continuations: Continuations) {
        let request_id = format!("req_{}", uuid::Uuid::new_v4().as_simple());
        let url = self.url_for(path);
        let client = self.client.clone();
        let timeout = self.timeout;
        let request = split_method(payload.clone());
        let span = match &request {
            Ok((method, _)) => request_span(&request_id, method.as_str(), path),
            Err(_) => request_span(&request_id, "invalid", path),
        };

        self.runtime.spawn(
            async move {
                let outcome = match request {
                    Ok((method, fields)) => execute(&client, method, &url, fields, timeout).await,
                    Err(e) => Err(e),
                };
                match &outcome {
                    Ok(_) => debug!("request completed"),
                    Err(e) => {
                        warn!(error = %e, "request failed");
                        crate::metrics::record_error(e.error_type());
                    }
                }
                continuations.complete(outcome);
            }
            .instrument(span),
        );
    }
}

fn request_span(request_id: &str, method: &str, path: &str) -> Span {
    info_span!("fetch", request_id = %request_id, method = %method, path = %path)
}

/// Remove the `method` field from the payload and parse it.
///
/// Absent or non-string values mean GET.
fn split_method(mut payload: Payload) -> Result<(Method, Payload)> {
    let method = match payload.remove(METHOD_KEY) {
        Some(Value::String(name)) => Method::from_bytes(name.to_ascii_uppercase().as_bytes())
            .map_err(|_| TransportError::InvalidRequest(format!("invalid HTTP method: {name}")))?,
        _ => Method::GET,
    };
    Ok((method, payload))
}

fn sends_query(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::DELETE)
}

/// Flatten payload fields into query pairs.
///
/// Strings go out raw, scalars via display, nulls are skipped, and nested
/// values are JSON-encoded.
fn query_pairs(fields: &Payload) -> Vec<(String, String)> {
    fields
        .iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => value.to_string(),
            };
            Some((key.clone(), rendered))
        })
        .collect()
}

/// Decode a success body: JSON when possible, raw text otherwise.
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

fn classify(e: reqwest::Error, timeout: Duration) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(timeout.as_millis())
    } else {
        TransportError::Http(e.to_string())
    }
}

async fn execute(
    client: &reqwest::Client,
    method: Method,
    url: &str,
    fields: Payload,
    timeout: Duration,
) -> Result<Value> {
    debug!(method = %method, url, "sending request");
    let request = client.request(method.clone(), url).timeout(timeout);
    let request = if sends_query(&method) {
        request.query(&query_pairs(&fields))
    } else {
        request.json(&fields)
    };

    let response = request.send().await.map_err(|e| classify(e, timeout))?;
    let status = response.status();
    crate::metrics::record_request(method.as_str(), status.as_u16());

    let body = response.bytes().await.map_err(|e| classify(e, timeout))?;
    if !status.is_success() {
        return Err(TransportError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(decode_body(&body))
}
