//! Transport abstraction for the tasks REST API
//!
//! Defines the `Transport` trait that decouples application-level services
//! from how requests reach the server. A transport receives a relative path,
//! an open-ended payload mapping, and a pair of continuations; it must return
//! without blocking and later fire exactly one continuation with the outcome.
//!
//! `HttpTransport` is the reqwest-backed implementation. Tests and embedders
//! can supply their own implementation behind `Arc<dyn Transport>`.

pub mod continuation;
pub mod error;
pub mod http;
pub mod metrics;

pub use continuation::Continuations;
pub use error::{Result, TransportError};
pub use http::HttpTransport;

/// Request payload: field name to JSON value, passed through as supplied.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Payload key a transport reads to select the HTTP method.
pub const METHOD_KEY: &str = "method";

/// Performs requests against the tasks API on behalf of services.
///
/// Implementations own the whole error taxonomy: network failures, non-2xx
/// statuses and undecodable bodies are classified here and delivered to
/// `on_error` unchanged. Callers never see a continuation fire synchronously
/// from a well-behaved transport.
pub trait Transport: Send + Sync {
    /// Issue a request to `path` (relative to the transport's base URL).
    ///
    /// Returns immediately; the outcome arrives through `continuations`.
    fn fetch(&self, path: &str, payload: &Payload, continuations: Continuations);
}
