//! Request counters emitted through the `metrics` facade
//!
//! - `transport_requests_total` (counter): labels `method`, `status`
//! - `transport_errors_total` (counter): label `error_type`
//!
//! Nothing is exported from here; the embedding application installs a
//! recorder if it wants these values.

/// Record a request that received a response, whatever its status.
pub fn record_request(method: &str, status: u16) {
    metrics::counter!(
        "transport_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record a request that completed through the error continuation.
pub fn record_error(error_type: &'static str) {
    metrics::counter!("transport_errors_total", "error_type" => error_type).increment(1);
}
