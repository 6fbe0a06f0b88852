//! Error types for transport operations

/// Errors produced by a transport and handed to the error continuation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("no async runtime available: {0}")]
    Runtime(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("request timed out after {0}ms")]
    Timeout(u128),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
}

impl TransportError {
    /// Short label used for the `error_type` metric dimension.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidBaseUrl(_) => "invalid_base_url",
            Self::Runtime(_) => "runtime",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Timeout(_) => "timeout",
            Self::Http(_) => "http",
            Self::Status { .. } => "status",
        }
    }
}

/// Result alias for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;
