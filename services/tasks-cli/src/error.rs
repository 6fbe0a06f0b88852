//! Command-level error types

use thiserror::Error;
use transport::TransportError;

/// Errors a command can end with.
///
/// Transport failures are carried unchanged so the message the user sees is
/// the one the transport produced.
#[derive(Error, Debug)]
pub enum Error {
    #[error("usage: {0}")]
    Usage(String),

    #[error("no password configured; set TASKS_PASSWORD or login.password_file")]
    MissingPassword,

    #[error("request was dropped before completing")]
    CompletionDropped,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result alias using service Error
pub type Result<T> = std::result::Result<T, Error>;
