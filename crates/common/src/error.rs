//! Errors raised while loading the client configuration

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An endpoint setting that is not an absolute http(s) URL
    #[error("Configuration error: {field} must start with http:// or https://, got: {value}")]
    UrlScheme { field: &'static str, value: String },

    #[error("Configuration error: api.timeout_secs must be greater than 0")]
    ZeroTimeout,

    #[error("failed to read password_file {}: {source}", path.display())]
    PasswordFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Accept only absolute `http://` or `https://` URLs for `field`.
pub fn require_http_scheme(field: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::UrlScheme {
            field,
            value: value.to_owned(),
        })
    }
}
