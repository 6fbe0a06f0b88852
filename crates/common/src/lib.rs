//! Shared types for the tasks client workspace

mod error;
mod secret;

pub use error::{Error, Result, require_http_scheme};
pub use secret::Secret;
