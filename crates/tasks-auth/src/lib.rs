//! OAuth authorization redirect for the tasks application
//!
//! The tasks dashboard signs users in through the OAuth server's implicit
//! grant: the user agent is sent to the server's authorize endpoint with
//! `response_type=token`, and the server redirects back to the dashboard with
//! the access token. This crate builds that authorize URL and abstracts the
//! act of sending the user agent there.
//!
//! Flow:
//! 1. Caller holds an `OAuthSettings` (defaults match the reference deployment)
//! 2. `build_authorization_url()` concatenates the authorize URL
//! 3. A `Navigator` (e.g. `SystemBrowser`) opens it

pub mod authorize;
pub mod constants;
pub mod navigator;

pub use authorize::{OAuthSettings, ParamEncoding, build_authorization_url};
pub use constants::*;
pub use navigator::{Navigator, SystemBrowser};
