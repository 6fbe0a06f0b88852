//! Authorize URL construction
//!
//! The URL is assembled by plain concatenation so the output for the default
//! settings is byte-for-byte the one the OAuth server was configured against.
//! Percent-encoding of parameter values is available but opt-in.

use crate::constants::{
    AUTHORIZE_PATH, DEFAULT_CLIENT_ID, DEFAULT_OAUTH_SERVER, REDIRECT_URI, RESPONSE_TYPE,
};

/// How parameter values are written into the authorize URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParamEncoding {
    /// Values are concatenated as-is
    #[default]
    Literal,
    /// `client_id` and `redirect_uri` values are percent-encoded
    Percent,
}

/// OAuth client settings, fixed for the lifetime of a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthSettings {
    /// Server base URL; expected to end with `/`
    pub server: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub encoding: ParamEncoding,
}

impl Default for OAuthSettings {
    fn default() -> Self {
        Self {
            server: DEFAULT_OAUTH_SERVER.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            redirect_uri: REDIRECT_URI.to_string(),
            encoding: ParamEncoding::Literal,
        }
    }
}

impl OAuthSettings {
    pub fn new(server: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            client_id: client_id.into(),
            ..Self::default()
        }
    }
}

/// Build the implicit-grant authorize URL.
///
/// `{server}oauth/authorize?response_type=token&client_id={client_id}&redirect_uri={redirect_uri}`
pub fn build_authorization_url(settings: &OAuthSettings) -> String {
    let (client_id, redirect_uri) = match settings.encoding {
        ParamEncoding::Literal => (
            settings.client_id.clone(),
            settings.redirect_uri.clone(),
        ),
        ParamEncoding::Percent => (
            urlencoding::encode(&settings.client_id).into_owned(),
            urlencoding::encode(&settings.redirect_uri).into_owned(),
        ),
    };

    let mut url = String::with_capacity(
        settings.server.len() + AUTHORIZE_PATH.len() + client_id.len() + redirect_uri.len() + 48,
    );
    url.push_str(&settings.server);
    url.push_str(AUTHORIZE_PATH);
    url.push_str("response_type=");
    url.push_str(RESPONSE_TYPE);
    url.push_str("&client_id=");
    url.push_str(&client_id);
    url.push_str("&redirect_uri=");
    url.push_str(&redirect_uri);
    url
}
