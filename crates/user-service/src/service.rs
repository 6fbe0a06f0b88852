use std::sync::Arc;

use serde_json::Value;
use tasks_auth::{Navigator, OAuthSettings, build_authorization_url};
use tracing::{debug, info};
use transport::{Continuations, METHOD_KEY, Payload, Transport};

/// Users listing endpoint, relative to the API base
pub const USERS_PATH: &str = "api/users";

/// Credential submission endpoint, relative to the API base
pub const LOGIN_PATH: &str = "api/login";

/// Method forced onto login payloads
pub const LOGIN_METHOD: &str = "post";

/// Stateless front end for user listing and sign-in.
#[derive(Clone)]
pub struct UserService {
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
    oauth: OAuthSettings,
}

impl UserService {
    pub fn new(
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
        oauth: OAuthSettings,
    ) -> Self {
        Self {
            transport,
            navigator,
            oauth,
        }
    }

    pub fn oauth_settings(&self) -> &OAuthSettings {
        &self.oauth
    }

    /// Request the user list. `data` is forwarded verbatim as query fields.
    pub fn find_users(&self, data: &Payload, continuations: Continuations) {
        debug!(path = USERS_PATH, fields = data.len(), "find_users");
        self.transport.fetch(USERS_PATH, data, continuations);
    }

    /// Submit credentials.
    ///
    /// `data` is extended in place with `method = "post"`, replacing any
    /// existing `method`; the caller sees that change after this returns.
    pub fn login(&self, data: &mut Payload, continuations: Continuations) {
        data.insert(
            METHOD_KEY.to_string(),
            Value::String(LOGIN_METHOD.to_string()),
        );
        debug!(path = LOGIN_PATH, "login");
        self.transport.fetch(LOGIN_PATH, data, continuations);
    }

    /// The authorize URL `oauth_login` navigates to.
    pub fn authorization_url(&self) -> String {
        build_authorization_url(&self.oauth)
    }

    /// Send the user agent to the OAuth server's authorize endpoint.
    pub fn oauth_login(&self) {
        let url = self.authorization_url();
        info!(client_id = %self.oauth.client_id, "redirecting to OAuth authorize endpoint");
        self.navigator.navigate(&url);
    }
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("oauth", &self.oauth)
            .finish_non_exhaustive()
    }
}
