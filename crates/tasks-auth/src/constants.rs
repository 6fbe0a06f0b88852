//! OAuth client constants for the tasks application
//!
//! Public client configuration. None of these are secrets: they identify the
//! client application and where the OAuth server should send the user back.

/// Base URL of the OAuth server, including the trailing slash
pub const DEFAULT_OAUTH_SERVER: &str = "http://localhost:7777/oauth-server/";

/// Client identifier registered with the OAuth server
pub const DEFAULT_CLIENT_ID: &str = "tasks_app";

/// Dashboard page that receives the token after authorization
pub const REDIRECT_URI: &str = "http://localhost:8888/tasks-service/dashboard/loginOAuth";

/// Authorize endpoint relative to the server base, query separator included
pub const AUTHORIZE_PATH: &str = "oauth/authorize?";

/// Implicit grant: the token comes back in the redirect
pub const RESPONSE_TYPE: &str = "token";
