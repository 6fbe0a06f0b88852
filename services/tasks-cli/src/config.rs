//! Configuration types and loading
//!
//! Config precedence: CLI args > env vars > config file > defaults.
//! The login password is loaded from the TASKS_PASSWORD env var or
//! password_file, never stored in the TOML directly to avoid leaking secrets.

use common::{Secret, require_http_scheme};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tasks_auth::{
    DEFAULT_CLIENT_ID, DEFAULT_OAUTH_SERVER, OAuthSettings, ParamEncoding, REDIRECT_URI,
};

/// Root configuration
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub oauth: OAuthConfig,
    #[serde(default)]
    pub login: LoginConfig,
}

/// Tasks REST API settings
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// OAuth client settings
#[derive(Debug, Deserialize)]
pub struct OAuthConfig {
    #[serde(default = "default_oauth_server")]
    pub server: String,
    #[serde(default = "default_client_id")]
    pub client_id: String,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    /// Percent-encode client_id and redirect_uri in the authorize URL
    #[serde(default)]
    pub percent_encode: bool,
}

/// Credential source for the `login` command
#[derive(Debug, Default, Deserialize)]
pub struct LoginConfig {
    #[serde(default)]
    pub password_file: Option<PathBuf>,
    #[serde(skip)]
    pub password: Option<Secret<String>>,
}

fn default_base_url() -> String {
    "http://localhost:8888/tasks-service/".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_oauth_server() -> String {
    DEFAULT_OAUTH_SERVER.to_string()
}

fn default_client_id() -> String {
    DEFAULT_CLIENT_ID.to_string()
}

fn default_redirect_uri() -> String {
    REDIRECT_URI.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            server: default_oauth_server(),
            client_id: default_client_id(),
            redirect_uri: default_redirect_uri(),
            percent_encode: false,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl OAuthConfig {
    pub fn settings(&self) -> OAuthSettings {
        OAuthSettings {
            server: self.server.clone(),
            client_id: self.client_id.clone(),
            redirect_uri: self.redirect_uri.clone(),
            encoding: if self.percent_encode {
                ParamEncoding::Percent
            } else {
                ParamEncoding::Literal
            },
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, then overlay environment variables.
    ///
    /// Password resolution order:
    /// 1. TASKS_PASSWORD env var
    /// 2. password_file path from config
    pub fn load(path: &Path) -> common::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;

        require_http_scheme("api.base_url", &config.api.base_url)?;
        require_http_scheme("oauth.server", &config.oauth.server)?;

        if config.api.timeout_secs == 0 {
            return Err(common::Error::ZeroTimeout);
        }

        if let Ok(password) = std::env::var("TASKS_PASSWORD") {
            config.login.password = Some(Secret::new(password));
        } else if let Some(ref password_file) = config.login.password_file {
            config.login.password = Secret::from_password_file(password_file)?;
        }

        Ok(config)
    }

    /// Resolve config file path from CLI arg or CONFIG_PATH env var.
    pub fn resolve_path(cli_path: Option<&str>) -> PathBuf {
        if let Some(p) = cli_path {
            return PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from("tasks-client.toml")
    }
}
