//! Tasks client
//!
//! Command-line front end for the tasks application's user operations:
//! 1. Loads configuration (file + env overlays)
//! 2. Builds a `UserService` over the HTTP transport and system browser
//! 3. Runs one command and prints its JSON result on stdout

mod cli;
mod config;
mod error;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use common::Secret;
use serde_json::Value;
use tasks_auth::SystemBrowser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transport::{Continuations, HttpTransport, Payload};
use user_service::UserService;

use crate::cli::{Cli, Command};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // JSON logs on stderr, LOG_LEVEL / RUST_LOG filter; stdout carries results
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let command = match cli.command.into_command() {
        Ok(command) => command,
        Err(e) => Cli::command()
            .error(clap::error::ErrorKind::InvalidValue, e)
            .exit(),
    };

    let config_path = Config::resolve_path(cli.config.as_deref());
    info!(path = %config_path.display(), "loading configuration");

    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    info!(
        base_url = %config.api.base_url,
        oauth_server = %config.oauth.server,
        client_id = %config.oauth.client_id,
        "configuration loaded"
    );

    let transport = HttpTransport::new(config.api.base_url.clone(), config.api.timeout())
        .context("failed to create HTTP transport")?;
    let service = UserService::new(
        Arc::new(transport),
        Arc::new(SystemBrowser),
        config.oauth.settings(),
    );

    match run(&service, command, config.login.password.as_ref()).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "command failed");
            Err(e.into())
        }
    }
}

/// Execute one command against the service, returning what to print.
async fn run(
    service: &UserService,
    command: Command,
    password: Option<&Secret<String>>,
) -> error::Result<String> {
    match command {
        Command::Users { filters } => {
            let (continuations, rx) = Continuations::channel();
            service.find_users(&filters, continuations);
            let value = rx.await.map_err(|_| error::Error::CompletionDropped)??;
            Ok(render(&value))
        }
        Command::Login { username } => {
            let password = password.ok_or(error::Error::MissingPassword)?;
            let mut credentials = Payload::new();
            credentials.insert("username".into(), Value::String(username));
            // The payload copy is a plain String and is not zeroized; it lives
            // only until the request completes and the process exits.
            credentials.insert("password".into(), Value::String(password.expose().clone()));

            let (continuations, rx) = Continuations::channel();
            service.login(&mut credentials, continuations);
            let value = rx.await.map_err(|_| error::Error::CompletionDropped)??;
            Ok(render(&value))
        }
        Command::OAuthLogin { open_browser } => {
            let url = service.authorization_url();
            if open_browser {
                service.oauth_login();
            }
            Ok(url)
        }
    }
}

fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::routing::{get, post};
    use serde_json::json;
    use std::sync::Mutex;
    use std::time::Duration;
    use tasks_auth::{Navigator, OAuthSettings};
    use tokio::net::TcpListener;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            self.visited.lock().unwrap().push(url.to_string());
        }
    }

    /// Mock tasks API: lists users (echoing filters) and accepts one login.
    async fn start_tasks_api() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let app = axum::Router::new()
                .route(
                    "/tasks-service/api/users",
                    get(
                        |axum::extract::Query(q): axum::extract::Query<
                            std::collections::HashMap<String, String>,
                        >| async move {
                            Json(json!([{"name": "ana", "filter": q.get("owner")}]))
                        },
                    ),
                )
                .route(
                    "/tasks-service/api/login",
                    post(|Json(body): Json<Value>| async move {
                        if body["password"] == "right" {
                            (axum::http::StatusCode::OK, Json(json!({"token": "jwt"})))
                        } else {
                            (
                                axum::http::StatusCode::UNAUTHORIZED,
                                Json(json!({"message": "Bad credentials"})),
                            )
                        }
                    }),
                );
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/tasks-service/")
    }

    async fn service_for(base_url: &str) -> (UserService, Arc<RecordingNavigator>) {
        let transport = HttpTransport::new(base_url, Duration::from_secs(5)).unwrap();
        let navigator = Arc::new(RecordingNavigator::default());
        let service = UserService::new(
            Arc::new(transport),
            navigator.clone(),
            OAuthSettings::default(),
        );
        (service, navigator)
    }

    #[tokio::test]
    async fn users_command_prints_server_json() {
        let base = start_tasks_api().await;
        let (service, _) = service_for(&base).await;

        let mut filters = Payload::new();
        filters.insert("owner".into(), Value::String("ana".into()));
        let output = run(&service, Command::Users { filters }, None).await.unwrap();

        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, json!([{"name": "ana", "filter": "ana"}]));
    }

    #[tokio::test]
    async fn login_command_sends_password() {
        let base = start_tasks_api().await;
        let (service, _) = service_for(&base).await;
        let password = Secret::new(String::from("right"));

        let output = run(
            &service,
            Command::Login {
                username: "ana".into(),
            },
            Some(&password),
        )
        .await
        .unwrap();

        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["token"], "jwt");
    }

    #[tokio::test]
    async fn login_command_surfaces_rejection_unchanged() {
        let base = start_tasks_api().await;
        let (service, _) = service_for(&base).await;
        let password = Secret::new(String::from("wrong"));

        let err = run(
            &service,
            Command::Login {
                username: "ana".into(),
            },
            Some(&password),
        )
        .await
        .unwrap_err();

        match err {
            error::Error::Transport(transport::TransportError::Status { status, body }) => {
                assert_eq!(status, 401);
                assert!(body.contains("Bad credentials"), "got: {body}");
            }
            other => panic!("expected transport status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_command_requires_password() {
        let (service, _) = service_for("http://127.0.0.1:9").await;
        let err = run(
            &service,
            Command::Login {
                username: "ana".into(),
            },
            None,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, error::Error::MissingPassword));
    }

    #[tokio::test]
    async fn oauth_login_without_browser_prints_url_only() {
        let (service, navigator) = service_for("http://127.0.0.1:9").await;

        let output = run(&service, Command::OAuthLogin { open_browser: false }, None)
            .await
            .unwrap();

        assert_eq!(
            output,
            "http://localhost:7777/oauth-server/oauth/authorize?response_type=token&client_id=tasks_app&redirect_uri=http://localhost:8888/tasks-service/dashboard/loginOAuth"
        );
        assert!(navigator.visited.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn oauth_login_with_browser_navigates() {
        let (service, navigator) = service_for("http://127.0.0.1:9").await;

        let output = run(&service, Command::OAuthLogin { open_browser: true }, None)
            .await
            .unwrap();

        assert_eq!(navigator.visited.lock().unwrap().as_slice(), [output]);
    }
}
