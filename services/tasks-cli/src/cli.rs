//! Argument parsing

use clap::{Parser, Subcommand};
use serde_json::Value;
use transport::{METHOD_KEY, Payload};

use crate::error::{Error, Result};

#[derive(Debug, Parser)]
#[command(name = "tasks-client", version, about, long_about = None)]
pub struct Cli {
    /// Config file (falls back to CONFIG_PATH, then tasks-client.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List users; key=value filters are sent as query parameters
    Users {
        /// Filters as key=value
        filters: Vec<String>,
    },

    /// Submit credentials (password from TASKS_PASSWORD or login.password_file)
    Login { username: String },

    /// Open the OAuth authorize page
    OauthLogin {
        /// Print the authorize URL instead of opening a browser
        #[arg(long)]
        no_browser: bool,
    },
}

/// A parsed command with its arguments checked.
#[derive(Debug, PartialEq)]
pub enum Command {
    Users { filters: Payload },
    Login { username: String },
    OAuthLogin { open_browser: bool },
}

impl CliCommand {
    pub fn into_command(self) -> Result<Command> {
        match self {
            Self::Users { filters } => Ok(Command::Users {
                filters: parse_filters(filters)?,
            }),
            Self::Login { username } => Ok(Command::Login { username }),
            Self::OauthLogin { no_browser } => Ok(Command::OAuthLogin {
                open_browser: !no_browser,
            }),
        }
    }
}

/// Turn `key=value` pairs into query fields.
///
/// `method` is refused: the transport reads it as the HTTP verb, and listing
/// users is always a GET.
fn parse_filters(pairs: Vec<String>) -> Result<Payload> {
    let mut filters = Payload::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| Error::Usage(format!("expected key=value, got: {pair}")))?;
        if key == METHOD_KEY {
            return Err(Error::Usage(format!(
                "'{METHOD_KEY}' is not a valid users filter"
            )));
        }
        filters.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(filters)
}
