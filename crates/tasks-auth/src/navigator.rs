//! Sending the user agent to a URL
//!
//! Navigation is fire-and-forget: there is no error channel back to the
//! caller. Implementations report failures through logging only.

use std::process::{Child, Command, ExitStatus};
use std::thread::JoinHandle;

use tracing::{info, warn};

/// Top-level navigation to an absolute URL.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Opens URLs in the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }

        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl Navigator for SystemBrowser {
    fn navigate(&self, url: &str) {
        match Self::command(url).spawn() {
            Ok(child) => {
                info!(url, "opened browser");
                reap(child);
            }
            Err(e) => warn!(url, error = %e, "failed to open browser"),
        }
    }
}

/// Wait for the opener on a background thread so it doesn't linger as a zombie.
fn reap(mut child: Child) -> JoinHandle<Option<ExitStatus>> {
    std::thread::spawn(move || match child.wait() {
        Ok(status) => Some(status),
        Err(e) => {
            warn!(error = %e, "failed to wait for browser opener");
            None
        }
    })
}
