//! Login password handling
//!
//! The password is kept in a [`Secret`] from the moment it is read until
//! the login payload is built. Formatting never shows it.

use std::fmt;
use std::path::Path;

use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Credential held in memory, printed as `[REDACTED]` and wiped on drop.
pub struct Secret<T: Zeroize>(T);

impl<T: Zeroize> Secret<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl Secret<String> {
    /// Read a password from `path`, dropping surrounding whitespace.
    ///
    /// A blank file yields `None`. The untrimmed buffer is wiped before return.
    pub fn from_password_file(path: &Path) -> Result<Option<Self>> {
        let mut raw = std::fs::read_to_string(path).map_err(|source| Error::PasswordFile {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = raw.trim();
        let password = (!trimmed.is_empty()).then(|| Self::new(trimmed.to_owned()));
        raw.zeroize();
        Ok(password)
    }
}

impl<T: Zeroize> From<T> for Secret<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Zeroize> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T: Zeroize> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T: Zeroize> Drop for Secret<T> {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl<T: Zeroize + Clone> Clone for Secret<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn password_is_redacted_in_debug_and_display() {
        let secret = Secret::new(String::from("hunter2"));
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(format!("{secret}"), "[REDACTED]");
        assert_eq!(format!("{:?}", Some(&secret)), "Some([REDACTED])");
    }

    #[test]
    fn password_file_is_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  hunter2  ").unwrap();

        let secret = Secret::from_password_file(file.path()).unwrap().unwrap();
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn blank_password_file_yields_none() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();

        assert!(Secret::from_password_file(file.path()).unwrap().is_none());
    }

    #[test]
    fn missing_password_file_reports_path() {
        let err = Secret::from_password_file(Path::new("/nonexistent/tasks-password")).unwrap_err();
        match err {
            Error::PasswordFile { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/tasks-password"))
            }
            other => panic!("expected PasswordFile, got {other:?}"),
        }
    }

    #[test]
    fn clone_survives_original_drop() {
        let secret = Secret::new(String::from("hunter2"));
        let copy = secret.clone();
        drop(secret);
        assert_eq!(copy.expose(), "hunter2");
    }
}
