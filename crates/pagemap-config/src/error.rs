//! Error types for entry declaration, manifest loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Declaration errors (no filesystem access)
    #[error("duplicate entry key '{key}': declared for {} and {}", .first.display(), .second.display())]
    DuplicateKey {
        key: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("entry #{index} has an empty key")]
    EmptyKey { index: usize },

    #[error("entry '{key}' has an empty path")]
    EmptyPath { key: String },

    #[error("entry '{key}' must use a path relative to the base directory, got {}", .path.display())]
    AbsolutePath { key: String, path: PathBuf },

    #[error("entry '{key}' points outside the base directory: {}", .path.display())]
    OutsideBaseDir { key: String, path: PathBuf },

    // Filesystem validation errors (for CLI use)
    #[error("entry '{key}' not found: {}", .path.display())]
    EntryNotFound { key: String, path: PathBuf },

    #[error("entry '{key}' is not a file: {}", .path.display())]
    EntryNotAFile { key: String, path: PathBuf },

    // Manifest discovery/loading errors
    #[error("manifest not found")]
    NotFound,

    #[error("invalid {field}{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// The entry key this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::DuplicateKey { key, .. }
            | ConfigError::EmptyPath { key }
            | ConfigError::AbsolutePath { key, .. }
            | ConfigError::OutsideBaseDir { key, .. }
            | ConfigError::EntryNotFound { key, .. }
            | ConfigError::EntryNotAFile { key, .. } => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_names_both_paths() {
        let err = ConfigError::DuplicateKey {
            key: "login".to_string(),
            first: PathBuf::from("/site/login.html"),
            second: PathBuf::from("/site/admin/login.html"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'login'"));
        assert!(msg.contains("/site/login.html"));
        assert!(msg.contains("/site/admin/login.html"));
        assert_eq!(err.key(), Some("login"));
    }

    #[test]
    fn invalid_value_renders_hint() {
        let err = ConfigError::InvalidValue {
            field: "pagemap.toml".to_string(),
            hint: Some("expected a table".to_string()),
        };
        assert_eq!(err.to_string(), "invalid pagemap.toml: expected a table");

        let bare = ConfigError::InvalidValue {
            field: "entry".to_string(),
            hint: None,
        };
        assert_eq!(bare.to_string(), "invalid entry");
        assert_eq!(bare.key(), None);
    }
}
