//! Error handling for the pagemap CLI.
//!
//! `CliError` wraps the library's `ConfigError` and adds the failures that only
//! exist at the command line. [`cli_error_to_miette`] turns it into a report
//! with a help line at the binary boundary.

use std::path::PathBuf;

use miette::Report;
use pagemap_config::ConfigError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest loading, declaration or filesystem validation errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// One or more declared pages are missing on disk
    #[error("{count} of {total} entry files are missing")]
    EntriesMissing { count: usize, total: usize },

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into `FileNotFound` for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }
}

/// Help line shown under a configuration error.
pub fn config_error_help(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::NotFound => {
            Some("Run 'pagemap init' to create pagemap.toml, or pass --config <path> or --site")
        }
        ConfigError::DuplicateKey { .. } => {
            Some("Each entry needs its own key; rename or remove one of the declarations")
        }
        ConfigError::EmptyKey { .. } => Some("Give every [[entry]] a non-empty 'key'"),
        ConfigError::EmptyPath { .. }
        | ConfigError::AbsolutePath { .. }
        | ConfigError::OutsideBaseDir { .. } => {
            Some("Entry paths are relative to the manifest's directory, e.g. 'admin/login.html'")
        }
        ConfigError::EntryNotFound { .. } | ConfigError::EntryNotAFile { .. } => {
            Some("Create the page or fix its path; paths resolve against the base directory")
        }
        ConfigError::InvalidValue { .. } => Some("Check pagemap.toml syntax and field types"),
        ConfigError::Io(_) => None,
    }
}

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => match config_error_help(&e) {
            Some(help) => miette::miette!(help = help, "Configuration error: {}", e),
            None => miette::miette!("Configuration error: {}", e),
        },
        CliError::EntriesMissing { .. } => miette::miette!(
            help = "Create the missing pages or remove their declarations",
            "{}",
            err
        ),
        _ => miette::miette!("{}", err),
    }
}
