//! pagemap CLI - command-line front end for the entry-point registry.
//!
//! Loads a manifest (or the built-in site table), validates it, and hands the
//! finalized key → path mapping to whatever bundler runs next.
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `list`, `check`, `emit` and `init`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages and table output

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
