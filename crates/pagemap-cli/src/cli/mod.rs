//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `pagemap list` - Show the resolved entry points
//! - `pagemap check` - Validate declarations and that every page exists
//! - `pagemap emit` - Write the mapping (or output plan) for the bundler
//! - `pagemap init` - Write a `pagemap.toml` with the site's pages

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, EmitArgs, InitArgs, ListArgs, SourceArgs};
pub use enums::*;

/// pagemap - entry points for multi-page builds
#[derive(Parser, Debug)]
#[command(
    name = "pagemap",
    version,
    about = "Declare and resolve the entry points of a multi-page site",
    long_about = "pagemap maps page names to HTML entry files relative to a base directory.\n\
                  It validates the table (unique keys, relative paths, files on disk) and\n\
                  emits the resolved mapping as the multi-entry input of a bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
