use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::EmitFormat;

/// Available pagemap subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the resolved entry points
    ///
    /// Prints one line per entry: its key and the absolute path it resolves to.
    List(ListArgs),

    /// Validate the entry table
    ///
    /// Checks that keys are unique, paths are relative, and every page exists
    /// as a file under the base directory.
    Check(CheckArgs),

    /// Emit the mapping for a bundler
    ///
    /// Writes the key → absolute path mapping as JSON, ready to be used as a
    /// multi-entry `input` option.
    Emit(EmitArgs),

    /// Write a pagemap.toml declaring the site's pages
    Init(InitArgs),
}

/// Where the entry table comes from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Manifest to load (pagemap.toml or package.json)
    ///
    /// Without this, pagemap.toml and then package.json are searched in the
    /// project root.
    #[arg(short, long, value_name = "PATH", conflicts_with = "site")]
    pub config: Option<PathBuf>,

    /// Use the built-in site table instead of a manifest
    #[arg(long)]
    pub site: bool,

    /// Project root (defaults to the current directory)
    ///
    /// Manifests are searched here, and the built-in site table resolves
    /// against it.
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Show declared relative paths instead of absolute ones
    #[arg(long)]
    pub relative: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only validate declarations, skip filesystem checks
    #[arg(long)]
    pub schema_only: bool,
}

/// Arguments for the emit command
#[derive(Args, Debug)]
pub struct EmitArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: EmitFormat,

    /// Emit the output plan (source and output path per entry)
    #[arg(long)]
    pub plan: bool,

    /// Output directory for the plan, overriding the manifest's out_dir
    #[arg(long, value_name = "DIR", requires = "plan")]
    pub out_dir: Option<PathBuf>,

    /// Fail unless every page exists on disk
    #[arg(long)]
    pub verify: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write pagemap.toml into (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Overwrite an existing pagemap.toml
    #[arg(long)]
    pub force: bool,
}
