//! pagemap CLI - declare, check and emit the entry points of a multi-page site.
//!
//! Parses arguments, initializes logging, and dispatches to a command.

use clap::Parser;
use miette::Result;
use pagemap_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::List(list_args) => commands::list_execute(list_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Emit(emit_args) => commands::emit_execute(emit_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
    };

    result.map_err(error::cli_error_to_miette)
}
