//! Check command implementation.
//!
//! Validates the entry table without building anything.

use pagemap_config::{ConfigValidator, EntryMap, SchemaValidator, missing_entries};

use crate::cli::CheckArgs;
use crate::commands::source;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the manifest (or the built-in site table)
/// 2. Check declarations: unique non-empty keys, non-empty relative paths
///    that stay inside the base directory
/// 3. Unless `--schema-only`, check every page exists as a file
///
/// # Errors
///
/// Declaration errors are returned as-is. Missing pages are all reported,
/// then summarized as `CliError::EntriesMissing`.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking entries...");

    let source = source::load(&args.source)?;
    let entries = SchemaValidator.validate(&source.registry)?;

    if entries.is_empty() {
        ui::warning(&format!("No entries declared in {}", source.origin));
        return Ok(());
    }

    ui::success(&format!(
        "{} entries declared in {}",
        entries.len(),
        source.origin
    ));

    if args.schema_only {
        return Ok(());
    }

    check_files(&entries)?;
    ui::success("All entry files exist");
    Ok(())
}

/// Report every missing page, failing if there was at least one.
fn check_files(entries: &EntryMap) -> Result<()> {
    let missing = missing_entries(entries);
    for err in &missing {
        ui::error(&err.to_string());
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CliError::EntriesMissing {
            count: missing.len(),
            total: entries.len(),
        })
    }
}
