//! List command implementation.

use pagemap_config::{ConfigValidator, SchemaValidator};

use crate::cli::ListArgs;
use crate::commands::{output, source};
use crate::error::Result;
use crate::ui;

/// Execute the list command.
///
/// Resolves the entry table and prints it; files are not checked.
pub fn execute(args: ListArgs) -> Result<()> {
    let source = source::load(&args.source)?;
    let entries = SchemaValidator.validate(&source.registry)?;

    if entries.is_empty() {
        ui::warning(&format!("No entries declared in {}", source.origin));
        return Ok(());
    }

    output::write_stdout(&ui::render_table(&entries, args.relative))?;
    tracing::info!("{} entries from {}", entries.len(), source.origin);
    Ok(())
}
