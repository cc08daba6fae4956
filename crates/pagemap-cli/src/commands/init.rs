//! Init command implementation.
//!
//! Writes a `pagemap.toml` declaring the site's pages.

use std::fs;

use pagemap_config::{MANIFEST_FILE, Manifest};

use crate::cli::InitArgs;
use crate::commands::source::project_root;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the init command.
///
/// # Errors
///
/// Refuses to overwrite an existing manifest unless `--force` is given.
pub fn execute(args: InitArgs) -> Result<()> {
    let root = project_root(args.root.as_deref())?;
    let path = root.join(MANIFEST_FILE);

    if path.exists() && !args.force {
        return Err::<(), _>(CliError::InvalidArgument(format!(
            "{} already exists",
            path.display()
        )))
        .with_hint("Pass --force to overwrite it");
    }

    fs::create_dir_all(&root).with_path(&root)?;
    let manifest = Manifest::site();
    fs::write(&path, manifest.to_toml()?).with_path(&path)?;

    ui::success(&format!(
        "Created {} with {} entries",
        path.display(),
        manifest.entries.len()
    ));
    ui::info("Run 'pagemap check' once the pages exist");
    Ok(())
}
