//! Emit command implementation.
//!
//! Writes the resolved mapping in the shape a bundler's multi-entry input
//! takes, or the output plan derived from it.

use std::fs;
use std::path::Path;

use pagemap_config::{ConfigValidator, EntryMap, FsValidator, SchemaValidator};
use serde_json::{Value, json};

use crate::cli::{EmitArgs, EmitFormat};
use crate::commands::{output, source};
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the emit command.
pub fn execute(args: EmitArgs) -> Result<()> {
    let source = source::load(&args.source)?;
    let entries = if args.verify {
        FsValidator.validate(&source.registry)?
    } else {
        SchemaValidator.validate(&source.registry)?
    };

    let rendered = if args.plan {
        let out_dir = args
            .out_dir
            .as_deref()
            .unwrap_or(source.settings.out_dir.as_path());
        render_plan(&entries, out_dir, args.format)?
    } else {
        render_mapping(&entries, args.format)?
    };

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(path, rendered).with_path(path)?;
            ui::success(&format!(
                "Wrote {} entries to {}",
                entries.len(),
                path.display()
            ));
        }
        None => output::write_stdout(&rendered)?,
    }

    Ok(())
}

/// Key to absolute path.
pub fn render_mapping(entries: &EntryMap, format: EmitFormat) -> Result<String> {
    match format {
        EmitFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&entries.to_value())?)),
        EmitFormat::Lines => Ok(entries
            .iter()
            .map(|entry| format!("{}\t{}\n", entry.key, entry.path.display()))
            .collect()),
    }
}

/// Key to `{ source, output }`, with outputs under `out_dir`.
pub fn render_plan(entries: &EntryMap, out_dir: &Path, format: EmitFormat) -> Result<String> {
    let outputs = entries.output_paths(out_dir);

    match format {
        EmitFormat::Json => {
            let plan = entries
                .iter()
                .map(|entry| {
                    let output = &outputs[entry.key.as_str()];
                    (
                        entry.key.clone(),
                        json!({
                            "source": entry.path.to_string_lossy(),
                            "output": output.to_string_lossy(),
                        }),
                    )
                })
                .collect::<serde_json::Map<_, _>>();
            Ok(format!(
                "{}\n",
                serde_json::to_string_pretty(&Value::Object(plan))?
            ))
        }
        EmitFormat::Lines => Ok(entries
            .iter()
            .map(|entry| {
                format!(
                    "{}\t{}\t{}\n",
                    entry.key,
                    entry.path.display(),
                    outputs[entry.key.as_str()].display()
                )
            })
            .collect()),
    }
}
