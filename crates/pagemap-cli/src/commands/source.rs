//! Turning `SourceArgs` into a registry.

use std::path::{Path, PathBuf};

use pagemap_config::{
    BaseDir, ConfigDiscovery, EntryPointRegistry, ManifestFile, Settings, load_manifest,
    site_registry,
};

use crate::cli::SourceArgs;
use crate::error::{CliError, Result};

/// Where a registry was loaded from.
#[derive(Debug, Clone)]
pub enum Origin {
    Manifest(PathBuf),
    Site,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Manifest(path) => write!(f, "{}", path.display()),
            Origin::Site => f.write_str("built-in site table"),
        }
    }
}

/// A registry plus the settings that came with it.
#[derive(Debug)]
pub struct Source {
    pub origin: Origin,
    pub registry: EntryPointRegistry,
    pub settings: Settings,
}

/// Load the registry selected by the arguments.
///
/// - `--site`: the built-in table, resolved against `--root` or the cwd
/// - `--config`: that manifest; a relative path is taken from `--root`
/// - otherwise: discovery in `--root` or the cwd
pub fn load(args: &SourceArgs) -> Result<Source> {
    let root = project_root(args.root.as_deref())?;

    if args.site {
        tracing::debug!("Using built-in site table at {}", root.display());
        return Ok(Source {
            origin: Origin::Site,
            registry: site_registry(BaseDir::new(&root)?),
            settings: Settings::default(),
        });
    }

    let manifest = match &args.config {
        Some(path) => load_manifest(root.join(path))?,
        None => ConfigDiscovery::new(&root).load()?,
    };

    from_manifest(manifest)
}

fn from_manifest(manifest: ManifestFile) -> Result<Source> {
    let registry = manifest.registry()?;
    tracing::debug!(
        "Manifest {} resolves against {}",
        manifest.path().display(),
        registry.base_dir().as_path().display()
    );

    Ok(Source {
        origin: Origin::Manifest(manifest.path.clone()),
        registry,
        settings: manifest.manifest.settings,
    })
}

/// `--root` made absolute, or the current directory.
pub fn project_root(root: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })?;

    Ok(match root {
        Some(root) if root.is_absolute() => root.to_path_buf(),
        Some(root) => cwd.join(root),
        None => cwd,
    })
}
