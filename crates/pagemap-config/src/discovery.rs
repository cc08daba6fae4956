//! File-based manifest discovery for CLI use
//!
//! Finds a manifest in a project directory and loads it through figment, so
//! `PAGEMAP_`-prefixed environment variables can override its settings.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::manifest::{MANIFEST_FILE, Manifest, ManifestFile};

/// Field of `package.json` holding an embedded manifest.
pub const PACKAGE_JSON_FIELD: &str = "pagemap";

/// File-based manifest discovery
///
/// # Example
///
/// ```no_run
/// use pagemap_config::ConfigDiscovery;
///
/// let manifest = ConfigDiscovery::new(".").load().unwrap();
/// let entries = manifest.registry().unwrap().build().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a manifest in the root directory
    ///
    /// Searches in this order:
    /// 1. `pagemap.toml`
    /// 2. `package.json` with a non-null `pagemap` field
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(MANIFEST_FILE);
        if toml_path.is_file() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.is_file() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load the discovered manifest
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no manifest is found.
    pub fn load(&self) -> Result<ManifestFile> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_manifest(path)
    }
}

/// Load a manifest from an explicit path.
///
/// Layering, lowest to highest priority: built-in defaults, the file, then
/// environment variables such as `PAGEMAP_SETTINGS__OUT_DIR`. Only
/// `PAGEMAP_SETTINGS__*` variables are read; unknown fields anywhere in the
/// manifest are an error rather than being ignored.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<ManifestFile> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ConfigError::NotFound);
    }

    tracing::debug!("Loading manifest from {}", path.display());

    let file: Figment = if is_package_json(path) {
        let content = fs::read_to_string(path)?;
        let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "package.json".to_string(),
            hint: Some(format!("Invalid JSON: {}", e)),
        })?;
        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(Value::Object(_)) => {}
            Some(field) if !field.is_null() => {
                return Err(ConfigError::InvalidValue {
                    field: PACKAGE_JSON_FIELD.to_string(),
                    hint: Some(format!(
                        "expected an object with 'settings' and 'entry', found {}",
                        field
                    )),
                });
            }
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: PACKAGE_JSON_FIELD.to_string(),
                    hint: Some("Add a 'pagemap' field to your package.json".to_string()),
                });
            }
        }
        Figment::from(Json::file(path)).focus(PACKAGE_JSON_FIELD)
    } else {
        Figment::from(Toml::file(path))
    };

    let manifest: Manifest = Figment::new()
        .merge(Serialized::defaults(Manifest::default()))
        .merge(file)
        .merge(
            Env::prefixed("PAGEMAP_")
                .split("__")
                .filter(|key| key.as_str().to_ascii_lowercase().starts_with("settings.")),
        )
        .extract()
        .map_err(|e| ConfigError::InvalidValue {
            field: path.display().to_string(),
            hint: Some(e.to_string()),
        })?;

    tracing::debug!(
        "Loaded {} entries from {}",
        manifest.entries.len(),
        path.display()
    );

    Ok(ManifestFile {
        path: path.to_path_buf(),
        manifest,
    })
}

fn is_package_json(path: &Path) -> bool {
    path.file_name() == Some(std::ffi::OsStr::new("package.json"))
}
