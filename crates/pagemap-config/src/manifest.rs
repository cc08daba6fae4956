//! On-disk entry manifest (`pagemap.toml` or the `pagemap` field of
//! `package.json`).
//!
//! Entries are an array of tables rather than a table keyed by page name, so
//! a key written twice survives parsing and is reported by
//! [`EntryPointRegistry::build`](crate::EntryPointRegistry::build):
//!
//! ```toml
//! [settings]
//! out_dir = "dist"
//!
//! [[entry]]
//! key = "main"
//! path = "index.html"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};
use crate::registry::{BaseDir, EntryDecl, EntryPointRegistry};
use crate::site::site_decls;

pub const MANIFEST_FILE: &str = "pagemap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub settings: Settings,

    #[serde(default, rename = "entry")]
    pub entries: Vec<EntryDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory entries are relative to, itself relative to the manifest's
    /// directory. Defaults to the manifest's directory.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_path"
    )]
    pub root: Option<PathBuf>,

    /// Build output directory, relative to the base directory.
    #[serde(default = "default_out_dir", deserialize_with = "deserialize_path")]
    pub out_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: None,
            out_dir: default_out_dir(),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// Accepts numbers as well as strings: environment values such as
/// `PAGEMAP_SETTINGS__OUT_DIR=2024` reach us as integers.
struct PathVisitor;

impl<'de> Visitor<'de> for PathVisitor {
    type Value = PathBuf;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a path string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<PathBuf, E> {
        Ok(PathBuf::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<PathBuf, E> {
        Ok(PathBuf::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<PathBuf, E> {
        Ok(PathBuf::from(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<PathBuf, E> {
        Ok(PathBuf::from(value.to_string()))
    }
}

fn deserialize_path<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<PathBuf, D::Error> {
    deserializer.deserialize_any(PathVisitor)
}

fn deserialize_opt_path<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<PathBuf>, D::Error> {
    deserialize_path(deserializer).map(Some)
}

impl Manifest {
    /// Manifest declaring the site's pages.
    pub fn site() -> Self {
        Self {
            settings: Settings::default(),
            entries: site_decls(),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: MANIFEST_FILE.to_string(),
            hint: Some(format!("TOML serialization failed: {}", e)),
        })
    }

    /// Base directory for a manifest living in `manifest_dir`.
    pub fn base_dir(&self, manifest_dir: &BaseDir) -> Result<BaseDir> {
        match &self.settings.root {
            Some(root) => BaseDir::new(manifest_dir.resolve(root)),
            None => Ok(manifest_dir.clone()),
        }
    }
}

/// A manifest together with the file it was loaded from.
#[derive(Debug, Clone)]
pub struct ManifestFile {
    pub path: PathBuf,
    pub manifest: Manifest,
}

impl ManifestFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.manifest.settings
    }

    /// Directory entry paths are resolved against: the manifest's own
    /// directory, adjusted by `settings.root`.
    pub fn base_dir(&self) -> Result<BaseDir> {
        let manifest_dir = BaseDir::of_config_file(&self.path)?;
        self.manifest.base_dir(&manifest_dir)
    }

    pub fn registry(&self) -> Result<EntryPointRegistry> {
        Ok(EntryPointRegistry::from_decls(
            self.base_dir()?,
            self.manifest.entries.iter().cloned(),
        ))
    }
}
