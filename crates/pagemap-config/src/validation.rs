//! Pluggable registry validation strategies
//!
//! Separates declaration checks (no I/O) from filesystem checks, which stand in
//! for the bundler's own entry lookup.

use crate::error::{ConfigError, Result};
use crate::registry::{EntryMap, EntryPointRegistry};

/// Trait for pluggable registry validation strategies
pub trait ConfigValidator {
    /// Validate the registry, returning the resolved entries on success.
    fn validate(&self, registry: &EntryPointRegistry) -> Result<EntryMap>;
}

/// Declaration-only validation (no filesystem checks)
///
/// Keys must be non-empty and unique; paths must be non-empty and relative.
/// An empty registry is valid.
///
/// # Example
///
/// ```
/// use pagemap_config::{BaseDir, ConfigValidator, EntryPointRegistry, SchemaValidator};
///
/// let registry = EntryPointRegistry::new(BaseDir::new("/site").unwrap())
///     .declare("main", "index.html");
///
/// SchemaValidator.validate(&registry).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, registry: &EntryPointRegistry) -> Result<EntryMap> {
        registry.build()
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`], then requires every resolved path to be an
/// existing file.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, registry: &EntryPointRegistry) -> Result<EntryMap> {
        let entries = SchemaValidator.validate(registry)?;

        match missing_entries(&entries).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(entries),
        }
    }
}

/// Convenience function for declaration-only validation
pub fn validate_schema(registry: &EntryPointRegistry) -> Result<EntryMap> {
    SchemaValidator.validate(registry)
}

/// Convenience function for filesystem validation
pub fn validate_fs(registry: &EntryPointRegistry) -> Result<EntryMap> {
    FsValidator.validate(registry)
}

/// Every entry whose file is missing, rather than stopping at the first.
///
/// [`FsValidator`] fails with the first of these.
pub fn missing_entries(entries: &EntryMap) -> Vec<ConfigError> {
    entries
        .iter()
        .filter_map(|entry| {
            if !entry.path.exists() {
                Some(ConfigError::EntryNotFound {
                    key: entry.key.clone(),
                    path: entry.path.clone(),
                })
            } else if !entry.path.is_file() {
                Some(ConfigError::EntryNotAFile {
                    key: entry.key.clone(),
                    path: entry.path.clone(),
                })
            } else {
                None
            }
        })
        .collect()
}
