//! Entry-point registry: named pages resolved against a base directory.
//!
//! A registry holds declarations as written (`key` plus a path relative to the
//! base directory) and turns them into an [`EntryMap`] of absolute paths with
//! [`EntryPointRegistry::build`]. Resolution is purely lexical; checking that
//! the files exist is left to [`crate::FsValidator`].

use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Join `relative` onto `base_dir` and normalize the result lexically.
///
/// No filesystem access happens here: `.` and `..` components are folded
/// without following symlinks, and missing files are not an error.
///
/// # Example
///
/// ```
/// use pagemap_config::resolve;
/// use std::path::PathBuf;
///
/// let path = resolve("/project", "admin/login.html");
/// assert_eq!(path, PathBuf::from("/project/admin/login.html"));
/// ```
pub fn resolve(base_dir: impl AsRef<Path>, relative: impl AsRef<Path>) -> PathBuf {
    base_dir.as_ref().join(relative.as_ref()).clean()
}

/// Absolute directory that entry paths are resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseDir(PathBuf);

impl BaseDir {
    /// Create a base directory, anchoring a relative path at the current
    /// working directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::path::absolute(path)?
        };
        Ok(Self(absolute.clean()))
    }

    /// The directory containing a configuration file.
    pub fn of_config_file(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::new(parent),
            _ => Self::current(),
        }
    }

    /// The process working directory.
    pub fn current() -> Result<Self> {
        Ok(Self(std::env::current_dir()?.clean()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Resolve a relative entry path against this directory.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        resolve(&self.0, relative)
    }
}

impl AsRef<Path> for BaseDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// An entry as declared, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryDecl {
    pub key: String,
    pub path: PathBuf,
}

impl EntryDecl {
    pub fn new(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
        }
    }

    /// Check the declaration in isolation and return its normalized relative
    /// path. `index` is its position in the declaration list and only used for
    /// reporting.
    pub(crate) fn check(&self, index: usize) -> Result<PathBuf> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::EmptyKey { index });
        }

        if self.path.is_absolute() || self.path.has_root() {
            return Err(ConfigError::AbsolutePath {
                key: self.key.clone(),
                path: self.path.clone(),
            });
        }

        let relative = self.path.clean();
        match relative.components().next() {
            None | Some(Component::CurDir) => Err(ConfigError::EmptyPath {
                key: self.key.clone(),
            }),
            Some(Component::ParentDir) => Err(ConfigError::OutsideBaseDir {
                key: self.key.clone(),
                path: self.path.clone(),
            }),
            Some(_) => Ok(relative),
        }
    }
}

impl<K: Into<String>, P: Into<PathBuf>> From<(K, P)> for EntryDecl {
    fn from((key, path): (K, P)) -> Self {
        Self::new(key, path)
    }
}

/// A resolved entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    /// Normalized path relative to the base directory; `path` always ends
    /// with it.
    pub relative: PathBuf,
    /// Absolute, normalized path.
    pub path: PathBuf,
}

/// Declared entry points and the directory they are relative to.
///
/// # Example
///
/// ```
/// use pagemap_config::{BaseDir, EntryPointRegistry};
///
/// let base = BaseDir::new("/project").unwrap();
/// let entries = EntryPointRegistry::new(base)
///     .declare("main", "index.html")
///     .declare("adminLogin", "admin/login.html")
///     .build()
///     .unwrap();
///
/// assert_eq!(entries.len(), 2);
/// assert!(entries.get("adminLogin").unwrap().ends_with("admin/login.html"));
/// ```
#[derive(Debug, Clone)]
pub struct EntryPointRegistry {
    base_dir: BaseDir,
    decls: Vec<EntryDecl>,
}

impl EntryPointRegistry {
    pub fn new(base_dir: BaseDir) -> Self {
        Self {
            base_dir,
            decls: Vec::new(),
        }
    }

    pub fn from_decls(base_dir: BaseDir, decls: impl IntoIterator<Item = EntryDecl>) -> Self {
        Self {
            base_dir,
            decls: decls.into_iter().collect(),
        }
    }

    /// Add a declaration. Duplicates are accepted here and reported by
    /// [`build`](Self::build).
    pub fn declare(mut self, key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.decls.push(EntryDecl::new(key, path));
        self
    }

    pub fn base_dir(&self) -> &BaseDir {
        &self.base_dir
    }

    pub fn decls(&self) -> &[EntryDecl] {
        &self.decls
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Resolve every declaration into the finalized mapping.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed declaration (empty key, empty or absolute
    /// path, path escaping the base directory) or on the first key declared
    /// twice. Nothing is dropped silently,
    /// so on success the map has exactly one entry per declaration.
    pub fn build(&self) -> Result<EntryMap> {
        let mut entries: IndexMap<String, Entry> = IndexMap::with_capacity(self.decls.len());

        for (index, decl) in self.decls.iter().enumerate() {
            let relative = decl.check(index)?;
            let path = self.base_dir.resolve(&relative);

            match entries.entry(decl.key.clone()) {
                MapEntry::Occupied(existing) => {
                    return Err(ConfigError::DuplicateKey {
                        key: decl.key.clone(),
                        first: existing.get().path.clone(),
                        second: path,
                    });
                }
                MapEntry::Vacant(slot) => {
                    tracing::trace!("Resolved entry {} -> {}", decl.key, path.display());
                    slot.insert(Entry {
                        key: decl.key.clone(),
                        relative,
                        path,
                    });
                }
            }
        }

        tracing::debug!(
            "Built {} entries relative to {}",
            entries.len(),
            self.base_dir.as_path().display()
        );

        Ok(EntryMap {
            base_dir: self.base_dir.clone(),
            entries,
        })
    }
}

/// Finalized mapping from entry key to absolute path, in declaration order.
#[derive(Debug, Clone)]
pub struct EntryMap {
    base_dir: BaseDir,
    entries: IndexMap<String, Entry>,
}

impl EntryMap {
    pub fn base_dir(&self) -> &BaseDir {
        &self.base_dir
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absolute path for `key`.
    pub fn get(&self, key: &str) -> Option<&Path> {
        self.entries.get(key).map(|entry| entry.path.as_path())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Render as a JSON object of key to absolute path, the shape a bundler's
    /// multi-entry `input` option takes.
    ///
    /// # Example
    ///
    /// ```
    /// use pagemap_config::{BaseDir, EntryPointRegistry};
    ///
    /// let entries = EntryPointRegistry::new(BaseDir::new("/site").unwrap())
    ///     .declare("main", "index.html")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(entries.to_value()["main"], "/site/index.html");
    /// ```
    pub fn to_value(&self) -> Value {
        let map = self
            .entries
            .iter()
            .map(|(key, entry)| {
                (
                    key.clone(),
                    Value::String(entry.path.to_string_lossy().into_owned()),
                )
            })
            .collect::<serde_json::Map<_, _>>();
        Value::Object(map)
    }

    /// Where each entry's page lands in the build output.
    ///
    /// Pages keep their location relative to the base directory, so
    /// `admin/login.html` is emitted as `<out_dir>/admin/login.html`. A relative
    /// `out_dir` is taken relative to the base directory.
    pub fn output_paths(&self, out_dir: impl AsRef<Path>) -> IndexMap<String, PathBuf> {
        let out_dir = self.base_dir.resolve(out_dir);
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), resolve(&out_dir, &entry.relative)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a EntryMap {
    type Item = &'a Entry;
    type IntoIter = indexmap::map::Values<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> BaseDir {
        BaseDir::new("/project").unwrap()
    }

    #[test]
    fn resolve_joins_and_normalizes() {
        assert_eq!(
            resolve("/project", "index.html"),
            PathBuf::from("/project/index.html")
        );
        assert_eq!(
            resolve("/project", "./admin/../admin/login.html"),
            PathBuf::from("/project/admin/login.html")
        );
    }

    #[test]
    fn resolve_is_deterministic() {
        let first = resolve("/project", "admin/index.html");
        let second = resolve("/project", "admin/index.html");
        assert_eq!(first, second);
    }

    #[test]
    fn base_dir_anchors_relative_paths() {
        let base = BaseDir::new("site").unwrap();
        assert!(base.as_path().is_absolute());
        assert!(base.as_path().ends_with("site"));
    }

    #[test]
    fn base_dir_of_config_file_is_parent() {
        let base = BaseDir::of_config_file("/project/web/pagemap.toml").unwrap();
        assert_eq!(base.as_path(), Path::new("/project/web"));
    }

    #[test]
    fn base_dir_of_bare_config_file_is_cwd() {
        let base = BaseDir::of_config_file("pagemap.toml").unwrap();
        assert_eq!(base, BaseDir::current().unwrap());
    }

    #[test]
    fn build_preserves_declaration_order() {
        let entries = EntryPointRegistry::new(project())
            .declare("post", "post.html")
            .declare("blog", "blog.html")
            .declare("auth", "auth.html")
            .build()
            .unwrap();

        let keys: Vec<_> = entries.keys().collect();
        assert_eq!(keys, vec!["post", "blog", "auth"]);
    }

    #[test]
    fn build_rejects_duplicate_key() {
        let result = EntryPointRegistry::new(project())
            .declare("login", "login.html")
            .declare("login", "admin/login.html")
            .build();

        match result.unwrap_err() {
            ConfigError::DuplicateKey { key, first, second } => {
                assert_eq!(key, "login");
                assert_eq!(first, PathBuf::from("/project/login.html"));
                assert_eq!(second, PathBuf::from("/project/admin/login.html"));
            }
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn build_rejects_blank_key() {
        let result = EntryPointRegistry::new(project())
            .declare("main", "index.html")
            .declare("  ", "blog.html")
            .build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::EmptyKey { index: 1 }
        ));
    }

    #[test]
    fn build_rejects_empty_path() {
        let result = EntryPointRegistry::new(project())
            .declare("main", "")
            .build();
        assert!(matches!(result.unwrap_err(), ConfigError::EmptyPath { .. }));
    }

    #[test]
    fn build_rejects_absolute_path() {
        let result = EntryPointRegistry::new(project())
            .declare("main", "/etc/index.html")
            .build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::AbsolutePath { .. }
        ));
    }

    #[test]
    fn build_rejects_path_escaping_base_dir() {
        for path in ["../outside.html", "admin/../../outside.html"] {
            let result = EntryPointRegistry::new(project())
                .declare("main", path)
                .build();
            assert!(
                matches!(result.unwrap_err(), ConfigError::OutsideBaseDir { .. }),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn build_rejects_path_folding_to_base_dir() {
        let result = EntryPointRegistry::new(project())
            .declare("main", "admin/..")
            .build();
        assert!(matches!(result.unwrap_err(), ConfigError::EmptyPath { .. }));
    }

    #[test]
    fn build_normalizes_relative_paths() {
        let entries = EntryPointRegistry::new(project())
            .declare("main", "./index.html")
            .declare("login", "admin/../login.html")
            .declare("post", "blog//post.html")
            .build()
            .unwrap();

        for entry in &entries {
            assert!(
                entry.path.ends_with(&entry.relative),
                "{} does not end with {}",
                entry.path.display(),
                entry.relative.display()
            );
        }
        assert_eq!(entries.get("login"), Some(Path::new("/project/login.html")));

        let plan = entries.output_paths("dist");
        assert_eq!(plan["main"], PathBuf::from("/project/dist/index.html"));
    }

    #[test]
    fn empty_registry_builds_empty_map() {
        let entries = EntryPointRegistry::new(project()).build().unwrap();
        assert!(entries.is_empty());
        assert_eq!(entries.to_value(), serde_json::json!({}));
    }

    #[test]
    fn output_paths_mirror_source_layout() {
        let entries = EntryPointRegistry::new(project())
            .declare("main", "index.html")
            .declare("admin", "admin/index.html")
            .build()
            .unwrap();

        let plan = entries.output_paths("dist");
        assert_eq!(plan["main"], PathBuf::from("/project/dist/index.html"));
        assert_eq!(plan["admin"], PathBuf::from("/project/dist/admin/index.html"));

        let plan = entries.output_paths("/srv/www");
        assert_eq!(plan["admin"], PathBuf::from("/srv/www/admin/index.html"));
    }
}
