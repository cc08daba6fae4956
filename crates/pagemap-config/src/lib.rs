pub mod discovery;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod site;
pub mod validation;

// Re-export main types
pub use error::*;
pub use manifest::{MANIFEST_FILE, Manifest, ManifestFile, Settings};
pub use registry::{BaseDir, Entry, EntryDecl, EntryMap, EntryPointRegistry, resolve};
pub use site::{SITE_ENTRIES, site_decls, site_registry};

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, PACKAGE_JSON_FIELD, load_manifest};
pub use validation::{
    ConfigValidator, FsValidator, SchemaValidator, missing_entries, validate_fs, validate_schema,
};
