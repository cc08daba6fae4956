//! Tests for filesystem validation of resolved entries.

use pagemap_config::{
    BaseDir, ConfigError, ConfigValidator, EntryPointRegistry, FsValidator, SITE_ENTRIES,
    missing_entries, site_registry, validate_fs,
};
use std::fs;
use tempfile::TempDir;

fn write_site(dir: &TempDir) {
    fs::create_dir_all(dir.path().join("admin")).expect("create admin dir");
    for (_, relative) in SITE_ENTRIES {
        fs::write(dir.path().join(relative), "<!doctype html>").expect("write page");
    }
}

#[test]
fn validate_succeeds_when_all_pages_exist() {
    let dir = TempDir::new().expect("tempdir");
    write_site(&dir);

    let registry = site_registry(BaseDir::new(dir.path()).expect("base"));
    let entries = FsValidator.validate(&registry).expect("all pages exist");
    assert_eq!(entries.len(), 14);
}

#[test]
fn validate_catches_missing_page() {
    let dir = TempDir::new().expect("tempdir");
    write_site(&dir);
    fs::remove_file(dir.path().join("admin/login.html")).expect("remove page");

    let registry = site_registry(BaseDir::new(dir.path()).expect("base"));
    match validate_fs(&registry).unwrap_err() {
        ConfigError::EntryNotFound { key, path } => {
            assert_eq!(key, "adminLogin");
            assert!(path.ends_with("admin/login.html"));
        }
        other => panic!("expected EntryNotFound, got {other:?}"),
    }
}

#[test]
fn validate_rejects_directory_entry() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir(dir.path().join("blog.html")).expect("create dir");

    let registry =
        EntryPointRegistry::new(BaseDir::new(dir.path()).expect("base")).declare("blog", "blog.html");
    assert!(matches!(
        validate_fs(&registry).unwrap_err(),
        ConfigError::EntryNotAFile { .. }
    ));
}

#[test]
fn validate_reports_duplicates_before_touching_disk() {
    let dir = TempDir::new().expect("tempdir");

    let registry = EntryPointRegistry::new(BaseDir::new(dir.path()).expect("base"))
        .declare("post", "post.html")
        .declare("post", "posts.html");
    assert!(matches!(
        validate_fs(&registry).unwrap_err(),
        ConfigError::DuplicateKey { .. }
    ));
}

#[test]
fn missing_entries_lists_every_gap() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("index.html"), "").expect("write index");

    let entries = site_registry(BaseDir::new(dir.path()).expect("base"))
        .build()
        .expect("site builds");
    let missing = missing_entries(&entries);
    assert_eq!(missing.len(), 13);
    assert!(missing.iter().all(|err| err.key() != Some("main")));
}
