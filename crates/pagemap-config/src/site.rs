//! The site's page table.

use crate::registry::{BaseDir, EntryDecl, EntryPointRegistry};

/// Every page of the site as `(key, path relative to the site root)`.
pub const SITE_ENTRIES: &[(&str, &str)] = &[
    ("main", "index.html"),
    ("account", "account.html"),
    ("auth", "auth.html"),
    ("blog", "blog.html"),
    ("games", "games.html"),
    ("invite", "invite.html"),
    ("login", "login.html"),
    ("orderDetails", "order-details.html"),
    ("paymentGateway", "payment-gateway.html"),
    ("paymentPage", "payment-page.html"),
    ("post", "post.html"),
    ("topup", "topup-page.html"),
    // Admin folder
    ("admin", "admin/index.html"),
    ("adminLogin", "admin/login.html"),
];

/// Declarations for [`SITE_ENTRIES`].
pub fn site_decls() -> Vec<EntryDecl> {
    SITE_ENTRIES
        .iter()
        .map(|&(key, path)| EntryDecl::new(key, path))
        .collect()
}

/// Registry of the site's pages rooted at `base_dir`.
///
/// # Example
///
/// ```
/// use pagemap_config::{site_registry, BaseDir};
///
/// let entries = site_registry(BaseDir::new("/project").unwrap()).build().unwrap();
/// assert_eq!(entries.len(), 14);
/// assert_eq!(
///     entries.get("orderDetails").unwrap(),
///     std::path::Path::new("/project/order-details.html"),
/// );
/// ```
pub fn site_registry(base_dir: BaseDir) -> EntryPointRegistry {
    EntryPointRegistry::from_decls(base_dir, site_decls())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn site_keys_are_unique() {
        let keys: HashSet<_> = SITE_ENTRIES.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys.len(), SITE_ENTRIES.len());
    }

    #[test]
    fn site_registry_builds_fourteen_entries() {
        let entries = site_registry(BaseDir::new("/project").unwrap())
            .build()
            .unwrap();
        assert_eq!(entries.len(), 14);
        assert_eq!(entries.keys().next(), Some("main"));
        assert_eq!(entries.keys().last(), Some("adminLogin"));
    }

    #[test]
    fn site_paths_end_with_declared_path() {
        let entries = site_registry(BaseDir::new("/project").unwrap())
            .build()
            .unwrap();
        for (key, relative) in SITE_ENTRIES {
            let path = entries.get(key).unwrap();
            assert!(path.is_absolute());
            assert!(path.ends_with(relative), "{key} -> {}", path.display());
        }
    }
}
