//! Reverse dependency lookups
//!
//! The catalog stores forward edges (`app -> dependencies`). Uninstall needs
//! the reverse direction: which apps would break if `app_id` went away.

use crate::catalog::{AppCatalog, AppMetadata};

/// Every catalog entry that lists `app_id` as a dependency, in catalog order
///
/// Only direct dependents are returned; whether they are installed is the
/// caller's concern.
pub fn dependents_of<'a>(catalog: &'a AppCatalog, app_id: &str) -> Vec<&'a AppMetadata> {
    catalog
        .apps()
        .iter()
        .filter(|app| app.app_id != app_id && app.depends_on(app_id))
        .collect()
}
