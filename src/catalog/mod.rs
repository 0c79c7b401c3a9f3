//! Application catalog
//!
//! The catalog is the declarative list of installable applications. It is
//! parsed once by [`CatalogLoader`] and shared read-only as an
//! `Arc<AppCatalog>`.
//!
//! ```text
//! catalog.json
//!     │
//!     ├── Applications[]      ← AppMetadata, in declared order
//!     └── installers/*.msi    ← relative Uri values resolve here
//! ```

mod loader;
mod metadata;
pub mod serialization;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use loader::CatalogLoader;
pub use metadata::{AppMetadata, InstallerType};

use crate::error::{Better11Error, Result};

/// Immutable, ordered set of catalog entries
#[derive(Debug, Clone)]
pub struct AppCatalog {
    apps: Vec<AppMetadata>,
    index: HashMap<String, usize>,
    base_dir: PathBuf,
}

impl AppCatalog {
    /// Build a catalog from entries, validating ids and digests
    ///
    /// `base_dir` is the directory relative artifact URIs resolve against.
    pub fn new(apps: Vec<AppMetadata>, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let source = base_dir.clone();
        Self::build(apps, base_dir, &source)
    }

    /// Catalog with no entries
    pub fn empty() -> Self {
        Self {
            apps: Vec::new(),
            index: HashMap::new(),
            base_dir: PathBuf::from("."),
        }
    }

    pub(crate) fn build(
        mut apps: Vec<AppMetadata>,
        base_dir: PathBuf,
        source: &Path,
    ) -> Result<Self> {
        let parse_error = |reason: String| Better11Error::CatalogParseError {
            path: source.display().to_string(),
            reason,
        };

        let mut index = HashMap::with_capacity(apps.len());
        for (position, app) in apps.iter_mut().enumerate() {
            app.normalize().map_err(parse_error)?;
            if index.insert(app.app_id.clone(), position).is_some() {
                return Err(parse_error(format!("duplicate AppId '{}'", app.app_id)));
            }
        }

        Ok(Self {
            apps,
            index,
            base_dir,
        })
    }

    /// Look up an entry by id
    pub fn get(&self, app_id: &str) -> Option<&AppMetadata> {
        self.index.get(app_id).map(|&i| &self.apps[i])
    }

    /// Look up an entry by id, failing with `AppNotFound`
    pub fn require(&self, app_id: &str) -> Result<&AppMetadata> {
        self.get(app_id).ok_or_else(|| Better11Error::AppNotFound {
            app_id: app_id.to_string(),
        })
    }

    pub fn contains(&self, app_id: &str) -> bool {
        self.index.contains_key(app_id)
    }

    /// All entries in declared order
    pub fn apps(&self) -> &[AppMetadata] {
        &self.apps
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Directory the catalog document was loaded from
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
