//! `AppMetadata` and `InstallerType` for catalog entries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Kind of installer payload, which decides the command line used to run it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallerType {
    /// Windows Installer package, driven through `msiexec`
    Msi,
    /// Self-contained executable installer
    Exe,
    /// MSIX/APPX package, added and removed by package identity
    Appx,
}

impl InstallerType {
    /// File extension used when an artifact URI has no usable file name
    pub fn extension(self) -> &'static str {
        match self {
            InstallerType::Msi => "msi",
            InstallerType::Exe => "exe",
            InstallerType::Appx => "appx",
        }
    }
}

impl fmt::Display for InstallerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstallerType::Msi => "MSI",
            InstallerType::Exe => "EXE",
            InstallerType::Appx => "APPX",
        };
        f.write_str(name)
    }
}

impl FromStr for InstallerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "msi" => Ok(InstallerType::Msi),
            "exe" => Ok(InstallerType::Exe),
            "appx" | "msix" => Ok(InstallerType::Appx),
            other => Err(format!(
                "unknown installer type '{other}' (expected MSI, EXE or APPX)"
            )),
        }
    }
}

impl<'de> Deserialize<'de> for InstallerType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One installable application as declared in the catalog
///
/// Field names here are the normalized (lowercase, separator-free) keys
/// produced by [`super::serialization`]; deserialize through
/// [`super::serialization::parse_catalog`] rather than directly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppMetadata {
    /// Unique key within the catalog
    #[serde(rename = "appid")]
    pub app_id: String,

    /// Display name (defaults to the id)
    #[serde(default)]
    pub name: String,

    /// Opaque version string, only ever compared for equality
    pub version: String,

    #[serde(rename = "installertype")]
    pub installer_type: InstallerType,

    /// Absolute URL or path relative to the catalog file
    pub uri: String,

    /// Expected SHA-256 digest of the artifact (hex)
    pub sha256: String,

    /// Ids that must be installed first, in declared order
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Arguments appended to EXE installer invocations
    #[serde(rename = "silentargs", default)]
    pub silent_args: Vec<String>,

    /// Explicit uninstall command line, takes precedence over the type default
    #[serde(rename = "uninstallcommand", default)]
    pub uninstall_command: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// APPX package identity used for removal (defaults to the id)
    #[serde(rename = "packagename", default)]
    pub package_name: Option<String>,
}

impl AppMetadata {
    /// Create an entry with no dependencies, arguments or overrides
    pub fn new(
        app_id: impl Into<String>,
        version: impl Into<String>,
        installer_type: InstallerType,
        uri: impl Into<String>,
        sha256: impl Into<String>,
    ) -> Self {
        let app_id = app_id.into();
        Self {
            name: app_id.clone(),
            app_id,
            version: version.into(),
            installer_type,
            uri: uri.into(),
            sha256: sha256.into(),
            dependencies: Vec::new(),
            silent_args: Vec::new(),
            uninstall_command: None,
            description: None,
            package_name: None,
        }
    }

    #[must_use]
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_silent_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.silent_args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_uninstall_command(mut self, command: impl Into<String>) -> Self {
        self.uninstall_command = Some(command.into());
        self
    }

    /// Package identity for APPX removal
    pub fn package_identity(&self) -> &str {
        self.package_name.as_deref().unwrap_or(&self.app_id)
    }

    /// Whether this entry lists `app_id` among its dependencies
    pub fn depends_on(&self, app_id: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == app_id)
    }

    /// Check the per-entry invariants and tidy up optional fields
    pub(crate) fn normalize(&mut self) -> Result<(), String> {
        if self.app_id.trim().is_empty() {
            return Err("application with empty AppId".to_string());
        }
        if self.version.trim().is_empty() {
            return Err(format!("application '{}' has an empty Version", self.app_id));
        }
        if self.sha256.len() != 64 || !self.sha256.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!(
                "application '{}' has an invalid Sha256 (expected 64 hex characters)",
                self.app_id
            ));
        }
        if self.name.trim().is_empty() {
            self.name.clone_from(&self.app_id);
        }
        if self
            .uninstall_command
            .as_deref()
            .is_some_and(|cmd| cmd.trim().is_empty())
        {
            self.uninstall_command = None;
        }

        // Dependencies are an ordered set: keep the first occurrence only
        let mut seen = std::collections::HashSet::new();
        self.dependencies.retain(|dep| seen.insert(dep.clone()));

        Ok(())
    }
}
