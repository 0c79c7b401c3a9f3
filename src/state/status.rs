//! Persisted per-application install status

use std::path::PathBuf;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// What the machine looks like for one application
///
/// Records are overwritten on every install attempt and flipped to
/// `installed = false` on uninstall; they are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStatus {
    #[serde(alias = "AppId")]
    pub app_id: String,

    /// Version actually installed (or attempted)
    #[serde(alias = "Version")]
    pub version: String,

    #[serde(alias = "Installed")]
    pub installed: bool,

    /// Cached artifact the installer ran from; MSI removal needs it
    #[serde(
        alias = "InstallerPath",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub installer_path: Option<PathBuf>,

    /// Declared dependencies that were installed when this record was written
    #[serde(alias = "DependenciesInstalled", default)]
    pub dependencies_installed: Vec<String>,

    #[serde(alias = "InstallDate")]
    pub install_date: DateTime<Utc>,
}

impl AppStatus {
    /// New record stamped with the current time (whole seconds)
    pub fn new(app_id: impl Into<String>, version: impl Into<String>, installed: bool) -> Self {
        Self {
            app_id: app_id.into(),
            version: version.into(),
            installed,
            installer_path: None,
            dependencies_installed: Vec::new(),
            install_date: Utc::now().trunc_subsecs(0),
        }
    }

    pub fn with_installer_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.installer_path = Some(path.into());
        self
    }

    pub fn with_dependencies_installed(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies_installed = dependencies;
        self
    }

    /// Installed and recorded at `version`
    pub fn is_current(&self, version: &str) -> bool {
        self.installed && self.version == version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_current() {
        let status = AppStatus::new("demo-app", "1.0", true);
        assert!(status.is_current("1.0"));
        assert!(!status.is_current("1.1"));

        let removed = AppStatus::new("demo-app", "1.0", false);
        assert!(!removed.is_current("1.0"));
    }

    #[test]
    fn test_serializes_snake_case() {
        let status = AppStatus::new("demo-app", "1.0", true).with_installer_path("/cache/demo.msi");
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["app_id"], "demo-app");
        assert_eq!(json["installed"], true);
        assert_eq!(json["installer_path"], "/cache/demo.msi");
        assert!(json["install_date"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_deserializes_pascal_case_documents() {
        let json = r#"{
            "AppId": "demo-app",
            "Version": "1.0",
            "Installed": true,
            "InstallerPath": "C:\\cache\\demo.msi",
            "DependenciesInstalled": ["runtime"],
            "InstallDate": "2024-05-01T10:00:00Z"
        }"#;
        let status: AppStatus = serde_json::from_str(json).unwrap();

        assert_eq!(status.app_id, "demo-app");
        assert_eq!(status.dependencies_installed, vec!["runtime"]);
        assert_eq!(
            status.installer_path,
            Some(PathBuf::from("C:\\cache\\demo.msi"))
        );
        assert_eq!(status.install_date.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"app_id":"a","version":"1","installed":false,"install_date":"2024-05-01T10:00:00Z"}"#;
        let status: AppStatus = serde_json::from_str(json).unwrap();
        assert!(status.installer_path.is_none());
        assert!(status.dependencies_installed.is_empty());
    }
}
