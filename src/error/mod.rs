//! Error types and handling for better11
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every variant is fatal to the operation that produced it. Nothing here is
//! retried internally; re-running `install` is safe because of the
//! already-installed short-circuit.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for better11 operations
#[derive(Error, Diagnostic, Debug)]
pub enum Better11Error {
    // Catalog errors
    #[error("Catalog not found: {path}")]
    #[diagnostic(
        code(better11::catalog::not_found),
        help("Pass --catalog <path> or set BETTER11_CATALOG")
    )]
    CatalogNotFound { path: String },

    #[error("Failed to parse catalog {path}: {reason}")]
    #[diagnostic(code(better11::catalog::parse_error))]
    CatalogParseError { path: String, reason: String },

    #[error("Application '{app_id}' not found in catalog")]
    #[diagnostic(
        code(better11::catalog::app_not_found),
        help("Run 'better11 list' to see available applications")
    )]
    AppNotFound { app_id: String },

    // Dependency errors
    #[error("Dependency cycle detected: {chain}")]
    #[diagnostic(
        code(better11::deps::cycle),
        help("Remove the circular dependency from the catalog")
    )]
    DependencyCycle { chain: String },

    #[error("Application '{app_id}' depends on '{dependency}', which is not in the catalog")]
    #[diagnostic(code(better11::deps::missing))]
    MissingDependency { app_id: String, dependency: String },

    #[error("Dependency '{dependency}' of '{app_id}' failed to install (exit code {exit_code})")]
    #[diagnostic(
        code(better11::deps::install_failed),
        help("Fix the dependency and re-run the install; completed steps are skipped")
    )]
    DependencyInstallFailed {
        app_id: String,
        dependency: String,
        exit_code: i32,
    },

    // Artifact errors
    #[error("Artifact for '{app_id}' not found: {uri}")]
    #[diagnostic(code(better11::artifact::not_found))]
    ArtifactNotFound { app_id: String, uri: String },

    #[error("Failed to transfer artifact for '{app_id}' from {uri}: {reason}")]
    #[diagnostic(code(better11::artifact::transfer))]
    TransferError {
        app_id: String,
        uri: String,
        reason: String,
    },

    #[error("SHA-256 verification failed for '{app_id}' (expected {expected}, got {actual})")]
    #[diagnostic(
        code(better11::artifact::verification_failed),
        help("The artifact does not match the catalog digest and was discarded")
    )]
    VerificationFailed {
        app_id: String,
        expected: String,
        actual: String,
    },

    // Installer errors
    #[error("Cannot {operation} '{app_id}': {reason}")]
    #[diagnostic(code(better11::installer::unsupported))]
    UnsupportedOperation {
        app_id: String,
        operation: String,
        reason: String,
    },

    #[error("Application '{app_id}' is not installed")]
    #[diagnostic(code(better11::installer::not_installed))]
    AppNotInstalled { app_id: String },

    #[error("Cannot uninstall '{app_id}': required by installed {}", .dependents.join(", "))]
    #[diagnostic(
        code(better11::installer::blocked_by_dependents),
        help("Uninstall the dependent applications first")
    )]
    BlockedByDependents {
        app_id: String,
        dependents: Vec<String>,
    },

    #[error("Operation cancelled")]
    #[diagnostic(code(better11::cancelled))]
    Cancelled,

    // State errors
    #[error("Failed to read state file {path}: {reason}")]
    #[diagnostic(code(better11::state::read_failed))]
    StateReadFailed { path: String, reason: String },

    #[error("Failed to write state file {path}: {reason}")]
    #[diagnostic(code(better11::state::write_failed))]
    StateWriteFailed { path: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(better11::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(better11::fs::io_error))]
    IoError { message: String },
}

impl Better11Error {
    /// Creates an unsupported operation error
    pub fn unsupported(
        app_id: impl Into<String>,
        operation: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Better11Error::UnsupportedOperation {
            app_id: app_id.into(),
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Creates a transfer error
    pub fn transfer(
        app_id: impl Into<String>,
        uri: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Better11Error::TransferError {
            app_id: app_id.into(),
            uri: uri.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for Better11Error {
    fn from(err: std::io::Error) -> Self {
        Better11Error::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, Better11Error>;
