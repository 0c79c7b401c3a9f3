//! SHA-256 hashing utilities for artifact integrity

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::catalog::AppMetadata;
use crate::error::{Better11Error, Result};

/// Calculate the lowercase hex SHA-256 digest of a file
pub fn sha256_file(path: &Path) -> Result<String> {
    let read_error = |e: std::io::Error| Better11Error::IoError {
        message: format!("Failed to read {}: {e}", path.display()),
    };

    let file = File::open(path).map_err(read_error)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(read_error)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compare two hex digests, ignoring case and surrounding whitespace
pub fn digests_match(expected: &str, actual: &str) -> bool {
    expected.trim().eq_ignore_ascii_case(actual.trim())
}

/// Outcome of hashing one artifact against its catalog digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestCheck {
    /// Lowercase hex digest of the file as read
    pub actual: String,
    pub matched: bool,
}

/// Checks downloaded artifacts against their catalog digest
///
/// A mismatch is a `false` result, not an error; the orchestrator decides what
/// a failed verification means.
#[derive(Debug, Default, Clone, Copy)]
pub struct Verifier;

impl Verifier {
    pub fn new() -> Self {
        Self
    }

    /// Hash the file at `path` once and compare it with `app.sha256`
    ///
    /// # Errors
    ///
    /// Only I/O failures while reading the file.
    pub fn check(&self, app: &AppMetadata, path: &Path) -> Result<DigestCheck> {
        let actual = sha256_file(path)?;
        let matched = digests_match(&app.sha256, &actual);
        if matched {
            tracing::debug!(app_id = %app.app_id, digest = %actual, "artifact verified");
        } else {
            tracing::debug!(
                app_id = %app.app_id,
                expected = %app.sha256,
                actual = %actual,
                "artifact digest mismatch"
            );
        }
        Ok(DigestCheck { actual, matched })
    }

    /// Whether the file at `path` hashes to `app.sha256`
    pub fn verify(&self, app: &AppMetadata, path: &Path) -> Result<bool> {
        Ok(self.check(app, path)?.matched)
    }
}
