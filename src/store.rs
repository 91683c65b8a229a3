//! Reading and writing the version file.
//!
//! The file holds a single statement of the form
//! `__version__ = "MAJOR.MINOR.PATCH"`. A missing file stands for `0.0.0`;
//! a file whose content does not match is rejected rather than guessed at.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::domain::Version;
use crate::error::{AutoVersionError, Result};

const VERSION_PATTERN: &str = r#"__version__\s*=\s*["']([0-9]+\.[0-9]+\.[0-9]+)["']"#;

/// Result of reading the version file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedVersion {
    pub version: Version,
    /// False when the file was absent and `version` is the implicit default
    pub exists: bool,
}

/// Version file at a fixed path
#[derive(Debug, Clone)]
pub struct VersionStore {
    path: PathBuf,
}

impl VersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VersionStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current version.
    ///
    /// # Returns
    /// * `Ok` with `exists == false` and `0.0.0` - the file is absent
    /// * `Err(MalformedVersion)` - the file exists but holds no valid version,
    ///   including content that is not UTF-8
    /// * `Err(Io)` - any other read failure
    pub fn load(&self) -> Result<LoadedVersion> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "version file absent, using 0.0.0");
                return Ok(LoadedVersion {
                    version: Version::initial(),
                    exists: false,
                });
            }
            Err(e) => return Err(e.into()),
        };

        let content = String::from_utf8(bytes).map_err(|e| {
            AutoVersionError::malformed(&self.path, &String::from_utf8_lossy(e.as_bytes()))
        })?;
        let version = parse_version_file(&content)
            .ok_or_else(|| AutoVersionError::malformed(&self.path, &content))?;
        tracing::debug!(path = %self.path.display(), %version, "loaded version");

        Ok(LoadedVersion {
            version,
            exists: true,
        })
    }

    /// Replaces the whole file with the canonical line for `version`.
    ///
    /// Missing parent directories are created.
    pub fn save(&self, version: Version) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, render_version_file(version))?;
        tracing::info!(path = %self.path.display(), %version, "wrote version file");
        Ok(())
    }

    /// Writes `version` only when the file does not exist yet.
    ///
    /// Returns whether the file was created.
    pub fn create_if_missing(&self, version: Version) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(version)?;
        Ok(true)
    }
}

/// Extracts the version from version file content
pub fn parse_version_file(content: &str) -> Option<Version> {
    let re = Regex::new(VERSION_PATTERN).ok()?;
    let captures = re.captures(content)?;
    Version::parse(captures.get(1)?.as_str())
}

/// Canonical content of a version file
pub fn render_version_file(version: Version) -> String {
    format!("__version__ = \"{}\"\n", version)
}
