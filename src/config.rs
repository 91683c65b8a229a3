use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AutoVersionError, Result};

/// Environment variable that overrides the version file location.
pub const VERSION_FILE_ENV: &str = "VERSION_FILE";

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "autoversion.toml";

/// Represents the complete configuration for auto-version.
///
/// Every section is optional; missing keys fall back to the defaults below.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub version: VersionFileConfig,

    #[serde(default)]
    pub markers: MarkersConfig,

    #[serde(default)]
    pub setup: SetupConfig,
}

fn default_version_file() -> PathBuf {
    PathBuf::from("__version__.py")
}

/// Location of the version file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionFileConfig {
    #[serde(default = "default_version_file")]
    pub file: PathBuf,
}

impl Default for VersionFileConfig {
    fn default() -> Self {
        VersionFileConfig {
            file: default_version_file(),
        }
    }
}

/// Returns the default skip-guard tokens.
///
/// The first one is the subject the bundled workflow uses for its own commits.
fn default_skip_markers() -> Vec<String> {
    vec![
        "chore: auto-increment version".to_string(),
        "[skip version]".to_string(),
    ]
}

/// Tokens that make a commit exempt from version bumping.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MarkersConfig {
    #[serde(default = "default_skip_markers")]
    pub skip: Vec<String>,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        MarkersConfig {
            skip: default_skip_markers(),
        }
    }
}

fn default_workflow_path() -> PathBuf {
    PathBuf::from(".github/workflows/auto-version.yml")
}

/// Configuration for the `setup` command.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SetupConfig {
    #[serde(default = "default_workflow_path")]
    pub workflow_path: PathBuf,
}

impl Default for SetupConfig {
    fn default() -> Self {
        SetupConfig {
            workflow_path: default_workflow_path(),
        }
    }
}

impl Config {
    /// Resolves the version file path.
    ///
    /// Precedence: explicit flag, then the `VERSION_FILE` value, then the
    /// configured file. Empty overrides are ignored.
    pub fn version_file(&self, flag: Option<&Path>, env_override: Option<&str>) -> PathBuf {
        if let Some(path) = flag.filter(|p| !p.as_os_str().is_empty()) {
            return path.to_path_buf();
        }
        if let Some(value) = env_override.map(str::trim).filter(|v| !v.is_empty()) {
            return PathBuf::from(value);
        }
        self.version.file.clone()
    }

    /// Same as [`Config::version_file`], reading the override from the process
    /// environment.
    pub fn version_file_from_env(&self, flag: Option<&Path>) -> PathBuf {
        let env_value = std::env::var(VERSION_FILE_ENV).ok();
        self.version_file(flag, env_value.as_deref())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autoversion.toml` in current directory
/// 3. `.autoversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            tracing::debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        AutoVersionError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| AutoVersionError::config(format!("{}: {}", path.display(), e)))
}

/// Parses configuration from a TOML string.
pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}
