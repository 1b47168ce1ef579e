//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use super::{BuildConfig, ConfigDoc, ConfigError};

/// Default config file name, looked up in the project directory
pub const CONFIG_FILE_NAME: &str = "build.toml";

/// Default configuration content written by `buildcfg init`
pub const DEFAULT_CONFIG: &str = r#"# Build configuration
# ===================
#
# Read once at startup by the build runtime. Paths are relative to the
# directory containing this file.

# Directory containing the project's pre-build source files.
# Must exist before the first build.
root = "src"

[build]
# Directory compiled assets are written to.
# Created on the first build if missing. Must not equal `root`.
out_dir = "dist"

[server]
# TCP port for the local development server.
# Ports above 1024 avoid privileged-port restrictions.
port = 8080
"#;

impl BuildConfig {
    /// Default config file path for a project directory
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Load and validate `build.toml` from a project directory.
    ///
    /// A single synchronous read with no filesystem mutation; call it once
    /// on the main thread before any worker is spawned.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        Self::from_file(&Self::config_path(dir))
    }

    /// Load and validate a config file at an explicit path.
    ///
    /// Relative paths inside the file are resolved against the file's
    /// parent directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Self::from_toml_str(&content, base_dir)
    }

    /// Parse and validate config content from an in-memory literal.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let doc: ConfigDoc =
            toml::from_str(content).map_err(|e| ConfigError::MalformedConfig(e.to_string()))?;
        Self::from_doc(doc, base_dir)
    }
}
