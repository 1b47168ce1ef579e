//! Configuration error types

use std::path::PathBuf;

/// Errors surfaced while loading and validating a build configuration.
///
/// All variants are fatal and detected at load time: the descriptor is
/// all-or-nothing, and every message names the offending field or path.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid TOML, or a required field is missing or of
    /// the wrong type.
    #[error("malformed config: {0}")]
    MalformedConfig(String),

    /// `root` does not name an existing directory.
    #[error(
        "source root is not an existing directory: {} (resolved to {})",
        path.display(),
        resolved.display()
    )]
    InvalidPath {
        /// The source root as configured
        path: PathBuf,
        /// Where it was looked up on disk
        resolved: PathBuf,
    },

    /// `server.port` is outside the valid TCP port range.
    #[error("server port must be between 1 and 65535, got {0}")]
    InvalidPort(i64),

    /// `root` and `build.out_dir` resolve to the same directory, which
    /// would let the build overwrite its own inputs.
    #[error("source root and output root are the same directory: {}", .0.display())]
    ConflictingRoots(PathBuf),
}
