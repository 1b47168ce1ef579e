//! Build configuration loading and validation
//!
//! The configuration is a small declarative record read once at startup: a
//! source root directory, an output directory for compiled assets, and a
//! development server port. Parsing and validation are split in two layers:
//! [`ConfigDoc`] mirrors the file as written (every field optional, port
//! widened to `i64`), and [`BuildConfig`] is the validated, immutable
//! descriptor the rest of the tool reads from.

mod error;
mod io;

pub use error::ConfigError;
pub use io::{CONFIG_FILE_NAME, DEFAULT_CONFIG};

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Raw serde mirror of the config file.
///
/// Every field is optional so absence is reported as a
/// [`ConfigError::MalformedConfig`] naming the field rather than a bare
/// deserialization error. `server.port` is deserialized as `i64` so
/// out-of-range values (e.g. 70000) survive parsing and are rejected as
/// [`ConfigError::InvalidPort`] instead of a type mismatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigDoc {
    /// Directory containing the pre-build source files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Build output settings
    #[serde(default)]
    pub build: BuildSection,

    /// Dev server settings
    #[serde(default)]
    pub server: ServerSection,
}

/// The `[build]` table of the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildSection {
    /// Directory compiled assets are written to
    #[serde(alias = "outDir", skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
}

/// The `[server]` table of the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    /// TCP port the dev server listens on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
}

/// Validated build configuration descriptor.
///
/// Immutable for the lifetime of a build invocation: constructed once via
/// [`BuildConfig::load`] (or [`BuildConfig::from_doc`]) and only read after
/// that. The plain accessors return the configured values verbatim; the
/// `resolved_*` accessors join relative paths against the directory the
/// config was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    source_root: PathBuf,
    output_root: PathBuf,
    server_port: u16,
    base_dir: PathBuf,
}

impl BuildConfig {
    /// Validate a parsed document into a descriptor.
    ///
    /// `base_dir` is the directory relative paths in the document are
    /// resolved against (the config file's parent directory).
    pub fn from_doc(doc: ConfigDoc, base_dir: &Path) -> Result<Self, ConfigError> {
        let root = doc
            .root
            .ok_or_else(|| ConfigError::MalformedConfig("missing required field: root".into()))?;
        let out_dir = doc.build.out_dir.ok_or_else(|| {
            ConfigError::MalformedConfig("missing required field: build.out_dir".into())
        })?;
        let port = doc.server.port.ok_or_else(|| {
            ConfigError::MalformedConfig("missing required field: server.port".into())
        })?;

        if !(1..=65535).contains(&port) {
            return Err(ConfigError::InvalidPort(port));
        }

        let source_root = PathBuf::from(root);
        let output_root = PathBuf::from(out_dir);

        let resolved_source = resolve(base_dir, &source_root);
        if !resolved_source.is_dir() {
            return Err(ConfigError::InvalidPath {
                path: source_root,
                resolved: resolved_source,
            });
        }

        // The output root need not exist yet, but it must not collide with
        // the source root or the build would overwrite its own inputs.
        let resolved_output = resolve(base_dir, &output_root);
        if resolved_source == resolved_output {
            return Err(ConfigError::ConflictingRoots(resolved_source));
        }

        Ok(Self {
            source_root,
            output_root,
            server_port: port as u16,
            base_dir: base_dir.to_path_buf(),
        })
    }

    /// Source root exactly as configured
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Output root exactly as configured
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// TCP port the dev server listens on
    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    /// Directory relative paths are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Source root resolved against the config directory
    pub fn resolved_source_root(&self) -> PathBuf {
        resolve(&self.base_dir, &self.source_root)
    }

    /// Output root resolved against the config directory.
    ///
    /// The directory need not exist; the build runtime creates it on the
    /// first emit.
    pub fn resolved_output_root(&self) -> PathBuf {
        resolve(&self.base_dir, &self.output_root)
    }

    /// Re-serialize the descriptor as a config document
    pub fn to_doc(&self) -> ConfigDoc {
        ConfigDoc {
            root: Some(self.source_root.display().to_string()),
            build: BuildSection {
                out_dir: Some(self.output_root.display().to_string()),
            },
            server: ServerSection {
                port: Some(i64::from(self.server_port)),
            },
        }
    }
}

/// Join `path` onto `base` (absolute paths pass through) and normalize
/// `.`/`..` components lexically.
///
/// Lexical on purpose: the output root may not exist yet, so
/// `canonicalize` is not an option here.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                let at_root = matches!(
                    out.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                );
                if last_is_normal {
                    out.pop();
                } else if !at_root {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(root: Option<&str>, out_dir: Option<&str>, port: Option<i64>) -> ConfigDoc {
        ConfigDoc {
            root: root.map(String::from),
            build: BuildSection {
                out_dir: out_dir.map(String::from),
            },
            server: ServerSection { port },
        }
    }

    #[test]
    fn test_missing_root_field() {
        let dir = tempfile::tempdir().unwrap();
        let err = BuildConfig::from_doc(doc(None, Some("dist"), Some(8080)), dir.path())
            .unwrap_err();
        match err {
            ConfigError::MalformedConfig(msg) => assert!(msg.contains("root")),
            other => panic!("expected MalformedConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_out_dir_field() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            BuildConfig::from_doc(doc(Some("."), None, Some(8080)), dir.path()).unwrap_err();
        match err {
            ConfigError::MalformedConfig(msg) => assert!(msg.contains("build.out_dir")),
            other => panic!("expected MalformedConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_port_field() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            BuildConfig::from_doc(doc(Some("."), Some("dist"), None), dir.path()).unwrap_err();
        match err {
            ConfigError::MalformedConfig(msg) => assert!(msg.contains("server.port")),
            other => panic!("expected MalformedConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_port_zero_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            BuildConfig::from_doc(doc(Some("."), Some("dist"), Some(0)), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(0)));
    }

    #[test]
    fn test_port_above_range_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = BuildConfig::from_doc(doc(Some("."), Some("dist"), Some(70000)), dir.path())
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(70000)));
    }

    #[test]
    fn test_nonexistent_source_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = BuildConfig::from_doc(
            doc(Some("/does/not/exist"), Some("dist"), Some(8080)),
            dir.path(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPath { .. }));
    }

    #[test]
    fn test_invalid_path_message_names_lookup_location() {
        let dir = tempfile::tempdir().unwrap();
        let err = BuildConfig::from_doc(doc(Some("missing_dir"), Some("dist"), Some(8080)), dir.path())
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("missing_dir"));
        assert!(message.contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_colliding_roots() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();

        let err = BuildConfig::from_doc(doc(Some("src"), Some("./src"), Some(8080)), dir.path())
            .unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingRoots(_)));
    }

    #[test]
    fn test_port_wrong_type_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let content = r#"
root = "."

[build]
out_dir = "dist"

[server]
port = "eight"
"#;
        let err = BuildConfig::from_toml_str(content, dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedConfig(_)));
    }

    #[test]
    fn test_out_dir_alias_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let content = r#"
root = "."

[build]
outDir = "dist"

[server]
port = 8080
"#;
        let config = BuildConfig::from_toml_str(content, dir.path()).unwrap();
        assert_eq!(config.output_root(), Path::new("dist"));
    }

    #[test]
    fn test_resolve_normalizes_parent_components() {
        assert_eq!(
            resolve(Path::new("/proj/style"), Path::new("../assets")),
            PathBuf::from("/proj/assets")
        );
        assert_eq!(
            resolve(Path::new("/proj"), Path::new("/abs/out")),
            PathBuf::from("/abs/out")
        );
        // Parent of the filesystem root is the root itself
        assert_eq!(resolve(Path::new("/"), Path::new("../x")), PathBuf::from("/x"));
        // Relative bases keep leading `..` components
        assert_eq!(
            resolve(Path::new("a"), Path::new("../../b")),
            PathBuf::from("../b")
        );
    }
}
