//! Check command implementation

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use buildcfg::BuildConfig;

/// Load and validate the configuration, reporting the outcome.
///
/// Any load failure propagates as the process exit status, so the command
/// is usable from scripts and CI.
pub fn check_command(work_dir: &Path, config_path: Option<PathBuf>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| BuildConfig::config_path(work_dir));
    debug!("Checking config: {}", path.display());

    let config = BuildConfig::from_file(&path)?;
    println!(
        "OK: {} (root: {}, out_dir: {}, port: {})",
        path.display(),
        config.source_root().display(),
        config.output_root().display(),
        config.server_port()
    );

    Ok(())
}
