//! Show command implementation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use buildcfg::BuildConfig;

/// Print the loaded configuration, both as configured and as resolved
/// against the config directory.
pub fn show_command(work_dir: &Path, config_path: Option<PathBuf>, as_toml: bool) -> Result<()> {
    let path = config_path.unwrap_or_else(|| BuildConfig::config_path(work_dir));
    let config = BuildConfig::from_file(&path)?;

    if as_toml {
        let content = toml::to_string_pretty(&config.to_doc())
            .with_context(|| "Failed to serialize config")?;
        print!("{content}");
        return Ok(());
    }

    println!("config file: {}", path.display());
    println!(
        "source root: {} ({})",
        config.source_root().display(),
        config.resolved_source_root().display()
    );
    println!(
        "output root: {} ({})",
        config.output_root().display(),
        config.resolved_output_root().display()
    );
    println!("server port: {}", config.server_port());

    Ok(())
}
