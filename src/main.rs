use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "buildcfg")]
#[command(about = "Declarative build configuration loader for front-end asset pipelines")]
#[command(version)]
struct Cli {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to build.toml in the project directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and report errors
    Check,

    /// Print the loaded configuration
    Show {
        /// Print as TOML instead of the human-readable listing
        #[arg(long)]
        toml: bool,
    },

    /// Initialize a new build.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Some(Commands::Show { toml }) => {
            cli::show::show_command(&work_dir, cli.config, toml)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&work_dir, cli.config, force)?;
        }
        // Default: validate the config
        Some(Commands::Check) | None => {
            cli::check::check_command(&work_dir, cli.config)?;
        }
    }

    Ok(())
}
