//! The `xmc-eval config` command.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use xmc_eval_core::Config;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration
    Show {
        /// Config file to read instead of the default location
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,

        /// Canonical label list to record as `labels.file`
        #[arg(long)]
        labels: Option<String>,
    },

    /// Check a config file for parse and range errors
    Validate {
        /// Config file to check (defaults to the platform config path)
        file: Option<PathBuf>,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { file } => {
            let config = match file {
                Some(path) => Config::load_from(&path)?,
                None => Config::load()?,
            };
            println!("{}", config.to_toml()?);
        }

        ConfigCommand::Path => {
            println!("{}", Config::default_path().display());
        }

        ConfigCommand::Init { force, labels } => {
            let path = Config::default_path();
            init_config(&path, force, labels)?;
            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }

        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_path);
            let config = Config::load_from(&path)?;
            println!(
                "{}: ok (k = {:?}, labels = {})",
                path.display(),
                config.evaluation.k_values,
                config.labels.file.as_deref().unwrap_or("<unset>")
            );
        }
    }

    Ok(())
}

/// Write a default config to `path`, refusing to clobber unless `force`.
fn init_config(path: &Path, force: bool, labels: Option<String>) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut config = Config::default();
    config.labels.file = labels;
    std::fs::write(path, config.to_toml()?)?;
    Ok(())
}
