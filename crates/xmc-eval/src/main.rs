//! xmc-eval CLI - ensemble ranking and evaluation for extreme multi-label classifiers.
//!
//! Reads a canonical label list and a corpus of per-model score vectors,
//! combines the models into an ensemble ranking per document, and reports
//! precision@k, recall@k and F1@k for every model and for the ensemble.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate a corpus at k = 1, 3, 5
//! xmc-eval evaluate test.jsonl --labels labels_group_id_4.tsv -k 1 -k 3 -k 5
//!
//! # Write the ensemble's top-1 predictions and per-document details
//! xmc-eval evaluate test.jsonl --predictions top1.txt --details details.jsonl
//!
//! # Inspect a label list
//! xmc-eval labels labels_group_id_4.tsv
//!
//! # View configuration
//! xmc-eval config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// xmc-eval - ensemble ranking and evaluation for extreme multi-label classifiers.
#[derive(Parser, Debug)]
#[command(name = "xmc-eval")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank and evaluate a corpus of model scores
    Evaluate(cli::evaluate::EvaluateArgs),

    /// Inspect a canonical label list
    Labels(cli::labels::LabelsArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let config = match xmc_eval_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `xmc-eval config path`."
            );
            xmc_eval_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("xmc-eval v{}", xmc_eval_core::VERSION);

    match cli.command {
        Commands::Evaluate(args) => cli::evaluate::execute(args).await,
        Commands::Labels(args) => cli::labels::execute(args).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["xmc-eval", "labels", "labels.tsv", "--verbose", "--json-logs"]);
        assert!(cli.verbose);
        assert!(cli.json_logs);
        assert!(matches!(cli.command, Commands::Labels(_)));
    }
}
