//! The `xmc-eval evaluate` command.

mod load;
mod setup;
pub mod types;
mod write;

pub use types::{OutputFormat, Precision, Transform};

use clap::Args;
use std::path::PathBuf;
use xmc_eval_core::{Config, Evaluator};

use load::load_corpus;
use setup::setup_evaluator;
use write::write_outputs;

/// Arguments for the `evaluate` command.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Corpus file (JSON Lines, one document per line)
    #[arg(required = true)]
    pub corpus: PathBuf,

    /// Canonical label list (overrides `labels.file` from the config)
    #[arg(short, long)]
    pub labels: Option<PathBuf>,

    /// Config file (defaults to the platform config path)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cutoff to evaluate; repeat for several (e.g. -k 1 -k 3 -k 5)
    #[arg(short, long = "k")]
    pub k: Vec<usize>,

    /// Write summary lines to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Write the ensemble's top-1 prediction per document to this file
    #[arg(long)]
    pub predictions: Option<PathBuf>,

    /// Write per-document details to this file
    #[arg(long)]
    pub details: Option<PathBuf>,

    /// Format of the details file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of parallel workers
    #[arg(short, long)]
    pub parallel: Option<usize>,

    /// Precision@k denominator for per-document (macro) scores
    #[arg(long, value_enum)]
    pub precision: Option<Precision>,

    /// Transform applied to member scores before aggregation
    #[arg(long, value_enum)]
    pub transform: Option<Transform>,

    /// Truncate ground-truth codes to N characters before lookup
    #[arg(long, value_name = "N")]
    pub truncate_labels: Option<usize>,

    /// Label file has no header line
    #[arg(long)]
    pub no_header: bool,

    /// Strategy name for the ensemble
    #[arg(long)]
    pub ensemble_name: Option<String>,

    /// Ensemble members every document must carry, comma-separated
    /// (defaults to the member list shared by most documents)
    #[arg(long, value_delimiter = ',')]
    pub members: Vec<String>,

    /// Print the full evaluation report as JSON instead of summary lines
    #[arg(long)]
    pub json: bool,
}

/// Evaluation context assembled by setup_evaluator().
pub(crate) struct EvalContext {
    pub evaluator: Evaluator,
    pub config: Config,
}

/// Execute the evaluate command.
pub async fn execute(args: EvaluateArgs) -> anyhow::Result<()> {
    let ctx = setup_evaluator(&args)?;
    let corpus = load_corpus(&args.corpus).await?;
    if corpus.is_empty() {
        anyhow::bail!("Corpus {:?} contains no documents", args.corpus);
    }

    // Ctrl-C stops the pass; documents already scored still count.
    let cancel = ctx.evaluator.cancel_flag();
    let signal = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, finishing with documents evaluated so far");
            cancel.cancel();
        }
    });

    let EvalContext { evaluator, config } = ctx;
    let report = tokio::task::spawn_blocking(move || evaluator.evaluate(&corpus)).await?;
    signal.abort();
    let report = report?;

    if !report.skipped.is_empty() {
        tracing::warn!(
            "{} of {} documents excluded from metrics",
            report.skipped.len(),
            report.documents_total
        );
    }

    write_outputs(&args, &config, &report)
}
