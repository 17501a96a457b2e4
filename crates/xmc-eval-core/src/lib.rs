//! xmc-eval core - ensemble ranking and evaluation for extreme multi-label
//! classifiers.
//!
//! Combines the score vectors of several independently trained classifiers
//! into one ranking per document and scores the rankings against ground truth
//! with precision@k, recall@k and F1@k, both per document (macro) and
//! corpus-wide (micro).
//!
//! # Architecture
//!
//! ```text
//! Label list → LabelSpace ─┬─────────────────────────────────────┐
//!                          ▼                                     ▼
//! Member scores → (transform) → aggregate → rank @ max k → metrics @ every k → report
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use xmc_eval_core::{EvaluationOptions, Evaluator, LabelSpace};
//!
//! let labels = LabelSpace::build(["A01B", "G06F", "H04L"])?;
//! let options = EvaluationOptions::default().with_cutoffs(&[1, 3, 5])?;
//! let report = Evaluator::new(labels, options).evaluate(&corpus)?;
//! for line in report.summary_lines() {
//!     println!("{}", line);
//! }
//! ```

// Module declarations
pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod labels;
pub mod math;
pub mod metrics;
pub mod output;
pub mod scoring;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, DatasetError, EvalError, Result, ScoringError, ScoringResult};
pub use evaluation::{CancelFlag, EvaluationOptions, EvaluationReport, Evaluator};
pub use labels::LabelSpace;
pub use metrics::{Cutoffs, MetricsAtK, PrecisionConvention, StrategyMetrics};
pub use output::{OutputFormat, OutputWriter};
pub use scoring::{aggregate, rank, ScoreTransform};
pub use types::{DocumentExample, DocumentOutcome, ModelScores, ScoreVector, SkippedDocument};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
