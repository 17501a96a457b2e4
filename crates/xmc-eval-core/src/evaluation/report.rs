//! The result of one corpus pass.

use serde::{Deserialize, Serialize};

use crate::metrics::{PrecisionConvention, StrategyMetrics};
use crate::scoring::ScoreTransform;
use crate::types::{DocumentOutcome, SkippedDocument};

/// Identity of the label space a report was computed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpaceSummary {
    pub size: usize,
    pub fingerprint: String,
}

/// Metrics for every strategy plus bookkeeping about the pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub label_space: LabelSpaceSummary,
    pub cutoffs: Vec<usize>,
    pub precision_convention: PrecisionConvention,
    pub score_transform: ScoreTransform,
    pub ensemble_name: String,

    /// Documents supplied
    pub documents_total: usize,

    /// Documents that contributed to the metrics
    pub documents_evaluated: usize,

    /// Whether the pass stopped before reaching every document
    pub cancelled: bool,

    /// Members in input order, then the ensemble
    pub strategies: Vec<StrategyMetrics>,

    /// Documents excluded from the metrics, in corpus order
    pub skipped: Vec<SkippedDocument>,

    /// Per-document detail, in corpus order
    #[serde(skip)]
    pub documents: Vec<DocumentOutcome>,
}

impl EvaluationReport {
    /// Metrics of a named strategy.
    pub fn strategy(&self, name: &str) -> Option<&StrategyMetrics> {
        self.strategies.iter().find(|s| s.strategy == name)
    }

    /// Metrics of the ensemble, always the last strategy.
    pub fn ensemble(&self) -> Option<&StrategyMetrics> {
        self.strategies.last()
    }

    /// One summary line per strategy.
    pub fn summary_lines(&self) -> Vec<String> {
        self.strategies.iter().map(StrategyMetrics::summary_line).collect()
    }

    /// The ensemble's top-1 label for every evaluated document, in order.
    pub fn top1_predictions(&self) -> impl Iterator<Item = &str> + '_ {
        self.documents
            .iter()
            .map(|doc| {
                doc.ensemble()
                    .and_then(|s| s.predicted.first())
                    .map_or("", String::as_str)
            })
    }
}
