//! Core data types for evaluation runs.
//!
//! Inputs (documents with per-model score vectors and ground truth) and the
//! per-document outcomes produced by the evaluator.

use serde::{Deserialize, Serialize};

use crate::metrics::ExampleScores;

/// One model's confidence for every label, index-aligned to the label space.
pub type ScoreVector = Vec<f32>;

/// A single ensemble member's output for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelScores {
    /// Member name (e.g. "bert-base", "roberta", "xlnet")
    pub model: String,

    /// Dense score vector of length `L`
    pub scores: ScoreVector,
}

impl ModelScores {
    pub fn new(model: impl Into<String>, scores: ScoreVector) -> Self {
        Self {
            model: model.into(),
            scores,
        }
    }
}

/// A document to evaluate: member score vectors plus ground truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentExample {
    /// Opaque document identifier
    pub id: String,

    /// Ground-truth label identifiers (may be empty)
    #[serde(default)]
    pub labels: Vec<String>,

    /// One score vector per ensemble member, in member order
    pub scores: Vec<ModelScores>,
}

impl DocumentExample {
    /// Names of the ensemble members, in order.
    pub fn member_names(&self) -> Vec<&str> {
        self.scores.iter().map(|m| m.model.as_str()).collect()
    }
}

/// How one strategy ranked one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyOutcome {
    /// Model name, or the ensemble name
    pub strategy: String,

    /// Top labels at the largest cutoff, best first
    pub predicted: Vec<String>,

    /// Scores at every cutoff
    pub scores: Vec<ExampleScores>,
}

/// Per-document evaluation detail, kept for error analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutcome {
    /// Position in the input corpus
    pub position: usize,

    pub id: String,

    /// Ground truth after resolution against the label space
    pub true_labels: Vec<String>,

    /// One entry per strategy, members first then the ensemble
    pub strategies: Vec<StrategyOutcome>,
}

impl DocumentOutcome {
    /// Outcome for a named strategy.
    pub fn strategy(&self, name: &str) -> Option<&StrategyOutcome> {
        self.strategies.iter().find(|s| s.strategy == name)
    }

    /// Outcome of the ensemble, always the last strategy.
    pub fn ensemble(&self) -> Option<&StrategyOutcome> {
        self.strategies.last()
    }

    /// Top-1 prediction of a named strategy.
    pub fn top1(&self, name: &str) -> Option<&str> {
        self.strategy(name)
            .and_then(|s| s.predicted.first())
            .map(String::as_str)
    }
}

/// A document left out of the corpus metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedDocument {
    /// Position in the input corpus
    pub position: usize,

    pub id: String,

    /// Why it was excluded
    pub reason: String,
}
