//! Per-document precision@k, recall@k and F1@k.
//!
//! Ground truth is a sorted, deduplicated slice of label indices (as produced
//! by [`LabelSpace::resolve`](crate::labels::LabelSpace::resolve)); a ranking
//! is the ranker's output, possibly shorter than k.

use serde::{Deserialize, Serialize};

use crate::math::{f1, ratio};

use super::cutoffs::Cutoffs;

/// Denominator used for per-document precision@k.
///
/// Both conventions appear in baseline evaluation scripts; they only differ
/// when a ranking holds fewer than k labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionConvention {
    /// `|T ∩ P| / k`: short rankings are penalized
    #[default]
    FixedK,
    /// `|T ∩ P| / min(k, |P|)`: only emitted predictions are judged
    PredictionLength,
}

impl PrecisionConvention {
    /// Parse a convention name (case-insensitive, `-` or `_` separated).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "fixed_k" | "k" => Some(Self::FixedK),
            "prediction_length" | "predicted" => Some(Self::PredictionLength),
            _ => None,
        }
    }

    fn denominator(self, k: usize, predicted: usize) -> f64 {
        match self {
            Self::FixedK => k as f64,
            Self::PredictionLength => k.min(predicted) as f64,
        }
    }
}

/// One document's contribution at one cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExampleScores {
    pub k: usize,
    /// `|T ∩ P@k|`
    pub hits: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Number of true labels among the first `k` ranked labels.
///
/// `truth` must be sorted and free of duplicates, as
/// [`LabelSpace::resolve`](crate::labels::LabelSpace::resolve) returns it.
pub fn hits_at_k(truth: &[usize], ranking: &[usize], k: usize) -> usize {
    debug_assert!(
        truth.windows(2).all(|w| w[0] < w[1]),
        "ground truth must be sorted and deduplicated: {:?}",
        truth
    );
    let top = &ranking[..k.min(ranking.len())];
    top.iter()
        .filter(|label| truth.binary_search(label).is_ok())
        .count()
}

/// Precision@k under the given convention. `0.0` for `k = 0`.
pub fn precision_at_k(
    truth: &[usize],
    ranking: &[usize],
    k: usize,
    convention: PrecisionConvention,
) -> f64 {
    let hits = hits_at_k(truth, ranking, k);
    ratio(hits as f64, convention.denominator(k, ranking.len()))
}

/// Recall@k, defined as `0.0` when the document has no true labels.
pub fn recall_at_k(truth: &[usize], ranking: &[usize], k: usize) -> f64 {
    ratio(hits_at_k(truth, ranking, k) as f64, truth.len() as f64)
}

/// Score one document at every cutoff from a single ranking.
///
/// `ranking` should hold at least `cutoffs.max()` labels when the label space
/// is that large; shorter rankings are scored as-is.
pub fn score_example(
    truth: &[usize],
    ranking: &[usize],
    cutoffs: &Cutoffs,
    convention: PrecisionConvention,
) -> Vec<ExampleScores> {
    cutoffs
        .as_slice()
        .iter()
        .map(|&k| {
            let hits = hits_at_k(truth, ranking, k);
            let precision = ratio(hits as f64, convention.denominator(k, ranking.len()));
            let recall = ratio(hits as f64, truth.len() as f64);
            ExampleScores {
                k,
                hits,
                precision,
                recall,
                f1: f1(precision, recall),
            }
        })
        .collect()
}
