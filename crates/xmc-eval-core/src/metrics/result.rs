//! Immutable evaluation results.

use serde::{Deserialize, Serialize};

/// Macro and micro metrics at one cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsAtK {
    pub k: usize,

    /// Total `|T ∩ P@k|` over the corpus
    pub hits: usize,

    /// Mean of per-document precision@k
    pub macro_precision: f64,

    /// Mean of per-document recall@k
    pub macro_recall: f64,

    /// Mean of per-document F1@k
    pub macro_f1: f64,

    /// `hits / (k * n_examples)`
    pub micro_precision: f64,

    /// `hits / total_true_labels`
    pub micro_recall: f64,

    /// Harmonic mean of the micro pair
    pub micro_f1: f64,
}

/// Metrics for one aggregation strategy (a single model or the ensemble).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMetrics {
    /// Model name, or the ensemble name
    pub strategy: String,

    /// Documents that contributed
    pub n_examples: usize,

    /// Sum of `|T|` over those documents
    pub total_true_labels: usize,

    /// One entry per cutoff, ascending k
    pub at_k: Vec<MetricsAtK>,
}

impl StrategyMetrics {
    /// Metrics at a specific cutoff.
    pub fn at(&self, k: usize) -> Option<&MetricsAtK> {
        self.at_k.iter().find(|m| m.k == k)
    }

    /// One human-readable report line with micro precision, recall and F1.
    ///
    /// `bert-base P@1:0.81, P@3:0.42, R@1:0.55, R@3:0.79, F1@1:0.65, F1@3:0.55`
    pub fn summary_line(&self) -> String {
        let groups: [(&str, fn(&MetricsAtK) -> f64); 3] = [
            ("P", |m: &MetricsAtK| m.micro_precision),
            ("R", |m: &MetricsAtK| m.micro_recall),
            ("F1", |m: &MetricsAtK| m.micro_f1),
        ];

        let parts: Vec<String> = groups
            .iter()
            .flat_map(|(name, value)| {
                self.at_k
                    .iter()
                    .map(move |m| format!("{}@{}:{}", name, m.k, value(m)))
            })
            .collect();
        format!("{} {}", self.strategy, parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> StrategyMetrics {
        let at = |k, p, r| MetricsAtK {
            k,
            hits: 0,
            macro_precision: p,
            macro_recall: r,
            macro_f1: 0.0,
            micro_precision: p,
            micro_recall: r,
            micro_f1: 0.5,
        };
        StrategyMetrics {
            strategy: "all".to_string(),
            n_examples: 2,
            total_true_labels: 2,
            at_k: vec![at(1, 0.5, 0.25), at(3, 0.125, 0.75)],
        }
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            metrics().summary_line(),
            "all P@1:0.5, P@3:0.125, R@1:0.25, R@3:0.75, F1@1:0.5, F1@3:0.5"
        );
    }

    #[test]
    fn test_summary_line_single_cutoff() {
        let mut m = metrics();
        m.at_k.truncate(1);
        assert_eq!(m.summary_line(), "all P@1:0.5, R@1:0.25, F1@1:0.5");
    }

    #[test]
    fn test_at() {
        let m = metrics();
        assert_eq!(m.at(3).map(|m| m.k), Some(3));
        assert!(m.at(5).is_none());
    }
}
