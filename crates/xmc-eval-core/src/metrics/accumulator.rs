//! Corpus-level accumulation of per-document scores.
//!
//! Holds both the macro sums (per-document precision/recall/F1, averaged at
//! the end) and the micro counts (hits and true labels, divided at the end).
//! The two are reported side by side and are not interchangeable.
//!
//! Accumulators form a commutative monoid under [`MetricsAccumulator::merge`],
//! so documents can be folded on any number of workers in any order.

use crate::error::{ScoringError, ScoringResult};
use crate::math::{f1, ratio};

use super::cutoffs::Cutoffs;
use super::per_example::ExampleScores;
use super::result::{MetricsAtK, StrategyMetrics};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CutoffTotals {
    hits: usize,
    precision_sum: f64,
    recall_sum: f64,
    f1_sum: f64,
}

/// Running totals for one strategy over (a prefix of) the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsAccumulator {
    cutoffs: Cutoffs,
    n_examples: usize,
    total_true_labels: usize,
    totals: Vec<CutoffTotals>,
}

impl MetricsAccumulator {
    /// Create an empty accumulator for the given cutoffs.
    pub fn new(cutoffs: Cutoffs) -> Self {
        let totals = vec![CutoffTotals::default(); cutoffs.len()];
        Self {
            cutoffs,
            n_examples: 0,
            total_true_labels: 0,
            totals,
        }
    }

    /// Add one document's scores.
    ///
    /// `scores` must come from [`score_example`](super::score_example) with
    /// the same cutoffs this accumulator was built with.
    pub fn add(&mut self, true_labels: usize, scores: &[ExampleScores]) {
        debug_assert_eq!(scores.len(), self.totals.len());
        self.n_examples += 1;
        self.total_true_labels += true_labels;
        for (total, score) in self.totals.iter_mut().zip(scores) {
            total.hits += score.hits;
            total.precision_sum += score.precision;
            total.recall_sum += score.recall;
            total.f1_sum += score.f1;
        }
    }

    /// Combine two partial accumulators over disjoint sets of documents.
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert_eq!(self.cutoffs, other.cutoffs);
        self.n_examples += other.n_examples;
        self.total_true_labels += other.total_true_labels;
        for (total, theirs) in self.totals.iter_mut().zip(&other.totals) {
            total.hits += theirs.hits;
            total.precision_sum += theirs.precision_sum;
            total.recall_sum += theirs.recall_sum;
            total.f1_sum += theirs.f1_sum;
        }
        self
    }

    /// Documents accumulated so far.
    pub fn n_examples(&self) -> usize {
        self.n_examples
    }

    /// Final macro and micro metrics.
    ///
    /// Fails with `EmptyCorpus` if no document was added.
    pub fn finish(&self, strategy: impl Into<String>) -> ScoringResult<StrategyMetrics> {
        if self.n_examples == 0 {
            return Err(ScoringError::EmptyCorpus);
        }
        let n = self.n_examples as f64;

        let at_k = self
            .cutoffs
            .as_slice()
            .iter()
            .zip(&self.totals)
            .map(|(&k, total)| {
                let micro_precision = ratio(total.hits as f64, (k * self.n_examples) as f64);
                let micro_recall = ratio(total.hits as f64, self.total_true_labels as f64);
                MetricsAtK {
                    k,
                    hits: total.hits,
                    macro_precision: total.precision_sum / n,
                    macro_recall: total.recall_sum / n,
                    macro_f1: total.f1_sum / n,
                    micro_precision,
                    micro_recall,
                    micro_f1: f1(micro_precision, micro_recall),
                }
            })
            .collect();

        Ok(StrategyMetrics {
            strategy: strategy.into(),
            n_examples: self.n_examples,
            total_true_labels: self.total_true_labels,
            at_k,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::per_example::{score_example, PrecisionConvention};

    fn doc(acc: &mut MetricsAccumulator, truth: &[usize], ranking: &[usize]) {
        let scores = score_example(truth, ranking, &acc.cutoffs, PrecisionConvention::FixedK);
        acc.add(truth.len(), &scores);
    }

    #[test]
    fn test_micro_scenario() {
        // Two documents: 2 true labels with 1 hit at k=1, then no true labels.
        let mut acc = MetricsAccumulator::new(Cutoffs::new(&[1]).unwrap());
        doc(&mut acc, &[0, 2], &[0, 1]);
        doc(&mut acc, &[], &[3, 1]);

        let metrics = acc.finish("all").unwrap();
        let m = &metrics.at_k[0];
        assert_eq!(m.hits, 1);
        assert!((m.micro_precision - 0.5).abs() < 1e-12);
        assert!((m.micro_recall - 0.5).abs() < 1e-12);
        assert!((m.micro_f1 - 0.5).abs() < 1e-12);
        // Macro: doc1 P=1, R=0.5; doc2 P=0, R=0
        assert!((m.macro_precision - 0.5).abs() < 1e-12);
        assert!((m.macro_recall - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_f1_zero_when_no_hits() {
        let mut acc = MetricsAccumulator::new(Cutoffs::new(&[1, 3]).unwrap());
        doc(&mut acc, &[5], &[0, 1, 2]);
        let metrics = acc.finish("m").unwrap();
        for m in &metrics.at_k {
            assert_eq!(m.micro_precision, 0.0);
            assert_eq!(m.micro_recall, 0.0);
            assert_eq!(m.micro_f1, 0.0);
            assert!(!m.micro_f1.is_nan());
        }
    }

    #[test]
    fn test_no_true_labels_anywhere() {
        let mut acc = MetricsAccumulator::new(Cutoffs::new(&[1]).unwrap());
        doc(&mut acc, &[], &[0]);
        let metrics = acc.finish("m").unwrap();
        assert_eq!(metrics.at_k[0].micro_recall, 0.0);
        assert_eq!(metrics.at_k[0].macro_recall, 0.0);
    }

    #[test]
    fn test_empty_corpus() {
        let acc = MetricsAccumulator::new(Cutoffs::default());
        assert_eq!(acc.finish("m").unwrap_err(), ScoringError::EmptyCorpus);
    }

    #[test]
    fn test_merge_matches_sequential() {
        let cutoffs = Cutoffs::new(&[1, 3]).unwrap();
        let docs: [(&[usize], &[usize]); 4] = [
            (&[0, 2], &[0, 1, 2]),
            (&[1], &[2, 0, 1]),
            (&[], &[1, 2, 0]),
            (&[0, 1, 2], &[2, 1, 0]),
        ];

        let mut sequential = MetricsAccumulator::new(cutoffs.clone());
        for (truth, ranking) in docs {
            doc(&mut sequential, truth, ranking);
        }

        let mut left = MetricsAccumulator::new(cutoffs.clone());
        let mut right = MetricsAccumulator::new(cutoffs);
        for (truth, ranking) in &docs[..2] {
            doc(&mut left, truth, ranking);
        }
        for (truth, ranking) in &docs[2..] {
            doc(&mut right, truth, ranking);
        }

        let merged = right.merge(left);
        assert_eq!(merged.n_examples(), 4);
        let a = sequential.finish("s").unwrap();
        let b = merged.finish("s").unwrap();
        for (x, y) in a.at_k.iter().zip(&b.at_k) {
            assert_eq!(x.hits, y.hits);
            assert!((x.macro_precision - y.macro_precision).abs() < 1e-12);
            assert!((x.micro_recall - y.micro_recall).abs() < 1e-12);
        }
    }
}
