//! Corpus evaluation: aggregate, rank and score every document.
//!
//! Documents are independent, so the pass is a parallel fold over the corpus
//! on a dedicated thread pool. Each worker owns its partial accumulators;
//! partials are merged with an associative, commutative reduction, and the
//! per-document details are put back in corpus order at the end.

use std::collections::{HashMap, HashSet};
use std::iter;
use std::time::Instant;

use rayon::prelude::*;

use crate::error::{Result, ScoringError, ScoringResult};
use crate::labels::LabelSpace;
use crate::metrics::{score_example, Cutoffs, MetricsAccumulator};
use crate::scoring::{aggregate, rank};
use crate::types::{DocumentExample, DocumentOutcome, SkippedDocument, StrategyOutcome};

use super::cancel::CancelFlag;
use super::options::EvaluationOptions;
use super::report::{EvaluationReport, LabelSpaceSummary};

/// Evaluates corpora against a fixed label space.
pub struct Evaluator {
    labels: LabelSpace,
    options: EvaluationOptions,
    cancel: CancelFlag,
}

/// One worker's share of the corpus.
struct Partial {
    accumulators: Vec<MetricsAccumulator>,
    documents: Vec<DocumentOutcome>,
    skipped: Vec<SkippedDocument>,
}

impl Partial {
    fn new(strategies: usize, cutoffs: &Cutoffs) -> Self {
        Self {
            accumulators: vec![MetricsAccumulator::new(cutoffs.clone()); strategies],
            documents: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn add(&mut self, outcome: DocumentOutcome) {
        let true_labels = outcome.true_labels.len();
        for (acc, strategy) in self.accumulators.iter_mut().zip(&outcome.strategies) {
            acc.add(true_labels, &strategy.scores);
        }
        self.documents.push(outcome);
    }

    fn merge(self, other: Self) -> Self {
        let accumulators = self
            .accumulators
            .into_iter()
            .zip(other.accumulators)
            .map(|(a, b)| a.merge(b))
            .collect();
        let mut documents = self.documents;
        documents.extend(other.documents);
        let mut skipped = self.skipped;
        skipped.extend(other.skipped);
        Self {
            accumulators,
            documents,
            skipped,
        }
    }
}

impl Evaluator {
    /// Create an evaluator over the given label space.
    pub fn new(labels: LabelSpace, options: EvaluationOptions) -> Self {
        Self {
            labels,
            options,
            cancel: CancelFlag::new(),
        }
    }

    /// The label space every score vector must align to.
    pub fn labels(&self) -> &LabelSpace {
        &self.labels
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Handle for stopping an in-flight [`evaluate`](Self::evaluate).
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Evaluate a corpus.
    ///
    /// Strategies are the ensemble members (see
    /// [`ensemble_members`](Self::ensemble_members)), in order, followed by
    /// the ensemble itself. Documents with unknown labels, mis-sized score
    /// vectors, or a different member set are logged, excluded, and listed
    /// in the report.
    ///
    /// Fails with `EmptyCorpus` if no document is supplied or none survives,
    /// and with `InvalidStrategies` if member names repeat or one of them is
    /// the ensemble name.
    pub fn evaluate(&self, corpus: &[DocumentExample]) -> Result<EvaluationReport> {
        let members = self.ensemble_members(corpus)?;
        check_strategy_names(&members, &self.options.ensemble_name)?;
        let strategy_names: Vec<String> = members
            .iter()
            .cloned()
            .chain(iter::once(self.options.ensemble_name.clone()))
            .collect();
        let cutoffs = &self.options.cutoffs;

        tracing::info!(
            "Evaluating {} documents: {} strategies ({}), k = {:?}",
            corpus.len(),
            strategy_names.len(),
            strategy_names.join(", "),
            cutoffs.as_slice(),
        );
        let start = Instant::now();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.parallel_workers)
            .build()?;
        tracing::debug!(
            "Thread pool ready: {} workers, precision {:?}, transform {:?}",
            pool.current_num_threads(),
            self.options.precision_convention,
            self.options.score_transform,
        );

        let n_strategies = strategy_names.len();
        let partial = pool.install(|| {
            corpus
                .par_iter()
                .enumerate()
                .fold(
                    || Partial::new(n_strategies, cutoffs),
                    |mut partial, (position, doc)| {
                        if self.cancel.is_cancelled() {
                            return partial;
                        }
                        match self.evaluate_document(position, doc, &members) {
                            Ok(outcome) => partial.add(outcome),
                            Err(e) => {
                                tracing::warn!("Skipping document {:?}: {}", doc.id, e);
                                partial.skipped.push(SkippedDocument {
                                    position,
                                    id: doc.id.clone(),
                                    reason: e.to_string(),
                                });
                            }
                        }
                        partial
                    },
                )
                .reduce(|| Partial::new(n_strategies, cutoffs), Partial::merge)
        });

        let Partial {
            accumulators,
            mut documents,
            mut skipped,
        } = partial;
        documents.sort_unstable_by_key(|d| d.position);
        skipped.sort_unstable_by_key(|d| d.position);

        let cancelled = documents.len() + skipped.len() < corpus.len();
        if cancelled {
            tracing::warn!(
                "Evaluation cancelled after {} of {} documents",
                documents.len() + skipped.len(),
                corpus.len()
            );
        }

        let strategies = accumulators
            .iter()
            .zip(strategy_names)
            .map(|(acc, name)| acc.finish(name))
            .collect::<ScoringResult<Vec<_>>>()?;

        tracing::info!(
            "Evaluated {} documents in {:.2?} ({} skipped)",
            documents.len(),
            start.elapsed(),
            skipped.len(),
        );

        Ok(EvaluationReport {
            label_space: LabelSpaceSummary {
                size: self.labels.size(),
                fingerprint: self.labels.fingerprint(),
            },
            cutoffs: cutoffs.as_slice().to_vec(),
            precision_convention: self.options.precision_convention,
            score_transform: self.options.score_transform,
            ensemble_name: self.options.ensemble_name.clone(),
            documents_total: corpus.len(),
            documents_evaluated: documents.len(),
            cancelled,
            strategies,
            skipped,
            documents,
        })
    }

    /// The member set every document must carry.
    ///
    /// Uses `options.members` when set. Otherwise the member list shared by
    /// most documents wins, ties going to the list seen first.
    pub fn ensemble_members(&self, corpus: &[DocumentExample]) -> ScoringResult<Vec<String>> {
        if corpus.is_empty() {
            return Err(ScoringError::EmptyCorpus);
        }
        if let Some(members) = &self.options.members {
            return Ok(members.clone());
        }

        // member list -> (documents carrying it, first position)
        let mut votes: HashMap<Vec<&str>, (usize, usize)> = HashMap::new();
        for (position, doc) in corpus.iter().enumerate() {
            votes.entry(doc.member_names()).or_insert((0, position)).0 += 1;
        }
        let distinct = votes.len();
        let (members, (count, _)) = votes
            .into_iter()
            .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
            .ok_or(ScoringError::EmptyCorpus)?;

        if distinct > 1 {
            tracing::warn!(
                "Documents disagree on ensemble members; using [{}] ({} of {} documents)",
                members.join(", "),
                count,
                corpus.len()
            );
        }
        Ok(members.into_iter().map(String::from).collect())
    }

    /// Rank and score one document under every strategy.
    ///
    /// Each member goes through the aggregator on its own (an ensemble of
    /// one) and then all members together, so every strategy takes the same
    /// path to the ranker.
    pub fn evaluate_document(
        &self,
        position: usize,
        doc: &DocumentExample,
        members: &[String],
    ) -> ScoringResult<DocumentOutcome> {
        let found = doc.member_names();
        let same_members = found.len() == members.len()
            && found.iter().zip(members).all(|(a, b)| *a == b.as_str());
        if !same_members {
            return Err(ScoringError::InconsistentModels {
                expected: members.join(", "),
                found: found.join(", "),
            });
        }

        let truth = self.labels.resolve(&doc.labels, self.options.truncate_to)?;

        let expected = self.labels.size();
        let vectors = doc
            .scores
            .iter()
            .map(|member| {
                if member.scores.len() != expected {
                    return Err(ScoringError::DimensionMismatch {
                        expected,
                        found: member.scores.len(),
                    });
                }
                let mut scores = member.scores.clone();
                self.options.score_transform.apply(&mut scores);
                Ok(scores)
            })
            .collect::<ScoringResult<Vec<_>>>()?;

        let cutoffs = &self.options.cutoffs;
        let ensemble_name = &self.options.ensemble_name;

        let mut strategies = Vec::with_capacity(vectors.len() + 1);
        let singles = vectors.iter().zip(members).map(|(v, name)| (name, vec![v]));
        let all = iter::once((ensemble_name, vectors.iter().collect::<Vec<_>>()));
        for (name, group) in singles.chain(all) {
            let combined = aggregate(&group)?;
            let ranking = rank(&combined, cutoffs.max());
            let scores = score_example(&truth, &ranking, cutoffs, self.options.precision_convention);
            strategies.push(StrategyOutcome {
                strategy: name.clone(),
                predicted: self.identifiers(&ranking),
                scores,
            });
        }

        tracing::trace!("Scored document {:?} ({} true labels)", doc.id, truth.len());

        Ok(DocumentOutcome {
            position,
            id: doc.id.clone(),
            true_labels: self.identifiers(&truth),
            strategies,
        })
    }

    fn identifiers(&self, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .filter_map(|&i| self.labels.label_at(i))
            .map(String::from)
            .collect()
    }
}

/// Members must be non-empty, distinct, and distinct from the ensemble name.
fn check_strategy_names(members: &[String], ensemble_name: &str) -> ScoringResult<()> {
    if members.is_empty() {
        return Err(ScoringError::InvalidStrategies {
            reason: "no ensemble members".into(),
        });
    }
    let mut seen = HashSet::with_capacity(members.len());
    for name in members {
        if name == ensemble_name {
            return Err(ScoringError::InvalidStrategies {
                reason: format!("member '{}' has the same name as the ensemble", name),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(ScoringError::InvalidStrategies {
                reason: format!("member '{}' appears more than once", name),
            });
        }
    }
    Ok(())
}
