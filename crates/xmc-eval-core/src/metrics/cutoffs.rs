//! The set of k values evaluated in one corpus pass.

use crate::error::{ScoringError, ScoringResult};

/// Sorted, deduplicated, strictly positive cutoffs.
///
/// Documents are ranked once at [`Cutoffs::max`] and the ranking is sliced
/// for every smaller k.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cutoffs(Vec<usize>);

impl Cutoffs {
    /// Validate requested cutoffs.
    ///
    /// Fails with `InvalidK` for a zero cutoff and, since an evaluation with
    /// no cutoffs has nothing to report, for an empty request (`k = 0`).
    pub fn new(ks: &[usize]) -> ScoringResult<Self> {
        if ks.is_empty() {
            return Err(ScoringError::InvalidK { k: 0 });
        }
        if let Some(&k) = ks.iter().find(|&&k| k == 0) {
            return Err(ScoringError::InvalidK { k });
        }
        let mut ks = ks.to_vec();
        ks.sort_unstable();
        ks.dedup();
        Ok(Self(ks))
    }

    /// Largest requested cutoff.
    pub fn max(&self) -> usize {
        self.0.last().copied().unwrap_or_default()
    }

    /// Cutoffs in ascending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Cutoffs {
    fn default() -> Self {
        Self(vec![1, 3, 5])
    }
}
