//! Options controlling an evaluation run.

use crate::config::Config;
use crate::error::ScoringResult;
use crate::metrics::{Cutoffs, PrecisionConvention};
use crate::scoring::ScoreTransform;

/// Everything the evaluator needs besides the label space and the corpus.
#[derive(Debug, Clone)]
pub struct EvaluationOptions {
    pub cutoffs: Cutoffs,
    pub precision_convention: PrecisionConvention,
    pub score_transform: ScoreTransform,
    pub ensemble_name: String,
    /// Expected ensemble members; inferred from the corpus when `None`
    pub members: Option<Vec<String>>,
    pub truncate_to: Option<usize>,
    pub parallel_workers: usize,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            cutoffs: Cutoffs::default(),
            precision_convention: PrecisionConvention::FixedK,
            score_transform: ScoreTransform::None,
            ensemble_name: "all".to_string(),
            members: None,
            truncate_to: None,
            parallel_workers: 4,
        }
    }
}

impl EvaluationOptions {
    /// Build options from configuration, validating the cutoffs.
    pub fn from_config(config: &Config) -> ScoringResult<Self> {
        Ok(Self {
            cutoffs: Cutoffs::new(&config.evaluation.k_values)?,
            precision_convention: config.evaluation.precision_convention,
            score_transform: config.evaluation.score_transform,
            ensemble_name: config.evaluation.ensemble_name.clone(),
            members: Some(config.evaluation.members.clone()).filter(|m| !m.is_empty()),
            truncate_to: config.labels.truncate_to,
            parallel_workers: config.processing.parallel_workers.max(1),
        })
    }

    /// Same options with different cutoffs.
    pub fn with_cutoffs(mut self, ks: &[usize]) -> ScoringResult<Self> {
        self.cutoffs = Cutoffs::new(ks)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoringError;

    #[test]
    fn test_from_default_config() {
        let options = EvaluationOptions::from_config(&Config::default()).unwrap();
        assert_eq!(options.cutoffs.as_slice(), &[1, 3, 5]);
        assert_eq!(options.ensemble_name, "all");
        assert_eq!(options.parallel_workers, 4);
        assert!(options.members.is_none());
    }

    #[test]
    fn test_from_config_members() {
        let mut config = Config::default();
        config.evaluation.members = vec!["bert-base".into(), "roberta".into()];
        let options = EvaluationOptions::from_config(&config).unwrap();
        assert_eq!(
            options.members,
            Some(vec!["bert-base".to_string(), "roberta".to_string()])
        );
    }

    #[test]
    fn test_from_config_rejects_zero_k() {
        let mut config = Config::default();
        config.evaluation.k_values = vec![0];
        assert_eq!(
            EvaluationOptions::from_config(&config).unwrap_err(),
            ScoringError::InvalidK { k: 0 }
        );
    }

    #[test]
    fn test_with_cutoffs() {
        let options = EvaluationOptions::default().with_cutoffs(&[2]).unwrap();
        assert_eq!(options.cutoffs.max(), 2);
    }
}
