//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.parallel_workers == 0 {
            return Err(ConfigError::ValidationError(
                "processing.parallel_workers must be > 0".into(),
            ));
        }
        if self.evaluation.k_values.is_empty() {
            return Err(ConfigError::ValidationError(
                "evaluation.k_values must not be empty".into(),
            ));
        }
        if self.evaluation.k_values.contains(&0) {
            return Err(ConfigError::ValidationError(
                "evaluation.k_values must all be > 0".into(),
            ));
        }
        if self.evaluation.ensemble_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "evaluation.ensemble_name must not be empty".into(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for member in &self.evaluation.members {
            if member.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "evaluation.members must not contain blank names".into(),
                ));
            }
            if *member == self.evaluation.ensemble_name {
                return Err(ConfigError::ValidationError(format!(
                    "evaluation.members contains '{}', which is the ensemble_name",
                    member
                )));
            }
            if !seen.insert(member.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "evaluation.members lists '{}' more than once",
                    member
                )));
            }
        }
        if self.labels.truncate_to == Some(0) {
            return Err(ConfigError::ValidationError(
                "labels.truncate_to must be > 0 when set".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_parallel_workers() {
        let mut config = Config::default();
        config.processing.parallel_workers = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("parallel_workers"));
    }

    #[test]
    fn test_validate_rejects_empty_k_values() {
        let mut config = Config::default();
        config.evaluation.k_values.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("k_values"));
    }

    #[test]
    fn test_validate_rejects_zero_k() {
        let mut config = Config::default();
        config.evaluation.k_values = vec![1, 0];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("k_values"));
    }

    #[test]
    fn test_validate_rejects_blank_ensemble_name() {
        let mut config = Config::default();
        config.evaluation.ensemble_name = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ensemble_name"));
    }

    #[test]
    fn test_validate_rejects_zero_truncation() {
        let mut config = Config::default();
        config.labels.truncate_to = Some(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("truncate_to"));
    }

    #[test]
    fn test_validate_rejects_member_named_like_ensemble() {
        let mut config = Config::default();
        config.evaluation.members = vec!["all".into(), "m2".into()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ensemble_name"));
    }

    #[test]
    fn test_validate_rejects_repeated_member() {
        let mut config = Config::default();
        config.evaluation.members = vec!["m1".into(), "m1".into()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
