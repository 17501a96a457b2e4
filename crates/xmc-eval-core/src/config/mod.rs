//! Configuration management.
//!
//! Configuration is loaded from `config.toml` in the platform config
//! directory, falling back to defaults for anything not set.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cutoffs, precision convention, score transform
    pub evaluation: EvaluationConfig,

    /// Canonical label list
    pub labels: LabelsConfig,

    /// Worker settings
    pub processing: ProcessingConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.xmc-eval.xmc-eval/config.toml
    /// - Linux: ~/.config/xmc-eval/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\xmc-eval\config\config.toml
    ///
    /// Falls back to ~/.xmc-eval/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "xmc-eval", "xmc-eval")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".xmc-eval").join("config.toml")
            })
    }

    /// Resolved label file path (with ~ expansion), if configured.
    pub fn label_file(&self) -> Option<PathBuf> {
        self.labels.file.as_deref().map(|file| {
            let expanded = shellexpand::tilde(file);
            PathBuf::from(expanded.into_owned())
        })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::PrecisionConvention;
    use crate::scoring::ScoreTransform;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.processing.parallel_workers, 4);
        assert_eq!(config.evaluation.k_values, vec![1, 3, 5]);
        assert_eq!(config.evaluation.ensemble_name, "all");
        assert!(config.labels.has_header);
        assert_eq!(config.labels.delimiter, '\t');
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[evaluation]"));
        assert!(toml.contains("[processing]"));
        assert!(toml.contains("precision_convention = \"fixed_k\""));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[evaluation]
k_values = [1, 10]
precision_convention = "prediction_length"
score_transform = "sigmoid"

[labels]
file = "~/data/labels_group_id_4.tsv"
truncate_to = 4
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.evaluation.k_values, vec![1, 10]);
        assert_eq!(
            config.evaluation.precision_convention,
            PrecisionConvention::PredictionLength
        );
        assert_eq!(config.evaluation.score_transform, ScoreTransform::Sigmoid);
        assert_eq!(config.labels.truncate_to, Some(4));
        assert_eq!(config.processing.parallel_workers, 4);

        let label_file = config.label_file().unwrap();
        assert!(label_file.ends_with("data/labels_group_id_4.tsv"));
        assert!(!label_file.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[evaluation]\nk_values = [0, 1]\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("k_values"));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[evaluation\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.labels.file = Some("/tmp/labels.tsv".into());
        let parsed: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.labels.file.as_deref(), Some("/tmp/labels.tsv"));
        assert_eq!(parsed.labels.delimiter, '\t');
    }
}
