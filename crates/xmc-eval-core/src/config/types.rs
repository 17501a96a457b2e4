//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

use crate::metrics::PrecisionConvention;
use crate::scoring::ScoreTransform;

/// Evaluation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Cutoffs to report (precision@k, recall@k, F1@k)
    pub k_values: Vec<usize>,

    /// Denominator for per-document precision@k
    pub precision_convention: PrecisionConvention,

    /// Transform applied to each member's scores before ranking/aggregation.
    /// Use "sigmoid" when members emit raw logits.
    pub score_transform: ScoreTransform,

    /// Strategy name for the combined ensemble
    pub ensemble_name: String,

    /// Ensemble members every document must carry, in order.
    /// Empty means the member list shared by most documents.
    pub members: Vec<String>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            k_values: vec![1, 3, 5],
            precision_convention: PrecisionConvention::FixedK,
            score_transform: ScoreTransform::None,
            ensemble_name: "all".to_string(),
            members: Vec::new(),
        }
    }
}

/// Canonical label list settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// Path to the canonical label list (one identifier per line)
    pub file: Option<String>,

    /// Skip the first line of the label file
    pub has_header: bool,

    /// Column separator; the identifier is the first column
    pub delimiter: char,

    /// Truncate ground-truth codes to this many characters before lookup
    /// (e.g. 4 for IPC subclasses)
    pub truncate_to: Option<usize>,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            file: None,
            has_header: true,
            delimiter: '\t',
            truncate_to: None,
        }
    }
}

/// Processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Number of parallel evaluation workers
    pub parallel_workers: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            parallel_workers: 4,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format for detail records ("json" or "jsonl")
    pub format: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "jsonl".to_string(),
            pretty: false,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
