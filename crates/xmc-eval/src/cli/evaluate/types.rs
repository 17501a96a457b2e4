//! CLI enum types for the evaluate command: detail format, precision convention, score transform.

use clap::ValueEnum;
use xmc_eval_core::{OutputFormat as CoreOutputFormat, PrecisionConvention, ScoreTransform};

/// Supported detail output formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON array
    Json,
    /// One JSON object per line (newline-delimited)
    Jsonl,
}

impl From<OutputFormat> for CoreOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => CoreOutputFormat::Json,
            OutputFormat::Jsonl => CoreOutputFormat::JsonLines,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Denominator for per-document precision@k.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Precision {
    /// Always divide by k
    FixedK,
    /// Divide by min(k, number of predictions)
    PredictionLength,
}

impl From<Precision> for PrecisionConvention {
    fn from(p: Precision) -> Self {
        match p {
            Precision::FixedK => PrecisionConvention::FixedK,
            Precision::PredictionLength => PrecisionConvention::PredictionLength,
        }
    }
}

/// Transform applied to member scores before aggregation.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Transform {
    /// Scores are already probabilities
    None,
    /// Scores are raw logits; apply the logistic function
    Sigmoid,
}

impl From<Transform> for ScoreTransform {
    fn from(t: Transform) -> Self {
        match t {
            Transform::None => ScoreTransform::None,
            Transform::Sigmoid => ScoreTransform::Sigmoid,
        }
    }
}
