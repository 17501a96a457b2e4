//! Error types for the evaluation engine.
//!
//! Errors are organized by concern: configuration, input datasets, and the
//! scoring core itself. Scoring errors carry enough context (offending label,
//! vector lengths, k) to be reported per document without aborting a run.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for evaluation runs.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Ranking, aggregation, and metric errors
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    /// Corpus and label file errors
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Worker pool could not be started
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised by the label space, aggregator, ranker, and metrics engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// Canonical label list is empty or contains duplicates
    #[error("Invalid label space: {reason}")]
    InvalidLabelSpace { reason: String },

    /// Identifier not present in the label space
    #[error("Unknown label: {label}")]
    UnknownLabel { label: String },

    /// Score vectors disagree on length
    #[error("Dimension mismatch: expected {expected} scores, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A document's ensemble members differ from the corpus' members
    #[error("Inconsistent ensemble members: expected [{expected}], found [{found}]")]
    InconsistentModels { expected: String, found: String },

    /// Strategy names are empty, repeated, or collide with the ensemble name
    #[error("Invalid strategies: {reason}")]
    InvalidStrategies { reason: String },

    /// No documents were supplied
    #[error("Empty corpus: at least one document is required")]
    EmptyCorpus,

    /// A requested cutoff is not positive
    #[error("Invalid k: {k} (must be > 0)")]
    InvalidK { k: usize },
}

/// Errors reading label lists and corpora from disk.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A line could not be parsed
    #[error("Parse error in {} at line {line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Reading the file failed
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for evaluation results.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Convenience type alias for scoring-core results.
pub type ScoringResult<T> = std::result::Result<T, ScoringError>;
