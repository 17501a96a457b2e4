//! Ranking metrics: precision@k, recall@k and F1@k.
//!
//! Two accumulation modes are computed side by side:
//! - **macro**: per-document scores averaged over the corpus
//! - **micro**: corpus-wide hit and true-label counts, divided once
//!
//! All cutoffs come from a single ranking per document, made at the largest
//! requested k and sliced for the others.

pub mod accumulator;
pub mod cutoffs;
pub mod per_example;
pub mod result;

pub use accumulator::MetricsAccumulator;
pub use cutoffs::Cutoffs;
pub use per_example::{
    hits_at_k, precision_at_k, recall_at_k, score_example, ExampleScores, PrecisionConvention,
};
pub use result::{MetricsAtK, StrategyMetrics};
