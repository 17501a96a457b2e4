//! Score aggregation and top-k ranking.
//!
//! Turns one or more per-model score vectors for a document into a single
//! deterministic ranking of label indices.

pub mod aggregate;
pub mod rank;
pub mod transform;

pub use aggregate::aggregate;
pub use rank::rank;
pub use transform::ScoreTransform;
