//! Corpus-level evaluation of individual models and their ensemble.

pub mod cancel;
pub mod evaluator;
pub mod options;
pub mod report;

pub use cancel::CancelFlag;
pub use evaluator::Evaluator;
pub use options::EvaluationOptions;
pub use report::{EvaluationReport, LabelSpaceSummary};
