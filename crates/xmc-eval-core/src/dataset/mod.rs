//! Readers for evaluation inputs.
//!
//! Label lists are read by [`LabelSpace::load`](crate::labels::LabelSpace::load);
//! this module handles the document corpus.

pub mod corpus;

pub use corpus::{read_corpus, CorpusReader};
