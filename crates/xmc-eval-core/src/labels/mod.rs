//! Label space registry.
//!
//! The single source of truth for what a score-vector position means.

pub mod space;

pub use space::LabelSpace;
