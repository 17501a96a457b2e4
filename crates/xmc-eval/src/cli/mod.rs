//! CLI command implementations.

pub mod config;
pub mod evaluate;
pub mod labels;
