//! Per-member score transforms applied before aggregation.

use serde::{Deserialize, Serialize};

use crate::math::sigmoid_in_place;

/// How raw member outputs are mapped before they are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTransform {
    /// Use scores as produced (already calibrated probabilities)
    #[default]
    None,
    /// Squash raw logits through the logistic function
    Sigmoid,
}

impl ScoreTransform {
    /// Parse a transform name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "identity" => Some(Self::None),
            "sigmoid" | "logistic" => Some(Self::Sigmoid),
            _ => None,
        }
    }

    /// Apply the transform to a score vector in place.
    pub fn apply(self, scores: &mut [f32]) {
        match self {
            Self::None => {}
            Self::Sigmoid => sigmoid_in_place(scores),
        }
    }
}
