use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Per-factor weights for the composite score. Must be non-negative and
/// sum to 1.0 (within floating-point tolerance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub skill_match: f64,
    pub semantic_similarity: f64,
    pub experience: f64,
    pub title_similarity: f64,
    pub skill_depth: f64,
}

pub const DEFAULT_WEIGHTS: Weights = Weights {
    skill_match: 0.40,
    semantic_similarity: 0.25,
    experience: 0.20,
    title_similarity: 0.10,
    skill_depth: 0.05,
};

const SUM_TOLERANCE: f64 = 1e-6;

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skill_match
            + self.semantic_similarity
            + self.experience
            + self.title_similarity
            + self.skill_depth
    }

    /// Rejects negative factors and weight sets that do not sum to 1.0.
    pub fn validate(&self) -> Result<(), MatchError> {
        for (factor, value) in [
            ("skill_match", self.skill_match),
            ("semantic_similarity", self.semantic_similarity),
            ("experience", self.experience),
            ("title_similarity", self.title_similarity),
            ("skill_depth", self.skill_depth),
        ] {
            if value < 0.0 {
                return Err(MatchError::NegativeWeight { factor, value });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(MatchError::InvalidWeights { sum });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_are_valid() {
        assert!(DEFAULT_WEIGHTS.validate().is_ok());
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_sum() {
        let w = Weights {
            skill_match: 0.5,
            ..DEFAULT_WEIGHTS
        };
        match w.validate() {
            Err(MatchError::InvalidWeights { sum }) => assert!((sum - 1.1).abs() < 1e-9),
            other => panic!("expected InvalidWeights, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_factor() {
        let w = Weights {
            skill_match: -0.1,
            semantic_similarity: 0.75,
            ..DEFAULT_WEIGHTS
        };
        match w.validate() {
            Err(MatchError::NegativeWeight { factor, .. }) => assert_eq!(factor, "skill_match"),
            other => panic!("expected NegativeWeight, got {other:?}"),
        }
    }
}
