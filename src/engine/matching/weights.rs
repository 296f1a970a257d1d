use serde::{Deserialize, Serialize};

/// Default aggregation weights. Location dominates, features are the tiebreaker.
pub const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights {
    location: 0.35,
    price: 0.30,
    size: 0.20,
    features: 0.15,
};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Relative weight of each sub-score in the total. Must sum to 1.0 so the
/// total stays on the same 0-100 scale as its components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub location: f64,
    pub price: f64,
    pub size: f64,
    pub features: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.location + self.price + self.size + self.features
    }

    pub fn validate(&self) -> Result<(), WeightsError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightsError { sum });
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[derive(Debug, thiserror::Error)]
#[error("score weights must sum to 1.0, got {sum:.6}")]
pub struct WeightsError {
    pub sum: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
        DEFAULT_WEIGHTS.validate().expect("defaults are valid");
    }

    #[test]
    fn skewed_weights_are_rejected() {
        let weights = ScoreWeights {
            location: 0.5,
            price: 0.5,
            size: 0.2,
            features: 0.1,
        };
        let err = weights.validate().expect_err("sum is 1.3");
        assert!((err.sum - 1.3).abs() < 1e-9);
    }
}
