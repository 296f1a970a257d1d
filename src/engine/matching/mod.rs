//! Compatibility scoring between a client request and a property listing.
//!
//! Four sub-scorers (location, price, size, features) each rate one axis on a
//! 0-100 scale; the engine combines them into a weighted total. Everything in
//! this module is a pure function of its inputs.

mod features;
mod filter;
mod geo;
mod location;
mod price;
mod size;
mod weights;

pub use geo::haversine_km;
pub use weights::{ScoreWeights, WeightsError, DEFAULT_WEIGHTS};

use crate::engine::domain::{Property, Request};
use serde::{Deserialize, Serialize};

/// Neutral value for a sub-score when the inputs are too thin to judge.
pub(crate) const NEUTRAL_SCORE: u8 = 50;

/// Rounds and pins a raw score onto the 0-100 scale.
pub(crate) fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Stateless scorer holding a validated weight table.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    weights: ScoreWeights,
}

impl MatchEngine {
    pub fn new(weights: ScoreWeights) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Cheap pre-screen for batch pairing; rejects obviously incompatible
    /// pairs before the full scoring pipeline runs.
    pub fn passes_basic_filter(&self, property: &Property, request: &Request) -> bool {
        filter::passes_basic_filter(property, request)
    }

    /// Full compatibility score for a (request, property) pair.
    pub fn score(&self, property: &Property, request: &Request) -> MatchScore {
        let location = location::score_location(property, request);
        let price = price::score_price(property, request);
        let size = size::score_size(property, request);
        let features = features::score_features(property, request);

        let total = clamp_score(
            f64::from(location) * self.weights.location
                + f64::from(price) * self.weights.price
                + f64::from(size) * self.weights.size
                + f64::from(features) * self.weights.features,
        );

        MatchScore {
            location,
            price,
            size,
            features,
            total,
        }
    }
}

/// Sub-scores and weighted total for one (request, property) pair, each an
/// integer in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub location: u8,
    pub price: u8,
    pub size: u8,
    pub features: u8,
    pub total: u8,
}
