use super::{clamp_score, NEUTRAL_SCORE};
use crate::engine::domain::{Property, Request};

const BELOW_MIN_SLOPE: f64 = 100.0;
const ABOVE_MAX_SLOPE: f64 = 150.0;

/// Budget-fit quality for the contract-appropriate price field.
///
/// Insufficient information (missing price or missing bound) is neutral, not
/// a penalty. Below-budget listings lose points in proportion to the relative
/// shortfall; over-budget listings lose 1.5x as much per unit of relative
/// deviation, since blowing the budget hurts more than undershooting it.
pub(crate) fn score_price(property: &Property, request: &Request) -> u8 {
    let (Some(min), Some(max), Some(price)) =
        (request.price_min, request.price_max, property.listed_price())
    else {
        return NEUTRAL_SCORE;
    };

    if min <= 0.0 || max <= 0.0 {
        return NEUTRAL_SCORE;
    }

    if price >= min && price <= max {
        100
    } else if price < min {
        clamp_score(100.0 - ((min - price) / min) * BELOW_MIN_SLOPE)
    } else {
        clamp_score(100.0 - ((price - max) / max) * ABOVE_MAX_SLOPE)
    }
}
