use crate::engine::domain::{Property, Request};

/// Bounds are widened by 20% in each direction so the gate never drops a
/// pair the scorers would still rate as a plausible near-miss.
const BOUND_BUFFER: f64 = 0.20;

/// Cheap pre-screen rejecting obviously incompatible pairs before the full
/// scoring pipeline runs. Advisory only: passing the gate contributes nothing
/// to the score, and unknown fields never reject.
pub(crate) fn passes_basic_filter(property: &Property, request: &Request) -> bool {
    if property.contract != request.contract {
        return false;
    }

    if !request.kinds.is_empty() && !request.kinds.contains(&property.kind) {
        return false;
    }

    if let (Some(min), Some(max), Some(price)) =
        (request.price_min, request.price_max, property.listed_price())
    {
        if price < min * (1.0 - BOUND_BUFFER) || price > max * (1.0 + BOUND_BUFFER) {
            return false;
        }
    }

    if let (Some(min), Some(max), Some(area)) = (request.sqm_min, request.sqm_max, property.sqm) {
        if area < min * (1.0 - BOUND_BUFFER) || area > max * (1.0 + BOUND_BUFFER) {
            return false;
        }
    }

    if let (Some(min), Some(rooms)) = (request.rooms_min, property.rooms) {
        if rooms < min {
            return false;
        }
    }

    if let (Some(min), Some(bathrooms)) = (request.bathrooms_min, property.bathrooms) {
        if bathrooms < min {
            return false;
        }
    }

    true
}
