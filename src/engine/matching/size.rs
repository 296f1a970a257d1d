use super::{clamp_score, NEUTRAL_SCORE};
use crate::engine::domain::{Property, Request};

/// Area/room-count fit quality: the mean of an area component and a rooms
/// component, each on the usual 0-100 scale.
pub(crate) fn score_size(property: &Property, request: &Request) -> u8 {
    let area = area_component(property, request);
    let rooms = rooms_component(property, request);
    clamp_score((f64::from(area) + f64::from(rooms)) / 2.0)
}

/// Undersized listings are penalized at full slope; oversized ones at half,
/// since extra square meters are rarely a dealbreaker.
fn area_component(property: &Property, request: &Request) -> u8 {
    let (Some(min), Some(max), Some(area)) = (request.sqm_min, request.sqm_max, property.sqm)
    else {
        return NEUTRAL_SCORE;
    };

    if min <= 0.0 || max <= 0.0 {
        return NEUTRAL_SCORE;
    }

    if area >= min && area <= max {
        100
    } else if area < min {
        clamp_score(100.0 - ((min - area) / min) * 100.0)
    } else {
        clamp_score(100.0 - ((area - max) / max) * 50.0)
    }
}

fn rooms_component(property: &Property, request: &Request) -> u8 {
    let (Some(min), Some(rooms)) = (request.rooms_min, property.rooms) else {
        return NEUTRAL_SCORE;
    };

    if min == 0 {
        return NEUTRAL_SCORE;
    }

    let base: i32 = if rooms >= min {
        match request.rooms_max {
            // Exceeding a stated upper bound is a good-but-not-ideal fit;
            // an open-ended range treats any count at or above min as ideal.
            Some(max) if rooms > max => 85,
            _ => 100,
        }
    } else {
        let shortfall = f64::from(min - rooms) / f64::from(min);
        i32::from(clamp_score(100.0 - shortfall * 200.0))
    };

    // Bedroom minimum nudges the component; an unknown bedroom count is
    // neutral and leaves it untouched.
    let adjusted = match (request.bedrooms_min, property.bedrooms) {
        (Some(wanted), Some(bedrooms)) if bedrooms >= wanted => base + 10,
        (Some(_), Some(_)) => base - 15,
        _ => base,
    };

    adjusted.clamp(0, 100) as u8
}
