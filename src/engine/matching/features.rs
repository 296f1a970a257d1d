use crate::engine::domain::{Property, Request};

const MISSING_ELEVATOR_PENALTY: i32 = 30;
const MISSING_PARKING_PENALTY: i32 = 25;
const MISSING_GARDEN_PENALTY: i32 = 20;
const MISSING_TERRACE_PENALTY: i32 = 20;
const GROUND_FLOOR_PENALTY: i32 = 25;
const TOP_FLOOR_NO_ELEVATOR_PENALTY: i32 = 15;
const CONDITION_PENALTY: i32 = 15;
const ENERGY_CLASS_PENALTY: i32 = 10;
const YEAR_BUILT_PENALTY: i32 = 10;

/// Hard-requirement and exclusion penalties, starting from a clean 100.
///
/// Each unmet requirement subtracts a fixed amount; the result is floored at
/// zero. Qualitative minimums (condition, energy class, year built) only
/// apply when the listing actually carries the field.
pub(crate) fn score_features(property: &Property, request: &Request) -> u8 {
    let mut score: i32 = 100;

    if request.needs_elevator && !property.has_elevator {
        score -= MISSING_ELEVATOR_PENALTY;
    }
    if request.needs_parking && !property.has_parking {
        score -= MISSING_PARKING_PENALTY;
    }
    if request.needs_garden && !property.has_garden {
        score -= MISSING_GARDEN_PENALTY;
    }
    if request.needs_terrace && !property.has_terrace {
        score -= MISSING_TERRACE_PENALTY;
    }
    if request.exclude_ground_floor && property.floor == Some(0) {
        score -= GROUND_FLOOR_PENALTY;
    }
    // Floor-position data does not identify the top floor, so a missing
    // elevator stands in as the proxy for this exclusion.
    if request.exclude_top_floor_without_elevator && !property.has_elevator {
        score -= TOP_FLOOR_NO_ELEVATOR_PENALTY;
    }
    if let (Some(wanted), Some(actual)) = (request.condition_min, property.condition) {
        if actual < wanted {
            score -= CONDITION_PENALTY;
        }
    }
    if let (Some(wanted), Some(actual)) = (request.energy_class_min, property.energy_class) {
        if actual < wanted {
            score -= ENERGY_CLASS_PENALTY;
        }
    }
    if let (Some(wanted), Some(actual)) = (request.year_built_min, property.year_built) {
        if actual < wanted {
            score -= YEAR_BUILT_PENALTY;
        }
    }

    score.max(0) as u8
}
