use crate::engine::domain::{PropertyStatus, UrgencyLevel};
use serde::Serialize;

/// Building-level aggregate over its units' urgency classifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingRollup {
    pub building_code: String,
    pub active_units: usize,
    pub sold_units: usize,
    /// Mean urgency of active units, rounded to 2 decimals. `None` when the
    /// building has no active units.
    pub avg_urgency: Option<f64>,
}

/// Pure reduction of one building's classified units. Terminal-status units
/// count toward `sold_units` and never contribute to the average.
pub fn rollup_building(
    building_code: &str,
    units: &[(PropertyStatus, UrgencyLevel)],
) -> BuildingRollup {
    let mut active_units = 0usize;
    let mut sold_units = 0usize;
    let mut urgency_sum = 0u32;

    for (status, urgency) in units {
        if status.is_terminal() {
            sold_units += 1;
        } else {
            active_units += 1;
            urgency_sum += u32::from(urgency.score());
        }
    }

    let avg_urgency = if active_units == 0 {
        None
    } else {
        Some(round2(f64::from(urgency_sum) / active_units as f64))
    };

    BuildingRollup {
        building_code: building_code.to_string(),
        active_units,
        sold_units,
        avg_urgency,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
