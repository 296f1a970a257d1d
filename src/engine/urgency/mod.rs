//! Per-property priority classification from activity history and pending
//! demand. First matching rule wins; the ladder runs from terminal status
//! down to the monitor default.

mod config;
mod signals;

pub use config::UrgencyConfig;

use crate::engine::domain::{Activity, PendingMatch, Property, PropertyStatus, UrgencyLevel};
use chrono::{DateTime, Utc};
use signals::gather_signals;

/// Classifies a property's outreach priority as of the given instant.
///
/// Pure function of its inputs: the caller supplies the evaluation instant,
/// so identical snapshots always classify identically.
pub fn classify_urgency(
    property: &Property,
    activities: &[Activity],
    pending_matches: &[PendingMatch],
    config: &UrgencyConfig,
    as_of: DateTime<Utc>,
) -> UrgencyLevel {
    if property.status.is_terminal() {
        return UrgencyLevel::Sold;
    }

    let days_listed = as_of.signed_duration_since(property.created_at).num_days();
    if days_listed <= config.new_listing_days {
        return UrgencyLevel::New;
    }

    let signals = gather_signals(property, activities, pending_matches, config, as_of);

    let urgent = signals.days_since_last_activity > config.stale_urgent_days
        || (signals.visits_in_window == 0
            && signals.days_since_last_activity > config.no_visit_stale_days)
        || signals.hot_pending_matches >= config.hot_match_count;
    if urgent {
        return UrgencyLevel::Urgent;
    }

    let warning = signals.days_since_last_activity >= config.stale_warning_days
        || (signals.visits_in_window <= config.low_visit_count
            && signals.days_since_last_activity > config.low_visit_stale_days)
        || signals.warm_pending_matches >= config.warm_match_count;
    if warning {
        return UrgencyLevel::Warning;
    }

    // An ongoing negotiation needs no outreach push, whatever the visit
    // volume says.
    if property.status == PropertyStatus::UnderNegotiation {
        return UrgencyLevel::Monitor;
    }

    if signals.visits_in_window >= config.optimal_visit_count || signals.interested_match {
        return UrgencyLevel::Optimal;
    }

    UrgencyLevel::Monitor
}
