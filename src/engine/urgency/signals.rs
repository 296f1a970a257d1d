use super::config::UrgencyConfig;
use crate::engine::domain::{Activity, ActivityKind, MatchStatus, PendingMatch, Property};
use chrono::{DateTime, Duration, Utc};

/// Derived activity/demand observations the rule ladder consumes.
pub(crate) struct UrgencySignals {
    pub days_since_last_activity: i64,
    pub visits_in_window: u32,
    pub hot_pending_matches: usize,
    pub warm_pending_matches: usize,
    pub interested_match: bool,
}

pub(crate) fn gather_signals(
    property: &Property,
    activities: &[Activity],
    pending_matches: &[PendingMatch],
    config: &UrgencyConfig,
    as_of: DateTime<Utc>,
) -> UrgencySignals {
    let last_activity = activities
        .iter()
        .filter_map(|activity| activity.completed_at)
        .max();

    // A listing with no completed activity yet is anchored on its creation
    // date, so staleness still accrues from day one.
    let anchor = last_activity.unwrap_or(property.created_at);
    let days_since_last_activity = as_of.signed_duration_since(anchor).num_days();

    let window_start = as_of - Duration::days(config.visit_window_days);
    let visits_in_window = activities
        .iter()
        .filter(|activity| activity.kind == ActivityKind::Visit)
        .filter_map(|activity| activity.completed_at)
        .filter(|completed| *completed >= window_start && *completed <= as_of)
        .count() as u32;

    // Only matches still in the proposed state represent open demand;
    // rejected or concluded matches are inert history.
    let hot_pending_matches = pending_matches
        .iter()
        .filter(|m| m.status == MatchStatus::Proposed && m.total_score >= config.hot_match_score)
        .count();
    let warm_pending_matches = pending_matches
        .iter()
        .filter(|m| {
            m.status == MatchStatus::Proposed
                && m.total_score >= config.warm_match_score
                && m.total_score < config.hot_match_score
        })
        .count();
    let interested_match = pending_matches
        .iter()
        .any(|m| m.status == MatchStatus::Interested);

    UrgencySignals {
        days_since_last_activity,
        visits_in_window,
        hot_pending_matches,
        warm_pending_matches,
        interested_match,
    }
}
