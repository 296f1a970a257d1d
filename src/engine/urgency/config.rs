use serde::{Deserialize, Serialize};

/// Thresholds driving the urgency rule ladder. Adjusting these is a
/// configuration decision; the rule order itself is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrgencyConfig {
    /// Listings at most this many days old are still settling in.
    pub new_listing_days: i64,
    /// Days without any completed activity before a listing is urgent.
    pub stale_urgent_days: i64,
    /// Days without activity before a listing is worth a warning.
    pub stale_warning_days: i64,
    /// With zero recent visits, staleness beyond this many days is urgent.
    pub no_visit_stale_days: i64,
    /// Visit counts at or below this are considered low traffic.
    pub low_visit_count: u32,
    /// Low traffic plus staleness beyond this many days earns a warning.
    pub low_visit_stale_days: i64,
    /// Pending matches scoring at least this are hot demand.
    pub hot_match_score: u8,
    /// This many hot pending matches make a listing urgent to work.
    pub hot_match_count: usize,
    /// Pending matches scoring in [warm, hot) are warm demand.
    pub warm_match_score: u8,
    /// This many warm pending matches earn a warning.
    pub warm_match_count: usize,
    /// Recent visits at or above this mark a listing as performing well.
    pub optimal_visit_count: u32,
    /// Width of the recent-visit window, in days.
    pub visit_window_days: i64,
}

impl Default for UrgencyConfig {
    fn default() -> Self {
        Self {
            new_listing_days: 7,
            stale_urgent_days: 60,
            stale_warning_days: 30,
            no_visit_stale_days: 30,
            low_visit_count: 2,
            low_visit_stale_days: 15,
            hot_match_score: 85,
            hot_match_count: 3,
            warm_match_score: 70,
            warm_match_count: 2,
            optimal_visit_count: 5,
            visit_window_days: 30,
        }
    }
}
