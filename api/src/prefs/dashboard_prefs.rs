use serde::Deserialize;
use serde::Serialize;

use super::parse_or;

/// Number of blocks kept on the dashboard.
pub const DASHBOARD_BLOCKS_COUNT: usize = 6;

/// Number of plain transactions kept on the dashboard.
pub const DASHBOARD_TX_COUNT: usize = 6;

/// Maximum number of records requested for an address search.
pub const SEARCH_RESULT_COUNT: usize = 50;

/// Seconds between polls of the full node for newly accepted entries.
pub const FEED_POLL_SECS: u64 = 10;

/// What the dashboard does when its initial fetch fails.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum FetchErrorPolicy {
    /// Log the failure and keep showing whatever was displayed before.
    #[default]
    LogOnly,
    /// Log the failure and also show an error card with a Retry button.
    ShowRetry,
}

/// Dashboard sizing and error behaviour.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DashboardPrefs {
    pub blocks_count: usize,
    pub tx_count: usize,
    pub search_count: usize,
    pub feed_poll_secs: u64,
    pub fetch_error_policy: FetchErrorPolicy,
}

impl DashboardPrefs {
    /// Reads dashboard settings through `lookup`.
    ///
    /// # Environment Variables
    /// - `DASHBOARD_BLOCKS_COUNT`, `DASHBOARD_TX_COUNT`: list caps.
    /// - `FEED_POLL_SECS`: live feed poll interval, at least 1.
    /// - `FETCH_ERROR_POLICY`: "log_only" or "show_retry".
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: &F) -> Self {
        Self {
            blocks_count: parse_or(lookup, "DASHBOARD_BLOCKS_COUNT", DASHBOARD_BLOCKS_COUNT),
            tx_count: parse_or(lookup, "DASHBOARD_TX_COUNT", DASHBOARD_TX_COUNT),
            search_count: SEARCH_RESULT_COUNT,
            feed_poll_secs: parse_or(lookup, "FEED_POLL_SECS", FEED_POLL_SECS).max(1),
            fetch_error_policy: parse_or(lookup, "FETCH_ERROR_POLICY", FetchErrorPolicy::default()),
        }
    }
}

impl Default for DashboardPrefs {
    fn default() -> Self {
        Self::from_lookup(&|_: &str| None)
    }
}
