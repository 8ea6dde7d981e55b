use serde::Deserialize;
use serde::Serialize;

use super::parse_or;

/// Minimum time the address loading screen stays visible, so a fast load
/// does not just blink past.
pub const LOADING_MIN_DWELL_MS: u64 = 2000;

/// Settings for the address history load that runs at startup.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct LoadingPrefs {
    pub min_dwell_ms: u64,
    /// Addresses whose history is fetched before the wallet is usable.
    pub wallet_addresses: Vec<String>,
}

impl LoadingPrefs {
    /// Reads `LOADING_MIN_DWELL_MS` and the comma separated
    /// `WALLET_ADDRESSES` through `lookup`.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: &F) -> Self {
        let wallet_addresses = lookup("WALLET_ADDRESSES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            min_dwell_ms: parse_or(lookup, "LOADING_MIN_DWELL_MS", LOADING_MIN_DWELL_MS),
            wallet_addresses,
        }
    }
}

impl Default for LoadingPrefs {
    fn default() -> Self {
        Self::from_lookup(&|_: &str| None)
    }
}
