use super::dashboard_prefs::DashboardPrefs;
use super::loading_prefs::LoadingPrefs;
use serde::Deserialize;
use serde::Serialize;
use std::env;

/// Represents all user prefs. Intended for saving to a file. editing in settings dialog, etc.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    dashboard: DashboardPrefs,
    loading: LoadingPrefs,
}

impl UserPrefs {
    pub fn new(dashboard: DashboardPrefs, loading: LoadingPrefs) -> Self {
        Self { dashboard, loading }
    }

    /// Reads every preference from environment variables.
    pub fn from_env() -> Self {
        let lookup = |key: &str| env::var(key).ok();
        Self::new(
            DashboardPrefs::from_lookup(&lookup),
            LoadingPrefs::from_lookup(&lookup),
        )
    }

    pub fn dashboard(&self) -> &DashboardPrefs {
        &self.dashboard
    }

    pub fn loading(&self) -> &LoadingPrefs {
        &self.loading
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
