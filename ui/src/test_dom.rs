//! Headless rendering helpers for screen tests.

use std::time::Duration;

use api::prefs::dashboard_prefs::DashboardPrefs;
use api::prefs::dashboard_prefs::FetchErrorPolicy;
use api::prefs::loading_prefs::LoadingPrefs;
use api::prefs::user_prefs::UserPrefs;
use dioxus::dioxus_core::NoOpMutations;
use dioxus::dioxus_core::VirtualDom;

/// Default prefs, with the given fetch error policy.
pub(crate) fn prefs_with_policy(fetch_error_policy: FetchErrorPolicy) -> UserPrefs {
    let dashboard = DashboardPrefs {
        fetch_error_policy,
        ..DashboardPrefs::default()
    };
    UserPrefs::new(dashboard, LoadingPrefs::default())
}

/// Drives `dom` until `span` of tokio time has passed, rendering after every
/// wakeup. Meant for tests with paused time, where the clock jumps straight
/// to the next pending timer.
pub(crate) async fn run_for(dom: &mut VirtualDom, span: Duration) {
    let deadline = tokio::time::Instant::now() + span;
    loop {
        let timed_out = tokio::select! {
            _ = dom.wait_for_work() => false,
            _ = tokio::time::sleep_until(deadline) => true,
        };
        if timed_out {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}
