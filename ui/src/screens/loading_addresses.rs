//=============================================================================
// File: src/screens/loading_addresses.rs
//=============================================================================
use std::time::Duration;

use dioxus::prelude::*;

use crate::address_loading::AddressLoadingAction;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Card;
use crate::loading_gate::LoadingGate;
use crate::AppState;
use crate::Screen;

/// Shown while the wallet loads the history of its addresses.
///
/// Stays up for at least the configured dwell time so a fast load does not
/// just blink past, then switches to `redirect_to` as soon as loading is done.
#[component]
pub fn LoadingAddressesScreen(redirect_to: Screen) -> Element {
    let min_dwell = Duration::from_millis(use_context::<AppState>().prefs.loading().min_dwell_ms);
    let app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut gate = use_signal(LoadingGate::new);

    use_hook(move || app_state_mut.dispatch(AddressLoadingAction::AddressesLoaded(0)));

    // Owned by this scope: unmounting cancels the timer.
    use_future(move || async move {
        crate::compat::sleep(min_dwell).await;
        gate.write().dwell_elapsed();
    });

    use_effect(move || {
        let loading_addresses = app_state_mut.address_loading.read().loading_addresses;
        let can_redirect = gate.read().state().is_ready_not_loaded() && !loading_addresses;
        if can_redirect && gate.write().try_redirect(loading_addresses) {
            dioxus_logger::tracing::info!("Addresses loaded, leaving loading screen");
            active_screen.set(redirect_to.clone());
        }
    });

    let already_loaded = app_state_mut.address_loading.read().already_loaded;

    rsx! {
        Card {
            div {
                style: "display: flex; flex-direction: column; align-items: center;",
                p {
                    strong { "Loading transactions..." }
                }
                progress {}
            }
            p { "Please wait while we load the transactions of all your addresses." }
            p { "You will be automatically redirected when the wallet finishes loading them." }
            p {
                strong { "Addresses loaded: " }
                "{already_loaded}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use api::prefs::dashboard_prefs::FetchErrorPolicy;
    use dioxus::dioxus_core::VirtualDom;

    use super::*;
    use crate::app_state_mut::use_address_loading_store;
    use crate::test_dom::prefs_with_policy;
    use crate::test_dom::run_for;

    /// When things happen around the gate, and when it redirected.
    #[derive(Clone)]
    struct Timeline {
        loaded_after: Duration,
        unmount_after: Option<Duration>,
        redirects: Rc<RefCell<Vec<Duration>>>,
    }

    impl Timeline {
        fn new(loaded_after: Duration, unmount_after: Option<Duration>) -> Self {
            Self {
                loaded_after,
                unmount_after,
                redirects: Rc::default(),
            }
        }
    }

    #[component]
    fn Gate() -> Element {
        let timeline = use_context::<Timeline>();
        use_context_provider(|| AppState::new(prefs_with_policy(FetchErrorPolicy::LogOnly)));
        let store = use_address_loading_store(true);
        use_context_provider(|| store);
        let active_screen =
            use_signal(|| Screen::LoadingAddresses(Box::new(Screen::Dashboard)));
        use_context_provider(|| active_screen);
        let mut mounted = use_signal(|| true);
        let start = use_hook(tokio::time::Instant::now);

        let loaded_after = timeline.loaded_after;
        use_future(move || async move {
            crate::compat::sleep(loaded_after).await;
            store.dispatch(AddressLoadingAction::LoadingAddresses(false));
        });

        let unmount_after = timeline.unmount_after;
        use_future(move || async move {
            if let Some(after) = unmount_after {
                crate::compat::sleep(after).await;
                mounted.set(false);
            }
        });

        let redirects = timeline.redirects.clone();
        use_effect(move || {
            if *active_screen.read() == Screen::Dashboard {
                redirects.borrow_mut().push(start.elapsed());
            }
        });

        rsx! {
            if mounted() {
                LoadingAddressesScreen { redirect_to: Screen::Dashboard }
            }
        }
    }

    async fn run(timeline: Timeline) -> Vec<Duration> {
        let mut dom = VirtualDom::new(Gate).with_root_context(timeline.clone());
        dom.rebuild_in_place();
        run_for(&mut dom, Duration::from_secs(10)).await;
        let redirects = timeline.redirects.borrow().clone();
        redirects
    }

    #[tokio::test(start_paused = true)]
    async fn fast_load_still_waits_out_the_dwell() {
        let redirects = run(Timeline::new(Duration::from_millis(100), None)).await;
        assert_eq!(redirects.len(), 1);
        assert!(redirects[0] >= Duration::from_millis(2000));
        assert!(redirects[0] < Duration::from_millis(2100));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_load_redirects_when_loading_ends() {
        let redirects = run(Timeline::new(Duration::from_secs(5), None)).await;
        assert_eq!(redirects.len(), 1);
        assert!(redirects[0] >= Duration::from_secs(5));
        assert!(redirects[0] < Duration::from_millis(5100));
    }

    #[tokio::test(start_paused = true)]
    async fn unmounting_before_the_dwell_never_redirects() {
        let redirects = run(Timeline::new(
            Duration::from_millis(100),
            Some(Duration::from_secs(1)),
        ))
        .await;
        assert!(redirects.is_empty());
    }
}
