// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod address_loading;
mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
mod dashboard_state;
pub mod hooks;
mod live_feed;
mod loading_gate;
mod recent_list;
mod screens;
#[cfg(test)]
mod test_dom;

use api::prefs::user_prefs::UserPrefs;
use api::tx_summary::TxKind;
use app_state::AppState;
use app_state_mut::use_address_loading_store;
use components::pico::Container;
use hooks::use_address_history_loader::use_address_history_loader;
use hooks::use_feed_pump::use_feed_pump;
use live_feed::LiveFeed;
use screens::dashboard::DashboardScreen;
use screens::loading_addresses::LoadingAddressesScreen;
use screens::tx_list::TxListScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Blocks,
    Transactions,
    /// The address loading gate, and where to go once it opens.
    LoadingAddresses(Box<Screen>),
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Blocks => "Blocks",
            Screen::Transactions => "Transactions",
            Screen::LoadingAddresses(_) => "Loading",
        }
    }
}

/// The screens reachable from the navigation tabs.
const ALL_SCREENS: [Screen; 3] = [Screen::Dashboard, Screen::Blocks, Screen::Transactions];

/// The desktop navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: {
                                if *active_screen.read() == screen { "active-tab" } else { "" }
                            },
                            "aria-current": {
                                if *active_screen.read() == screen { "page" } else { "false" }
                            },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen.clone());
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    tr.tr-title td {
        background-color: var(--pico-card-sectioning-background-color);
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let prefs_future = use_server_future(move || async move { api::get_user_prefs().await })?;

    let body = match &*prefs_future.read() {
        Some(Ok(prefs)) => {
            dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
            rsx! {
                LoadedApp {
                    user_prefs: prefs.clone(),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// Keyed by kind, so switching between the two lists remounts the screen
/// and its resource refetches.
fn tx_list_screen(kind: TxKind) -> Element {
    let list_key: &'static str = kind.into();
    rsx! {
        TxListScreen {
            key: "{list_key}",
            kind,
        }
    }
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(user_prefs: UserPrefs) -> Element {
    let wallet_addresses = user_prefs.loading().wallet_addresses.clone();
    let dashboard_prefs = user_prefs.dashboard().clone();

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| AppState::new(user_prefs.clone()));

    let feed = use_context_provider(LiveFeed::new);
    use_feed_pump(feed, dashboard_prefs);

    let store = use_address_loading_store(!wallet_addresses.is_empty());
    use_context_provider(|| store);
    use_address_history_loader(wallet_addresses.clone(), store);

    // With addresses to load, open on the loading screen and land on the
    // dashboard once it is done.
    let active_screen = use_signal(|| {
        if wallet_addresses.is_empty() {
            Screen::Dashboard
        } else {
            Screen::LoadingAddresses(Box::new(Screen::Dashboard))
        }
    });

    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "Wallet Explorer" }
                            }
                        }
                        ul {
                            li {
                                Tabs {
                                    active_screen,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Dashboard => rsx! {
                            DashboardScreen {}
                        },
                        Screen::Blocks => tx_list_screen(TxKind::Block),
                        Screen::Transactions => tx_list_screen(TxKind::Tx),
                        Screen::LoadingAddresses(redirect_to) => rsx! {
                            LoadingAddressesScreen {
                                redirect_to: *redirect_to,
                            }
                        },
                    }
                }
            }
        }
    }
}
