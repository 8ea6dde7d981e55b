//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use api::prefs::dashboard_prefs::DashboardPrefs;
use api::tx_summary::TxKind;
use api::tx_summary::TxSummary;
use dioxus::prelude::*;
use futures::StreamExt;

use crate::components::action_link::ActionLink;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::search_tx::SearchTx;
use crate::components::tx_row::TxRow;
use crate::dashboard_state::DashboardLists;
use crate::live_feed::LiveFeed;
use crate::recent_list::BoundedRecentList;
use crate::AppState;
use crate::Screen;

/// Messages handled by the dashboard's event loop.
#[derive(Debug, Clone)]
enum DashboardCommand {
    /// Fetch the initial page again (Retry button).
    Reload,
    /// Replace the lists with a search result.
    SearchResult(Vec<TxSummary>),
    /// The search box was cleared: back to the live view.
    Reset,
}

/// Fetches the dashboard page and replaces both lists. On failure the lists
/// are left as they were.
async fn load_initial(
    prefs: &DashboardPrefs,
    mut lists: Signal<DashboardLists>,
    mut load_error: Signal<Option<String>>,
) {
    match api::dashboard_tx(prefs.blocks_count, prefs.tx_count).await {
        Ok(page) => {
            load_error.set(None);
            lists.write().show_initial(page);
        }
        Err(e) => {
            dioxus_logger::tracing::warn!("Failed to load dashboard transactions: {}", e);
            if prefs.fetch_error_policy.is_show_retry() {
                load_error.set(Some(e.to_string()));
            }
        }
    }
}

#[component]
fn TxGroup(kind: TxKind, items: BoundedRecentList<TxSummary>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }
    let target = match kind {
        TxKind::Block => Screen::Blocks,
        TxKind::Tx => Screen::Transactions,
    };
    let title = kind.title();
    let see_all = format!("(See all {})", title.to_lowercase());

    rsx! {
        tr {
            class: "tr-title",
            td {
                colspan: "2",
                strong { "{title} " }
                ActionLink {
                    to: target,
                    "{see_all}"
                }
            }
        }
        for tx in items.iter() {
            TxRow {
                key: "{tx.tx_id}",
                tx: tx.clone(),
            }
        }
    }
}

#[component]
pub fn DashboardScreen() -> Element {
    let prefs = use_context::<AppState>().prefs.dashboard().clone();
    let feed = use_context::<LiveFeed>();

    let lists = use_signal(|| DashboardLists::new(prefs.blocks_count, prefs.tx_count));
    let load_error = use_signal(|| None::<String>);

    // One loop owns the feed subscription and every mutation of `lists`, so
    // commands and feed events are applied strictly one after another. The
    // subscription is dropped with the coroutine when the screen unmounts.
    let loop_prefs = prefs.clone();
    let commands = use_coroutine(move |mut rx: UnboundedReceiver<DashboardCommand>| {
        let mut subscription = feed.subscribe();
        let prefs = loop_prefs.clone();
        let mut lists = lists;
        async move {
            load_initial(&prefs, lists, load_error).await;
            loop {
                tokio::select! {
                    biased;
                    command = rx.next() => match command {
                        Some(DashboardCommand::SearchResult(items)) => {
                            lists.write().show_search_result(items);
                        }
                        Some(DashboardCommand::Reset) | Some(DashboardCommand::Reload) => {
                            load_initial(&prefs, lists, load_error).await;
                        }
                        None => break,
                    },
                    event = subscription.recv() => match event {
                        Some(event) => {
                            lists.write().on_live_event(event);
                        }
                        None => break,
                    },
                }
            }
        }
    });

    let current = lists.read();

    rsx! {
        Card {
            h3 { "Explorer" }
            p { "Here you can see the most recent transactions and blocks of the network." }

            SearchTx {
                search_count: prefs.search_count,
                on_result: move |items| commands.send(DashboardCommand::SearchResult(items)),
                on_reset: move |_| commands.send(DashboardCommand::Reset),
            }

            if let Some(e) = load_error() {
                article {
                    p { "Failed to load recent transactions: {e}" }
                    Button {
                        on_click: move |_| commands.send(DashboardCommand::Reload),
                        "Retry"
                    }
                }
            }

            if current.is_empty() {
                EmptyState {
                    title: "Nothing to show",
                    description: if current.mode().is_search() {
                        "No transactions found for this address.".to_string()
                    } else {
                        "Waiting for the network to report transactions.".to_string()
                    },
                }
            } else {
                div {
                    style: "overflow-x: auto;",
                    table {
                        id: "tx-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Timestamp" }
                            }
                        }
                        tbody {
                            TxGroup { kind: TxKind::Block, items: current.blocks().clone() }
                            TxGroup { kind: TxKind::Tx, items: current.transactions().clone() }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use api::network_event::NetworkEvent;
    use api::prefs::dashboard_prefs::FetchErrorPolicy;
    use dioxus::dioxus_core::VirtualDom;

    use super::*;
    use crate::test_dom::prefs_with_policy;
    use crate::test_dom::run_for;

    /// Shows the dashboard for one second, then takes it down.
    #[component]
    fn ShortVisit() -> Element {
        use_context_provider(|| AppState::new(prefs_with_policy(FetchErrorPolicy::ShowRetry)));
        let active_screen = use_signal(|| Screen::Dashboard);
        use_context_provider(|| active_screen);

        let mut mounted = use_signal(|| true);
        use_future(move || async move {
            crate::compat::sleep(Duration::from_secs(1)).await;
            mounted.set(false);
        });

        rsx! {
            if mounted() {
                DashboardScreen {}
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unmounting_drops_the_feed_subscription() {
        let feed = LiveFeed::new();
        let mut dom = VirtualDom::new(ShortVisit).with_root_context(feed.clone());
        dom.rebuild_in_place();
        assert_eq!(feed.subscriber_count(), 1);

        run_for(&mut dom, Duration::from_secs(5)).await;
        assert_eq!(feed.subscriber_count(), 0);
        assert_eq!(feed.publish(NetworkEvent::Other), 0);
    }
}
