//=============================================================================
// File: src/screens/tx_list.rs
//=============================================================================
use api::tx_summary::TxKind;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::components::tx_row::TxRow;

/// How many entries the "see all" lists request.
const TX_LIST_COUNT: usize = 20;

/// The latest blocks or the latest transactions, one kind per screen.
#[component]
pub fn TxListScreen(kind: TxKind) -> Element {
    let mut list_resource =
        use_resource(move || async move { api::tx_list(kind, TX_LIST_COUNT).await });
    let title = kind.title();
    let lower_title = title.to_lowercase();

    rsx! {
        match &*list_resource.read() {
            None => rsx! {
                Card {
                    h3 { "{title}" }
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load {lower_title}: {e}" }
                    button { onclick: move |_| list_resource.restart(), "Retry" }
                }
            },
            Some(Ok(items)) if items.is_empty() => rsx! {
                Card {
                    h3 { "{title}" }
                    EmptyState { title: "Nothing here yet" }
                }
            },
            Some(Ok(items)) => rsx! {
                Card {
                    h3 { "{title}" }
                    table {
                        thead { tr {
                            th { "ID" }
                            th { "Timestamp" }
                        }}
                        tbody {
                            for tx in items.iter() {
                                TxRow { key: "{tx.tx_id}", tx: tx.clone() }
                            }
                        }
                    }
                }
            },
        }
    }
}
