use api::tx_summary::TxSummary;
use dioxus::prelude::*;

/// Address search box.
///
/// Submitting an address fetches its recent records and hands them to
/// `on_result`. Submitting an empty box calls `on_reset`.
#[component]
pub fn SearchTx(
    search_count: usize,
    on_result: EventHandler<Vec<TxSummary>>,
    on_reset: EventHandler<()>,
) -> Element {
    let mut query = use_signal(String::new);
    let mut searching = use_signal(|| false);

    rsx! {
        form {
            onsubmit: move |evt| {
                evt.prevent_default();

                let address = query.read().trim().to_string();
                if address.is_empty() {
                    on_reset.call(());
                    return;
                }

                searching.set(true);
                spawn(async move {
                    match api::address_search(address.clone(), search_count).await {
                        Ok(items) => {
                            dioxus_logger::tracing::info!("{} results for {}", items.len(), address);
                            on_result.call(items);
                        }
                        Err(e) => {
                            dioxus_logger::tracing::warn!("Address search failed for {}: {}", address, e);
                        }
                    }
                    searching.set(false);
                });
            },
            div {
                role: "group",
                input {
                    r#type: "search",
                    placeholder: "Search by address",
                    value: "{query}",
                    oninput: move |event| query.set(event.value()),
                }
                button {
                    r#type: "submit",
                    disabled: searching(),
                    "Search"
                }
            }
        }
    }
}
