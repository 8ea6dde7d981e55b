use std::fmt::Display;
use std::future::Future;

use api::tx_summary::TxSummary;
use dioxus::prelude::*;

use crate::address_loading::AddressLoadingAction;
use crate::app_state_mut::AppStateMut;

/// Fetches the history of every wallet address once, reporting progress to
/// the address loading store.
///
/// The fetched entries are counted and logged, not kept: the dashboard and
/// list screens query the node themselves. What the rest of the app sees is
/// the store's loaded-address counter and loading flag.
pub fn use_address_history_loader(addresses: Vec<String>, store: AppStateMut) {
    use_future(move || {
        let addresses = addresses.clone();
        async move {
            let entries = load_histories(addresses, api::address_history, |action| {
                store.dispatch(action)
            })
            .await;
            dioxus_logger::tracing::debug!("Address history load done, {} entries", entries);
        }
    });
}

/// Runs `fetch` for each address in turn and returns the total number of
/// entries fetched.
///
/// A failed fetch is logged and the address still counts as processed, so
/// the loading screen cannot get stuck on a single bad address. Nothing is
/// dispatched when there are no addresses.
pub(crate) async fn load_histories<F, Fut, E>(
    addresses: Vec<String>,
    fetch: F,
    mut dispatch: impl FnMut(AddressLoadingAction),
) -> usize
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<TxSummary>, E>>,
    E: Display,
{
    if addresses.is_empty() {
        return 0;
    }
    dispatch(AddressLoadingAction::LoadingAddresses(true));

    let mut entries = 0;
    let mut loaded = 0;
    for address in addresses {
        match fetch(address.clone()).await {
            Ok(history) => {
                dioxus_logger::tracing::info!(
                    "Loaded {} history entries for {}",
                    history.len(),
                    address
                );
                entries += history.len();
            }
            Err(e) => {
                dioxus_logger::tracing::warn!("Failed to load history for {}: {}", address, e)
            }
        }
        loaded += 1;
        dispatch(AddressLoadingAction::AddressesLoaded(loaded));
    }

    dispatch(AddressLoadingAction::LoadingAddresses(false));
    entries
}
