//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;

use crate::address_loading::AddressLoadingAction;
use crate::address_loading::AddressLoadingState;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Screens read the `Signal`s and never write them directly. Every change
/// goes through [`AppStateMut::dispatch`], which queues the action on the
/// store coroutine so updates are applied one at a time, in order.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Progress of the wallet's address history load.
    pub address_loading: Signal<AddressLoadingState>,
    actions: Coroutine<AddressLoadingAction>,
}

impl AppStateMut {
    pub fn new(
        address_loading: Signal<AddressLoadingState>,
        actions: Coroutine<AddressLoadingAction>,
    ) -> Self {
        Self {
            address_loading,
            actions,
        }
    }

    pub fn dispatch(&self, action: AddressLoadingAction) {
        self.actions.send(action);
    }
}

/// Creates the address loading store. Must be called once, at the top of
/// the app, before the result is provided as context.
pub fn use_address_loading_store(initially_loading: bool) -> AppStateMut {
    let mut state = use_signal(|| AddressLoadingState::new(initially_loading));

    let actions = use_coroutine(move |mut rx: UnboundedReceiver<AddressLoadingAction>| async move {
        use futures::StreamExt;
        while let Some(action) = rx.next().await {
            dioxus_logger::tracing::debug!("address loading: {:?}", action);
            state.write().apply(action);
        }
    });

    AppStateMut::new(state, actions)
}
