//! Shared progress of the wallet's address history load.

/// What the loading screen reads: how many addresses are done and whether
/// the load is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressLoadingState {
    pub already_loaded: u32,
    pub loading_addresses: bool,
}

/// Updates accepted by the address loading store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressLoadingAction {
    /// Sets the loaded-address counter.
    AddressesLoaded(u32),
    /// Marks the load as running or finished.
    LoadingAddresses(bool),
}

impl AddressLoadingState {
    pub fn new(loading_addresses: bool) -> Self {
        Self {
            already_loaded: 0,
            loading_addresses,
        }
    }

    pub fn apply(&mut self, action: AddressLoadingAction) {
        match action {
            AddressLoadingAction::AddressesLoaded(count) => self.already_loaded = count,
            AddressLoadingAction::LoadingAddresses(loading) => self.loading_addresses = loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AddressLoadingAction::*;

    #[test]
    fn applies_actions_in_order() {
        let mut state = AddressLoadingState::default();
        for action in [LoadingAddresses(true), AddressesLoaded(1), AddressesLoaded(2)] {
            state.apply(action);
        }
        assert_eq!(
            state,
            AddressLoadingState {
                already_loaded: 2,
                loading_addresses: true
            }
        );

        state.apply(AddressesLoaded(0));
        state.apply(LoadingAddresses(false));
        assert_eq!(state, AddressLoadingState::new(false));
    }
}
