//! Shared building blocks used by the screens.
pub mod action_link;
pub mod empty_state;
pub mod pico;
pub mod search_tx;
pub mod tx_row;
