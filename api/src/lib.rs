//! This crate contains all shared fullstack server functions.

#[cfg(not(target_arch = "wasm32"))]
mod full_node;
pub mod network_event;
pub mod prefs;
pub mod tx_summary;

use dioxus::prelude::*;
use prefs::user_prefs::UserPrefs;
use tx_summary::DashboardTx;
use tx_summary::TxKind;
use tx_summary::TxSummary;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it just
/// returns the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

/// The most recent blocks and transactions, newest first.
#[post("/api/dashboard_tx")]
pub async fn dashboard_tx(block_limit: usize, tx_limit: usize) -> Result<DashboardTx, ApiError> {
    let data = full_node::client()
        .dashboard_tx(block_limit, tx_limit)
        .await?;
    Ok(data)
}

#[post("/api/address_search")]
pub async fn address_search(address: String, count: usize) -> Result<Vec<TxSummary>, ApiError> {
    let data = full_node::client().address_search(&address, count).await?;
    Ok(data)
}

#[post("/api/address_history")]
pub async fn address_history(address: String) -> Result<Vec<TxSummary>, ApiError> {
    let history = full_node::client().address_history(&address).await?;
    dioxus_logger::tracing::debug!("{} history entries for {}", history.len(), address);
    Ok(history)
}

#[post("/api/tx_list")]
pub async fn tx_list(kind: TxKind, count: usize) -> Result<Vec<TxSummary>, ApiError> {
    let data = full_node::client().tx_list(kind, count).await?;
    Ok(data)
}
