//! Messages carried by the live network feed.

use crate::tx_summary::TxSummary;

/// A notification on the network feed.
///
/// Only newly accepted transactions and blocks are modelled; anything else
/// the feed carries is [`NetworkEvent::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkEvent {
    NewTxAccepted(TxSummary),
    Other,
}
