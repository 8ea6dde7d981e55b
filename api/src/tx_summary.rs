//! Wire types for transactions and blocks as reported by the full node.

use serde::Deserialize;
use serde::Serialize;

/// Version numbers the full node assigns to blocks. Every other version is a
/// plain transaction.
const BLOCK_VERSION: u8 = 0;
const MERGED_MINED_BLOCK_VERSION: u8 = 3;

/// The minimal view of a transaction or block needed to list it.
///
/// Decodes from either shape the node emits: records carrying an explicit
/// `is_block` flag (dashboard and websocket payloads) and records carrying
/// only a `version` (address search and history). A record with neither is
/// treated as a plain transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTxSummary")]
pub struct TxSummary {
    pub tx_id: String,
    /// Seconds since the unix epoch.
    pub timestamp: u64,
    pub is_block: bool,
}

impl TxSummary {
    pub fn new(tx_id: impl Into<String>, timestamp: u64, is_block: bool) -> Self {
        Self {
            tx_id: tx_id.into(),
            timestamp,
            is_block,
        }
    }

    pub fn kind(&self) -> TxKind {
        if self.is_block {
            TxKind::Block
        } else {
            TxKind::Tx
        }
    }
}

#[derive(Deserialize)]
struct RawTxSummary {
    tx_id: String,
    #[serde(default)]
    timestamp: u64,
    #[serde(default)]
    is_block: Option<bool>,
    #[serde(default)]
    version: Option<u8>,
}

impl From<RawTxSummary> for TxSummary {
    fn from(raw: RawTxSummary) -> Self {
        let is_block = raw.is_block.unwrap_or_else(|| {
            matches!(
                raw.version,
                Some(BLOCK_VERSION) | Some(MERGED_MINED_BLOCK_VERSION)
            )
        });
        Self {
            tx_id: raw.tx_id,
            timestamp: raw.timestamp,
            is_block,
        }
    }
}

/// The recent-activity page returned by the node's dashboard endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardTx {
    #[serde(default)]
    pub transactions: Vec<TxSummary>,
    #[serde(default)]
    pub blocks: Vec<TxSummary>,
}

/// Selects blocks or plain transactions on the list endpoints.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIs, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum TxKind {
    Block,
    Tx,
}

impl TxKind {
    /// Heading used wherever a list of this kind is shown.
    pub fn title(&self) -> &'static str {
        match self {
            TxKind::Block => "Blocks",
            TxKind::Tx => "Transactions",
        }
    }
}
