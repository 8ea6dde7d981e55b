//! HTTP client for the full node's public API.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::tx_summary::DashboardTx;
use crate::tx_summary::TxKind;
use crate::tx_summary::TxSummary;

const DEFAULT_FULL_NODE_URL: &str = "http://localhost:8080/v1a/";

#[derive(Debug, thiserror::Error)]
pub enum FullNodeError {
    #[error("full node request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("full node returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("full node rejected the request: {0}")]
    Rejected(String),
    #[error("unexpected full node response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn full_node_url() -> String {
    std::env::var("FULL_NODE_URL").unwrap_or_else(|_| DEFAULT_FULL_NODE_URL.to_string())
}

/// A client for the full node's REST endpoints.
pub struct FullNode {
    base_url: String,
    client: reqwest::Client,
}

impl FullNode {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FullNodeError> {
        let url = self.endpoint(path);
        dioxus_logger::tracing::debug!("GET {} {:?}", url, query);

        let resp = self.client.get(&url).query(query).send().await?;
        if !resp.status().is_success() {
            return Err(FullNodeError::Status(resp.status()));
        }
        decode_body(resp.json::<Value>().await?)
    }
}

/// Checks the node's `success` flag and decodes the rest of the body.
fn decode_body<T: DeserializeOwned>(body: Value) -> Result<T, FullNodeError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("no reason given")
            .to_string();
        return Err(FullNodeError::Rejected(message));
    }
    Ok(serde_json::from_value(body)?)
}

#[derive(Deserialize)]
struct TransactionsBody {
    #[serde(default)]
    transactions: Vec<TxSummary>,
}

#[derive(Debug, Deserialize)]
struct HistoryBody {
    #[serde(default)]
    history: Vec<TxSummary>,
}

impl FullNode {
    /// The latest `block_limit` blocks and `tx_limit` transactions, newest first.
    pub async fn dashboard_tx(
        &self,
        block_limit: usize,
        tx_limit: usize,
    ) -> Result<DashboardTx, FullNodeError> {
        self.get(
            "dashboard_tx",
            &[("block", block_limit.to_string()), ("tx", tx_limit.to_string())],
        )
        .await
    }

    /// Up to `count` of the most recent records touching `address`.
    pub async fn address_search(
        &self,
        address: &str,
        count: usize,
    ) -> Result<Vec<TxSummary>, FullNodeError> {
        let body: TransactionsBody = self
            .get(
                "thin_wallet/address_search",
                &[("address", address.to_string()), ("count", count.to_string())],
            )
            .await?;
        Ok(body.transactions)
    }

    /// The full history of `address`.
    pub async fn address_history(&self, address: &str) -> Result<Vec<TxSummary>, FullNodeError> {
        let body: HistoryBody = self
            .get(
                "thin_wallet/address_history",
                &[("addresses[]", address.to_string())],
            )
            .await?;
        Ok(body.history)
    }

    /// The latest `count` records of one kind, newest first.
    pub async fn tx_list(
        &self,
        kind: TxKind,
        count: usize,
    ) -> Result<Vec<TxSummary>, FullNodeError> {
        let kind: &'static str = kind.into();
        let body: TransactionsBody = self
            .get(
                "transaction",
                &[("type", kind.to_string()), ("count", count.to_string())],
            )
            .await?;
        Ok(body.transactions)
    }
}

/// A client for the configured node.
///
/// No caching for now. A new client per call means nothing needs to be
/// invalidated after a connection error.
pub fn client() -> FullNode {
    FullNode::new(full_node_url())
}
