//! Publishes newly accepted network entries onto the [`LiveFeed`].
//!
//! The full node is polled for its dashboard page; anything that was not on
//! the previous page is published as a `NewTxAccepted` event, oldest first,
//! so subscribers that prepend end up newest first.

use std::collections::HashSet;
use std::time::Duration;

use api::network_event::NetworkEvent;
use api::prefs::dashboard_prefs::DashboardPrefs;
use api::tx_summary::DashboardTx;
use dioxus::prelude::*;
use itertools::Itertools;

use crate::live_feed::LiveFeed;

/// Tracks which entries were on the last polled page.
#[derive(Debug, Default)]
pub(crate) struct FeedDiff {
    previous: Option<HashSet<String>>,
}

impl FeedDiff {
    /// Returns events for the entries of `page` not seen on the previous
    /// page. The first page only primes the diff.
    pub(crate) fn fresh_events(&mut self, page: DashboardTx) -> Vec<NetworkEvent> {
        let current: HashSet<String> = page
            .blocks
            .iter()
            .chain(page.transactions.iter())
            .map(|tx| tx.tx_id.clone())
            .collect();

        let events = match &self.previous {
            None => Vec::new(),
            Some(previous) => page
                .blocks
                .into_iter()
                .chain(page.transactions)
                .filter(|tx| !previous.contains(&tx.tx_id))
                .sorted_by_key(|tx| tx.timestamp)
                .map(NetworkEvent::NewTxAccepted)
                .collect(),
        };

        self.previous = Some(current);
        events
    }
}

pub fn use_feed_pump(feed: LiveFeed, prefs: DashboardPrefs) {
    use_future(move || {
        let feed = feed.clone();
        let prefs = prefs.clone();
        async move {
            let mut diff = FeedDiff::default();
            loop {
                match api::dashboard_tx(prefs.blocks_count, prefs.tx_count).await {
                    Ok(page) => {
                        let events = diff.fresh_events(page);
                        if !events.is_empty() {
                            dioxus_logger::tracing::debug!(
                                "Publishing {} new entries to {} subscribers",
                                events.len(),
                                feed.subscriber_count()
                            );
                        }
                        for event in events {
                            feed.publish(event);
                        }
                    }
                    Err(e) => dioxus_logger::tracing::debug!("Feed poll failed: {}", e),
                }
                crate::compat::sleep(Duration::from_secs(prefs.feed_poll_secs)).await;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::tx_summary::TxSummary;

    fn page(blocks: &[(&str, u64)], txs: &[(&str, u64)]) -> DashboardTx {
        DashboardTx {
            blocks: blocks.iter().map(|(id, ts)| TxSummary::new(*id, *ts, true)).collect(),
            transactions: txs.iter().map(|(id, ts)| TxSummary::new(*id, *ts, false)).collect(),
        }
    }

    fn ids(events: &[NetworkEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|e| match e {
                NetworkEvent::NewTxAccepted(tx) => Some(tx.tx_id.as_str()),
                NetworkEvent::Other => None,
            })
            .collect()
    }

    #[test]
    fn first_page_only_primes() {
        let mut diff = FeedDiff::default();
        assert!(diff.fresh_events(page(&[("b1", 1)], &[("t1", 2)])).is_empty());
    }

    #[test]
    fn new_entries_come_out_oldest_first() {
        let mut diff = FeedDiff::default();
        diff.fresh_events(page(&[("b1", 1)], &[("t1", 2)]));

        let events = diff.fresh_events(page(&[("b2", 5), ("b1", 1)], &[("t3", 6), ("t2", 4), ("t1", 2)]));
        assert_eq!(ids(&events), vec!["t2", "b2", "t3"]);
    }

    #[test]
    fn unchanged_page_publishes_nothing() {
        let mut diff = FeedDiff::default();
        let p = page(&[("b1", 1)], &[]);
        diff.fresh_events(p.clone());
        assert!(diff.fresh_events(p).is_empty());
    }
}
