//! View state behind the dashboard screen.

use std::cmp::Reverse;

use api::network_event::NetworkEvent;
use api::tx_summary::DashboardTx;
use api::tx_summary::TxSummary;
use itertools::Itertools;

use crate::recent_list::BoundedRecentList;

/// Whether the dashboard is following the live feed or showing a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum ListMode {
    #[default]
    Live,
    Search,
}

/// Splits records into `(blocks, transactions)` by their block flag,
/// preserving the relative order within each group.
pub fn partition_by_kind(items: impl IntoIterator<Item = TxSummary>) -> (Vec<TxSummary>, Vec<TxSummary>) {
    items.into_iter().partition(|tx| tx.is_block)
}

fn newest_first(items: Vec<TxSummary>) -> Vec<TxSummary> {
    items
        .into_iter()
        .sorted_by_key(|tx| Reverse(tx.timestamp))
        .collect()
}

/// The two lists shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLists {
    blocks_cap: usize,
    tx_cap: usize,
    blocks: BoundedRecentList<TxSummary>,
    transactions: BoundedRecentList<TxSummary>,
    mode: ListMode,
}

impl DashboardLists {
    pub fn new(blocks_cap: usize, tx_cap: usize) -> Self {
        Self {
            blocks_cap,
            tx_cap,
            blocks: BoundedRecentList::new(blocks_cap),
            transactions: BoundedRecentList::new(tx_cap),
            mode: ListMode::Live,
        }
    }

    /// Replaces both lists with a fresh dashboard page and returns to live mode.
    ///
    /// Records are regrouped by their block flag and each group is ordered
    /// newest first by timestamp, so a record filed under the wrong key
    /// lands where its age puts it.
    pub fn show_initial(&mut self, page: DashboardTx) {
        let (blocks, transactions) = partition_by_kind(page.blocks.into_iter().chain(page.transactions));
        self.blocks = BoundedRecentList::new(self.blocks_cap);
        self.blocks.replace(newest_first(blocks));
        self.transactions = BoundedRecentList::new(self.tx_cap);
        self.transactions.replace(newest_first(transactions));
        self.mode = ListMode::Live;
    }

    /// Applies one feed event. Returns whether the lists changed.
    ///
    /// Only newly accepted entries matter. They are prepended to whatever is
    /// on display, search results included, and the list is cut back to its
    /// live cap.
    pub fn on_live_event(&mut self, event: NetworkEvent) -> bool {
        let NetworkEvent::NewTxAccepted(tx) = event else {
            return false;
        };
        let (list, cap) = if tx.is_block {
            (&mut self.blocks, self.blocks_cap)
        } else {
            (&mut self.transactions, self.tx_cap)
        };
        list.cap_at(cap);
        list.push_newest(tx);
        true
    }

    /// Shows an unordered search result, split by kind and without caps.
    pub fn show_search_result(&mut self, items: Vec<TxSummary>) {
        let (blocks, transactions) = partition_by_kind(items);
        self.blocks = BoundedRecentList::unbounded(blocks);
        self.transactions = BoundedRecentList::unbounded(transactions);
        self.mode = ListMode::Search;
    }

    pub fn blocks(&self) -> &BoundedRecentList<TxSummary> {
        &self.blocks
    }

    pub fn transactions(&self) -> &BoundedRecentList<TxSummary> {
        &self.transactions
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tx(id: &str, ts: u64) -> TxSummary {
        TxSummary::new(id, ts, false)
    }

    fn block(id: &str, ts: u64) -> TxSummary {
        TxSummary::new(id, ts, true)
    }

    fn accepted(t: TxSummary) -> NetworkEvent {
        NetworkEvent::NewTxAccepted(t)
    }

    fn ids(list: &BoundedRecentList<TxSummary>) -> Vec<&str> {
        list.iter().map(|t| t.tx_id.as_str()).collect()
    }

    #[test]
    fn blocks_feed_keeps_newest_two() {
        let mut lists = DashboardLists::new(2, 6);
        for (i, id) in ["B1", "B2", "B3"].into_iter().enumerate() {
            assert!(lists.on_live_event(accepted(block(id, i as u64))));
        }
        assert_eq!(ids(lists.blocks()), vec!["B3", "B2"]);
        assert!(lists.transactions().is_empty());
    }

    #[test]
    fn other_events_are_ignored() {
        let mut lists = DashboardLists::new(2, 2);
        assert!(!lists.on_live_event(NetworkEvent::Other));
        assert!(lists.is_empty());
    }

    #[test]
    fn initial_page_replaces_and_caps() {
        let mut lists = DashboardLists::new(1, 2);
        lists.on_live_event(accepted(tx("stale", 1)));
        lists.show_initial(DashboardTx {
            transactions: vec![tx("t3", 30), tx("t2", 20), tx("t1", 10)],
            blocks: vec![block("b2", 25), block("b1", 15)],
        });
        assert_eq!(ids(lists.transactions()), vec!["t3", "t2"]);
        assert_eq!(ids(lists.blocks()), vec!["b2"]);
        assert!(lists.mode().is_live());
    }

    #[test]
    fn initial_page_reclassifies_misplaced_records() {
        let mut lists = DashboardLists::new(6, 6);
        lists.show_initial(DashboardTx {
            transactions: vec![block("b", 2)],
            blocks: vec![],
        });
        assert_eq!(ids(lists.blocks()), vec!["b"]);
        assert!(lists.transactions().is_empty());
    }

    #[test]
    fn misfiled_block_is_merged_by_timestamp() {
        let mut lists = DashboardLists::new(6, 6);
        lists.show_initial(DashboardTx {
            transactions: vec![tx("t1", 10), block("late", 30)],
            blocks: vec![block("b2", 40), block("b1", 20)],
        });
        assert_eq!(ids(lists.blocks()), vec!["b2", "late", "b1"]);
        assert_eq!(ids(lists.transactions()), vec!["t1"]);
    }

    #[test]
    fn search_result_is_split_and_uncapped() {
        let mut lists = DashboardLists::new(1, 1);
        lists.show_search_result(vec![tx("t1", 1), block("b1", 2), tx("t2", 3)]);
        assert_eq!(lists.blocks().len(), 1);
        assert_eq!(lists.transactions().len(), 2);
        assert!(lists.mode().is_search());
    }

    #[test]
    fn live_events_are_prepended_to_search_results() {
        let mut lists = DashboardLists::new(2, 2);
        lists.show_search_result(vec![tx("found", 1)]);
        assert!(lists.on_live_event(accepted(tx("new", 2))));
        assert_eq!(ids(lists.transactions()), vec!["new", "found"]);
        assert!(lists.mode().is_search());
    }

    #[test]
    fn live_event_cuts_a_long_search_result_to_the_cap() {
        let mut lists = DashboardLists::new(2, 2);
        lists.show_search_result(vec![tx("s3", 3), tx("s2", 2), tx("s1", 1)]);
        lists.on_live_event(accepted(tx("new", 4)));
        assert_eq!(ids(lists.transactions()), vec!["new", "s3"]);
        assert!(lists.blocks().is_empty());
    }

    #[test]
    fn reset_twice_equals_reset_once() {
        let page = DashboardTx {
            transactions: vec![tx("t1", 1)],
            blocks: vec![block("b1", 2)],
        };
        let mut lists = DashboardLists::new(6, 6);
        lists.show_search_result(vec![tx("x", 9), tx("y", 8)]);

        lists.show_initial(page.clone());
        let once = lists.clone();
        lists.show_initial(page);
        assert_eq!(lists, once);
    }

    proptest! {
        #[test]
        fn every_record_lands_in_exactly_one_list(
            flags in prop::collection::vec(any::<bool>(), 0..40),
        ) {
            let items: Vec<TxSummary> = flags
                .iter()
                .enumerate()
                .map(|(i, &is_block)| TxSummary::new(i.to_string(), i as u64, is_block))
                .collect();

            let mut lists = DashboardLists::new(0, 0);
            lists.show_search_result(items.clone());

            for item in &items {
                let in_blocks = lists.blocks().iter().any(|t| t == item);
                let in_txs = lists.transactions().iter().any(|t| t == item);
                prop_assert!(in_blocks != in_txs);
                prop_assert_eq!(in_blocks, item.is_block);
            }
            prop_assert_eq!(lists.blocks().len() + lists.transactions().len(), items.len());
        }

        #[test]
        fn live_feed_respects_both_caps(
            blocks_cap in 0usize..5,
            tx_cap in 0usize..5,
            events in prop::collection::vec((0u8..10, any::<bool>()), 0..50),
        ) {
            let mut lists = DashboardLists::new(blocks_cap, tx_cap);
            for (seq, (id, is_block)) in events.into_iter().enumerate() {
                let id = format!("{}-{}", if is_block { "b" } else { "t" }, id);
                lists.on_live_event(accepted(TxSummary::new(id, seq as u64, is_block)));
                prop_assert!(lists.blocks().len() <= blocks_cap);
                prop_assert!(lists.transactions().len() <= tx_cap);
                prop_assert!(lists.blocks().iter().all(|t| t.is_block));
                prop_assert!(lists.transactions().iter().all(|t| !t.is_block));
            }
        }
    }
}
