//! A newest-first list with a fixed capacity.

use std::collections::VecDeque;

use api::tx_summary::TxSummary;

/// Items that carry a unique identity within a list.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for TxSummary {
    fn key(&self) -> &str {
        &self.tx_id
    }
}

/// An ordered sequence, newest first, holding at most `cap` items.
///
/// Pushing an item prepends it and evicts from the old end once the cap is
/// exceeded. Keys are unique: pushing an item whose key is already present
/// moves it to the front. An unbounded list has no cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedRecentList<T> {
    items: VecDeque<T>,
    cap: Option<usize>,
}

impl<T: Keyed> BoundedRecentList<T> {
    pub fn new(cap: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(cap),
            cap: Some(cap),
        }
    }

    /// Wraps `items`, assumed newest first, without any cap.
    pub fn unbounded(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
            cap: None,
        }
    }

    /// Replaces the contents with `items` (newest first), keeping only the
    /// newest `cap` of them.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items.into();
        self.truncate_to_cap();
    }

    /// Sets the cap, dropping the oldest items beyond it.
    pub fn cap_at(&mut self, cap: usize) -> Vec<T> {
        self.cap = Some(cap);
        self.truncate_to_cap()
    }

    /// Prepends `item`, returning whatever fell off the old end.
    pub fn push_newest(&mut self, item: T) -> Vec<T> {
        if let Some(pos) = self.items.iter().position(|i| i.key() == item.key()) {
            self.items.remove(pos);
        }
        self.items.push_front(item);
        self.truncate_to_cap()
    }

    fn truncate_to_cap(&mut self) -> Vec<T> {
        match self.cap {
            Some(cap) if self.items.len() > cap => self.items.split_off(cap).into(),
            _ => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
