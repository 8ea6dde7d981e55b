//! An in-process publish/subscribe bus for network events.
//!
//! The UI runs on a single thread, so the subscriber table lives behind an
//! `Rc<RefCell<_>>`. Each subscriber owns an unbounded channel and events are
//! delivered in publish order.

use std::cell::RefCell;
use std::rc::Rc;
use std::rc::Weak;

use api::network_event::NetworkEvent;
use tokio::sync::mpsc;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    senders: Vec<(u64, mpsc::UnboundedSender<NetworkEvent>)>,
}

/// A cloneable handle to the shared feed. All clones publish to and
/// subscribe on the same bus.
#[derive(Clone, Default)]
pub struct LiveFeed {
    subscribers: Rc<RefCell<Subscribers>>,
}

impl LiveFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber. The returned handle unsubscribes when
    /// dropped.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut subs = self.subscribers.borrow_mut();
        let id = subs.next_id;
        subs.next_id += 1;
        subs.senders.push((id, tx));

        Subscription {
            id,
            rx,
            feed: Rc::downgrade(&self.subscribers),
        }
    }

    /// Sends `event` to every live subscriber and returns how many got it.
    pub fn publish(&self, event: NetworkEvent) -> usize {
        let mut subs = self.subscribers.borrow_mut();
        subs.senders.retain(|(_, tx)| tx.send(event.clone()).is_ok());
        subs.senders.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().senders.len()
    }
}

/// A live registration on a [`LiveFeed`].
pub struct Subscription {
    id: u64,
    rx: mpsc::UnboundedReceiver<NetworkEvent>,
    feed: Weak<RefCell<Subscribers>>,
}

impl Subscription {
    /// Waits for the next event. Returns `None` once the feed is gone.
    pub async fn recv(&mut self) -> Option<NetworkEvent> {
        self.rx.recv().await
    }

    /// Takes the next queued event, if any, without waiting.
    #[cfg(test)]
    pub fn try_recv(&mut self) -> Option<NetworkEvent> {
        self.rx.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.feed.upgrade() {
            subscribers
                .borrow_mut()
                .senders
                .retain(|(id, _)| *id != self.id);
        }
    }
}
