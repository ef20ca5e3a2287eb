//! Target selection events.
//!
//! Delivery is synchronous and unqueued: listeners run inside the tick that
//! raised the event, in subscription order. A listener added after an event
//! fired never sees it.

use std::fmt;

use glam::Vec3;

/// A target was committed at `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionEvent {
    pub position: Vec3,
}

/// Handle returned by [`SelectionBroadcaster::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SelectionEvent)>;

/// Fan-out of selection events to any number of listeners.
#[derive(Default)]
pub struct SelectionBroadcaster {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl fmt::Debug for SelectionBroadcaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionBroadcaster")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SelectionBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SelectionEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener.
    pub fn emit(&mut self, event: &SelectionEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}
