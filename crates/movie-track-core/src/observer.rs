//! Listener registry behind [`Store::notify`](crate::Store::notify).
//!
//! The store keeps one render slot (the view layer's redraw function) plus any
//! number of subscribers. Listeners are cloned out of the registry before they
//! run, so a listener may call back into the store.

use std::sync::Arc;

use crate::state::StoreState;

pub type Listener = Arc<dyn Fn(&StoreState) + Send + Sync>;

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct ObserverRegistry {
    render: Option<Listener>,
    subscribers: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ObserverRegistry {
    /// Replaces any previously registered render callback.
    pub fn set_render(&mut self, listener: Listener) {
        self.render = Some(listener);
    }

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscribers.push((id, listener));
        id
    }

    /// Returns false when the id was not (or no longer) registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Render callback first, then subscribers in registration order.
    pub fn listeners(&self) -> Vec<Listener> {
        self.render
            .iter()
            .cloned()
            .chain(self.subscribers.iter().map(|(_, l)| Arc::clone(l)))
            .collect()
    }
}
