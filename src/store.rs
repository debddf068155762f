//! The canonical, observable list of prospects.
//!
//! Entries live in an arena keyed by [`Id<Prospect>`]; a separate vector keeps
//! insertion order. Every lookup and mutation goes through the id, never a
//! position, so references held by views stay valid while prospects are added.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::model::{Id, Prospect};

/// Store shared between the views of one screen and the capability callbacks.
pub type SharedStore = Rc<RefCell<ProspectStore>>;

/// Published to subscribers after each successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Added(Prospect),
    Toggled(Prospect),
}

impl StoreChange {
    pub fn prospect(&self) -> &Prospect {
        match self {
            StoreChange::Added(p) | StoreChange::Toggled(p) => p,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreChange)>;

#[derive(Default)]
pub struct ProspectStore {
    order: Vec<Id<Prospect>>,
    entries: HashMap<Id<Prospect>, Prospect>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ProspectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from previously saved state. Subscribers are not told.
    pub fn with_people(people: Vec<Prospect>) -> Self {
        let mut store = Self::new();
        for prospect in people {
            store.insert(prospect);
        }
        store
    }

    pub fn shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    /// Prospects in the order they were added.
    pub fn people(&self) -> impl Iterator<Item = &Prospect> + '_ {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    pub fn get(&self, id: Id<Prospect>) -> Option<&Prospect> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append a prospect. Duplicate emails are fine; a duplicate id is ignored.
    pub fn add(&mut self, prospect: Prospect) {
        if self.insert(prospect.clone()) {
            tracing::debug!(id = %prospect.id, name = %prospect.name, "prospect added");
            self.notify(&StoreChange::Added(prospect));
        } else {
            tracing::debug!(id = %prospect.id, "prospect already in store, not added again");
        }
    }

    /// Flip the contacted flag of the prospect with `id`. Unknown ids are a no-op.
    pub fn toggle(&mut self, id: Id<Prospect>) {
        let updated = match self.entries.get_mut(&id) {
            Some(p) => {
                p.is_contacted = !p.is_contacted;
                p.clone()
            }
            None => {
                tracing::debug!(%id, "toggle for unknown prospect ignored");
                return;
            }
        };
        tracing::debug!(%id, contacted = updated.is_contacted, "prospect toggled");
        self.notify(&StoreChange::Toggled(updated));
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&StoreChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn insert(&mut self, prospect: Prospect) -> bool {
        if self.entries.contains_key(&prospect.id) {
            return false;
        }
        self.order.push(prospect.id);
        self.entries.insert(prospect.id, prospect);
        true
    }

    fn notify(&mut self, change: &StoreChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = ProspectStore::new();
        store.add(Prospect::with_details("Zed", "z@x.com"));
        store.add(Prospect::with_details("Amy", "a@x.com"));
        let names: Vec<&str> = store.people().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn same_id_is_not_added_twice() {
        let mut store = ProspectStore::new();
        let p = Prospect::with_details("Amy", "a@x.com");
        store.add(p.clone());
        store.add(p);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut store = ProspectStore::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.add(Prospect::with_details("Amy", "a@x.com"));
        assert!(store.unsubscribe(sub));
        store.add(Prospect::with_details("Bea", "b@x.com"));

        assert_eq!(calls.get(), 1);
        assert!(!store.unsubscribe(sub));
    }

    #[test]
    fn seeding_does_not_notify() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut store = ProspectStore::with_people(vec![Prospect::with_details("Amy", "a@x.com")]);
        store.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(store.len(), 1);
        assert_eq!(calls.get(), 0);
    }
}
