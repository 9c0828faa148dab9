//! Change-notification subscriptions.
//!
//! Hosts need to know when canvas state changed so they can redraw. Rather
//! than leaking raw callbacks with no teardown story, observers acquire a
//! [`Subscription`] guard: dropping it deterministically unregisters the
//! callback, so a handler can never outlive the view it was registered for.
//!
//! Single-threaded by design, like the rest of the crate. Notification is
//! reentrancy-safe: a callback may drop its own subscription or register new
//! observers while being invoked; newly added observers are not called until
//! the next notification round.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

type Callback = Box<dyn FnMut()>;

#[derive(Default)]
struct Inner {
    next_id: u64,
    // A `None` slot means the callback is currently being invoked; if the
    // entry disappears meanwhile, the subscription was dropped mid-call.
    subscribers: BTreeMap<u64, Option<Callback>>,
}

/// A set of registered change observers.
#[derive(Default)]
pub struct SubscriberSet {
    inner: Rc<RefCell<Inner>>,
}

impl SubscriberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. The callback stays registered until the returned
    /// guard is dropped.
    #[must_use]
    pub fn subscribe(&self, callback: impl FnMut() + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.insert(id, Some(Box::new(callback)));
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Invoke every observer registered at the start of this call.
    pub fn notify(&self) {
        let ids: Vec<u64> = self.inner.borrow().subscribers.keys().copied().collect();
        for id in ids {
            // Take the callback out so the map is not borrowed while it runs.
            let taken = self
                .inner
                .borrow_mut()
                .subscribers
                .get_mut(&id)
                .and_then(Option::take);
            let Some(mut callback) = taken else { continue };
            callback();
            // Reinstall unless the subscription was dropped during the call.
            let mut inner = self.inner.borrow_mut();
            if let Some(slot) = inner.subscribers.get_mut(&id) {
                if slot.is_none() {
                    *slot = Some(callback);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().subscribers.is_empty()
    }
}

/// RAII guard for a registered observer; dropping it unregisters.
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Subscription {
    /// Keep the observer registered for as long as the set itself lives.
    pub fn detach(mut self) {
        self.inner = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().subscribers.remove(&self.id);
        }
    }
}
