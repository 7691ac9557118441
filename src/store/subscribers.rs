// SPDX-License-Identifier: MPL-2.0
//! Change subscriptions.
//!
//! Subscribers are zero-argument callbacks told that the snapshot changed;
//! they pull the new state themselves. Fan-out walks a copy of the
//! registrations, so callbacks may subscribe or unsubscribe freely.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

type Callback = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    callbacks: Mutex<Vec<(u64, Callback)>>,
}

impl Registry {
    fn remove(&self, id: u64) {
        self.callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(registered, _)| *registered != id);
    }
}

/// Registered change listeners of one store.
#[derive(Default)]
pub(crate) struct Subscribers {
    registry: Arc<Registry>,
}

impl Subscribers {
    pub(crate) fn subscribe<F>(&self, callback: F) -> Unsubscribe
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        let callback: Callback = Arc::new(callback);
        self.registry
            .callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, callback));
        Unsubscribe {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Calls every callback registered when the round starts.
    ///
    /// Must be called without holding any store lock.
    pub(crate) fn notify(&self) {
        let round: Vec<Callback> = self
            .registry
            .callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in round {
            callback();
        }
    }

    pub(crate) fn clear(&self) {
        self.registry
            .callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.registry
            .callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Removes one subscription. Calling it more than once is harmless.
#[derive(Debug, Clone)]
pub struct Unsubscribe {
    registry: Weak<Registry>,
    id: u64,
}

impl Unsubscribe {
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
    }
}
