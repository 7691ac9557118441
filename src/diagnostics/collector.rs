// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating toast lifecycle events.

use std::collections::{BTreeMap, VecDeque};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{StoreEvent, StoreEventKind};
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;
use crate::domain::diagnostics::EventCapacity;

/// Handle for sending lifecycle events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel so a store never blocks on it.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<StoreEvent>,
}

impl DiagnosticsHandle {
    /// Records an event, dropping it if the channel is full.
    pub fn log(&self, kind: StoreEventKind) {
        let _ = self.event_tx.try_send(StoreEvent::new(kind));
    }

    /// Records an event and reports whether the channel accepted it.
    ///
    /// # Errors
    ///
    /// Returns the rejected event if the channel is full or the collector
    /// is gone.
    pub fn try_log(&self, kind: StoreEventKind) -> Result<(), TrySendError<StoreEvent>> {
        self.event_tx.try_send(StoreEvent::new(kind))
    }
}

/// Collects store events into a ring of fixed capacity.
///
/// Events are kept oldest first; once full, each new event evicts the
/// oldest one.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    events: VecDeque<StoreEvent>,
    capacity: usize,
    event_rx: Receiver<StoreEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<StoreEvent>,
}

impl DiagnosticsCollector {
    /// Creates a new collector retaining at most `capacity` events.
    #[must_use]
    pub fn new(capacity: EventCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the ring.
    ///
    /// Call this periodically, e.g. once per UI frame.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.push(event);
        }
    }

    fn push(&mut self, event: StoreEvent) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Returns the number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &StoreEvent> {
        self.events.iter()
    }

    /// Counts stored events per [`StoreEventKind::label`].
    #[must_use]
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for event in &self.events {
            *counts.entry(event.kind.label()).or_insert(0) += 1;
        }
        counts
    }

    /// Clears all stored events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the ring capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
