// SPDX-License-Identifier: MPL-2.0
//! The toast store.
//!
//! A [`ToastStore`] owns the ordered list of active toasts (newest first),
//! one auto-dismiss timer per toast, and the set of change subscribers.
//! Renderers observe it through [`ToastStore::get_snapshot`] and
//! [`ToastStore::subscribe`]; they never mutate it directly.
//!
//! # Lifecycle of a toast
//!
//! ```text
//!  add ──▶ Active ──(timer / dismiss)──▶ Leaving ──(hook settles)──▶ removed
//!            │  ▲                           │
//!            └──┘ update                    └── update is ignored
//! ```
//!
//! Without a pre-dismiss hook, or with a hook that completes on the spot,
//! a toast goes from `Active` straight to removed.
//!
//! # Runtime
//!
//! Timers and pending hooks run as tokio tasks on the runtime the store was
//! created in. The runtime needs its time driver enabled.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use toast_store::{ToastOptions, ToastStore, ToastStoreConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> toast_store::Result<()> {
//! let store = ToastStore::new(ToastStoreConfig::new(3, Duration::from_secs(5)))?;
//! let changes = store.subscribe(|| println!("toasts changed"));
//!
//! let id = store.add(ToastOptions::success("Image saved"));
//! assert_eq!(store.get_snapshot()[0].id(), &id);
//!
//! store.dismiss(&id);
//! assert!(store.is_empty());
//! changes.unsubscribe();
//! # Ok(())
//! # }
//! ```

mod config;
mod hook;
mod record;
mod subscribers;
mod timers;


pub use config::{ConfigPatch, ToastStoreConfig};
pub use hook::{BeforeDismiss, HookError, HookOutcome};
pub use record::{Payload, Presentation, ToastOptions, ToastPatch, ToastRecord};
pub use subscribers::Unsubscribe;

use crate::diagnostics::{DiagnosticsHandle, StoreEventKind};
use crate::domain::toast::{DismissReason, ToastId, ToastKind};
use crate::error::{Error, Result};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use subscribers::Subscribers;
use timers::{deadline_after, TimerSet};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace, warn};

/// Immutable view of the active toasts, newest first.
///
/// The same `Arc` is handed out until a mutation publishes a new one, so
/// `Arc::ptr_eq` tells whether anything changed.
pub type Snapshot = Arc<[ToastRecord]>;

/// Result of a dismissal request.
#[derive(Debug)]
pub enum Dismissal {
    /// No active toast had that id, or it was already leaving.
    Ignored,
    /// The toast is gone from the snapshot.
    Removed,
    /// The pre-dismiss hook is still running; the toast is marked leaving.
    Pending(PendingDismissal),
}

impl Dismissal {
    /// Waits until the toast has actually left the store.
    pub async fn settled(self) {
        if let Dismissal::Pending(pending) = self {
            pending.settled().await;
        }
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Dismissal::Ignored)
    }
}

/// A dismissal waiting on its pre-dismiss hook.
#[derive(Debug)]
pub struct PendingDismissal {
    task: JoinHandle<()>,
}

impl PendingDismissal {
    /// Waits for the hook to settle and the toast to be removed.
    pub async fn settled(self) {
        // An error only means the runtime is shutting down.
        let _ = self.task.await;
    }
}

/// Reactive store of active toasts.
///
/// Cloning yields another handle to the same store.
#[derive(Clone)]
pub struct ToastStore {
    shared: Arc<Shared>,
}

struct Shared {
    state: Mutex<State>,
    subscribers: Subscribers,
    runtime: Handle,
}

struct State {
    config: ToastStoreConfig,
    /// Newest first.
    records: Vec<ToastRecord>,
    snapshot: Snapshot,
    timers: TimerSet,
    next_seq: u64,
    diagnostics: Option<DiagnosticsHandle>,
}

impl State {
    fn new(config: ToastStoreConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            snapshot: Arc::from(Vec::new()),
            timers: TimerSet::default(),
            next_seq: 0,
            diagnostics: None,
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn position(&self, id: &ToastId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Replaces the published snapshot with the current records.
    fn publish(&mut self) {
        self.snapshot = self.records.iter().cloned().collect();
    }

    fn report(&self, kind: StoreEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }

    /// Drops the oldest toasts beyond the stack cap. No hook is involved.
    fn evict_overflow(&mut self) -> usize {
        let cap = self.config.max.value();
        if self.records.len() <= cap {
            return 0;
        }
        let evicted: Vec<ToastRecord> = self.records.drain(cap..).collect();
        for record in &evicted {
            self.timers.cancel(record.id());
            debug!(id = %record.id(), cap, "toast evicted by stack cap");
            self.report(StoreEventKind::Evicted {
                id: record.id().clone(),
            });
        }
        evicted.len()
    }
}

impl ToastStore {
    /// Creates a store driven by the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRuntime`] when called outside a tokio runtime.
    pub fn new(config: ToastStoreConfig) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        Ok(Self::with_runtime(config, runtime))
    }

    /// Creates a store whose timers run on the given runtime.
    #[must_use]
    pub fn with_runtime(config: ToastStoreConfig, runtime: Handle) -> Self {
        debug!(
            max = config.max.value(),
            default_duration_ms = config.default_duration.as_millis() as u64,
            "toast store created"
        );
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State::new(config)),
                subscribers: Subscribers::default(),
                runtime,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.shared.subscribers.notify();
    }

    /// Sends lifecycle events to a diagnostics collector from now on.
    pub fn set_diagnostics(&self, handle: DiagnosticsHandle) {
        self.lock().diagnostics = Some(handle);
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Adds a toast on top of the stack and returns its id.
    ///
    /// An active toast with the same id is replaced. If the stack then
    /// exceeds the cap, the oldest toasts are evicted silently.
    /// Subscribers are notified once.
    pub fn add(&self, options: ToastOptions) -> ToastId {
        let mut state = self.lock();
        let seq = state.next_seq();
        let record = ToastRecord::from_options(options, state.config.default_duration, seq);
        let id = record.id().clone();
        let kind = record.kind();
        let duration = record.duration();
        let deadline = deadline_after(duration);

        if let Some(index) = state.position(&id) {
            state.records.remove(index);
            state.timers.cancel(&id);
            debug!(id = %id, "replacing active toast with the same id");
        }
        state.records.insert(0, record);
        state.evict_overflow();
        self.schedule(&mut state, id.clone(), deadline);
        state.publish();
        state.report(StoreEventKind::Added {
            id: id.clone(),
            kind,
        });
        drop(state);

        trace!(id = %id, kind = kind.as_str(), duration_ms = duration.as_millis() as u64, "toast added");
        self.notify();
        id
    }

    /// Adds a toast whose body is rendered by the caller.
    pub fn add_custom(&self, options: ToastOptions) -> ToastId {
        self.add(options.kind(ToastKind::Custom))
    }

    /// Merges `patch` into an active toast.
    ///
    /// A new duration restarts the timer with the full new duration. Unknown
    /// ids and leaving toasts are ignored without notification. Returns
    /// whether the patch was applied.
    pub fn update(&self, id: &ToastId, patch: ToastPatch) -> bool {
        let mut state = self.lock();
        let Some(index) = state.position(id) else {
            return false;
        };
        if state.records[index].is_leaving() {
            trace!(id = %id, "update ignored, toast is leaving");
            return false;
        }

        let reschedule = patch.duration.map(deadline_after);
        let next = state.records[index].patched(patch);
        state.records[index] = next;
        if let Some(deadline) = reschedule {
            self.schedule(&mut state, id.clone(), deadline);
        }
        state.publish();
        state.report(StoreEventKind::Updated {
            id: id.clone(),
            rescheduled: reschedule.is_some(),
        });
        drop(state);

        trace!(id = %id, rescheduled = reschedule.is_some(), "toast updated");
        self.notify();
        true
    }

    /// Dismisses a toast on the caller's behalf.
    pub fn dismiss(&self, id: &ToastId) -> Dismissal {
        self.dismiss_with_reason(id, DismissReason::Manual)
    }

    /// Dismisses a toast, passing `reason` to the pre-dismiss hook.
    ///
    /// The timer is canceled right away. Without a hook the toast is removed
    /// before this returns. With a hook, the toast stays in the snapshot
    /// marked leaving until the hook settles; a failing hook still leads to
    /// removal. Calling this again for a leaving toast does nothing.
    pub fn dismiss_with_reason(&self, id: &ToastId, reason: DismissReason) -> Dismissal {
        let state = self.lock();
        self.dismiss_locked(state, id, reason)
    }

    fn dismiss_locked(
        &self,
        mut state: MutexGuard<'_, State>,
        id: &ToastId,
        reason: DismissReason,
    ) -> Dismissal {
        let Some(index) = state.position(id) else {
            return Dismissal::Ignored;
        };
        if state.records[index].is_leaving() {
            return Dismissal::Ignored;
        }
        state.timers.cancel(id);

        let Some(hook) = state.config.before_dismiss.clone() else {
            state.records.remove(index);
            state.publish();
            state.report(StoreEventKind::Removed {
                id: id.clone(),
                reason,
            });
            drop(state);

            debug!(id = %id, %reason, "toast dismissed");
            self.notify();
            return Dismissal::Removed;
        };

        let seq = state.records[index].seq();
        let leaving = state.records[index].leaving();
        state.records[index] = leaving;
        state.publish();
        state.report(StoreEventKind::Dismissing {
            id: id.clone(),
            reason,
        });
        drop(state);

        trace!(id = %id, %reason, "running before-dismiss hook");
        match hook.invoke(id, reason) {
            Ok(HookOutcome::Done) => {
                self.finish_dismissal(id, seq, reason);
                Dismissal::Removed
            }
            Err(err) => {
                self.hook_failed(id, &err);
                self.finish_dismissal(id, seq, reason);
                Dismissal::Removed
            }
            Ok(HookOutcome::Pending(future)) => {
                self.notify();
                let weak = Arc::downgrade(&self.shared);
                let id = id.clone();
                let task = self.shared.runtime.spawn(async move {
                    let outcome = future.await;
                    let Some(shared) = weak.upgrade() else {
                        return;
                    };
                    let store = ToastStore { shared };
                    if let Err(err) = outcome {
                        store.hook_failed(&id, &err);
                    }
                    store.finish_dismissal(&id, seq, reason);
                });
                Dismissal::Pending(PendingDismissal { task })
            }
        }
    }

    fn hook_failed(&self, id: &ToastId, err: &HookError) {
        warn!(id = %id, error = %err, "before-dismiss hook failed, removing toast anyway");
        self.lock().report(StoreEventKind::HookFailed {
            id: id.clone(),
            message: err.message().to_string(),
        });
    }

    /// Removes the exact record that entered the leaving phase.
    ///
    /// A record that was replaced, evicted or cleared meanwhile is left
    /// alone, even if a newer toast now uses the same id.
    fn finish_dismissal(&self, id: &ToastId, seq: u64, reason: DismissReason) -> bool {
        let mut state = self.lock();
        let Some(index) = state.records.iter().position(|record| record.seq() == seq) else {
            trace!(id = %id, "leaving toast already gone");
            return false;
        };
        state.records.remove(index);
        state.publish();
        state.report(StoreEventKind::Removed {
            id: id.clone(),
            reason,
        });
        drop(state);

        debug!(id = %id, %reason, "toast dismissed");
        self.notify();
        true
    }

    /// Clears every toast at once, leaving ones included.
    ///
    /// All timers are canceled and the hook is not invoked. Subscribers are
    /// notified once.
    pub fn dismiss_all(&self) {
        let mut state = self.lock();
        let count = state.records.len();
        let canceled = state.timers.cancel_all();
        state.records.clear();
        state.publish();
        state.report(StoreEventKind::Cleared { count });
        drop(state);

        debug!(count, canceled_timers = canceled, "all toasts dismissed");
        self.notify();
    }

    /// Overlays new configuration values and notifies subscribers.
    ///
    /// Lowering the cap below the number of active toasts evicts the oldest
    /// ones right away.
    pub fn set_config(&self, patch: ConfigPatch) {
        let mut state = self.lock();
        state.config.apply(patch);
        if state.evict_overflow() > 0 {
            state.publish();
        }
        let max = state.config.max.value();
        state.report(StoreEventKind::ConfigChanged { max });
        drop(state);

        debug!(max, "toast store reconfigured");
        self.notify();
    }

    /// Cancels every timer, forgets every toast and drops all subscribers.
    ///
    /// Nobody is notified. Hooks still in flight finish without effect.
    pub fn shutdown(&self) {
        let mut state = self.lock();
        let canceled = state.timers.cancel_all();
        state.records.clear();
        state.publish();
        drop(state);

        self.shared.subscribers.clear();
        debug!(canceled_timers = canceled, "toast store shut down");
    }

    // ---------------------------------------------------------------------
    // Observation
    // ---------------------------------------------------------------------

    /// Returns the current toasts, newest first.
    #[must_use]
    pub fn get_snapshot(&self) -> Snapshot {
        Arc::clone(&self.lock().snapshot)
    }

    /// Registers a callback run after every state change.
    ///
    /// Callbacks run outside the store lock and may call back into the store.
    pub fn subscribe<F>(&self, callback: F) -> Unsubscribe
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.shared.subscribers.subscribe(callback)
    }

    /// Returns a copy of the current configuration.
    #[must_use]
    pub fn config(&self) -> ToastStoreConfig {
        self.lock().config.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    /// Returns the active toast with this id, if any.
    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<ToastRecord> {
        let state = self.lock();
        state.position(id).map(|index| state.records[index].clone())
    }

    /// Number of auto-dismiss timers currently pending.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.lock().timers.len()
    }

    // ---------------------------------------------------------------------
    // Timers
    // ---------------------------------------------------------------------

    /// Starts (or restarts) the auto-dismiss timer of `id`.
    fn schedule(&self, state: &mut State, id: ToastId, deadline: Instant) {
        let generation = state.timers.next_generation();
        let weak = Arc::downgrade(&self.shared);
        let timer_id = id.clone();
        let task = self.shared.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(shared) = weak.upgrade() {
                ToastStore { shared }.expire(&timer_id, generation);
            }
        });
        state.timers.insert(id, generation, task);
    }

    fn expire(&self, id: &ToastId, generation: u64) {
        let mut state = self.lock();
        if !state.timers.claim_fired(id, generation) {
            trace!(id = %id, generation, "stale timer ignored");
            return;
        }
        trace!(id = %id, "auto-dismiss timer fired");
        let _ = self.dismiss_locked(state, id, DismissReason::Auto);
    }
}

impl fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("ToastStore")
            .field("max", &state.config.max.value())
            .field("default_duration", &state.config.default_duration)
            .field("toasts", &state.records.len())
            .field("pending_timers", &state.timers.len())
            .field("subscribers", &self.shared.subscribers.len())
            .finish()
    }
}
