// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timer bookkeeping.
//!
//! At most one timer task exists per toast id. Every timer carries a
//! generation number so a task that already woke up before being aborted
//! can tell it is stale.

use crate::domain::toast::ToastId;
use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Stand-in deadline for durations too long to add to the current instant.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Deadline `duration` from now.
///
/// Never panics: `Duration::MAX` and friends saturate to a deadline decades
/// away, which keeps the toast until it is dismissed.
pub(crate) fn deadline_after(duration: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(duration)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

#[derive(Debug)]
struct Timer {
    generation: u64,
    task: JoinHandle<()>,
}

/// Pending auto-dismiss timers keyed by toast id.
#[derive(Debug, Default)]
pub(crate) struct TimerSet {
    timers: HashMap<ToastId, Timer>,
    next_generation: u64,
}

impl TimerSet {
    /// Reserves the generation number for the next timer.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    /// Registers a timer task, aborting the one it replaces.
    pub(crate) fn insert(&mut self, id: ToastId, generation: u64, task: JoinHandle<()>) {
        if let Some(previous) = self.timers.insert(id, Timer { generation, task }) {
            previous.task.abort();
        }
    }

    /// Aborts and forgets the timer for `id`. Returns true if one existed.
    pub(crate) fn cancel(&mut self, id: &ToastId) -> bool {
        match self.timers.remove(id) {
            Some(timer) => {
                timer.task.abort();
                true
            }
            None => false,
        }
    }

    /// Aborts every timer and returns how many were pending.
    pub(crate) fn cancel_all(&mut self) -> usize {
        let count = self.timers.len();
        for (_, timer) in self.timers.drain() {
            timer.task.abort();
        }
        count
    }

    /// Claims a timer that just fired.
    ///
    /// Returns false when the timer was replaced or canceled in the meantime,
    /// in which case the firing must be ignored. The firing task is not
    /// aborted since it is the caller.
    pub(crate) fn claim_fired(&mut self, id: &ToastId, generation: u64) -> bool {
        match self.timers.get(id) {
            Some(timer) if timer.generation == generation => {
                self.timers.remove(id);
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub(crate) fn contains(&self, id: &ToastId) -> bool {
        self.timers.contains_key(id)
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.timers.len()
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
