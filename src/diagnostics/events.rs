// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle events captured for diagnostics.

use crate::domain::toast::{DismissReason, ToastId, ToastKind};
use std::time::Instant;

/// What happened inside a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEventKind {
    /// A toast was prepended to the stack.
    Added { id: ToastId, kind: ToastKind },
    /// A toast was patched; `rescheduled` when its timer restarted.
    Updated { id: ToastId, rescheduled: bool },
    /// A toast was dropped to respect the stack cap.
    Evicted { id: ToastId },
    /// The pre-dismiss hook is running for a toast.
    Dismissing { id: ToastId, reason: DismissReason },
    /// A toast left the stack through a dismissal.
    Removed { id: ToastId, reason: DismissReason },
    /// The whole stack was cleared at once.
    Cleared { count: usize },
    /// The store configuration changed.
    ConfigChanged { max: usize },
    /// A pre-dismiss hook failed; the toast was removed anyway.
    HookFailed { id: ToastId, message: String },
}

impl StoreEventKind {
    /// Short stable label, used for grouping counts.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StoreEventKind::Added { .. } => "added",
            StoreEventKind::Updated { .. } => "updated",
            StoreEventKind::Evicted { .. } => "evicted",
            StoreEventKind::Dismissing { .. } => "dismissing",
            StoreEventKind::Removed { .. } => "removed",
            StoreEventKind::Cleared { .. } => "cleared",
            StoreEventKind::ConfigChanged { .. } => "config_changed",
            StoreEventKind::HookFailed { .. } => "hook_failed",
        }
    }
}

/// A lifecycle event with its capture time.
#[derive(Debug, Clone)]
pub struct StoreEvent {
    /// Monotonic capture time.
    pub timestamp: Instant,
    pub kind: StoreEventKind,
}

impl StoreEvent {
    /// Creates an event stamped with the current instant.
    #[must_use]
    pub fn new(kind: StoreEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}
