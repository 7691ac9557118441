// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for toast stores.
//!
//! A store with an attached [`DiagnosticsHandle`] reports every lifecycle
//! transition as a [`StoreEvent`]. Handles never block: when the channel is
//! full the event is dropped. The [`DiagnosticsCollector`] drains the
//! channel into a memory-bounded ring that evicts the oldest events.
//!
//! # Example
//!
//! ```
//! use toast_store::diagnostics::DiagnosticsCollector;
//! use toast_store::domain::diagnostics::EventCapacity;
//!
//! let mut collector = DiagnosticsCollector::new(EventCapacity::default());
//! let handle = collector.handle();
//! // store.set_diagnostics(handle);
//! # drop(handle);
//! collector.process_pending();
//! assert!(collector.is_empty());
//! ```

mod collector;
mod events;

pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{StoreEvent, StoreEventKind};
