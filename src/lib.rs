// SPDX-License-Identifier: MPL-2.0
//! `toast_store` is a reactive store for toast notifications.
//!
//! It keeps a bounded, newest-first stack of transient messages, dismisses
//! each one automatically after its duration, and lets a renderer delay the
//! final removal through a pre-dismiss hook so exit transitions can play.
//! Rendering is left to the caller: the store only exposes immutable
//! snapshots and change notifications.

#![doc(html_root_url = "https://docs.rs/toast_store/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod store;

pub use domain::toast::{DismissReason, StackCap, ToastId, ToastKind, ToastPhase, Urgency};
pub use error::{Error, Result};
pub use store::{
    BeforeDismiss, ConfigPatch, Dismissal, HookError, HookOutcome, Payload, PendingDismissal,
    Presentation, Snapshot, ToastOptions, ToastPatch, ToastRecord, ToastStore, ToastStoreConfig,
    Unsubscribe,
};
