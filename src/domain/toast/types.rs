// SPDX-License-Identifier: MPL-2.0
//! Toast identity, category and lifecycle vocabulary.

use std::fmt;

/// Opaque identifier of an active toast.
///
/// Ids are unique among the records currently held by a store. Once a toast
/// is removed its id may be reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    /// Wraps a caller-chosen identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToastId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ToastId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Severity or category of a toast.
///
/// The store carries the kind through untouched; renderers use it for
/// styling and for the announcement urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    /// Operation completed successfully.
    Success,
    /// Something failed and needs attention.
    Error,
    /// Informational message.
    #[default]
    Info,
    /// Warning that doesn't block operation.
    Warning,
    /// Fully caller-rendered content.
    Custom,
}

impl ToastKind {
    /// Returns how urgently assistive technology should announce the toast.
    #[must_use]
    pub fn urgency(self) -> Urgency {
        match self {
            ToastKind::Error => Urgency::Assertive,
            ToastKind::Success | ToastKind::Info | ToastKind::Warning | ToastKind::Custom => {
                Urgency::Polite
            }
        }
    }

    /// Stable lowercase name, handy for style class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Custom => "custom",
        }
    }
}

/// Announcement urgency for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    /// Announced when the user is idle.
    #[default]
    Polite,
    /// Interrupts the current announcement.
    Assertive,
}

/// Why a toast is being dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DismissReason {
    /// Its auto-dismiss timer elapsed.
    Auto,
    /// A caller asked for it.
    #[default]
    Manual,
}

impl fmt::Display for DismissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DismissReason::Auto => f.write_str("auto"),
            DismissReason::Manual => f.write_str("manual"),
        }
    }
}

/// Where a toast is in its lifecycle while it is still visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    /// On screen with a running auto-dismiss timer.
    #[default]
    Active,
    /// The pre-dismiss hook is running; the toast is on its way out.
    Leaving,
}
