// SPDX-License-Identifier: MPL-2.0
//! Toast records and the option/patch structures that create and edit them.
//!
//! Records are immutable values once published in a snapshot; `update`
//! produces a fresh record with the patch overlaid field by field.

use crate::domain::toast::{ToastId, ToastKind, ToastPhase};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Opaque presentation payload attached to a toast.
///
/// The store never looks inside; renderers recover their own type with
/// [`Payload::downcast_ref`]. Cloning is a reference-count bump.
#[derive(Clone)]
pub struct Payload(Arc<dyn Any + Send + Sync>);

impl Payload {
    /// Wraps any shareable value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns the payload as `T` if that is what it holds.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns true if both payloads point at the same value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Payload) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Payload(..)")
    }
}

/// Renderer-owned extras carried by a toast.
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    /// Replaces the default body.
    pub content: Option<Payload>,
    /// Replaces the kind icon.
    pub icon: Option<Payload>,
    /// Action descriptors (buttons, links).
    pub actions: Option<Payload>,
    /// Styling hints such as class names or colors.
    pub style: Option<Payload>,
}

impl Presentation {
    fn overlay(&mut self, patch: Presentation) {
        if patch.content.is_some() {
            self.content = patch.content;
        }
        if patch.icon.is_some() {
            self.icon = patch.icon;
        }
        if patch.actions.is_some() {
            self.actions = patch.actions;
        }
        if patch.style.is_some() {
            self.style = patch.style;
        }
    }
}

/// One active notification.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    id: ToastId,
    title: Option<String>,
    description: Option<String>,
    kind: ToastKind,
    created_at: DateTime<Utc>,
    duration: Duration,
    phase: ToastPhase,
    presentation: Presentation,
    /// Distinguishes this record from any later record re-using its id.
    seq: u64,
}

impl ToastRecord {
    pub(crate) fn from_options(
        options: ToastOptions,
        default_duration: Duration,
        seq: u64,
    ) -> Self {
        Self {
            id: options.id.unwrap_or_else(generate_id),
            title: options.title,
            description: options.description,
            kind: options.kind.unwrap_or_default(),
            created_at: Utc::now(),
            duration: options.duration.unwrap_or(default_duration),
            phase: ToastPhase::Active,
            presentation: options.presentation,
            seq,
        }
    }

    /// Returns a copy with the patch overlaid. `id` and `created_at` are kept.
    pub(crate) fn patched(&self, patch: ToastPatch) -> Self {
        let mut next = self.clone();
        if patch.title.is_some() {
            next.title = patch.title;
        }
        if patch.description.is_some() {
            next.description = patch.description;
        }
        if let Some(kind) = patch.kind {
            next.kind = kind;
        }
        if let Some(duration) = patch.duration {
            next.duration = duration;
        }
        next.presentation.overlay(patch.presentation);
        next
    }

    pub(crate) fn leaving(&self) -> Self {
        Self {
            phase: ToastPhase::Leaving,
            ..self.clone()
        }
    }

    pub(crate) fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Wall-clock creation time. Never changes.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Auto-dismiss delay, counted from creation or from the last update
    /// that changed it.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Returns true while the pre-dismiss hook is running for this toast.
    #[must_use]
    pub fn is_leaving(&self) -> bool {
        self.phase == ToastPhase::Leaving
    }

    #[must_use]
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }
}

fn generate_id() -> ToastId {
    ToastId::new(uuid::Uuid::new_v4().to_string())
}

/// Everything a caller may specify when adding a toast.
///
/// Missing fields fall back to store defaults: a generated id, kind
/// [`ToastKind::Info`] and the configured default duration.
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    pub id: Option<ToastId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<ToastKind>,
    pub duration: Option<Duration>,
    pub presentation: Presentation,
}

impl ToastOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options of the given kind with a title.
    pub fn with_kind(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::with_kind(ToastKind::Success, title)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::with_kind(ToastKind::Error, title)
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::with_kind(ToastKind::Info, title)
    }

    /// Creates a warning toast.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::with_kind(ToastKind::Warning, title)
    }

    /// Creates a toast whose body is rendered by the caller.
    pub fn custom(title: impl Into<String>) -> Self {
        Self::with_kind(ToastKind::Custom, title)
    }

    /// Uses a caller-chosen id instead of a generated one.
    #[must_use]
    pub fn id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Overrides the store's default auto-dismiss duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn content(mut self, content: Payload) -> Self {
        self.presentation.content = Some(content);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Payload) -> Self {
        self.presentation.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn actions(mut self, actions: Payload) -> Self {
        self.presentation.actions = Some(actions);
        self
    }

    #[must_use]
    pub fn style(mut self, style: Payload) -> Self {
        self.presentation.style = Some(style);
        self
    }
}

/// Field-wise changes applied by `update`. Unset fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct ToastPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<ToastKind>,
    /// Restarts the auto-dismiss timer with the full new duration.
    pub duration: Option<Duration>,
    pub presentation: Presentation,
}

impl ToastPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn content(mut self, content: Payload) -> Self {
        self.presentation.content = Some(content);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Payload) -> Self {
        self.presentation.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn actions(mut self, actions: Payload) -> Self {
        self.presentation.actions = Some(actions);
        self
    }

    #[must_use]
    pub fn style(mut self, style: Payload) -> Self {
        self.presentation.style = Some(style);
        self
    }
}
