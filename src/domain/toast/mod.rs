// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! - [`ToastId`], [`ToastKind`], [`Urgency`], [`DismissReason`], [`ToastPhase`]:
//!   the vocabulary shared by the store and its renderers
//! - [`StackCap`]: validated maximum stack size

mod newtypes;
mod types;

pub use newtypes::{stack_cap_bounds, StackCap};
pub use types::{DismissReason, ToastId, ToastKind, ToastPhase, Urgency};
