// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core toast vocabulary with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`EventCapacity`](diagnostics::EventCapacity))
//! - [`toast`]: Toast value objects ([`ToastId`](toast::ToastId),
//!   [`ToastKind`](toast::ToastKind), [`StackCap`](toast::StackCap),
//!   [`DismissReason`](toast::DismissReason), [`ToastPhase`](toast::ToastPhase))

pub mod diagnostics;
pub mod toast;
