// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Stack**: Maximum number of simultaneously active toasts
//! - **Duration**: Auto-dismiss timing
//! - **Transition**: Exit animation timing used by the pre-dismiss hook
//! - **Diagnostics**: Lifecycle event buffer sizing

// ==========================================================================
// Stack Defaults
// ==========================================================================

/// Default number of toasts kept on screen at once.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Smallest allowed stack cap. A store always keeps at least one toast.
pub const MIN_MAX_TOASTS: usize = 1;

/// Largest allowed stack cap.
pub const MAX_MAX_TOASTS: usize = 100;

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default auto-dismiss duration (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 5000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default exit animation length (in milliseconds).
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 180;

/// Maximum exit animation length (in milliseconds).
/// Longer hooks would keep leaving toasts on screen for too long.
pub const MAX_EXIT_ANIMATION_MS: u64 = 5000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event ring.
pub const DEFAULT_DIAGNOSTICS_EVENT_CAPACITY: usize = 500;

/// Minimum capacity of the diagnostics event ring.
pub const MIN_DIAGNOSTICS_EVENT_CAPACITY: usize = 10;

/// Maximum capacity of the diagnostics event ring.
pub const MAX_DIAGNOSTICS_EVENT_CAPACITY: usize = 10_000;

/// Size of the channel between store handles and the collector.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 256;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_defaults_are_within_bounds() {
        assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);
        assert!(DEFAULT_MAX_TOASTS <= MAX_MAX_TOASTS);
        assert_eq!(MIN_MAX_TOASTS, 1);
    }

    #[test]
    fn exit_animation_default_is_within_bounds() {
        assert!(DEFAULT_EXIT_ANIMATION_MS <= MAX_EXIT_ANIMATION_MS);
    }

    #[test]
    fn diagnostics_defaults_are_within_bounds() {
        assert!(DEFAULT_DIAGNOSTICS_EVENT_CAPACITY >= MIN_DIAGNOSTICS_EVENT_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_EVENT_CAPACITY <= MAX_DIAGNOSTICS_EVENT_CAPACITY);
    }
}
