// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for store limits,
//! ensuring they are always within valid ranges.

// =============================================================================
// Stack Cap Bounds
// =============================================================================

/// Stack cap bounds (1 to 100 toasts).
pub mod stack_cap_bounds {
    /// Minimum stack cap. A store always holds at least one toast.
    pub const MIN: usize = 1;
    /// Maximum stack cap.
    pub const MAX: usize = 100;
    /// Default stack cap.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// StackCap
// =============================================================================

/// Maximum number of simultaneously active toasts.
///
/// This newtype enforces validity at the type level. A requested cap of
/// zero is clamped to one rather than rejected, so a store can always be
/// built from untrusted settings.
///
/// # Example
///
/// ```
/// use toast_store::domain::toast::StackCap;
///
/// let cap = StackCap::new(3);
/// assert_eq!(cap.value(), 3);
///
/// // Values outside range are clamped
/// assert_eq!(StackCap::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StackCap(usize);

impl StackCap {
    /// Creates a new stack cap, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(stack_cap_bounds::MIN, stack_cap_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= stack_cap_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= stack_cap_bounds::MAX
    }
}

impl Default for StackCap {
    fn default() -> Self {
        Self(stack_cap_bounds::DEFAULT)
    }
}

impl From<usize> for StackCap {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
