// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// Event Capacity Bounds
// =============================================================================

/// Event ring capacity bounds (10 to 10000 events).
pub mod event_capacity_bounds {
    /// Minimum ring capacity.
    pub const MIN: usize = 10;
    /// Maximum ring capacity.
    pub const MAX: usize = 10_000;
    /// Default ring capacity.
    pub const DEFAULT: usize = 500;
}

// =============================================================================
// EventCapacity
// =============================================================================

/// Number of toast lifecycle events retained by the diagnostics collector.
///
/// Values outside 10–10000 are clamped.
///
/// # Example
///
/// ```
/// use toast_store::domain::diagnostics::EventCapacity;
///
/// assert_eq!(EventCapacity::new(50).value(), 50);
/// assert_eq!(EventCapacity::new(1).value(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCapacity(usize);

impl EventCapacity {
    /// Creates a new event capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(event_capacity_bounds::MIN, event_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for EventCapacity {
    fn default() -> Self {
        Self(event_capacity_bounds::DEFAULT)
    }
}
