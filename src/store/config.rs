// SPDX-License-Identifier: MPL-2.0
//! Runtime configuration held by a store.

use super::hook::BeforeDismiss;
use crate::config::DEFAULT_DURATION_MS;
use crate::domain::toast::StackCap;
use std::time::Duration;

/// Configuration of a single store instance.
#[derive(Debug, Clone)]
pub struct ToastStoreConfig {
    /// Maximum number of active toasts; the oldest are evicted beyond it.
    pub max: StackCap,
    /// Auto-dismiss delay for toasts added without an explicit duration.
    pub default_duration: Duration,
    /// Runs before each individual dismissal.
    pub before_dismiss: Option<BeforeDismiss>,
}

impl Default for ToastStoreConfig {
    fn default() -> Self {
        Self {
            max: StackCap::default(),
            default_duration: Duration::from_millis(DEFAULT_DURATION_MS),
            before_dismiss: None,
        }
    }
}

impl ToastStoreConfig {
    #[must_use]
    pub fn new(max: usize, default_duration: Duration) -> Self {
        Self {
            max: StackCap::new(max),
            default_duration,
            before_dismiss: None,
        }
    }

    #[must_use]
    pub fn with_before_dismiss(mut self, hook: BeforeDismiss) -> Self {
        self.before_dismiss = Some(hook);
        self
    }

    pub(crate) fn apply(&mut self, patch: ConfigPatch) {
        if let Some(max) = patch.max {
            self.max = max;
        }
        if let Some(duration) = patch.default_duration {
            self.default_duration = duration;
        }
        if let Some(hook) = patch.before_dismiss {
            self.before_dismiss = hook;
        }
    }
}

/// Changes applied by `set_config`. Unset fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct ConfigPatch {
    pub max: Option<StackCap>,
    pub default_duration: Option<Duration>,
    /// `Some(None)` removes the current hook.
    pub before_dismiss: Option<Option<BeforeDismiss>>,
}

impl ConfigPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(StackCap::new(max));
        self
    }

    #[must_use]
    pub fn default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn before_dismiss(mut self, hook: BeforeDismiss) -> Self {
        self.before_dismiss = Some(Some(hook));
        self
    }

    #[must_use]
    pub fn clear_before_dismiss(mut self) -> Self {
        self.before_dismiss = Some(None);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = ToastStoreConfig::default();
        assert_eq!(config.max.value(), 5);
        assert_eq!(config.default_duration, Duration::from_millis(5000));
        assert!(config.before_dismiss.is_none());
    }

    #[test]
    fn new_clamps_zero_max() {
        let config = ToastStoreConfig::new(0, Duration::from_secs(1));
        assert_eq!(config.max.value(), 1);
    }

    #[test]
    fn patch_overlays_only_set_fields() {
        let mut config = ToastStoreConfig::new(3, Duration::from_secs(2));
        config.apply(ConfigPatch::new().max(7));
        assert_eq!(config.max.value(), 7);
        assert_eq!(config.default_duration, Duration::from_secs(2));
    }

    #[test]
    fn patch_can_install_and_remove_hook() {
        let mut config = ToastStoreConfig::default();
        config.apply(ConfigPatch::new().before_dismiss(BeforeDismiss::exit_delay(Duration::ZERO)));
        assert!(config.before_dismiss.is_some());

        config.apply(ConfigPatch::new().default_duration(Duration::from_secs(1)));
        assert!(config.before_dismiss.is_some());

        config.apply(ConfigPatch::new().clear_before_dismiss());
        assert!(config.before_dismiss.is_none());
    }
}
