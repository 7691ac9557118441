// SPDX-License-Identifier: MPL-2.0
//! Persisted toast settings, stored as a small `settings.toml` document.
//!
//! ```toml
//! [store]
//! max = 5
//! default_duration_ms = 5000
//!
//! [transition]
//! exit_ms = 180
//! reduced_motion = false
//! ```
//!
//! Missing sections or fields fall back to the values in [`defaults`].
//!
//! # Examples
//!
//! ```
//! use toast_store::config::Settings;
//!
//! let settings = Settings::from_toml_str("[store]\nmax = 3\n").unwrap();
//! assert_eq!(settings.store.max, 3);
//! assert_eq!(settings.store.default_duration_ms, 5000);
//!
//! let config = settings.store_config();
//! assert_eq!(config.max.value(), 3);
//! assert!(config.before_dismiss.is_some());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::store::{BeforeDismiss, ToastStoreConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Stack-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Maximum number of toasts on screen. Clamped when applied.
    pub max: usize,
    pub default_duration_ms: u64,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_TOASTS,
            default_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// Exit transition settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSection {
    pub exit_ms: u64,
    /// Skips the exit transition entirely.
    pub reduced_motion: bool,
}

impl Default for TransitionSection {
    fn default() -> Self {
        Self {
            exit_ms: DEFAULT_EXIT_ANIMATION_MS,
            reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub store: StoreSection,
    pub transition: TransitionSection,
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the text is not valid TOML or a
    /// field has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Exit transition length actually used, after clamping and reduced motion.
    #[must_use]
    pub fn exit_delay(&self) -> Duration {
        if self.transition.reduced_motion {
            Duration::ZERO
        } else {
            Duration::from_millis(self.transition.exit_ms.min(MAX_EXIT_ANIMATION_MS))
        }
    }

    /// Builds a store configuration, including an exit-delay hook.
    #[must_use]
    pub fn store_config(&self) -> ToastStoreConfig {
        ToastStoreConfig::new(
            self.store.max,
            Duration::from_millis(self.store.default_duration_ms),
        )
        .with_before_dismiss(BeforeDismiss::exit_delay(self.exit_delay()))
    }
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Settings::from_toml_str(&content)
}

/// Writes settings to a TOML file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}
