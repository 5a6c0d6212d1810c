//! User preference state: theme and temperature display unit.
//!
//! Both settings live in client-local storage with a simple lifecycle:
//! default on first load, overwritten whenever the user changes the setting,
//! read back on each page load. Storage is behind the [`PreferenceStore`]
//! trait so the host injects whatever persistence it has (browser local
//! storage, a file, nothing) instead of the settings living in ambient
//! global state.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::convert::TempUnit;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "ct-theme";

/// Storage key for the temperature unit preference.
pub const UNIT_KEY: &str = "ct-unit";

/// Theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
    /// Follow the host's color-scheme preference.
    System,
}

impl Theme {
    /// Parse from the persisted string form.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// The persisted string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolve to a concrete theme, given whether the host currently
    /// prefers a dark color scheme.
    pub fn resolve(&self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System => {
                if system_prefers_dark {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }
}

/// A theme after resolving the `System` indirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
}

impl ResolvedTheme {
    /// Whether the dark style set applies.
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Key-value persistence for preferences.
///
/// Implementations must tolerate unknown keys and never fail loudly; a
/// missing or unreadable value simply yields `None`.
pub trait PreferenceStore: Send + Sync {
    /// Load the stored value for a key, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Persist a value for a key.
    fn save(&self, key: &str, value: &str);
}

/// In-memory store for tests and hosts without local storage.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values.write().insert(key.to_string(), value.to_string());
    }
}

/// The user's persisted settings, write-through to the injected store.
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
    theme: RwLock<Theme>,
    unit: RwLock<TempUnit>,
}

impl Preferences {
    /// Load preferences from the store, falling back to defaults for
    /// missing or unrecognized values.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let theme = store
            .load(THEME_KEY)
            .as_deref()
            .and_then(Theme::from_stored)
            .unwrap_or_default();
        let unit = store
            .load(UNIT_KEY)
            .as_deref()
            .and_then(TempUnit::from_symbol)
            .unwrap_or_default();

        debug!(theme = theme.as_str(), unit = unit.symbol(), "preferences loaded");

        Self {
            store,
            theme: RwLock::new(theme),
            unit: RwLock::new(unit),
        }
    }

    /// Current theme preference.
    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    /// Set and persist the theme preference.
    pub fn set_theme(&self, theme: Theme) {
        *self.theme.write() = theme;
        self.store.save(THEME_KEY, theme.as_str());
    }

    /// Current temperature display unit.
    pub fn unit(&self) -> TempUnit {
        *self.unit.read()
    }

    /// Set and persist the temperature display unit.
    pub fn set_unit(&self, unit: TempUnit) {
        *self.unit.write() = unit;
        self.store.save(UNIT_KEY, unit.symbol());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_on_first_load() {
        let prefs = Preferences::load(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.unit(), TempUnit::Fahrenheit);
    }

    #[test]
    fn test_settings_survive_reload() {
        let store = Arc::new(MemoryStore::new());

        let prefs = Preferences::load(store.clone());
        prefs.set_theme(Theme::Dark);
        prefs.set_unit(TempUnit::Celsius);

        // Fresh load, same store: the saved values come back.
        let reloaded = Preferences::load(store);
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(reloaded.unit(), TempUnit::Celsius);
    }

    #[test]
    fn test_garbage_stored_values_fall_back_to_defaults() {
        let store = Arc::new(MemoryStore::new());
        store.save(THEME_KEY, "sepia");
        store.save(UNIT_KEY, "Rankine");

        let prefs = Preferences::load(store);
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.unit(), TempUnit::Fahrenheit);
    }

    #[test]
    fn test_theme_resolution() {
        assert_eq!(Theme::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(Theme::Dark.resolve(false), ResolvedTheme::Dark);
        assert_eq!(Theme::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(Theme::System.resolve(false), ResolvedTheme::Light);
        assert!(ResolvedTheme::Dark.is_dark());
        assert!(!ResolvedTheme::Light.is_dark());
    }
}
