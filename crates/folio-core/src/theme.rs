//! Light/dark theme preference.
//!
//! The preference is tri-state: an explicit choice persisted under
//! [`THEME_STORAGE_KEY`], or "follow the system" when nothing is stored. While
//! following the system, color-scheme changes apply live. Once the visitor
//! toggles, the choice sticks and system changes are only remembered.

use crate::constants::THEME_STORAGE_KEY;
use crate::error::{FolioError, Result};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Explicit(Theme),
    FollowSystem,
}

/// Durable key-value storage for the preference flag.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Used for tests and as the session-only fallback when the
/// browser refuses access to `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = FnvHashMap::default();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that always fails, standing in for a blocked storage backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Err(FolioError::StorageUnavailable)
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(FolioError::StorageUnavailable)
    }
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    preference: ThemePreference,
    system: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the persisted preference. Storage errors and unknown values both
    /// fall back to following the system.
    pub fn load(store: S, system: Theme) -> Self {
        let preference = match store.load(THEME_STORAGE_KEY) {
            Ok(Some(v)) => match Theme::parse(&v) {
                Some(t) => ThemePreference::Explicit(t),
                None => {
                    log::debug!("[theme] ignoring stored value {v:?}");
                    ThemePreference::FollowSystem
                }
            },
            Ok(None) => ThemePreference::FollowSystem,
            Err(e) => {
                log::warn!("[theme] {e}; preference will not persist");
                ThemePreference::FollowSystem
            }
        };
        Self {
            store,
            preference,
            system,
        }
    }

    pub fn applied(&self) -> Theme {
        match self.preference {
            ThemePreference::Explicit(t) => t,
            ThemePreference::FollowSystem => self.system,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Record a system color-scheme change and return the applied theme.
    pub fn system_changed(&mut self, system: Theme) -> Theme {
        self.system = system;
        self.applied()
    }

    /// Invert the applied theme, make it explicit and persist it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.applied().inverted();
        self.preference = ThemePreference::Explicit(next);
        if let Err(e) = self.store.save(THEME_STORAGE_KEY, next.as_str()) {
            log::warn!("[theme] {e}; keeping {} for this session", next.as_str());
        }
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
