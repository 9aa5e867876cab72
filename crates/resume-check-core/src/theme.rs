//! Light/dark theme preference
//!
//! Storage is best-effort: a missing or unreadable value means "no
//! preference", and a failed write only logs.

use crate::error::CheckError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Durable key-value storage for the theme
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&mut self, key: &str, value: &str) -> Result<(), CheckError>;
}

/// Owns the applied theme and its storage key
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    key: String,
    applied: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Resolve the theme to apply at load: stored value, else the
    /// environment's light preference, else dark.
    pub fn init(store: S, key: &str, prefers_light: bool) -> Self {
        let stored = store.load(key).and_then(|v| match v.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(()) => {
                tracing::debug!("ignoring unknown stored theme {:?}", v);
                None
            }
        });

        let applied = match stored {
            Some(theme) => theme,
            None if prefers_light => Theme::Light,
            None => Theme::Dark,
        };

        tracing::debug!("theme initialized to {}", applied.as_str());

        Self {
            store,
            key: key.to_string(),
            applied,
        }
    }

    pub fn applied(&self) -> Theme {
        self.applied
    }

    /// Flip the applied theme and persist it. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.applied = self.applied.flipped();

        if let Err(e) = self.store.store(&self.key, self.applied.as_str()) {
            tracing::warn!("could not persist theme: {}", e);
        }

        self.applied
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// In-memory store, used where no durable storage exists
#[derive(Debug, Default, Clone)]
pub struct MemoryThemeStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryThemeStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), CheckError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
