//! Light/dark theme preference.
//!
//! The stored preference is read and written through a [`PreferenceStore`]
//! handed to the [`ThemeController`]; the browser uses localStorage, tests use
//! [`InMemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

pub const DEFAULT_THEME_KEY: &str = "theme";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Default)]
pub struct InMemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// Theme actually applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Read the document's `data-theme` attribute. Anything but `light` counts as dark.
    pub fn from_attribute(attr: Option<&str>) -> Self {
        match attr {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon_colors(&self) -> IconColors {
        match self {
            Theme::Dark => IconColors {
                moon: "#9ca3af",
                sun: "#fbbf24",
            },
            Theme::Light => IconColors {
                moon: "#fbbf24",
                sun: "#9ca3af",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconColors {
    pub moon: &'static str,
    pub sun: &'static str,
}

/// What the visitor asked for; `System` follows the OS color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl ThemePreference {
    /// Unset or unrecognized values fall back to light.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => ThemePreference::Dark,
            Some("system") => ThemePreference::System,
            _ => ThemePreference::Light,
        }
    }

    pub fn resolve(&self, system_dark: bool) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System if system_dark => Theme::Dark,
            ThemePreference::System => Theme::Light,
        }
    }
}

pub struct ThemeController<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn preference(&self) -> ThemePreference {
        ThemePreference::parse(self.store.get(&self.key).as_deref())
    }

    /// Theme to apply at start-up.
    pub fn initial(&self, system_dark: bool) -> Theme {
        let theme = self.preference().resolve(system_dark);
        tracing::debug!(theme = %theme, "resolved initial theme");
        theme
    }

    /// Flip the applied theme and persist the explicit choice.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.flipped();
        self.store.set(&self.key, next.as_str());
        tracing::info!(theme = %next, "theme toggled");
        next
    }

    /// Theme to re-apply after an OS color-scheme change, if the stored
    /// preference is exactly `system`.
    pub fn on_system_change(&self, system_dark: bool) -> Option<Theme> {
        match self.store.get(&self.key).as_deref() {
            Some("system") => Some(ThemePreference::System.resolve(system_dark)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_preference_defaults_to_light() {
        let store = InMemoryStore::default();
        let controller = ThemeController::new(&store, DEFAULT_THEME_KEY);
        assert_eq!(controller.preference(), ThemePreference::Light);
        assert_eq!(controller.initial(true), Theme::Light);
    }

    #[test]
    fn system_preference_follows_os() {
        let store = InMemoryStore::with_value(DEFAULT_THEME_KEY, "system");
        let controller = ThemeController::new(&store, DEFAULT_THEME_KEY);
        assert_eq!(controller.initial(true), Theme::Dark);
        assert_eq!(controller.initial(false), Theme::Light);
    }

    #[test]
    fn toggle_twice_restores_theme_and_persisted_value() {
        let store = InMemoryStore::with_value(DEFAULT_THEME_KEY, "dark");
        let controller = ThemeController::new(&store, DEFAULT_THEME_KEY);
        let start = controller.initial(false);
        let once = controller.toggle(start);
        assert_eq!(once, Theme::Light);
        assert_eq!(store.get(DEFAULT_THEME_KEY).as_deref(), Some("light"));
        let twice = controller.toggle(once);
        assert_eq!(twice, start);
        assert_eq!(store.get(DEFAULT_THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_never_stores_system() {
        let store = InMemoryStore::with_value(DEFAULT_THEME_KEY, "system");
        let controller = ThemeController::new(&store, DEFAULT_THEME_KEY);
        let applied = controller.initial(true);
        controller.toggle(applied);
        assert_eq!(store.get(DEFAULT_THEME_KEY).as_deref(), Some("light"));
        assert_eq!(controller.on_system_change(true), None);
    }

    #[test]
    fn system_change_only_applies_for_system_preference() {
        let store = InMemoryStore::with_value(DEFAULT_THEME_KEY, "light");
        let controller = ThemeController::new(&store, DEFAULT_THEME_KEY);
        assert_eq!(controller.on_system_change(true), None);

        store.set(DEFAULT_THEME_KEY, "system");
        assert_eq!(controller.on_system_change(true), Some(Theme::Dark));
        assert_eq!(controller.on_system_change(false), Some(Theme::Light));
    }

    #[test]
    fn custom_key_is_respected() {
        let store = InMemoryStore::with_value("portfolio-theme", "dark");
        let controller = ThemeController::new(&store, "portfolio-theme");
        assert_eq!(controller.initial(false), Theme::Dark);
        assert_eq!(store.get(DEFAULT_THEME_KEY), None);
    }

    #[test]
    fn icon_colors_swap_with_theme() {
        let dark = Theme::Dark.icon_colors();
        let light = Theme::Light.icon_colors();
        assert_eq!(dark.moon, light.sun);
        assert_eq!(dark.sun, light.moon);
    }

    #[test]
    fn missing_attribute_reads_as_dark() {
        assert_eq!(Theme::from_attribute(None), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
    }
}
