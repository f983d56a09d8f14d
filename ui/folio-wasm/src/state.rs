//! Global page state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).

use crate::config::SiteConfig;
use folio_catalog::{Catalog, FilterKey};
use folio_prefs::{PreferenceStore, ThemeController};
use std::cell::RefCell;

pub struct AppState {
    pub catalog: Catalog,
    pub config: SiteConfig,
    pub active_filter: FilterKey,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: Catalog::builtin(),
            config: SiteConfig::default(),
            active_filter: FilterKey::All,
        }
    }
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn config() -> SiteConfig {
    with(|s| s.config.clone())
}

pub fn set_config(c: SiteConfig) {
    with_mut(|s| s.config = c);
}

pub fn active_filter() -> FilterKey {
    with(|s| s.active_filter.clone())
}

pub fn set_active_filter(key: FilterKey) {
    with_mut(|s| s.active_filter = key);
}

pub fn theme_controller() -> ThemeController<LocalStore> {
    ThemeController::new(LocalStore, with(|s| s.config.theme_storage_key.clone()))
}

// ── localStorage ──

/// `PreferenceStore` over `window.localStorage`. Storage failures (private
/// mode, quota) read as unset and drop writes.
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        match storage() {
            Some(s) => {
                if s.set_item(key, value).is_err() {
                    tracing::warn!(key, "localStorage write rejected");
                }
            }
            None => tracing::warn!(key, "localStorage unavailable"),
        }
    }
}
