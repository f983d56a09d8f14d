//! Folio portfolio page, Rust + WASM.
//!
//! Renders the project catalog and drives theming, the mobile menu, the
//! contact form and the scroll affordances. Each concern lives in its own
//! module; page-independent logic lives in the `folio-*` crates.

pub mod api;
pub mod config;
pub mod contact;
pub mod dom;
pub mod events;
pub mod logging;
pub mod menu;
pub mod projects;
pub mod scroll;
pub mod state;
pub mod theme;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    let loaded = config::load(config::CONFIG_URL).await;
    let cfg = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&cfg.log_level);
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "using built-in site config");
    }
    state::set_config(cfg.clone());

    let els = dom::Elements::bind(&cfg.header_selector)?;
    dom::remove_class(&els.root, "no-js");

    theme::init(&els)?;
    projects::init(&els);

    if let Some(year) = &els.current_year {
        let now = js_sys::Date::new_0();
        dom::set_text(year, &now.get_full_year().to_string());
    }

    events::bind_events(&els, &cfg)?;

    tracing::info!(
        projects = state::with(|s| s.catalog.len()),
        "portfolio ready"
    );
    Ok(())
}

/// Re-render the project grid for a filter key, as a filter button would.
#[wasm_bindgen(js_name = showProjects)]
pub fn show_projects(filter: &str) -> Result<(), JsValue> {
    let els = dom::Elements::bind(&state::config().header_selector)?;
    let key = folio_catalog::FilterKey::parse(filter);
    projects::show(&els, key);
    Ok(())
}

/// The filter key currently shown in the grid.
#[wasm_bindgen(js_name = activeFilter)]
pub fn active_filter() -> String {
    state::active_filter().to_string()
}
