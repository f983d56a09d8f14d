//! Light/dark theme application.
//!
//! Resolution and persistence live in `folio_prefs`; this module applies the
//! result: `data-theme` on `<html>` and the moon/sun icon colors.

use crate::dom::{self, Elements};
use crate::state;
use folio_prefs::Theme;
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn dark_query() -> Option<MediaQueryList> {
    dom::window().match_media(DARK_QUERY).ok()?
}

fn system_prefers_dark() -> bool {
    dark_query().is_some_and(|q| q.matches())
}

pub fn apply(els: &Elements, theme: Theme) {
    let _ = els.root.set_attribute("data-theme", theme.as_str());
    update_toggle(els, theme);
}

fn update_toggle(els: &Elements, theme: Theme) {
    let Some(toggle) = &els.theme_toggle else {
        return;
    };
    let colors = theme.icon_colors();
    if let Ok(Some(moon)) = toggle.query_selector(".fa-moon") {
        dom::set_style(&moon, "color", colors.moon);
    }
    if let Ok(Some(sun)) = toggle.query_selector(".fa-sun") {
        dom::set_style(&sun, "color", colors.sun);
    }
}

/// Apply the stored preference and follow OS changes while it is `system`.
pub fn init(els: &Elements) -> Result<(), JsValue> {
    let controller = state::theme_controller();
    apply(els, controller.initial(system_prefers_dark()));

    if let Some(query) = dark_query() {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
            if let Some(theme) = state::theme_controller().on_system_change(e.matches()) {
                apply(&els2, theme);
            }
        }) as Box<dyn FnMut(_)>);
        query.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

/// Flip between light and dark based on what is currently applied.
pub fn toggle(els: &Elements) {
    let current = Theme::from_attribute(els.root.get_attribute("data-theme").as_deref());
    let next = state::theme_controller().toggle(current);
    apply(els, next);
}
