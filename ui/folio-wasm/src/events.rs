//! Event binding.
//!
//! Wires every UI listener once after start-up. Controllers that own several
//! listeners (menu, scroll, contact form) register them through their own
//! `init` functions, called from here.

use crate::config::SiteConfig;
use crate::contact;
use crate::dom::{self, Elements};
use crate::menu;
use crate::projects;
use crate::scroll;
use crate::theme;
use wasm_bindgen::prelude::*;

/// Helper: attach sync click handler, propagating registration errors.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements, config: &SiteConfig) -> Result<(), JsValue> {
    // ── Theme ──
    if let Some(toggle) = &els.theme_toggle {
        let els2 = els.clone();
        on_click!(toggle, move |_: web_sys::MouseEvent| {
            theme::toggle(&els2);
        });
    }

    // ── Project filters ──
    for button in &els.filter_buttons {
        let els2 = els.clone();
        let button2 = button.clone();
        on_click!(button, move |_: web_sys::MouseEvent| {
            projects::on_filter_click(&els2, &button2);
        });
    }

    // ── Navigation ──
    menu::init(els)?;
    scroll::init_smooth_scroll(els)?;
    scroll::init_active_nav(els)?;

    // ── Scroll affordances ──
    scroll::init_back_to_top(els, config.back_to_top_threshold_px)?;
    scroll::init_skill_bars(els, config.skill_bar_threshold)?;

    // ── Contact ──
    if let Some(form) = &els.contact_form {
        contact::init(form, els.form_status.clone())?;
    }

    // ── Page chrome ──
    if dom::document().ready_state() == "complete" {
        dom::add_class(&els.body, "loaded");
    } else {
        let body = els.body.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            dom::add_class(&body, "loaded");
        }) as Box<dyn FnMut(_)>);
        dom::window().add_event_listener_with_callback("load", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
