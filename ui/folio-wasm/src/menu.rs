//! Mobile navigation menu.

use crate::dom::{self, Elements};
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

pub fn is_open(els: &Elements) -> bool {
    dom::has_class(&els.mobile_menu, "active")
}

/// Escape closes the menu, but only while it is open.
pub fn closes_on_key(key: &str, open: bool) -> bool {
    open && key == "Escape"
}

pub fn open(els: &Elements) {
    dom::add_class(&els.mobile_menu, "active");
    let _ = els.body.style().set_property("overflow", "hidden");
    if let Some(toggle) = &els.menu_toggle {
        let _ = toggle.set_attribute("aria-expanded", "true");
    }
}

pub fn close(els: &Elements) {
    dom::remove_class(&els.mobile_menu, "active");
    let _ = els.body.style().set_property("overflow", "");
    if let Some(toggle) = &els.menu_toggle {
        let _ = toggle.set_attribute("aria-expanded", "false");
    }
}

pub fn init(els: &Elements) -> Result<(), JsValue> {
    if let Some(toggle) = &els.menu_toggle {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            open(&els2);
        }) as Box<dyn FnMut(_)>);
        toggle.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    let closers = els.menu_close.iter().chain(els.mobile_nav_links.iter());
    for el in closers {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            close(&els2);
        }) as Box<dyn FnMut(_)>);
        el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // Backdrop click: only when the menu container itself is the target.
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let on_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|t| dom::same_node(&t, &els2.mobile_menu));
            if on_backdrop {
                close(&els2);
            }
        }) as Box<dyn FnMut(_)>);
        els.mobile_menu
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if closes_on_key(&e.key(), is_open(&els2)) {
                close(&els2);
            }
        }) as Box<dyn FnMut(_)>);
        dom::document().add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}
