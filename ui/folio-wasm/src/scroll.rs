//! Scroll-driven affordances: back-to-top, smooth in-page anchors,
//! active-section highlighting, and one-shot skill-bar fill.

use crate::dom::{self, Elements};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

/// Root margin that shrinks the viewport to its vertical midpoint line.
const MIDPOINT_ROOT_MARGIN: &str = "-50% 0px -50% 0px";

pub fn back_to_top_visible(offset_y: f64, threshold: f64) -> bool {
    offset_y > threshold
}

/// Anchors handled in-page. A bare `#` keeps its default behaviour.
pub fn is_in_page_anchor(href: &str) -> bool {
    href.starts_with('#') && href.len() > 1
}

pub fn anchor_scroll_top(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height
}

pub fn nav_href_for(section: &str) -> String {
    format!("#{section}")
}

/// Target CSS width for a progress bar's `data-width`.
pub fn skill_bar_width(data_width: Option<&str>) -> Option<String> {
    let raw = data_width?.trim().trim_end_matches('%').trim();
    if raw.is_empty() {
        None
    } else {
        Some(format!("{raw}%"))
    }
}

fn smooth_scroll_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&opts);
}

// ── Back to top ──

pub fn init_back_to_top(els: &Elements, threshold: f64) -> Result<(), JsValue> {
    let Some(btn) = els.back_to_top.clone() else {
        return Ok(());
    };

    let btn2 = btn.clone();
    let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let offset = dom::window().page_y_offset().unwrap_or(0.0);
        dom::toggle_class(&btn2, "visible", back_to_top_visible(offset, threshold));
    }) as Box<dyn FnMut(_)>);
    dom::window().add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    let on_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        smooth_scroll_to(0.0);
    }) as Box<dyn FnMut(_)>);
    btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

// ── Smooth scrolling ──

pub fn init_smooth_scroll(els: &Elements) -> Result<(), JsValue> {
    for anchor in &els.anchors {
        let header = els.header.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let Some(target) = e.current_target() else {
                return;
            };
            let Ok(link) = target.dyn_into::<Element>() else {
                return;
            };
            let href = link.get_attribute("href").unwrap_or_default();
            if !is_in_page_anchor(&href) {
                return;
            }
            e.prevent_default();

            let Some(dest) = dom::query(&href).and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                tracing::debug!(href = %href, "anchor target not found");
                return;
            };
            let header_height = header.as_ref().map_or(0, |h| h.offset_height());
            smooth_scroll_to(anchor_scroll_top(
                f64::from(dest.offset_top()),
                f64::from(header_height),
            ));

            if let Ok(history) = dom::window().history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
            }
        }) as Box<dyn FnMut(_)>);
        anchor.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

// ── Active navigation ──

fn highlight_nav(links: &[Element], section: &str) {
    let wanted = nav_href_for(section);
    for link in links {
        dom::remove_class(link, "active");
        if link.get_attribute("href").as_deref() == Some(wanted.as_str()) {
            dom::add_class(link, "active");
        }
    }
}

pub fn init_active_nav(els: &Elements) -> Result<(), JsValue> {
    if els.sections.is_empty() {
        return Ok(());
    }
    let links = els.nav_links.clone();
    let cb = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            if let Some(section) = entry.target().get_attribute("data-section") {
                highlight_nav(&links, &section);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_root_margin(MIDPOINT_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)?;
    for section in &els.sections {
        observer.observe(section);
    }
    cb.forget();
    Ok(())
}

// ── Skill bars ──

pub fn init_skill_bars(els: &Elements, threshold: f64) -> Result<(), JsValue> {
    if els.progress_bars.is_empty() {
        return Ok(());
    }
    let cb = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let bar = entry.target();
            if let Some(width) = skill_bar_width(bar.get_attribute("data-width").as_deref()) {
                dom::set_style(&bar, "width", &width);
            }
            observer.unobserve(&bar);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)?;
    for bar in &els.progress_bars {
        observer.observe(bar);
    }
    cb.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_top_threshold_is_exclusive() {
        assert!(!back_to_top_visible(0.0, 300.0));
        assert!(!back_to_top_visible(300.0, 300.0));
        assert!(back_to_top_visible(300.5, 300.0));
    }

    #[test]
    fn bare_hash_is_not_intercepted() {
        assert!(!is_in_page_anchor("#"));
        assert!(!is_in_page_anchor("https://example.org/#about"));
        assert!(is_in_page_anchor("#projects"));
    }

    #[test]
    fn anchor_offset_subtracts_header() {
        assert_eq!(anchor_scroll_top(1200.0, 80.0), 1120.0);
    }

    #[test]
    fn nav_href_prefixes_hash() {
        assert_eq!(nav_href_for("contact"), "#contact");
    }

    #[test]
    fn skill_bar_width_from_data_attribute() {
        assert_eq!(skill_bar_width(Some("85")).as_deref(), Some("85%"));
        assert_eq!(skill_bar_width(Some(" 70% ")).as_deref(), Some("70%"));
        assert_eq!(skill_bar_width(Some("")), None);
        assert_eq!(skill_bar_width(None), None);
    }
}
