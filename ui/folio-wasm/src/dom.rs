//! DOM element bindings.
//!
//! All elements the page script relies on are resolved once at startup.
//! Elements the page may legitimately omit (theme toggle, back-to-top,
//! contact form, ...) are `Option`s; the rest abort start-up when missing.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(nl) => collect_elements(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect_elements(&nl),
        Err(_) => Vec::new(),
    }
}

fn collect_elements(nl: &web_sys::NodeList) -> Vec<Element> {
    let mut v = Vec::with_capacity(nl.length() as usize);
    for i in 0..nl.length() {
        if let Some(node) = nl.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

/// Set one inline style property; no-op for non-HTML elements.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn same_node(a: &Element, b: &Element) -> bool {
    a.is_same_node(Some(b))
}

// ── Elements struct ──

/// DOM references used by the portfolio script.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub root: Element,
    pub body: HtmlElement,

    // Navigation
    pub header: Option<HtmlElement>,
    pub menu_toggle: Option<Element>,
    pub menu_close: Option<Element>,
    pub mobile_menu: Element,
    pub mobile_nav_links: Vec<Element>,
    pub nav_links: Vec<Element>,
    pub anchors: Vec<Element>,
    pub sections: Vec<Element>,

    // Projects
    pub filter_buttons: Vec<Element>,
    pub projects_grid: Element,

    // Contact
    pub contact_form: Option<HtmlFormElement>,
    pub form_status: Option<HtmlElement>,

    // Chrome
    pub theme_toggle: Option<Element>,
    pub back_to_top: Option<Element>,
    pub progress_bars: Vec<Element>,
    pub current_year: Option<Element>,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once the document is parsed.
    pub fn bind(header_selector: &str) -> Result<Elements, JsValue> {
        let doc = document();
        Ok(Elements {
            root: doc
                .document_element()
                .ok_or_else(|| JsValue::from_str("missing document element"))?,
            body: doc
                .body()
                .ok_or_else(|| JsValue::from_str("missing <body>"))?,

            header: query(header_selector).and_then(|e| e.dyn_into::<HtmlElement>().ok()),
            menu_toggle: by_id("menuToggle"),
            menu_close: by_id("menuClose"),
            mobile_menu: get_el!("mobileMenu"),
            mobile_nav_links: query_all(".mobile-nav-link"),
            nav_links: query_all(".nav-link, .mobile-nav-link"),
            anchors: query_all("a[href^=\"#\"]"),
            sections: query_all("section[data-section]"),

            filter_buttons: query_all(".filter-btn"),
            projects_grid: get_el!("projectsGrid"),

            contact_form: by_id_typed::<HtmlFormElement>("contactForm"),
            form_status: by_id_typed::<HtmlElement>("formStatus"),

            theme_toggle: by_id("themeToggle"),
            back_to_top: by_id("backToTop"),
            progress_bars: query_all(".progress-bar"),
            current_year: by_id("currentYear"),
        })
    }
}
