//! Contact form binding.
//!
//! `DomFormView` adapts `#contactForm` and `#formStatus` to the
//! `folio_contact::FormView` seam; the submit sequence itself lives in
//! `folio_contact::ContactForm`.

use crate::api::FetchDelivery;
use crate::dom;
use crate::state;
use folio_contact::{
    ContactForm, FieldKind, FieldSpec, FormStatus, FormView, ValidationError, submits_value,
};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

const FIELD_ERROR_CLASS: &str = "field-error";
const FIELD_ERROR_STYLE: &str = "color: var(--color-error); font-size: 0.875rem; margin-top: 0.25rem;";
const SENDING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

/// One form control and the validation rules read from its attributes.
#[derive(Clone)]
pub struct Control {
    pub spec: FieldSpec,
    pub element: Element,
}

impl Control {
    fn from_element(element: Element) -> Option<Self> {
        let (kind, required) = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            let ty = input.type_();
            if matches!(ty.as_str(), "submit" | "button" | "reset" | "image") {
                return None;
            }
            (FieldKind::from_input_type(&ty), input.required())
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            (FieldKind::TextArea, area.required())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            (FieldKind::Select, select.required())
        } else {
            return None;
        };

        let name = element
            .get_attribute("name")
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| element.id());
        Some(Self {
            spec: FieldSpec::new(name, kind, required),
            element,
        })
    }

    pub fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    /// Whether the browser would include this control in the form data.
    pub fn is_submitted(&self) -> bool {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            submits_value(&input.type_(), input.checked(), input.disabled())
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            submits_value("textarea", false, area.disabled())
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            submits_value("select", false, select.disabled())
        } else {
            false
        }
    }
}

pub struct DomFormView {
    form: HtmlFormElement,
    controls: Vec<Control>,
    submit_btn: Option<HtmlButtonElement>,
    original_label: RefCell<Option<String>>,
    status: Option<HtmlElement>,
    dismiss_ms: u32,
}

impl DomFormView {
    pub fn new(form: HtmlFormElement, status: Option<HtmlElement>, dismiss_ms: u32) -> Self {
        let controls = dom::query_all_within(&form, "input, textarea, select")
            .into_iter()
            .filter_map(Control::from_element)
            .collect();
        let submit_btn = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok());
        Self {
            form,
            controls,
            submit_btn,
            original_label: RefCell::new(None),
            status,
            dismiss_ms,
        }
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    fn control(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.spec.name == name)
    }
}

impl FormView for DomFormView {
    fn fields(&self) -> Vec<(FieldSpec, String)> {
        self.controls
            .iter()
            .filter(|c| c.is_submitted())
            .map(|c| (c.spec.clone(), c.value()))
            .collect()
    }

    fn show_field_error(&self, field: &str, error: ValidationError) {
        let Some(control) = self.control(field) else {
            return;
        };
        let Some(parent) = control.element.parent_element() else {
            return;
        };
        let Ok(el) = dom::create_element("div") else {
            return;
        };
        el.set_class_name(FIELD_ERROR_CLASS);
        el.set_text_content(Some(&error.to_string()));
        let _ = el.set_attribute("style", FIELD_ERROR_STYLE);
        let _ = parent.append_child(&el);
        dom::set_style(&control.element, "border-color", "var(--color-error)");
    }

    fn clear_field_error(&self, field: &str) {
        let Some(control) = self.control(field) else {
            return;
        };
        if let Some(parent) = control.element.parent_element() {
            if let Ok(Some(existing)) = parent.query_selector(&format!(".{FIELD_ERROR_CLASS}")) {
                existing.remove();
            }
        }
        dom::set_style(&control.element, "border-color", "");
    }

    fn set_pending(&self, pending: bool) {
        let Some(btn) = &self.submit_btn else {
            return;
        };
        if pending {
            self.original_label.replace(Some(btn.inner_html()));
            btn.set_inner_html(SENDING_LABEL);
            btn.set_disabled(true);
        } else {
            if let Some(label) = self.original_label.borrow_mut().take() {
                btn.set_inner_html(&label);
            }
            btn.set_disabled(false);
        }
    }

    fn show_status(&self, status: FormStatus) {
        let Some(el) = &self.status else {
            return;
        };
        el.set_text_content(Some(status.message()));
        el.set_class_name(status.class());
        let _ = el.style().set_property("display", "block");

        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Nearest);
        el.scroll_into_view_with_scroll_into_view_options(&opts);

        let el2 = el.clone();
        Timeout::new(self.dismiss_ms, move || {
            let _ = el2.style().set_property("display", "none");
        })
        .forget();
    }

    fn reset_fields(&self) {
        self.form.reset();
    }
}

/// Wire blur/input validation and submission. No-op when the page has no form.
pub fn init(form: &HtmlFormElement, status: Option<HtmlElement>) -> Result<(), JsValue> {
    let config = state::config();
    let view = Rc::new(DomFormView::new(form.clone(), status, config.status_dismiss_ms));
    let controller = Rc::new(ContactForm::new(config.email.clone()));
    let delivery = Rc::new(FetchDelivery::new(config.email.endpoint.clone()));
    let control_count = view.controls().len();

    for control in view.controls() {
        {
            let view = view.clone();
            let controller = controller.clone();
            let control2 = control.clone();
            let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let _ = controller.on_blur(&*view, &control2.spec, &control2.value());
            }) as Box<dyn FnMut(_)>);
            control
                .element
                .add_event_listener_with_callback("blur", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
        {
            let view = view.clone();
            let controller = controller.clone();
            let name = control.spec.name.clone();
            let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
                controller.on_input(&*view, &name);
            }) as Box<dyn FnMut(_)>);
            control
                .element
                .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
    }

    let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
        e.prevent_default();
        let view = view.clone();
        let controller = controller.clone();
        let delivery = delivery.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller.submit(&*view, &*delivery).await;
        });
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
    cb.forget();

    tracing::debug!(controls = control_count, "contact form bound");
    Ok(())
}
