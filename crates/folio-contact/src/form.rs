//! Submit sequence and inline-error handling for the contact form.

use crate::email::{EmailDelivery, EmailDeliveryError, EmailRequest, EmailSettings};
use crate::validate::{FieldSpec, ValidationError, validate_field};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Success,
    Error,
}

impl FormStatus {
    pub fn message(&self) -> &'static str {
        match self {
            FormStatus::Success => "Thanks for reaching out! I'll get back to you soon.",
            FormStatus::Error => "Something went wrong. Please try again later.",
        }
    }

    /// Class name put on the status element.
    pub fn class(&self) -> &'static str {
        match self {
            FormStatus::Success => "success",
            FormStatus::Error => "error",
        }
    }
}

/// The form as the controller sees it.
pub trait FormView {
    /// Every named field with its current raw value, in document order.
    fn fields(&self) -> Vec<(FieldSpec, String)>;
    fn show_field_error(&self, field: &str, error: ValidationError);
    fn clear_field_error(&self, field: &str);
    /// Disable the submit button with a spinner, or restore its original label.
    fn set_pending(&self, pending: bool);
    fn show_status(&self, status: FormStatus);
    fn reset_fields(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub error: ValidationError,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Invalid(Vec<FieldIssue>),
    Sent,
    Failed(EmailDeliveryError),
}

pub struct ContactForm {
    settings: EmailSettings,
}

impl ContactForm {
    pub fn new(settings: EmailSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EmailSettings {
        &self.settings
    }

    /// Validate one field when it loses focus. At most one inline error is shown.
    pub fn on_blur<V: FormView + ?Sized>(
        &self,
        view: &V,
        spec: &FieldSpec,
        raw: &str,
    ) -> Result<(), ValidationError> {
        view.clear_field_error(&spec.name);
        let result = validate_field(spec, raw);
        if let Err(error) = result {
            view.show_field_error(&spec.name, error);
        }
        result
    }

    pub fn on_input<V: FormView + ?Sized>(&self, view: &V, field: &str) {
        view.clear_field_error(field);
    }

    /// Validate every field, then send. Delivery is never called for an invalid form.
    pub async fn submit<V, D>(&self, view: &V, delivery: &D) -> SubmitOutcome
    where
        V: FormView + ?Sized,
        D: EmailDelivery + ?Sized,
    {
        let fields = view.fields();

        let mut issues = Vec::new();
        for (spec, raw) in &fields {
            view.clear_field_error(&spec.name);
            if let Err(error) = validate_field(spec, raw) {
                view.show_field_error(&spec.name, error);
                issues.push(FieldIssue {
                    field: spec.name.clone(),
                    error,
                });
            }
        }
        if !issues.is_empty() {
            tracing::debug!(count = issues.len(), "contact form has invalid fields");
            return SubmitOutcome::Invalid(issues);
        }

        let params: BTreeMap<String, String> = fields
            .into_iter()
            .filter(|(spec, _)| !spec.name.is_empty())
            .map(|(spec, raw)| (spec.name, raw))
            .collect();
        let request = EmailRequest::new(&self.settings, params);

        view.set_pending(true);
        let outcome = match delivery.send(&request).await {
            Ok(()) => {
                tracing::info!("contact email sent");
                view.show_status(FormStatus::Success);
                view.reset_fields();
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!(error = %e, "contact form submission failed");
                view.show_status(FormStatus::Error);
                SubmitOutcome::Failed(e)
            }
        };
        view.set_pending(false);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::FieldKind;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Pending(bool),
        Status(FormStatus),
        Reset,
    }

    struct RecordingView {
        fields: RefCell<Vec<(FieldSpec, String)>>,
        errors: RefCell<Vec<(String, ValidationError)>>,
        events: RefCell<Vec<Event>>,
    }

    impl RecordingView {
        fn new(name: &str, email: &str, message: &str) -> Self {
            Self {
                fields: RefCell::new(vec![
                    (FieldSpec::new("name", FieldKind::Text, true), name.to_owned()),
                    (FieldSpec::new("email", FieldKind::Email, true), email.to_owned()),
                    (FieldSpec::new("subject", FieldKind::Select, false), String::new()),
                    (FieldSpec::new("message", FieldKind::TextArea, true), message.to_owned()),
                ]),
                errors: RefCell::default(),
                events: RefCell::default(),
            }
        }

        fn errors_for(&self, field: &str) -> usize {
            self.errors.borrow().iter().filter(|(f, _)| f == field).count()
        }
    }

    impl FormView for RecordingView {
        fn fields(&self) -> Vec<(FieldSpec, String)> {
            self.fields.borrow().clone()
        }

        fn show_field_error(&self, field: &str, error: ValidationError) {
            self.errors.borrow_mut().push((field.to_owned(), error));
        }

        fn clear_field_error(&self, field: &str) {
            self.errors.borrow_mut().retain(|(f, _)| f != field);
        }

        fn set_pending(&self, pending: bool) {
            self.events.borrow_mut().push(Event::Pending(pending));
        }

        fn show_status(&self, status: FormStatus) {
            self.events.borrow_mut().push(Event::Status(status));
        }

        fn reset_fields(&self) {
            for (_, value) in self.fields.borrow_mut().iter_mut() {
                value.clear();
            }
            self.events.borrow_mut().push(Event::Reset);
        }
    }

    #[derive(Default)]
    struct StubDelivery {
        fail: bool,
        calls: Cell<usize>,
        last: RefCell<Option<EmailRequest>>,
    }

    #[async_trait(?Send)]
    impl EmailDelivery for StubDelivery {
        async fn send(&self, request: &EmailRequest) -> Result<(), EmailDeliveryError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(request.clone());
            if self.fail {
                Err(EmailDeliveryError::Rejected {
                    status: 400,
                    body: "bad template".to_owned(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn form() -> ContactForm {
        ContactForm::new(EmailSettings::default())
    }

    #[tokio::test]
    async fn empty_required_field_blocks_delivery() {
        let view = RecordingView::new("", "ada@uni.edu", "hello");
        let delivery = StubDelivery::default();

        let outcome = form().submit(&view, &delivery).await;

        assert_eq!(delivery.calls.get(), 0);
        match outcome {
            SubmitOutcome::Invalid(issues) => {
                assert_eq!(
                    issues,
                    vec![FieldIssue {
                        field: "name".to_owned(),
                        error: ValidationError::RequiredField,
                    }]
                );
            }
            other => panic!("expected invalid outcome, got {other:?}"),
        }
        assert!(view.events.borrow().is_empty());
        assert_eq!(view.errors_for("name"), 1);
    }

    #[tokio::test]
    async fn successful_send_resets_and_restores_button() {
        let view = RecordingView::new("Ada", "ada@uni.edu", "hello");
        let delivery = StubDelivery::default();

        let outcome = form().submit(&view, &delivery).await;

        assert!(matches!(outcome, SubmitOutcome::Sent));
        assert_eq!(delivery.calls.get(), 1);
        assert_eq!(
            *view.events.borrow(),
            vec![
                Event::Pending(true),
                Event::Status(FormStatus::Success),
                Event::Reset,
                Event::Pending(false),
            ]
        );
        let request = delivery.last.borrow().clone().unwrap();
        assert_eq!(request.service_id, "YOUR_SERVICE_ID");
        assert_eq!(request.template_params.get("email").map(String::as_str), Some("ada@uni.edu"));
        assert!(view.fields().iter().all(|(_, v)| v.is_empty()));
    }

    #[tokio::test]
    async fn failed_send_keeps_fields_and_restores_button() {
        let view = RecordingView::new("Ada", "ada@uni.edu", "hello");
        let delivery = StubDelivery {
            fail: true,
            ..StubDelivery::default()
        };

        let outcome = form().submit(&view, &delivery).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(EmailDeliveryError::Rejected { status: 400, .. })
        ));
        assert_eq!(
            *view.events.borrow(),
            vec![
                Event::Pending(true),
                Event::Status(FormStatus::Error),
                Event::Pending(false),
            ]
        );
        assert_eq!(view.fields()[0].1, "Ada");
    }

    #[test]
    fn blur_shows_one_error_and_input_clears_it() {
        let view = RecordingView::new("", "", "");
        let spec = FieldSpec::new("email", FieldKind::Email, true);
        let form = form();

        assert_eq!(
            form.on_blur(&view, &spec, "not-an-email"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            form.on_blur(&view, &spec, "still wrong"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(view.errors_for("email"), 1);

        form.on_input(&view, "email");
        assert_eq!(view.errors_for("email"), 0);
    }

    #[test]
    fn blur_on_valid_value_clears_previous_error() {
        let view = RecordingView::new("", "", "");
        let spec = FieldSpec::new("name", FieldKind::Text, true);
        let form = form();

        assert!(form.on_blur(&view, &spec, " ").is_err());
        assert_eq!(view.errors_for("name"), 1);
        assert!(form.on_blur(&view, &spec, "Ada").is_ok());
        assert_eq!(view.errors_for("name"), 0);
    }
}
