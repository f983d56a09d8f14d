//! Contact form: field validation, email delivery, and the submit sequence.
//!
//! The browser side implements [`FormView`] over the real form and
//! [`EmailDelivery`] over `fetch`; everything in this crate runs without a DOM.

pub mod email;
pub mod form;
pub mod validate;

pub use email::{EmailDelivery, EmailDeliveryError, EmailRequest, EmailSettings};
pub use form::{ContactForm, FieldIssue, FormStatus, FormView, SubmitOutcome};
pub use validate::{
    FieldKind, FieldSpec, ValidationError, is_form_whitespace, is_valid_email, submits_value,
    validate_field,
};
