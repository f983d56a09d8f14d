use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Browser whitespace as matched by `\s` and stripped by `String.prototype.trim`.
/// Unlike `char::is_whitespace` it includes U+FEFF and excludes U+0085.
const WS: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[^{WS}@]+@[^{WS}@]+\.[^{WS}@]+$")).expect("email pattern")
});

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required")]
    RequiredField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
    Select,
}

impl FieldKind {
    /// Map an element's `type` (or tag name for textarea/select).
    pub fn from_input_type(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "textarea" => FieldKind::TextArea,
            "select" | "select-one" | "select-multiple" => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
        }
    }
}

pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Validate one field's raw value. Surrounding whitespace is ignored.
pub fn validate_field(spec: &FieldSpec, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim_matches(is_form_whitespace);
    if spec.required && value.is_empty() {
        return Err(ValidationError::RequiredField);
    }
    if spec.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whether a control's value is part of the submitted form data: disabled
/// controls never are, checkboxes and radios only while checked.
pub fn submits_value(input_type: &str, checked: bool, disabled: bool) -> bool {
    if disabled {
        return false;
    }
    match input_type.to_ascii_lowercase().as_str() {
        "checkbox" | "radio" => checked,
        _ => true,
    }
}
