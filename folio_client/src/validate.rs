use std::sync::LazyLock;

use folio_models::contact::{NAME_MAX_CHARS, NAME_MIN_CHARS, PHONE_MAX_CHARS, PHONE_MIN_CHARS};
use regex::Regex;

use crate::ContactForm;

pub const NAME_ERROR: &str = "Name is required. Max 100 chars";
pub const EMAIL_ERROR: &str = "Must be a valid email address";
pub const PHONE_ERROR: &str = "A valid phone number should be between 7 and 20 characters";

/// Not the same pattern the relay checks against. These errors are hints for
/// the visitor, the relay has the final say.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});

/// Field errors shown next to the form inputs, recomputed on every edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
}

impl FormErrors {
    pub fn of(form: &ContactForm) -> Self {
        Self {
            name: validate_name(&form.name),
            email: validate_email(&form.email),
            phone: validate_phone(&form.phone),
        }
    }

    pub fn has_error(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.phone.is_some()
    }
}

pub fn validate_name(name: &str) -> Option<&'static str> {
    let name_chars = name.chars().count();
    (!(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_chars)).then_some(NAME_ERROR)
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    (!EMAIL_PATTERN.is_match(&email.to_lowercase())).then_some(EMAIL_ERROR)
}

/// The phone number is optional, only a non-empty value is checked.
pub fn validate_phone(phone: &str) -> Option<&'static str> {
    if phone.is_empty() {
        return None;
    }

    let phone_chars = phone.chars().count();
    (!(PHONE_MIN_CHARS..=PHONE_MAX_CHARS).contains(&phone_chars)).then_some(PHONE_ERROR)
}
