use std::sync::LazyLock;

use folio_core_contact_contracts::SubmissionRejection;
use folio_models::contact::{
    ContactSubmission, EMAIL_MAX_CHARS, MESSAGE_MAX_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS,
};
use regex::Regex;

/// RFC 5322 style address check. The website runs a different pattern in the
/// browser, this one is authoritative.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Checks a parsed submission against the contact form constraints.
///
/// The checks run in a fixed order and the first failing one determines the
/// reported rejection. Lengths are counted in characters, not bytes. The
/// phone number is optional and never rejected.
pub fn validate(submission: &ContactSubmission) -> Result<(), SubmissionRejection> {
    if submission
        .website
        .as_deref()
        .is_some_and(|website| !website.is_empty())
    {
        return Err(SubmissionRejection::Honeypot);
    }

    let name_chars = submission
        .name
        .as_deref()
        .map_or(0, |name| name.chars().count());
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_chars) {
        return Err(SubmissionRejection::Name);
    }

    if !submission.email.as_deref().is_some_and(|email| {
        email.chars().count() <= EMAIL_MAX_CHARS && EMAIL_PATTERN.is_match(email)
    }) {
        return Err(SubmissionRejection::Email);
    }

    if submission
        .message
        .as_deref()
        .is_some_and(|message| message.chars().count() > MESSAGE_MAX_CHARS)
    {
        return Err(SubmissionRejection::Message);
    }

    Ok(())
}
