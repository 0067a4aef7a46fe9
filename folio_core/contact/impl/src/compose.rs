use folio_models::contact::{
    ContactSubmission, OutgoingMessage, MESSAGE_MAX_CHARS, NAME_MAX_CHARS, PHONE_MAX_CHARS,
};

use crate::{sanitize::sanitize, ContactRelayConfig};

const SUBJECT: &str = "New Contact Form Submission";

/// Renders the notification email for a validated submission.
///
/// All user controlled fields are sanitized before they are embedded. The
/// email address is only trimmed since it has already passed validation and
/// has to stay intact for the `replyTo` header.
pub fn compose(config: &ContactRelayConfig, submission: &ContactSubmission) -> OutgoingMessage {
    let name = sanitize(submission.name.as_deref(), NAME_MAX_CHARS);
    let email = submission.email.as_deref().unwrap_or_default().trim();
    let phone = sanitize(submission.phone.as_deref(), PHONE_MAX_CHARS);
    let message = sanitize(submission.message.as_deref(), MESSAGE_MAX_CHARS);

    let phone = if phone.is_empty() {
        "N/A".to_owned()
    } else {
        phone
    };
    let message_html = if message.is_empty() {
        "(no message)".to_owned()
    } else {
        message.replace('\n', "<br/>")
    };
    let message_text = if message.is_empty() {
        "(no message)".to_owned()
    } else {
        message
    };

    OutgoingMessage {
        from: format!("Website <{}>", config.from),
        reply_to: format!("{name} <{email}>"),
        to: vec![config.to.to_string()],
        subject: SUBJECT.into(),
        text: format!("Name: {name}\nEmail: {email}\nPhone: {phone}\nMessage: {message_text}\n"),
        html: format!(
            "<p><b>Name:</b> {name}</p>\n<p><b>Email:</b> {email}</p>\n<p><b>Phone:</b> \
             {phone}</p>\n<p><b>Message:</b><br/>{message_html}</p>\n"
        ),
    }
}
