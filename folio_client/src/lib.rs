//! Controller behind the contact form on the website.
//!
//! Owns the form state, recomputes the per-field errors on every edit and
//! posts submissions to the relay endpoint. The field errors are hints for
//! the visitor, the relay performs the authoritative checks on its side.

use std::time::Duration;

use folio_models::contact::MailApiResponse;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::validate::FormErrors;

pub mod validate;

const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// The raw form fields as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Honeypot field. The website never shows it, so humans leave it empty.
    pub website: String,
}

#[derive(Debug)]
pub struct ContactFormController {
    endpoint: Url,
    client: reqwest::Client,
    form: ContactForm,
    errors: FormErrors,
    loading: bool,
    result_message: String,
}

impl ContactFormController {
    pub fn new(endpoint: Url) -> Self {
        let form = ContactForm::default();
        Self {
            endpoint,
            client: reqwest::Client::new(),
            errors: FormErrors::of(&form),
            form,
            loading: false,
            result_message: String::new(),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> FormErrors {
        self.errors
    }

    pub fn has_error(&self) -> bool {
        self.errors.has_error()
    }

    /// Whether a submission is in flight. The submit control on the website
    /// is disabled while this is set, overlapping submissions are not
    /// prevented here.
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn result_message(&self) -> &str {
        &self.result_message
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
        self.errors = FormErrors::of(&self.form);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
        self.errors = FormErrors::of(&self.form);
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.form.phone = phone.into();
        self.errors = FormErrors::of(&self.form);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.form.message = message.into();
        self.errors = FormErrors::of(&self.form);
    }

    pub fn set_website(&mut self, website: impl Into<String>) {
        self.form.website = website.into();
        self.errors = FormErrors::of(&self.form);
    }

    /// Resets the form, the field errors and the result message.
    pub fn clear(&mut self) {
        self.form = ContactForm::default();
        self.errors = FormErrors::of(&self.form);
        self.result_message.clear();
    }

    /// Submits the current form to the relay endpoint.
    ///
    /// Never fails, every outcome ends up in [`Self::result_message`]. The
    /// form keeps its values unless the submission was accepted.
    pub async fn submit(&mut self) {
        self.loading = true;

        match self.request().await {
            Outcome::Accepted => {
                self.clear();
                self.result_message = "✅ Thank you for your message.".into();
            }
            Outcome::Rejected(error) => {
                self.result_message = format!(
                    "❌ {}",
                    error
                        .as_deref()
                        .unwrap_or("There was an error sending your message.")
                );
            }
            Outcome::NetworkIssue => {
                self.result_message =
                    "❌ Network issue. Please check your connection and try again.".into();
            }
            Outcome::Failed => {
                self.result_message = "❌ Sorry, there was an error. Please try later.".into();
            }
        }

        self.loading = false;
    }

    async fn request(&self) -> Outcome {
        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(&self.form)
            .timeout(SUBMIT_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                debug!("Failed to reach the contact endpoint: {err}");
                return if err.is_timeout() || err.is_connect() {
                    Outcome::NetworkIssue
                } else {
                    Outcome::Failed
                };
            }
        };

        match response.json::<MailApiResponse>().await {
            Ok(MailApiResponse { success: true, .. }) => Outcome::Accepted,
            Ok(MailApiResponse { error, .. }) => Outcome::Rejected(error),
            Err(err) if err.is_timeout() => Outcome::NetworkIssue,
            Err(err) => {
                debug!("Failed to decode the contact endpoint response: {err}");
                Outcome::Failed
            }
        }
    }
}

#[derive(Debug)]
enum Outcome {
    Accepted,
    Rejected(Option<String>),
    NetworkIssue,
    Failed,
}
