use std::future::Future;

use folio_models::ClientIp;
use thiserror::Error;

pub mod rate_limit;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a raw contact form submission and relay it to the inbox
    /// configured for the site.
    ///
    /// The request body is parsed and validated here rather than in the api
    /// layer so that malformed payloads surface as relay errors instead of
    /// framework rejections.
    fn relay_message(
        &self,
        request: MailRequest,
    ) -> impl Future<Output = Result<(), ContactRelayError>> + Send;
}

/// Contact form submission as received on the wire, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRequest {
    /// Value of the `Content-Type` request header, if present.
    pub content_type: Option<String>,
    /// Raw request body decoded as UTF-8.
    pub body: String,
    pub client_ip: ClientIp,
}

#[derive(Debug, Error)]
pub enum ContactRelayError {
    #[error("Server configuration error. Please contact the administrator.")]
    Configuration,
    #[error(transparent)]
    Rejected(#[from] SubmissionRejection),
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("Failed to send email.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Reasons a submission is rejected before any email is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionRejection {
    #[error("Invalid Content-Type.")]
    ContentType,
    #[error("Spam detected.")]
    Honeypot,
    #[error("Name is required. 2-100 chars max.")]
    Name,
    #[error("A valid email is required.")]
    Email,
    #[error("Message is too long.")]
    Message,
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_relay_message(
        mut self,
        request: MailRequest,
        result: Result<(), ContactRelayError>,
    ) -> Self {
        self.expect_relay_message()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
