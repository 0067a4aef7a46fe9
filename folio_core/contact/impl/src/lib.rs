use std::sync::Arc;

use anyhow::Context;
use email_address::EmailAddress;
use folio_core_contact_contracts::{
    rate_limit::ContactRateLimitService, ContactFeatureService, ContactRelayError, MailRequest,
    SubmissionRejection,
};
use folio_di::Build;
use folio_extern_contracts::mail::MailApiService;
use folio_models::{
    contact::{ContactSubmission, RateLimitPolicy},
    Sensitive,
};
use folio_utils::trace_instrument;

mod compose;
pub mod rate_limit;
mod sanitize;
mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFeatureServiceImpl<RateLimit, MailApi> {
    rate_limit: RateLimit,
    mail_api: MailApi,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// `None` if any relay setting is missing from the configuration. All
    /// submissions are then rejected with a configuration error.
    pub relay: Option<Arc<ContactRelayConfig>>,
}

#[derive(Debug)]
pub struct ContactRelayConfig {
    pub api_key: Sensitive<String>,
    /// Sender address, must belong to a domain verified with the provider.
    pub from: EmailAddress,
    /// Inbox that receives the relayed submissions.
    pub to: EmailAddress,
    pub rate_limit: RateLimitPolicy,
}

impl<RateLimit, MailApi> ContactFeatureService for ContactFeatureServiceImpl<RateLimit, MailApi>
where
    RateLimit: ContactRateLimitService,
    MailApi: MailApiService,
{
    #[trace_instrument(skip(self))]
    async fn relay_message(&self, request: MailRequest) -> Result<(), ContactRelayError> {
        let Some(relay) = self.config.relay.as_deref() else {
            return Err(ContactRelayError::Configuration);
        };

        if !request
            .content_type
            .as_deref()
            .is_some_and(|content_type| content_type.contains("application/json"))
        {
            return Err(SubmissionRejection::ContentType.into());
        }

        let submission = serde_json::from_str::<ContactSubmission>(&request.body)
            .context("Failed to deserialize contact form submission")?;

        validate::validate(&submission)?;

        if !self
            .rate_limit
            .try_acquire(&request.client_ip, relay.rate_limit)
            .await?
        {
            return Err(ContactRelayError::RateLimited);
        }

        let message = compose::compose(relay, &submission);

        if !self.mail_api.send(&relay.api_key, &message).await? {
            return Err(ContactRelayError::Send);
        }

        Ok(())
    }
}
