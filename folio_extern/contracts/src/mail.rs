use std::future::Future;

use folio_models::contact::OutgoingMessage;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MailApiService: Send + Sync + 'static {
    /// Hands a message to the transactional mail provider.
    ///
    /// Returns `Ok(true)` if the provider acknowledged the message with a
    /// success status and `Ok(false)` if it rejected the message or could not
    /// be reached.
    fn send(
        &self,
        api_key: &str,
        message: &OutgoingMessage,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl MockMailApiService {
    pub fn with_send(mut self, api_key: String, message: OutgoingMessage, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(
                mockall::predicate::eq(api_key),
                mockall::predicate::eq(message),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
