use std::future::Future;

use folio_models::{contact::RateLimitPolicy, ClientIp};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRateLimitService: Send + Sync + 'static {
    /// Try to consume one submission slot for the given client.
    ///
    /// Returns `false` if the client has exhausted its budget for the current
    /// window.
    fn try_acquire(
        &self,
        client_ip: &ClientIp,
        policy: RateLimitPolicy,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactRateLimitService {
    pub fn with_try_acquire(
        mut self,
        client_ip: ClientIp,
        policy: RateLimitPolicy,
        result: bool,
    ) -> Self {
        self.expect_try_acquire()
            .once()
            .with(
                mockall::predicate::eq(client_ip),
                mockall::predicate::eq(policy),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
