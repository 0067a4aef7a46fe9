use anyhow::Context;
use folio_cache_contracts::CacheService;
use folio_core_contact_contracts::rate_limit::ContactRateLimitService;
use folio_di::Build;
use folio_models::{contact::RateLimitPolicy, ClientIp};
use folio_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
pub struct ContactRateLimitServiceImpl<Cache> {
    cache: Cache,
}

impl<Cache> ContactRateLimitService for ContactRateLimitServiceImpl<Cache>
where
    Cache: CacheService,
{
    #[trace_instrument(skip(self))]
    async fn try_acquire(
        &self,
        client_ip: &ClientIp,
        policy: RateLimitPolicy,
    ) -> anyhow::Result<bool> {
        let policy = policy.clamped();
        let cache_key = cache_key(client_ip);

        // Read and increment are two separate cache operations, so concurrent
        // submissions can exceed the budget by a small margin.
        let count = self
            .cache
            .get::<u64>(&cache_key)
            .await
            .context("Failed to get submission count from cache")?
            .unwrap_or(0);

        if count >= policy.max_submissions {
            return Ok(false);
        }

        self.cache
            .set(&cache_key, &(count + 1), Some(policy.window))
            .await
            .context("Failed to save submission count in cache")?;

        Ok(true)
    }
}

fn cache_key(client_ip: &ClientIp) -> String {
    format!("contact:{client_ip}")
}
