use folio_cache_valkey::ValkeyCache;
use folio_core_contact_impl::{rate_limit::ContactRateLimitServiceImpl, ContactFeatureServiceImpl};
use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_extern_impl::mail::MailApiServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<HealthFeature, ContactFeature>;

// Cache
pub type Cache = ValkeyCache;

// Extern
pub type MailApi = MailApiServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Cache>;
pub type ContactFeature = ContactFeatureServiceImpl<ContactRateLimit, MailApi>;
pub type ContactRateLimit = ContactRateLimitServiceImpl<Cache>;
