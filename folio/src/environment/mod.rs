use std::sync::Arc;

use folio_api_rest::{RestServerConfig, RestServerRealIpConfig};
use folio_config::Config;
use folio_core_contact_impl::{ContactFeatureConfig, ContactRelayConfig};
use folio_core_health_impl::HealthFeatureConfig;
use folio_di::provider;
use folio_extern_impl::mail::MailApiServiceConfig;
use folio_models::contact::RateLimitPolicy;
use tracing::warn;
use types::Cache;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        cache: Cache,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Extern
            MailApiServiceConfig,

            // Core
            HealthFeatureConfig,
            ContactFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, cache: Cache) -> Self {
        Self {
            _cache: Default::default(),
            cache,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Extern
        mail_api_service_config: MailApiServiceConfig,

        // Core
        health_feature_config: HealthFeatureConfig,
        contact_feature_config: ContactFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        // API
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
            real_ip_config: config.http.real_ip.as_ref().map(|real_ip_config| {
                Arc::new(RestServerRealIpConfig {
                    header: real_ip_config.header.clone(),
                    set_from: real_ip_config.set_from,
                })
            }),
        };

        // Extern
        let mail_api_service_config =
            MailApiServiceConfig::new(config.mail.send_endpoint_override.clone());

        // Core
        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        let contact_feature_config = ContactFeatureConfig {
            relay: relay_config(config),
        };

        Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Extern
            mail_api_service_config,

            // Core
            health_feature_config,
            contact_feature_config,
        }
    }
}

/// Collects the relay settings, or logs the missing keys and returns `None`.
fn relay_config(config: &Config) -> Option<Arc<ContactRelayConfig>> {
    let missing = [
        ("mail.api_key", config.mail.api_key.is_none()),
        ("contact.from", config.contact.from.is_none()),
        ("contact.to", config.contact.to.is_none()),
        (
            "contact.max_submissions",
            config.contact.max_submissions.is_none(),
        ),
        ("contact.window", config.contact.window.is_none()),
    ]
    .into_iter()
    .filter(|&(_, missing)| missing)
    .map(|(key, _)| key)
    .collect::<Vec<_>>();

    if !missing.is_empty() {
        warn!(
            "Contact form relay is disabled, missing config keys: {}",
            missing.join(", ")
        );
        return None;
    }

    Some(Arc::new(ContactRelayConfig {
        api_key: config.mail.api_key.clone()?,
        from: config.contact.from.clone()?,
        to: config.contact.to.clone()?,
        rate_limit: RateLimitPolicy {
            max_submissions: config.contact.max_submissions?,
            window: config.contact.window?.into(),
        },
    }))
}
