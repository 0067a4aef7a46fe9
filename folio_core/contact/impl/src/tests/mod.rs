use std::{sync::Arc, time::Duration};

use folio_core_contact_contracts::rate_limit::MockContactRateLimitService;
use folio_extern_contracts::mail::MockMailApiService;
use folio_models::{contact::RateLimitPolicy, Sensitive};

use crate::{ContactFeatureConfig, ContactFeatureServiceImpl, ContactRelayConfig};


type Sut = ContactFeatureServiceImpl<MockContactRateLimitService, MockMailApiService>;

pub fn relay_config() -> ContactRelayConfig {
    ContactRelayConfig {
        api_key: Sensitive("re_test_key".to_owned()),
        from: "noreply@example.com".parse().unwrap(),
        to: "owner@example.com".parse().unwrap(),
        rate_limit: RateLimitPolicy {
            max_submissions: 3,
            window: Duration::from_secs(3600),
        },
    }
}

impl Default for ContactFeatureConfig {
    fn default() -> Self {
        Self {
            relay: Some(Arc::new(relay_config())),
        }
    }
}
