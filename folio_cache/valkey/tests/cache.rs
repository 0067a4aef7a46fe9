use std::time::Duration;

use folio_cache_contracts::CacheService;
use folio_cache_valkey::{ValkeyCache, ValkeyCacheConfig};

#[tokio::test]
#[ignore = "requires a running valkey instance"]
async fn get_set() {
    let cache = setup().await;

    assert_eq!(cache.get::<u64>("contact:absent").await.unwrap(), None);

    cache
        .set("contact:10.0.0.1", &1u64, Some(Duration::from_secs(2)))
        .await
        .unwrap();
    assert_eq!(
        cache.get::<u64>("contact:10.0.0.1").await.unwrap(),
        Some(1)
    );

    cache
        .set("contact:10.0.0.1", &2u64, Some(Duration::from_secs(2)))
        .await
        .unwrap();
    assert_eq!(
        cache.get::<u64>("contact:10.0.0.1").await.unwrap(),
        Some(2)
    );
}

#[tokio::test]
#[ignore = "requires a running valkey instance"]
async fn set_ttl() {
    let cache = setup().await;

    cache
        .set("contact:ttl", &7u64, Some(Duration::from_millis(200)))
        .await
        .unwrap();
    assert!(cache.get::<u64>("contact:ttl").await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(cache.get::<u64>("contact:ttl").await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(cache.get::<u64>("contact:ttl").await.unwrap().is_none());
}

async fn setup() -> ValkeyCache {
    let config = folio_config::load().unwrap();

    let cache = ValkeyCache::connect(&ValkeyCacheConfig {
        url: config.cache.url,
        max_connections: config.cache.max_connections,
        min_connections: config.cache.min_connections,
        acquire_timeout: config.cache.acquire_timeout.into(),
        idle_timeout: config.cache.idle_timeout.map(Into::into),
        max_lifetime: config.cache.max_lifetime.map(Into::into),
    })
    .await
    .unwrap();
    cache.ping().await.unwrap();

    cache
}
