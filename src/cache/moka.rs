use async_trait::async_trait;
use moka::future::Cache;
use std::time::Duration;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::CacheConfig;

pub struct MokaCacheWrapper {
    inner: Cache<String, String>,
}

impl MokaCacheWrapper {
    pub fn new(config: &CacheConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.default_ttl))
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, ttl: {}s",
            config.max_capacity, config.default_ttl
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(value) => CacheResult::Found(value),
            None => {
                debug!("Key not found in cache: {}", key);
                CacheResult::NotFound
            }
        }
    }

    // TTL 在构建缓存时统一配置
    async fn insert_raw(&self, key: String, value: String) {
        self.inner.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> MokaCacheWrapper {
        MokaCacheWrapper::new(&CacheConfig {
            default_ttl: 60,
            max_capacity: 100,
        })
    }

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = cache();
        cache.insert_raw("user:abc".into(), "{}".into()).await;
        assert_eq!(
            cache.get_raw("user:abc").await,
            CacheResult::Found("{}".to_string())
        );

        cache.remove("user:abc").await;
        assert_eq!(cache.get_raw("user:abc").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let cache = cache();
        cache.insert_raw("user:a".into(), "1".into()).await;
        cache.insert_raw("user:b".into(), "2".into()).await;
        cache.invalidate_all().await;
        // invalidate_all 对后续读取立即生效
        assert_eq!(cache.get_raw("user:a").await, CacheResult::NotFound);
        assert_eq!(cache.get_raw("user:b").await, CacheResult::NotFound);
    }
}
