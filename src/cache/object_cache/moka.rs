use async_trait::async_trait;
use moka::{Expiry, future::Cache};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

/// 进程内缓存，值与各自的 TTL 一起存放
pub struct MokaCacheWrapper {
    inner: Cache<String, (String, u64)>,
}

// 单条 TTL 为 0 时使用构建时的默认 TTL
struct PerEntryTtl {
    default_ttl: Duration,
}

impl PerEntryTtl {
    fn ttl_of(&self, value: &(String, u64)) -> Option<Duration> {
        match value.1 {
            0 => Some(self.default_ttl),
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Expiry<String, (String, u64)> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &(String, u64),
        _created_at: Instant,
    ) -> Option<Duration> {
        self.ttl_of(value)
    }

    // 覆盖写入时重新计时
    fn expire_after_update(
        &self,
        _key: &String,
        value: &(String, u64),
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        self.ttl_of(value)
    }
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        Ok(Self::with_settings(
            config.cache.memory.max_capacity,
            config.cache.default_ttl,
        ))
    }

    pub fn with_settings(max_capacity: u64, ttl_secs: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl {
                default_ttl: Duration::from_secs(ttl_secs),
            })
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, default TTL: {}s",
            max_capacity, ttl_secs
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some((value, _)) => CacheResult::Found(value),
            None => {
                debug!("Key not found in cache: {}", key);
                CacheResult::NotFound
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        self.inner.insert(key, (value, ttl)).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
