//! 对象缓存
//!
//! 目前仅用于缓存已认证用户（键为 `user:{token}`），后端为进程内 Moka 缓存。

pub mod moka;

use async_trait::async_trait;

pub use self::moka::MokaCacheWrapper;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}
