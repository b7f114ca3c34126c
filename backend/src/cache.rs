//! Redis-backed read cache
//!
//! Stands in for the client-side query cache of the web app: small JSON
//! snapshots with a TTL. Caching is strictly best-effort; every helper
//! degrades to a miss or a no-op when Redis is unavailable.

use redis::aio::ConnectionManager;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, warn};

/// TTL for cached consistency snapshots. Matches the five-minute staleness
/// window the dashboard tolerates for its streak panel.
pub const CONSISTENCY_TTL_SECS: u64 = 300;

/// Connect to Redis with graceful fallback
///
/// Returns None if Redis is unavailable, allowing the app to run without
/// caching.
pub async fn connect(url: &str) -> Option<ConnectionManager> {
    info!("Connecting to Redis...");

    match redis::Client::open(url) {
        Ok(client) => match ConnectionManager::new(client).await {
            Ok(conn) => {
                info!("Redis connection established");
                Some(conn)
            }
            Err(e) => {
                warn!("Failed to connect to Redis: {}. Caching will be disabled.", e);
                None
            }
        },
        Err(e) => {
            warn!("Invalid Redis URL: {}. Caching will be disabled.", e);
            None
        }
    }
}

/// Cache key for a user's consistency snapshot
pub fn consistency_key(user_id: uuid::Uuid, days: u32) -> String {
    format!("consistency:{}:{}", user_id, days)
}

/// Best-effort cached JSON read
pub async fn get_json<T: DeserializeOwned>(
    cache: &Option<ConnectionManager>,
    key: &str,
) -> Option<T> {
    let mut conn = cache.clone()?;
    let result: redis::RedisResult<Option<String>> =
        redis::cmd("GET").arg(key).query_async(&mut conn).await;
    match result {
        Ok(Some(raw)) => serde_json::from_str(&raw).ok(),
        Ok(None) => None,
        Err(e) => {
            warn!("Cache read failed for {}: {}", key, e);
            None
        }
    }
}

/// Best-effort cached JSON write with TTL
pub async fn set_json<T: Serialize>(
    cache: &Option<ConnectionManager>,
    key: &str,
    value: &T,
    ttl_secs: u64,
) {
    let Some(mut conn) = cache.clone() else {
        return;
    };
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    let result: redis::RedisResult<()> = redis::cmd("SETEX")
        .arg(key)
        .arg(ttl_secs)
        .arg(raw)
        .query_async(&mut conn)
        .await;
    if let Err(e) = result {
        warn!("Cache write failed for {}: {}", key, e);
    }
}

/// Best-effort cache invalidation
pub async fn invalidate(cache: &Option<ConnectionManager>, key: &str) {
    let Some(mut conn) = cache.clone() else {
        return;
    };
    let result: redis::RedisResult<()> = redis::cmd("DEL").arg(key).query_async(&mut conn).await;
    if let Err(e) = result {
        warn!("Cache invalidation failed for {}: {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistency_key_format() {
        let user_id = uuid::Uuid::nil();
        assert_eq!(
            consistency_key(user_id, 7),
            format!("consistency:{}:7", user_id)
        );
    }

    #[tokio::test]
    async fn test_helpers_are_noops_without_connection() {
        let cache: Option<ConnectionManager> = None;
        let miss: Option<u32> = get_json(&cache, "any").await;
        assert!(miss.is_none());
        set_json(&cache, "any", &1u32, 60).await;
        invalidate(&cache, "any").await;
    }
}
