//! In-memory TTL cache for public list responses.
//!
//! Entries are keyed by route name (`courses:list`, `courses:list:all`) and
//! hold the serialized `data` payload. Writes to a resource drop every key
//! containing the resource name via [`ResponseCache::invalidate`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// Response header reporting whether a list was served from cache.
pub const CACHE_STATUS_HEADER: &str = "x-cache";

struct CacheEntry {
    value: serde_json::Value,
    stored_at: Instant,
}

/// Route-keyed response cache with a single global TTL.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Bumped under the write lock by every invalidation.
    generation: AtomicU64,
}

impl ResponseCache {
    /// Create an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached value for `key` if it is younger than the TTL.
    ///
    /// An expired entry is removed on the way out.
    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return None,
                Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write().await;
        // Re-check: another writer may have refreshed the entry meanwhile.
        if entries
            .get(key)
            .is_some_and(|e| e.stored_at.elapsed() >= self.ttl)
        {
            entries.remove(key);
        }
        None
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub async fn insert(&self, key: impl Into<String>, value: serde_json::Value) {
        let entry = CacheEntry {
            value,
            stored_at: Instant::now(),
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    /// Current invalidation generation. Pass it to [`insert_if_current`]
    /// after loading a value so a load that raced a write is not stored.
    ///
    /// [`insert_if_current`]: Self::insert_if_current
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Store `value` only if no invalidation happened since `generation`
    /// was read. Returns whether the value was stored.
    pub async fn insert_if_current(
        &self,
        key: impl Into<String>,
        value: serde_json::Value,
        generation: u64,
    ) -> bool {
        let mut entries = self.entries.write().await;
        if self.generation.load(Ordering::Acquire) != generation {
            return false;
        }
        entries.insert(
            key.into(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
        true
    }

    /// Remove every key containing `pattern`. Returns the number removed.
    pub async fn invalidate(&self, pattern: &str) -> usize {
        let mut entries = self.entries.write().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        let before = entries.len();
        entries.retain(|key, _| !key.contains(pattern));
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(pattern, removed, "Cache entries invalidated");
        }
        removed
    }

    /// Drop every entry. Returns the number removed.
    pub async fn clear(&self) -> usize {
        let mut entries = self.entries.write().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        let removed = entries.len();
        entries.clear();
        removed
    }

    /// Number of stored entries, including ones that have expired but not
    /// yet been read.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Cache key for a resource list, distinguishing the `?all=true` variant.
pub fn list_key(resource: &str, include_inactive: bool) -> String {
    if include_inactive {
        format!("{resource}:list:all")
    } else {
        format!("{resource}:list")
    }
}

/// Serve a list from cache, or load it, cache it, and serve it.
///
/// The response carries `x-cache: HIT` or `x-cache: MISS`.
pub async fn cached_list<T, F, Fut>(
    cache: &ResponseCache,
    key: String,
    load: F,
) -> AppResult<Response>
where
    T: Serialize,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>, sqlx::Error>>,
{
    if let Some(data) = cache.get(&key).await {
        return Ok(with_cache_status(data, "HIT"));
    }

    let generation = cache.generation();
    let items = load().await?;
    let data = serde_json::to_value(&items)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize {key}: {e}")))?;
    if !cache.insert_if_current(key.as_str(), data.clone(), generation).await {
        tracing::debug!(key = %key, "Cache invalidated during load; result not stored");
    }

    Ok(with_cache_status(data, "MISS"))
}

fn with_cache_status(data: serde_json::Value, status: &'static str) -> Response {
    let mut response = Json(DataResponse { data }).into_response();
    response
        .headers_mut()
        .insert(CACHE_STATUS_HEADER, HeaderValue::from_static(status));
    response
}
