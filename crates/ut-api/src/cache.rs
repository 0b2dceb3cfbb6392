use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde_json::Value;

const DEFAULT_TTL_SECS: u64 = 300;

/// In-process TTL cache for serialized match responses, keyed by route plus
/// query parameters. Entries expire by TTL only; there is no invalidation on
/// data change, so the TTL is the staleness bound.
#[derive(Clone)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
}

struct CacheEntry {
    stored_at: Instant,
    body: Value,
}

impl ResponseCache {
    /// A zero TTL disables caching entirely.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// TTL from `UT_MATCH_CACHE_TTL_SECS`, defaulting to 300 seconds.
    pub fn from_env() -> Self {
        let secs = std::env::var("UT_MATCH_CACHE_TTL_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TTL_SECS);

        Self::new(Duration::from_secs(secs))
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        if self.ttl.is_zero() {
            return None;
        }

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.body.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, key: impl Into<String>, body: Value) {
        if self.ttl.is_zero() {
            return;
        }

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        // Distinct ids and query shapes produce distinct keys, so sweep dead
        // entries here rather than waiting for each key to be read again.
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        entries.insert(
            key.into(),
            CacheEntry {
                stored_at: Instant::now(),
                body,
            },
        );
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}
