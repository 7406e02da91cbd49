//! In-memory geo cache with least-recently-used eviction.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::Mutex;

use watcher_core::domain::GeoAnnotation;
use watcher_core::ports::GeoCache;

/// Default number of distinct addresses kept.
pub const DEFAULT_GEO_CACHE_CAPACITY: usize = 1024;

struct CacheEntry {
    annotation: GeoAnnotation,
    last_used: u64,
}

#[derive(Default)]
struct LruState {
    entries: HashMap<String, CacheEntry>,
    // last_used tick -> key, oldest first
    recency: BTreeMap<u64, String>,
    tick: u64,
}

impl LruState {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn touch(&mut self, key: &str) -> Option<GeoAnnotation> {
        let tick = self.next_tick();
        let entry = self.entries.get_mut(key)?;
        self.recency.remove(&entry.last_used);
        entry.last_used = tick;
        self.recency.insert(tick, key.to_string());
        Some(entry.annotation.clone())
    }

    fn evict_oldest(&mut self) {
        if let Some((_, key)) = self.recency.pop_first() {
            self.entries.remove(&key);
        }
    }
}

/// Process-wide geo cache keyed by IP address.
///
/// Entries never expire. Once `capacity` distinct addresses are held, adding
/// another evicts the least recently used one. Data is lost on restart.
pub struct InMemoryGeoCache {
    state: Mutex<LruState>,
    capacity: usize,
}

impl InMemoryGeoCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(LruState::default()),
            capacity,
        }
    }
}

impl Default for InMemoryGeoCache {
    fn default() -> Self {
        Self::new(DEFAULT_GEO_CACHE_CAPACITY)
    }
}

#[async_trait]
impl GeoCache for InMemoryGeoCache {
    async fn get(&self, ip_address: &str) -> Option<GeoAnnotation> {
        self.state.lock().await.touch(ip_address)
    }

    async fn put(&self, ip_address: &str, annotation: GeoAnnotation) {
        if self.capacity == 0 {
            return;
        }

        let mut state = self.state.lock().await;
        let tick = state.next_tick();

        if let Some(old) = state.entries.remove(ip_address) {
            state.recency.remove(&old.last_used);
        } else if state.entries.len() >= self.capacity {
            state.evict_oldest();
        }

        state.recency.insert(tick, ip_address.to_string());
        state.entries.insert(
            ip_address.to_string(),
            CacheEntry {
                annotation,
                last_used: tick,
            },
        );
    }

    async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
