//! Time-windowed memoization of profile listing pages.
//!
//! Each `(page, page_size)` argument pair maps to the page of profiles it
//! last returned, valid for a fixed time-to-live. Within the window repeated
//! calls are served from memory; after it, the next call re-queries and
//! replaces the entry. Expiry is purely time-based -- nothing on the query
//! path ever invalidates an entry by hand.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::models::Profile;

/// Cache key: the argument pair of a listing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub page: u64,
    pub page_size: i64,
}

struct CacheEntry {
    fetched_at: Instant,
    profiles: Arc<[Profile]>,
}

/// TTL cache for profile listing results.
///
/// Values are `Arc<[Profile]>`: immutable once cached, cheap to hand out,
/// and comparable for test assertions. Hit/miss counters let callers observe
/// whether a lookup actually reached the database.
pub struct QueryCache {
    ttl: Duration,
    entries: HashMap<PageKey, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up a page, dropping it if its window has lapsed.
    ///
    /// Counts a hit only when a live entry is returned; an expired entry
    /// counts as a miss and is removed so the caller re-queries.
    pub fn get(&mut self, key: &PageKey) -> Option<Arc<[Profile]>> {
        match self.entries.get(key) {
            Some(entry) if entry.fetched_at.elapsed() < self.ttl => {
                self.hits += 1;
                Some(entry.profiles.clone())
            }
            Some(_) => {
                self.entries.remove(key);
                self.misses += 1;
                None
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a freshly fetched page, replacing any previous entry.
    pub fn insert(&mut self, key: PageKey, profiles: Arc<[Profile]>) {
        self.entries.insert(
            key,
            CacheEntry {
                fetched_at: Instant::now(),
                profiles,
            },
        );
    }

    /// Drop every cached page.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached pages, expired entries included until next lookup.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
