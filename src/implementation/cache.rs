// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides `LuCache`: a bounded, thread-safe key/value cache
//! with least-used eviction, used by the strategy to memoize the character
//! distribution computed for a game-state fingerprint (see
//! `implementation::gamestate` and `implementation::strategy`).

use fxhash::FxHashMap;
use parking_lot::Mutex;

struct Entry<V> {
    value: V,
    hits: u64,
    inserted_at: u64,
}

struct Inner<V> {
    entries: FxHashMap<String, Entry<V>>,
    next_seq: u64,
}

/// A bounded `String -> V` cache. `fetch` never needs mutable access from
/// the caller's point of view: the internal `Mutex` makes every operation a
/// critical section, so an `LuCache` can be shared (typically behind an
/// `Arc`) across concurrently running guess workers.
pub struct LuCache<V> {
    capacity: usize,
    inner: Mutex<Inner<V>>,
}

impl<V: Clone> LuCache<V> {
    /// Creates a cache holding at most `capacity` entries. A `capacity` of
    /// zero is accepted and never errors: the cache simply never retains
    /// anything (`store` silently no-ops, `fetch` always misses).
    pub fn new(capacity: usize) -> Self {
        LuCache {
            capacity,
            inner: Mutex::new(Inner { entries: FxHashMap::default(), next_seq: 0 }),
        }
    }

    /// Looks up `key`. On a hit, increments that entry's hit counter before
    /// returning a clone of its value.
    pub fn fetch(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.lock();
        let entry = inner.entries.get_mut(key)?;
        entry.hits += 1;
        Some(entry.value.clone())
    }

    /// Inserts or overwrites `key -> value`. If the cache is already at
    /// capacity and `key` is not already present, evicts the entry with the
    /// lowest hit count first, breaking ties by oldest insertion, to make
    /// room.
    pub fn store(&self, key: String, value: V) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.inner.lock();
        if inner.entries.len() >= self.capacity && !inner.entries.contains_key(&key) {
            if let Some(victim) = inner
                .entries
                .iter()
                .min_by_key(|(_, e)| (e.hits, e.inserted_at))
                .map(|(k, _)| k.clone())
            {
                inner.entries.remove(&victim);
            }
        }
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(key, Entry { value, hits: 0, inserted_at: seq });
    }

    /// The number of entries currently held (never exceeds `capacity`).
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the cache currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test_cache {
    use super::*;

    #[test]
    fn fetch_on_empty_cache_misses() {
        let cache: LuCache<i32> = LuCache::new(4);
        assert_eq!(None, cache.fetch("x"));
    }

    #[test]
    fn store_then_fetch_round_trips() {
        let cache = LuCache::new(4);
        cache.store("x".to_string(), 42);
        assert_eq!(Some(42), cache.fetch("x"));
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let cache = LuCache::new(2);
        cache.store("a".to_string(), 1);
        cache.store("b".to_string(), 2);
        cache.store("c".to_string(), 3);
        assert_eq!(2, cache.len());
    }

    #[test]
    fn eviction_prefers_lowest_hit_count() {
        let cache = LuCache::new(2);
        cache.store("a".to_string(), 1);
        cache.store("b".to_string(), 2);
        // "a" is fetched (and thus gains a hit), "b" never is.
        cache.fetch("a");
        cache.fetch("a");
        cache.store("c".to_string(), 3);
        assert_eq!(None, cache.fetch("b"), "b had zero hits and should have been evicted");
        assert_eq!(Some(1), cache.fetch("a"));
        assert_eq!(Some(3), cache.fetch("c"));
    }

    #[test]
    fn eviction_ties_break_by_oldest_insertion() {
        let cache = LuCache::new(2);
        cache.store("a".to_string(), 1);
        cache.store("b".to_string(), 2);
        // Neither has been fetched: both have zero hits, so "a" (inserted
        // first) is evicted.
        cache.store("c".to_string(), 3);
        assert_eq!(None, cache.fetch("a"));
        assert!(cache.fetch("b").is_some());
        assert!(cache.fetch("c").is_some());
    }

    #[test]
    fn zero_capacity_cache_never_retains_anything() {
        let cache = LuCache::new(0);
        cache.store("x".to_string(), 1);
        assert_eq!(None, cache.fetch("x"));
        assert!(cache.is_empty());
    }

    #[test]
    fn overwriting_an_existing_key_does_not_count_as_growth() {
        let cache = LuCache::new(1);
        cache.store("a".to_string(), 1);
        cache.store("a".to_string(), 2);
        assert_eq!(1, cache.len());
        assert_eq!(Some(2), cache.fetch("a"));
    }
}
