//! cache.rs
//! Fixed-capacity LRU cache used by key derivation and the cipher engine.
//!
//! Design:
//! - `HashMap<String, usize>` for lookup plus an index-linked slab acting as
//!   an intrusive doubly linked recency list: O(1) get/put/evict.
//! - No dependence on map iteration order; recency is tracked explicitly.
//! - `get` and overwriting `put` both bump the entry to most-recent.
//!
//! The slab never grows past `capacity`; eviction recycles the
//! least-recently-used slot in place.

use std::collections::HashMap;

const NIL: usize = usize::MAX;

struct Entry<V> {
    key: String,
    value: V,
    prev: usize,
    next: usize,
}

/// String-keyed LRU cache with a hard capacity bound.
pub struct LruCache<V> {
    capacity: usize,
    map: HashMap<String, usize>,
    entries: Vec<Entry<V>>,
    head: usize, // most recently used
    tail: usize, // least recently used
}

impl<V> LruCache<V> {
    /// Create a cache holding at most `capacity` entries.
    /// `capacity` must be nonzero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "LruCache capacity must be nonzero");
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up `key`, bumping it to most-recent on a hit.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.detach(idx);
        self.attach_front(idx);
        Some(&self.entries[idx].value)
    }

    /// Insert or overwrite `key`. The entry becomes most-recent; if the
    /// cache is full, the least-recently-used entry is evicted.
    pub fn put(&mut self, key: String, value: V) {
        if let Some(&idx) = self.map.get(&key) {
            self.entries[idx].value = value;
            self.detach(idx);
            self.attach_front(idx);
            return;
        }

        let idx = if self.entries.len() < self.capacity {
            self.entries.push(Entry {
                key: key.clone(),
                value,
                prev: NIL,
                next: NIL,
            });
            self.entries.len() - 1
        } else {
            // Recycle the LRU slot.
            let idx = self.tail;
            self.detach(idx);
            let evicted = std::mem::replace(&mut self.entries[idx].key, key.clone());
            self.map.remove(&evicted);
            self.entries[idx].value = value;
            idx
        };

        self.map.insert(key, idx);
        self.attach_front(idx);
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.entries[idx].prev, self.entries[idx].next);
        match prev {
            NIL => self.head = next,
            p => self.entries[p].next = next,
        }
        match next {
            NIL => self.tail = prev,
            n => self.entries[n].prev = prev,
        }
        self.entries[idx].prev = NIL;
        self.entries[idx].next = NIL;
    }

    fn attach_front(&mut self, idx: usize) {
        self.entries[idx].prev = NIL;
        self.entries[idx].next = self.head;
        match self.head {
            NIL => self.tail = idx,
            h => self.entries[h].prev = idx,
        }
        self.head = idx;
    }
}
