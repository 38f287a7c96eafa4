// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use crate::model::{SelectedEntry, Viewport};

pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Cache key: `path|modified_nanos|size|width|height`.
///
/// The path contributes its raw OS bytes, so distinct non-UTF-8 names never share a key.
/// Equal fingerprints are treated as interchangeable renderings. An entry whose bytes change
/// without its modification time or size changing will serve stale content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(Vec<u8>);

impl Fingerprint {
    pub fn new(entry: &SelectedEntry, viewport: Viewport) -> Self {
        let path = entry.path().as_os_str().as_encoded_bytes();
        let mut key = Vec::with_capacity(path.len() + 48);
        let mut buf = itoa::Buffer::new();

        key.extend_from_slice(path);
        key.push(b'|');
        key.extend_from_slice(buf.format(entry.modified_nanos()).as_bytes());
        key.push(b'|');
        key.extend_from_slice(buf.format(entry.size()).as_bytes());
        key.push(b'|');
        key.extend_from_slice(buf.format(viewport.width()).as_bytes());
        key.push(b'|');
        key.extend_from_slice(buf.format(viewport.height()).as_bytes());
        Self(key)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Fixed-capacity map with first-in-first-out eviction.
///
/// Reads never reorder; re-inserting a present key replaces its value in place and keeps its
/// original position in the eviction queue.
#[derive(Debug, Clone)]
pub struct BoundedCache<V> {
    capacity: usize,
    entries: HashMap<Fingerprint, V>,
    order: VecDeque<Fingerprint>,
}

impl<V> BoundedCache<V> {
    /// `capacity` is clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &Fingerprint) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &Fingerprint) -> Option<&V> {
        self.entries.get(key)
    }

    /// Inserts `value` and returns the keys evicted to stay within capacity.
    pub fn insert(&mut self, key: Fingerprint, value: V) -> Vec<Fingerprint> {
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push_back(key);
        }

        let mut evicted = Vec::new();
        while self.order.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            evicted.push(oldest);
        }
        evicted
    }

    /// Keys from oldest to newest.
    pub fn keys(&self) -> impl Iterator<Item = &Fingerprint> {
        self.order.iter()
    }
}

impl<V> Default for BoundedCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
