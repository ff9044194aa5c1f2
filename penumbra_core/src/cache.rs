// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded, insertion-ordered cache of computed regions.
//!
//! A [`RegionCache`] maps an outer bounds rectangle to the [`Region`] that
//! was computed for it. Keys compare by exact equality; the focus rectangles
//! that produced a region are *not* part of the key. The owner is therefore
//! responsible for calling [`invalidate_all`](RegionCache::invalidate_all)
//! whenever those focus rectangles change.
//!
//! Eviction is FIFO: once the cache is full, inserting a new key drops the
//! oldest-inserted entry regardless of how recently it was read. The capacity
//! only bounds memory and lookup cost; in steady state (a stable set of
//! onscreen bounds) every paint after the first is a hit.

use alloc::collections::VecDeque;

use crate::geometry::Rect;
use crate::region::Region;

/// Capacity used by [`RegionCache::new`].
pub const DEFAULT_CAPACITY: usize = 20;

/// A single cached computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    /// Outer bounds the region was computed for.
    pub bounds: Rect,
    /// `bounds` minus the focus rectangles active at computation time.
    pub region: Region,
}

/// FIFO cache from bounds to [`Region`].
#[derive(Clone, Debug)]
pub struct RegionCache {
    entries: VecDeque<CacheEntry>,
    capacity: usize,
}

impl Default for RegionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionCache {
    /// Creates an empty cache holding up to [`DEFAULT_CAPACITY`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty cache holding up to `capacity` entries.
    ///
    /// A capacity of zero disables caching: inserts are dropped and every
    /// lookup misses.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of entries.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the region cached for exactly `bounds`.
    #[must_use]
    pub fn get(&self, bounds: Rect) -> Option<&Region> {
        self.entries
            .iter()
            .find(|e| e.bounds == bounds)
            .map(|e| &e.region)
    }

    /// Returns `true` if a region is cached for exactly `bounds`.
    #[must_use]
    pub fn contains(&self, bounds: Rect) -> bool {
        self.entries.iter().any(|e| e.bounds == bounds)
    }

    /// Caches `region` for `bounds` as the newest entry.
    ///
    /// An existing entry for the same bounds is replaced (and becomes the
    /// newest). If the cache is full, the oldest entry is evicted first and
    /// its bounds are returned.
    pub fn insert(&mut self, bounds: Rect, region: Region) -> Option<Rect> {
        if self.capacity == 0 {
            return None;
        }
        if let Some(pos) = self.entries.iter().position(|e| e.bounds == bounds) {
            self.entries.remove(pos);
        }
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front().map(|e| e.bounds)
        } else {
            None
        };
        self.entries.push_back(CacheEntry { bounds, region });
        evicted
    }

    /// Drops every entry, returning how many were removed.
    pub fn invalidate_all(&mut self) -> usize {
        let cleared = self.entries.len();
        self.entries.clear();
        cleared
    }

    /// Iterates over cached entries, oldest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &CacheEntry> + '_ {
        self.entries.iter()
    }
}
