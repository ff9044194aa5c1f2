// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in
//! arrival order, as a [`RecordedEvent`]. [`RecorderSink::stats`] folds the
//! log into [`CacheStats`].

use penumbra_core::trace::{CacheInsertEvent, CacheLookupEvent, PaintEvent, TraceSink};

/// A recorded paint-path event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`CacheLookupEvent`].
    CacheLookup(CacheLookupEvent),
    /// A [`CacheInsertEvent`].
    CacheInsert(CacheInsertEvent),
    /// A [`PaintEvent`].
    Paint(PaintEvent),
}

impl RecordedEvent {
    /// Paint counter the event belongs to.
    #[must_use]
    pub fn paint_index(&self) -> u64 {
        match self {
            Self::CacheLookup(e) => e.paint_index,
            Self::CacheInsert(e) => e.paint_index,
            Self::Paint(e) => e.paint_index,
        }
    }
}

/// Counters derived from a recording.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Paint calls, including skipped ones.
    pub paints: u64,
    /// Paint calls that drew nothing.
    pub skipped: u64,
    /// Cache lookups that found a region.
    pub hits: u64,
    /// Cache lookups that found nothing.
    pub misses: u64,
    /// Inserts that evicted an older entry.
    pub evictions: u64,
    /// Fills pushed across all paint calls.
    pub fills: u64,
}

impl CacheStats {
    /// Fraction of lookups that hit, or `None` before any lookup.
    #[must_use]
    pub fn hit_rate(&self) -> Option<f64> {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            return None;
        }
        Some(self.hits as f64 / lookups as f64)
    }
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Folds the recording into counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats::default();
        for event in &self.events {
            match event {
                RecordedEvent::CacheLookup(e) if e.hit => stats.hits += 1,
                RecordedEvent::CacheLookup(_) => stats.misses += 1,
                RecordedEvent::CacheInsert(e) => {
                    stats.evictions += u64::from(e.evicted.is_some());
                }
                RecordedEvent::Paint(e) => {
                    stats.paints += 1;
                    stats.skipped += u64::from(e.skipped.is_some());
                    stats.fills += e.total_fills() as u64;
                }
            }
        }
        stats
    }
}

impl TraceSink for RecorderSink {
    fn on_cache_lookup(&mut self, e: &CacheLookupEvent) {
        self.events.push(RecordedEvent::CacheLookup(*e));
    }

    fn on_cache_insert(&mut self, e: &CacheInsertEvent) {
        self.events.push(RecordedEvent::CacheInsert(*e));
    }

    fn on_paint(&mut self, e: &PaintEvent) {
        self.events.push(RecordedEvent::Paint(*e));
    }
}
