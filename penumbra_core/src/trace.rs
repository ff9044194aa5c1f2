// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for the paint path.
//!
//! A painter reports what it did through a [`Tracer`], which forwards to an
//! optional [`TraceSink`]. Every sink method defaults to a no-op, so a sink
//! only implements the events it cares about.
//!
//! When the `trace` feature is **off**, every `Tracer` method compiles to
//! nothing. When **on**, each method is a single `Option` branch before
//! dispatching.
//!
//! Events per paint call, in order:
//!
//! 1. [`CacheLookupEvent`]: only when the unfocus layer fills.
//! 2. [`CacheInsertEvent`]: only after a miss.
//! 3. [`PaintEvent`]: always, with [`PaintEvent::skipped`] set when nothing
//!    was drawn.

use crate::geometry::Rect;

/// Why a paint call drew nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintSkip {
    /// Opacity was at or below the visibility threshold.
    Transparent,
    /// Neither layer is enabled with a visible color.
    NothingToFill,
}

impl PaintSkip {
    /// Short lowercase label, for logs and exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::NothingToFill => "nothing_to_fill",
        }
    }
}

/// Emitted after the region cache is consulted for some bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheLookupEvent {
    /// Monotonic paint counter of the calling painter.
    pub paint_index: u64,
    /// Bounds used as the cache key.
    pub bounds: Rect,
    /// Whether a region was found.
    pub hit: bool,
    /// Rectangles in the cached region (0 on a miss).
    pub rect_count: usize,
}

/// Emitted after a freshly computed region is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheInsertEvent {
    /// Monotonic paint counter of the calling painter.
    pub paint_index: u64,
    /// Bounds used as the cache key.
    pub bounds: Rect,
    /// Number of focus rectangles subtracted.
    pub focus_count: usize,
    /// Rectangles in the stored region.
    pub rect_count: usize,
    /// Key evicted to make room, if any.
    pub evicted: Option<Rect>,
    /// Cache size after the insert.
    pub cache_len: usize,
}

/// Emitted once at the end of every paint call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintEvent {
    /// Monotonic paint counter of the calling painter.
    pub paint_index: u64,
    /// Bounds that were painted.
    pub bounds: Rect,
    /// Opacity after clamping.
    pub opacity: f32,
    /// Fills pushed for the focus layer.
    pub focus_fills: usize,
    /// Fills pushed for the unfocus layer.
    pub unfocus_fills: usize,
    /// Set when the call drew nothing.
    pub skipped: Option<PaintSkip>,
}

impl PaintEvent {
    /// Total fills pushed by the call.
    #[must_use]
    pub fn total_fills(&self) -> usize {
        self.focus_fills + self.unfocus_fills
    }
}

/// Receives paint-path events.
///
/// All methods have default no-op implementations.
pub trait TraceSink {
    /// Called after a cache lookup.
    fn on_cache_lookup(&mut self, e: &CacheLookupEvent) {
        _ = e;
    }

    /// Called after a cache insert.
    fn on_cache_insert(&mut self, e: &CacheInsertEvent) {
        _ = e;
    }

    /// Called at the end of a paint call.
    fn on_paint(&mut self, e: &PaintEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Returns `true` if events reach a sink.
    ///
    /// Always `false` without the `trace` feature.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Emits a [`CacheLookupEvent`].
    #[inline]
    pub fn cache_lookup(&mut self, e: &CacheLookupEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cache_lookup(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CacheInsertEvent`].
    #[inline]
    pub fn cache_insert(&mut self, e: &CacheInsertEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cache_insert(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PaintEvent`].
    #[inline]
    pub fn paint(&mut self, e: &PaintEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_paint(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
