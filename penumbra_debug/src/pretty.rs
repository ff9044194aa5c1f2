// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use penumbra_core::geometry::Rect;
use penumbra_core::trace::{CacheInsertEvent, CacheLookupEvent, PaintEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Formats as `l,t wxh`.
fn rect(r: Rect) -> String {
    format!("{},{} {}x{}", r.left(), r.top(), r.width(), r.height())
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_cache_lookup(&mut self, e: &CacheLookupEvent) {
        let outcome = if e.hit { "hit" } else { "miss" };
        let _ = writeln!(
            self.writer,
            "[lookup] paint={} bounds={} {outcome} rects={}",
            e.paint_index,
            rect(e.bounds),
            e.rect_count,
        );
    }

    fn on_cache_insert(&mut self, e: &CacheInsertEvent) {
        let evicted = e.evicted.map_or_else(|| "-".to_owned(), rect);
        let _ = writeln!(
            self.writer,
            "[insert] paint={} bounds={} focus={} rects={} evicted={evicted} len={}",
            e.paint_index,
            rect(e.bounds),
            e.focus_count,
            e.rect_count,
            e.cache_len,
        );
    }

    fn on_paint(&mut self, e: &PaintEvent) {
        match e.skipped {
            Some(reason) => {
                let _ = writeln!(
                    self.writer,
                    "[paint] paint={} bounds={} skipped={}",
                    e.paint_index,
                    rect(e.bounds),
                    reason.as_str(),
                );
            }
            None => {
                let _ = writeln!(
                    self.writer,
                    "[paint] paint={} bounds={} opacity={:.3} focus={} unfocus={}",
                    e.paint_index,
                    rect(e.bounds),
                    e.opacity,
                    e.focus_fills,
                    e.unfocus_fills,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use penumbra_core::trace::PaintSkip;

    use super::*;

    fn bounds() -> Rect {
        Rect::new(0, 0, 100, 50).unwrap()
    }

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn lookup_line() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_cache_lookup(&CacheLookupEvent {
            paint_index: 1,
            bounds: bounds(),
            hit: true,
            rect_count: 4,
        });
        assert_eq!(output(sink), "[lookup] paint=1 bounds=0,0 100x50 hit rects=4\n");
    }

    #[test]
    fn insert_line_with_eviction() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_cache_insert(&CacheInsertEvent {
            paint_index: 2,
            bounds: bounds(),
            focus_count: 1,
            rect_count: 4,
            evicted: Some(Rect::new(5, 5, 1, 1).unwrap()),
            cache_len: 20,
        });
        assert_eq!(
            output(sink),
            "[insert] paint=2 bounds=0,0 100x50 focus=1 rects=4 evicted=5,5 1x1 len=20\n"
        );
    }

    #[test]
    fn paint_lines() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        let mut event = PaintEvent {
            paint_index: 3,
            bounds: bounds(),
            opacity: 0.5,
            focus_fills: 1,
            unfocus_fills: 4,
            skipped: None,
        };
        sink.on_paint(&event);
        event.skipped = Some(PaintSkip::Transparent);
        sink.on_paint(&event);
        let text = output(sink);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "[paint] paint=3 bounds=0,0 100x50 opacity=0.500 focus=1 unfocus=4",
                "[paint] paint=3 bounds=0,0 100x50 skipped=transparent",
            ]
        );
    }
}
