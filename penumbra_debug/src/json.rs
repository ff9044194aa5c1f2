// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the events held by a
//! [`RecorderSink`](super::recorder::RecorderSink) as a JSON array, one object
//! per event, for offline inspection or diffing between runs.

use std::io::{self, Write};

use serde_json::{Value, json};

use penumbra_core::geometry::Rect;

use crate::recorder::RecordedEvent;

/// Writes `events` as a pretty-printed JSON array.
///
/// Every object carries `"type"` (`"cache_lookup"`, `"cache_insert"`, or
/// `"paint"`) and `"paint"` (the paint counter). Rectangles are encoded as
/// `[left, top, width, height]`.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::CacheLookup(e) => json!({
            "type": "cache_lookup",
            "paint": e.paint_index,
            "bounds": rect(e.bounds),
            "hit": e.hit,
            "rects": e.rect_count,
        }),
        RecordedEvent::CacheInsert(e) => json!({
            "type": "cache_insert",
            "paint": e.paint_index,
            "bounds": rect(e.bounds),
            "focus": e.focus_count,
            "rects": e.rect_count,
            "evicted": e.evicted.map(rect),
            "len": e.cache_len,
        }),
        RecordedEvent::Paint(e) => json!({
            "type": "paint",
            "paint": e.paint_index,
            "bounds": rect(e.bounds),
            "opacity": e.opacity,
            "focus_fills": e.focus_fills,
            "unfocus_fills": e.unfocus_fills,
            "skipped": e.skipped.map(|s| s.as_str()),
        }),
    }
}

fn rect(r: Rect) -> Value {
    json!([r.left(), r.top(), r.width(), r.height()])
}
