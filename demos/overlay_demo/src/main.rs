// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated frame loop that drives a dimming overlay.
//!
//! Runs 120 synthetic frames. Each frame paints a window and a side panel
//! around a tracked "tooltip" element and a fixed focus rectangle, while the
//! overlay fades in, the tooltip moves, and the configuration changes partway
//! through. Paint-path events go to both a
//! [`PrettyPrintSink`](penumbra_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](penumbra_debug::recorder::RecorderSink); the recording is
//! exported as JSON at the end. Owner-side events are logged with `tracing`
//! (set `RUST_LOG` to adjust).

use std::fs::File;
use std::io::BufWriter;
use std::rc::Rc;

use kurbo::Vec2;
use peniko::Color;
use penumbra_core::focus::{BoundsSource, TrackedElement};
use penumbra_core::geometry::Rect;
use penumbra_core::trace::{CacheInsertEvent, CacheLookupEvent, PaintEvent, TraceSink, Tracer};
use penumbra_debug::pretty::PrettyPrintSink;
use penumbra_debug::recorder::RecorderSink;
use penumbra_render::{FillPlan, HighlightConfig, HighlightRenderer, LayerFill};
use tracing_subscriber::EnvFilter;

const FRAME_COUNT: u32 = 120;
/// Frames over which the overlay fades in.
const FADE_FRAMES: u32 = 20;
/// The tooltip moves every this many frames.
const MOVE_EVERY: u32 = 30;

/// Forwards every event to two sinks.
struct Tee<'a> {
    a: &'a mut dyn TraceSink,
    b: &'a mut dyn TraceSink,
}

impl TraceSink for Tee<'_> {
    fn on_cache_lookup(&mut self, e: &CacheLookupEvent) {
        self.a.on_cache_lookup(e);
        self.b.on_cache_lookup(e);
    }

    fn on_cache_insert(&mut self, e: &CacheInsertEvent) {
        self.a.on_cache_insert(e);
        self.b.on_cache_insert(e);
    }

    fn on_paint(&mut self, e: &PaintEvent) {
        self.a.on_paint(e);
        self.b.on_paint(e);
    }
}

fn rect(l: i32, t: i32, w: i32, h: i32) -> Rect {
    Rect::new(l, t, w, h).expect("demo rectangles are well-formed")
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,penumbra_render=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();

    // -- scene -------------------------------------------------------------
    let window = rect(0, 0, 1280, 800);
    let panel = rect(960, 0, 320, 800);
    let tooltip = Rc::new(TrackedElement::new(rect(200, 120, 180, 48)));

    let mut renderer = HighlightRenderer::new(HighlightConfig::dim());
    renderer.set_focused_bounds(vec![rect(40, 40, 400, 60)]);
    let tooltip_source: Rc<dyn BoundsSource> = tooltip.clone();
    renderer.add_tracked_element(tooltip_source.clone());
    renderer.set_padding(6);

    // Window content is drawn at the origin; the panel lives in its own
    // surface, so its fills are shifted back to surface-local coordinates.
    let mut window_plan = FillPlan::new(Vec2::ZERO);
    let mut panel_plan = FillPlan::new(Vec2::new(-960.0, 0.0));

    // -- simulated loop ----------------------------------------------------
    for frame in 0..FRAME_COUNT {
        if frame > 0 && frame % MOVE_EVERY == 0 {
            let b = tooltip.bounds();
            tooltip.set_bounds(b.translate(150, 90));
        }
        match frame {
            60 => {
                renderer.set_focus_fill(LayerFill::solid(Color::from_rgba8(255, 255, 255, 24)));
                renderer.set_unfocus_fill(LayerFill::solid(Color::from_rgba8(0, 0, 0, 176)));
            }
            90 => {
                if renderer.remove_tracked_element(&tooltip_source) {
                    tracing::info!(frame, "tooltip dismissed");
                }
            }
            _ => {}
        }

        let opacity = (frame + 1).min(FADE_FRAMES) as f32 / FADE_FRAMES as f32;

        window_plan.clear();
        panel_plan.clear();
        let mut tee = Tee {
            a: &mut pretty,
            b: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);
        renderer.paint(window, opacity, &mut window_plan, &mut tracer);
        renderer.paint(panel, opacity, &mut panel_plan, &mut tracer);

        tracing::trace!(
            frame,
            window_fills = window_plan.len(),
            panel_fills = panel_plan.len(),
            "frame painted"
        );
    }

    let stats = recorder.stats();
    tracing::info!(
        paints = stats.paints,
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        hit_rate = stats.hit_rate().unwrap_or(0.0),
        "run complete"
    );

    // -- export JSON -------------------------------------------------------
    let path = "overlay_trace.json";
    let file = File::create(path).expect("failed to create overlay_trace.json");
    let mut writer = BufWriter::new(file);
    penumbra_debug::json::export(recorder.events(), &mut writer)
        .expect("failed to write overlay trace");

    println!(
        "Wrote {path} ({FRAME_COUNT} frames, {} events)",
        recorder.events().len()
    );
}
