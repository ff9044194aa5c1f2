// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The highlight renderer: owner of the [`FocusSpec`], the region cache,
//! and the subscriptions that keep the two consistent.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use peniko::Color;
use penumbra_core::cache::RegionCache;
use penumbra_core::focus::{BoundsSource, FocusSpec, SubscriptionId};
use penumbra_core::geometry::Rect;
use penumbra_core::region::Region;
use penumbra_core::trace::{CacheInsertEvent, CacheLookupEvent, PaintEvent, PaintSkip, Tracer};

use crate::config::{HighlightConfig, LayerFill, OPACITY_EPSILON, clamp_opacity};
use crate::plan::{FillLayer, FillPlan};

/// Paints a two-layer dimming overlay into a [`FillPlan`].
///
/// The renderer owns a [`FocusSpec`] and a [`RegionCache`] of unfocused
/// regions keyed by bounds. Every focus change goes through the renderer,
/// which clears the cache in the same call. Tracked elements are
/// subscribed to on insertion and unsubscribed from before removal (and on
/// drop); a change to any tracked element's bounds clears the cache
/// immediately.
///
/// Colors and layer flags are not part of the cached geometry, so changing
/// them leaves the cache intact.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
///
/// use kurbo::Vec2;
/// use penumbra_core::focus::TrackedElement;
/// use penumbra_core::geometry::Rect;
/// use penumbra_core::trace::Tracer;
/// use penumbra_render::{FillPlan, HighlightConfig, HighlightRenderer};
///
/// let button = Rc::new(TrackedElement::new(Rect::new(40, 40, 20, 10).unwrap()));
/// let mut renderer = HighlightRenderer::new(HighlightConfig::dim());
/// renderer.add_tracked_element(button.clone());
///
/// let mut plan = FillPlan::new(Vec2::ZERO);
/// let bounds = Rect::new(0, 0, 100, 100).unwrap();
/// renderer.paint(bounds, 1.0, &mut plan, &mut Tracer::none());
/// assert_eq!(plan.len(), 4);
/// assert_eq!(renderer.cached_regions(), 1);
///
/// // Moving the element drops every cached region.
/// button.set_bounds(Rect::new(0, 0, 20, 10).unwrap());
/// assert_eq!(renderer.cached_regions(), 0);
/// ```
pub struct HighlightRenderer {
    config: HighlightConfig,
    focus: FocusSpec,
    cache: Rc<RefCell<RegionCache>>,
    /// One entry per tracked element, index-aligned with the tracked elements.
    subscriptions: Vec<SubscriptionId>,
    scratch: Vec<Rect>,
    paint_index: u64,
}

impl HighlightRenderer {
    /// Creates a renderer with no focus rectangles.
    #[must_use]
    pub fn new(config: HighlightConfig) -> Self {
        let mut focus = FocusSpec::new();
        focus.set_padding(config.padding);
        Self {
            config,
            focus,
            cache: Rc::new(RefCell::new(RegionCache::with_capacity(
                config.cache_capacity,
            ))),
            subscriptions: Vec::new(),
            scratch: Vec::new(),
            paint_index: 0,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Current focus set.
    #[must_use]
    pub fn focus(&self) -> &FocusSpec {
        &self.focus
    }

    /// Number of bounds with a cached region.
    #[must_use]
    pub fn cached_regions(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Number of paint calls so far.
    #[must_use]
    pub fn paint_count(&self) -> u64 {
        self.paint_index
    }

    /// Replaces the explicit focus rectangles.
    pub fn set_focused_bounds(&mut self, bounds: Vec<Rect>) {
        tracing::debug!(count = bounds.len(), "focused bounds replaced");
        self.focus.set_focused_bounds(bounds);
        self.invalidate_for("focused bounds");
    }

    /// Replaces every tracked element.
    pub fn set_tracked_elements(&mut self, elements: Vec<Rc<dyn BoundsSource>>) {
        self.unsubscribe_all();
        let subscriptions: Vec<SubscriptionId> =
            elements.iter().map(|e| self.subscribe(e)).collect();
        tracing::debug!(count = elements.len(), "tracked elements replaced");
        self.focus.set_tracked_elements(elements);
        self.subscriptions = subscriptions;
        self.invalidate_for("tracked elements");
    }

    /// Starts tracking `element`.
    ///
    /// Adding the same element twice tracks it twice.
    pub fn add_tracked_element(&mut self, element: Rc<dyn BoundsSource>) {
        let id = self.subscribe(&element);
        self.focus.push_tracked_element(element);
        self.subscriptions.push(id);
        tracing::debug!(
            count = self.subscriptions.len(),
            "tracked element added"
        );
        self.invalidate_for("tracked elements");
    }

    /// Stops tracking the first occurrence of `element` (compared by
    /// identity). Returns `false` if it was not tracked.
    pub fn remove_tracked_element(&mut self, element: &Rc<dyn BoundsSource>) -> bool {
        let Some(index) = self.focus.position_of(element) else {
            return false;
        };
        let id = self.subscriptions.remove(index);
        element.unsubscribe(id);
        self.focus.remove_tracked_element(index);
        tracing::debug!(
            count = self.subscriptions.len(),
            "tracked element removed"
        );
        self.invalidate_for("tracked elements");
        true
    }

    /// Stops tracking every element.
    pub fn clear_tracked_elements(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        self.unsubscribe_all();
        self.focus.set_tracked_elements(Vec::new());
        tracing::debug!("tracked elements cleared");
        self.invalidate_for("tracked elements");
    }

    /// Sets the padding applied to tracked elements.
    pub fn set_padding(&mut self, padding: i32) {
        if padding == self.focus.padding() {
            return;
        }
        tracing::debug!(padding, "padding changed");
        self.config.padding = padding;
        self.focus.set_padding(padding);
        self.invalidate_for("padding");
    }

    /// Replaces the focus-layer fill. Does not touch the cache.
    pub fn set_focus_fill(&mut self, fill: LayerFill) {
        tracing::debug!(can_fill = fill.can_fill(), "focus fill changed");
        self.config.focus_fill = fill;
    }

    /// Replaces the unfocus-layer fill. Does not touch the cache.
    pub fn set_unfocus_fill(&mut self, fill: LayerFill) {
        tracing::debug!(can_fill = fill.can_fill(), "unfocus fill changed");
        self.config.unfocus_fill = fill;
    }

    /// Drops every cached region, returning how many were dropped.
    pub fn invalidate(&mut self) -> usize {
        self.invalidate_for("explicit")
    }

    /// Paints the overlay for `bounds` at `opacity` into `plan`.
    ///
    /// Focus fills are pushed first, one per non-empty focus rectangle in
    /// resolution order. Unfocus fills follow, one per rectangle of the
    /// cached (or freshly computed) region for `bounds`. Both layers' alphas
    /// are multiplied by `opacity`, which is clamped to `[0, 1]` (NaN counts
    /// as 0).
    ///
    /// Nothing is pushed, and the cache is not consulted, when the opacity is
    /// at or below [`OPACITY_EPSILON`] or when neither layer can fill.
    pub fn paint(
        &mut self,
        bounds: Rect,
        opacity: f32,
        plan: &mut FillPlan,
        tracer: &mut Tracer<'_>,
    ) -> PaintEvent {
        self.paint_index += 1;
        let paint_index = self.paint_index;
        let opacity = clamp_opacity(opacity);
        let focus_color = self.config.focus_fill.visible_color();
        let unfocus_color = self.config.unfocus_fill.visible_color();

        let mut event = PaintEvent {
            paint_index,
            bounds,
            opacity,
            focus_fills: 0,
            unfocus_fills: 0,
            skipped: None,
        };
        if opacity <= OPACITY_EPSILON {
            event.skipped = Some(PaintSkip::Transparent);
        } else if focus_color.is_none() && unfocus_color.is_none() {
            event.skipped = Some(PaintSkip::NothingToFill);
        }
        if event.skipped.is_some() {
            tracer.paint(&event);
            return event;
        }

        let mut resolved = false;
        if let Some(color) = focus_color {
            let color = scale_alpha(color, opacity);
            self.focus.resolve_into(&mut self.scratch);
            resolved = true;
            for &rect in self.scratch.iter().filter(|r| !r.is_empty()) {
                plan.push(FillLayer::Focus, rect, color);
                event.focus_fills += 1;
            }
        }

        if let Some(color) = unfocus_color {
            let color = scale_alpha(color, opacity);
            let hit = self.cache.borrow().get(bounds).map(|region| {
                push_region(plan, region, color);
                region.len()
            });
            tracer.cache_lookup(&CacheLookupEvent {
                paint_index,
                bounds,
                hit: hit.is_some(),
                rect_count: hit.unwrap_or(0),
            });
            event.unfocus_fills = match hit {
                Some(count) => count,
                None => {
                    if !resolved {
                        self.focus.resolve_into(&mut self.scratch);
                    }
                    let mut region = Region::subtract(bounds, &self.scratch);
                    if self.config.coalesce {
                        region.coalesce();
                    }
                    push_region(plan, &region, color);
                    let count = region.len();
                    let (evicted, cache_len) = {
                        let mut cache = self.cache.borrow_mut();
                        let evicted = cache.insert(bounds, region);
                        (evicted, cache.len())
                    };
                    tracer.cache_insert(&CacheInsertEvent {
                        paint_index,
                        bounds,
                        focus_count: self.scratch.len(),
                        rect_count: count,
                        evicted,
                        cache_len,
                    });
                    count
                }
            };
        }

        tracer.paint(&event);
        event
    }

    fn subscribe(&self, element: &Rc<dyn BoundsSource>) -> SubscriptionId {
        let cache = Rc::downgrade(&self.cache);
        element.subscribe(Rc::new(move || invalidate_weak(&cache)))
    }

    fn unsubscribe_all(&mut self) {
        let elements = self.focus.tracked_elements();
        for (element, id) in elements.iter().zip(self.subscriptions.drain(..)) {
            element.unsubscribe(id);
        }
    }

    fn invalidate_for(&mut self, reason: &'static str) -> usize {
        let cleared = self.cache.borrow_mut().invalidate_all();
        tracing::debug!(reason, cleared, "region cache invalidated");
        cleared
    }
}

/// Listener body shared by every tracked-element subscription.
fn invalidate_weak(cache: &Weak<RefCell<RegionCache>>) {
    let Some(cache) = cache.upgrade() else {
        return;
    };
    let Ok(mut cache) = cache.try_borrow_mut() else {
        panic!("tracked element bounds changed while the region cache was borrowed");
    };
    let cleared = cache.invalidate_all();
    tracing::trace!(cleared, "region cache invalidated: tracked bounds changed");
}

fn push_region(plan: &mut FillPlan, region: &Region, color: Color) {
    for &rect in region {
        plan.push(FillLayer::Unfocus, rect, color);
    }
}

fn scale_alpha(color: Color, opacity: f32) -> Color {
    color.with_alpha(color.components[3] * opacity)
}

impl Default for HighlightRenderer {
    fn default() -> Self {
        Self::new(HighlightConfig::default())
    }
}

impl Drop for HighlightRenderer {
    fn drop(&mut self) {
        self.unsubscribe_all();
    }
}

impl fmt::Debug for HighlightRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HighlightRenderer")
            .field("config", &self.config)
            .field("focus", &self.focus)
            .field("cached_regions", &self.cached_regions())
            .field("paint_count", &self.paint_index)
            .finish_non_exhaustive()
    }
}
