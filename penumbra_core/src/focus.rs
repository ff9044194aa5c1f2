// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus rectangles and the sources they are resolved from.
//!
//! A [`FocusSpec`] combines two independent sources of focus rectangles:
//!
//! - **Focused bounds**: an explicit, ordered list of [`Rect`]s.
//! - **Tracked elements**: objects implementing [`BoundsSource`], whose live
//!   bounds can change at any time between frames. Each one is inflated by
//!   [`FocusSpec::padding`] when resolved.
//!
//! [`FocusSpec::resolve`] concatenates the two, explicit bounds first. No
//! deduplication or merging is done, so overlapping focus rectangles stay
//! overlapping.
//!
//! # Change notification
//!
//! A [`BoundsSource`] reports changes to its live bounds through listeners
//! registered with [`subscribe`](BoundsSource::subscribe). Listeners run
//! synchronously, on the thread that changed the bounds, before the mutating
//! call returns. [`TrackedElement`] is a ready-made single-threaded source.
//!
//! `FocusSpec` itself does not subscribe to anything; whoever owns it (and
//! any cache derived from it) manages subscriptions alongside each mutation.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::geometry::Rect;

/// Callback invoked after a [`BoundsSource`]'s live bounds change.
pub type BoundsListener = Rc<dyn Fn()>;

/// Handle identifying one listener registration on a [`BoundsSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// An object with live bounds and a change notification.
pub trait BoundsSource {
    /// Returns the current bounds.
    fn live_bounds(&self) -> Rect;

    /// Registers `listener` to run whenever the live bounds change.
    fn subscribe(&self, listener: BoundsListener) -> SubscriptionId;

    /// Removes a registration made by [`subscribe`](Self::subscribe).
    ///
    /// Unknown or already-removed ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// A single-threaded [`BoundsSource`] with settable bounds.
///
/// Share it as `Rc<TrackedElement>`: the layout side keeps one handle to call
/// [`set_bounds`](Self::set_bounds), and a focus owner keeps another as an
/// `Rc<dyn BoundsSource>`.
pub struct TrackedElement {
    bounds: Cell<Rect>,
    listeners: RefCell<Vec<(SubscriptionId, BoundsListener)>>,
    next_id: Cell<u64>,
}

impl TrackedElement {
    /// Creates an element with the given initial bounds and no listeners.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: Cell::new(bounds),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Returns the current bounds.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    /// Updates the bounds and notifies every listener.
    ///
    /// Setting the same bounds again is not a change and notifies nobody.
    /// Listeners may subscribe or unsubscribe while being notified; such
    /// changes take effect from the next notification.
    pub fn set_bounds(&self, bounds: Rect) {
        if self.bounds.replace(bounds) == bounds {
            return;
        }
        let snapshot: Vec<BoundsListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl BoundsSource for TrackedElement {
    fn live_bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn subscribe(&self, listener: BoundsListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(sub, _)| *sub != id);
    }
}

impl fmt::Debug for TrackedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackedElement")
            .field("bounds", &self.bounds.get())
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

/// The inputs that determine which rectangles stay un-dimmed.
#[derive(Clone, Default)]
pub struct FocusSpec {
    focused_bounds: Vec<Rect>,
    tracked: Vec<Rc<dyn BoundsSource>>,
    padding: i32,
}

impl FocusSpec {
    /// Creates an empty focus set: no focus rectangles, zero padding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit focus rectangles, in order.
    #[inline]
    #[must_use]
    pub fn focused_bounds(&self) -> &[Rect] {
        &self.focused_bounds
    }

    /// Tracked elements, in order.
    #[inline]
    #[must_use]
    pub fn tracked_elements(&self) -> &[Rc<dyn BoundsSource>] {
        &self.tracked
    }

    /// Amount each tracked element's bounds are inflated by on every side.
    #[inline]
    #[must_use]
    pub fn padding(&self) -> i32 {
        self.padding
    }

    /// Returns `true` if neither source contributes any rectangle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.focused_bounds.is_empty() && self.tracked.is_empty()
    }

    /// Replaces the explicit focus rectangles.
    pub fn set_focused_bounds(&mut self, bounds: Vec<Rect>) {
        self.focused_bounds = bounds;
    }

    /// Replaces the tracked elements, returning the previous list.
    pub fn set_tracked_elements(
        &mut self,
        elements: Vec<Rc<dyn BoundsSource>>,
    ) -> Vec<Rc<dyn BoundsSource>> {
        core::mem::replace(&mut self.tracked, elements)
    }

    /// Appends a tracked element.
    pub fn push_tracked_element(&mut self, element: Rc<dyn BoundsSource>) {
        self.tracked.push(element);
    }

    /// Removes and returns the tracked element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_tracked_element(&mut self, index: usize) -> Rc<dyn BoundsSource> {
        self.tracked.remove(index)
    }

    /// Returns the index of `element` (compared by identity), if tracked.
    #[must_use]
    pub fn position_of(&self, element: &Rc<dyn BoundsSource>) -> Option<usize> {
        self.tracked.iter().position(|e| Rc::ptr_eq(e, element))
    }

    /// Sets the tracked-element padding. Negative values shrink.
    pub fn set_padding(&mut self, padding: i32) {
        self.padding = padding;
    }

    /// Resolves the current focus rectangles.
    ///
    /// Returns the explicit focused bounds in order, followed by each tracked
    /// element's live bounds inflated by [`padding`](Self::padding).
    #[must_use]
    pub fn resolve(&self) -> Vec<Rect> {
        let mut out = Vec::with_capacity(self.focused_bounds.len() + self.tracked.len());
        self.resolve_into(&mut out);
        out
    }

    /// Like [`resolve`](Self::resolve), but writes into a reusable buffer.
    ///
    /// `out` is cleared first.
    pub fn resolve_into(&self, out: &mut Vec<Rect>) {
        out.clear();
        out.extend_from_slice(&self.focused_bounds);
        out.extend(
            self.tracked
                .iter()
                .map(|element| element.live_bounds().inflate(self.padding)),
        );
    }
}

impl fmt::Debug for FocusSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusSpec")
            .field("focused_bounds", &self.focused_bounds)
            .field("tracked", &self.tracked.len())
            .field("padding", &self.padding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn rect(l: i32, t: i32, w: i32, h: i32) -> Rect {
        Rect::new(l, t, w, h).unwrap()
    }

    fn counter() -> (Rc<Cell<u32>>, BoundsListener) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        let listener: BoundsListener = Rc::new(move || inner.set(inner.get() + 1));
        (count, listener)
    }

    #[test]
    fn resolve_concatenates_sources_in_order() {
        let a = Rc::new(TrackedElement::new(rect(50, 50, 10, 10)));
        let b = Rc::new(TrackedElement::new(rect(80, 0, 5, 5)));
        let mut focus = FocusSpec::new();
        focus.set_focused_bounds(vec![rect(0, 0, 10, 10), rect(20, 0, 10, 10)]);
        focus.set_tracked_elements(vec![a, b]);
        assert_eq!(
            focus.resolve(),
            vec![
                rect(0, 0, 10, 10),
                rect(20, 0, 10, 10),
                rect(50, 50, 10, 10),
                rect(80, 0, 5, 5),
            ]
        );
    }

    #[test]
    fn padding_applies_only_to_tracked_elements() {
        let el = Rc::new(TrackedElement::new(rect(50, 50, 10, 10)));
        let mut focus = FocusSpec::new();
        focus.set_focused_bounds(vec![rect(0, 0, 10, 10)]);
        focus.push_tracked_element(el);
        focus.set_padding(4);
        assert_eq!(
            focus.resolve(),
            vec![rect(0, 0, 10, 10), rect(46, 46, 18, 18)]
        );
    }

    #[test]
    fn negative_padding_shrinks_and_clamps() {
        let el = Rc::new(TrackedElement::new(rect(10, 10, 20, 4)));
        let mut focus = FocusSpec::new();
        focus.push_tracked_element(el);
        focus.set_padding(-3);
        let resolved = focus.resolve();
        assert_eq!(resolved, vec![rect(13, 12, 14, 0)]);
        assert!(resolved[0].is_empty());
    }

    #[test]
    fn overlapping_rects_are_kept() {
        let mut focus = FocusSpec::new();
        focus.set_focused_bounds(vec![rect(0, 0, 10, 10), rect(5, 5, 10, 10), rect(0, 0, 10, 10)]);
        assert_eq!(focus.resolve().len(), 3);
    }

    #[test]
    fn resolve_reads_live_bounds() {
        let el = Rc::new(TrackedElement::new(rect(0, 0, 10, 10)));
        let mut focus = FocusSpec::new();
        focus.push_tracked_element(el.clone());
        el.set_bounds(rect(30, 30, 10, 10));
        assert_eq!(focus.resolve(), vec![rect(30, 30, 10, 10)]);
    }

    #[test]
    fn resolve_into_clears_buffer() {
        let mut focus = FocusSpec::new();
        focus.set_focused_bounds(vec![rect(1, 1, 1, 1)]);
        let mut buf = vec![rect(9, 9, 9, 9); 3];
        focus.resolve_into(&mut buf);
        assert_eq!(buf, vec![rect(1, 1, 1, 1)]);
    }

    #[test]
    fn empty_spec_resolves_to_nothing() {
        let focus = FocusSpec::new();
        assert!(focus.is_empty());
        assert!(focus.resolve().is_empty());
    }

    #[test]
    fn position_uses_identity() {
        let a: Rc<dyn BoundsSource> = Rc::new(TrackedElement::new(rect(0, 0, 1, 1)));
        let twin: Rc<dyn BoundsSource> = Rc::new(TrackedElement::new(rect(0, 0, 1, 1)));
        let mut focus = FocusSpec::new();
        focus.push_tracked_element(a.clone());
        assert_eq!(focus.position_of(&a), Some(0));
        assert_eq!(focus.position_of(&twin), None);
        let removed = focus.remove_tracked_element(0);
        assert!(Rc::ptr_eq(&removed, &a));
        assert!(focus.is_empty());
    }

    #[test]
    fn set_bounds_notifies_listeners() {
        let el = TrackedElement::new(rect(0, 0, 10, 10));
        let (count, listener) = counter();
        el.subscribe(listener);
        el.set_bounds(rect(1, 0, 10, 10));
        el.set_bounds(rect(2, 0, 10, 10));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn unchanged_bounds_do_not_notify() {
        let el = TrackedElement::new(rect(0, 0, 10, 10));
        let (count, listener) = counter();
        el.subscribe(listener);
        el.set_bounds(rect(0, 0, 10, 10));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let el = TrackedElement::new(rect(0, 0, 10, 10));
        let (count, listener) = counter();
        let id = el.subscribe(listener);
        assert_eq!(el.listener_count(), 1);
        el.unsubscribe(id);
        assert_eq!(el.listener_count(), 0);
        el.set_bounds(rect(5, 5, 5, 5));
        assert_eq!(count.get(), 0);
        // Removing twice is harmless.
        el.unsubscribe(id);
    }

    #[test]
    fn subscription_ids_are_distinct() {
        let el = TrackedElement::new(Rect::ZERO);
        let (_, l1) = counter();
        let (_, l2) = counter();
        assert_ne!(el.subscribe(l1), el.subscribe(l2));
    }

    #[test]
    fn listener_may_unsubscribe_itself() {
        let el = Rc::new(TrackedElement::new(Rect::ZERO));
        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
        let calls = Rc::new(Cell::new(0_u32));
        let listener: BoundsListener = {
            let el = Rc::downgrade(&el);
            let slot = Rc::clone(&slot);
            let calls = Rc::clone(&calls);
            Rc::new(move || {
                calls.set(calls.get() + 1);
                if let (Some(el), Some(id)) = (el.upgrade(), slot.take()) {
                    el.unsubscribe(id);
                }
            })
        };
        slot.set(Some(el.subscribe(listener)));
        el.set_bounds(rect(1, 1, 1, 1));
        el.set_bounds(rect(2, 2, 1, 1));
        assert_eq!(calls.get(), 1);
        assert_eq!(el.listener_count(), 0);
    }
}
