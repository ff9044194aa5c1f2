// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle subtraction.
//!
//! [`subtract_rect`] removes one rectangle from another and returns the
//! remainder as up to four disjoint strips, using a "plus-sign" layout: the
//! top and bottom strips run the full width of the minuend, while the left
//! and right strips are restricted to the row occupied by the (clipped)
//! subtrahend.
//!
//! ```text
//!   ┌─────────────────────────┐
//!   │           top           │
//!   ├───────┬─────────┬───────┤
//!   │ left  │  hole   │ right │
//!   ├───────┴─────────┴───────┤
//!   │         bottom          │
//!   └─────────────────────────┘
//! ```
//!
//! [`subtract_region`] folds that operation over an ordered list of
//! subtrahends. The result is exact (area and point set) but not minimal:
//! each subtrahend can split every rectangle it touches into four, and no
//! merging is done. See [`Region::coalesce`](crate::region::Region::coalesce)
//! for an optional merging pass.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::geometry::Rect;

/// The remainder of a single subtraction: at most four strips, stored inline.
pub type Strips = SmallVec<[Rect; 4]>;

/// Subtracts `subtrahend` from `minuend`.
///
/// The returned strips are pairwise disjoint, do not overlap `subtrahend`,
/// and together cover exactly `minuend \ subtrahend`. Strips are emitted in
/// top, left, right, bottom order, and zero-area strips are never emitted.
///
/// An empty minuend yields no strips. A subtrahend that does not overlap the
/// minuend (including an empty one) yields the minuend unchanged.
#[must_use]
pub fn subtract_rect(minuend: Rect, subtrahend: Rect) -> Strips {
    let mut strips = Strips::new();
    if minuend.is_empty() {
        return strips;
    }
    let Some(hole) = minuend.intersect(subtrahend) else {
        strips.push(minuend);
        return strips;
    };

    if hole.top() > minuend.top() {
        strips.push(Rect::from_ordered_edges(
            minuend.left(),
            minuend.top(),
            minuend.right(),
            hole.top(),
        ));
    }
    if hole.left() > minuend.left() {
        strips.push(Rect::from_ordered_edges(
            minuend.left(),
            hole.top(),
            hole.left(),
            hole.bottom(),
        ));
    }
    if hole.right() < minuend.right() {
        strips.push(Rect::from_ordered_edges(
            hole.right(),
            hole.top(),
            minuend.right(),
            hole.bottom(),
        ));
    }
    if hole.bottom() < minuend.bottom() {
        strips.push(Rect::from_ordered_edges(
            minuend.left(),
            hole.bottom(),
            minuend.right(),
            minuend.bottom(),
        ));
    }
    strips
}

/// Subtracts every rectangle in `subtrahends` from `minuend`.
///
/// The working set starts as `{minuend}`; each subtrahend, in order,
/// replaces every working rectangle by its [`subtract_rect`] strips. The
/// result covers exactly `minuend` minus the union of `subtrahends`, with no
/// two rectangles sharing area. Permuting `subtrahends` changes the strip
/// boundaries but never the covered point set.
///
/// With no subtrahends the result is `[minuend]` (or empty for an empty
/// minuend).
#[must_use]
pub fn subtract_region(minuend: Rect, subtrahends: &[Rect]) -> Vec<Rect> {
    let mut working = Vec::new();
    if minuend.is_empty() {
        return working;
    }
    working.push(minuend);

    let mut next = Vec::new();
    for &subtrahend in subtrahends {
        if subtrahend.is_empty() || !minuend.overlaps(subtrahend) {
            continue;
        }
        next.clear();
        for &rect in &working {
            next.extend(subtract_rect(rect, subtrahend));
        }
        core::mem::swap(&mut working, &mut next);
        if working.is_empty() {
            break;
        }
    }
    working
}
