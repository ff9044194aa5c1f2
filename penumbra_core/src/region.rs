// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disjoint rectangle sets produced by region subtraction.

use alloc::vec::Vec;

use crate::geometry::Rect;
use crate::subtract::subtract_region;

/// An ordered set of pairwise-disjoint, non-empty rectangles.
///
/// A `Region` is the value stored by
/// [`RegionCache`](crate::cache::RegionCache): the part of some outer bounds
/// left uncovered by a list of focus rectangles. An empty region is valid and
/// means the bounds were fully covered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    /// Computes `bounds` minus the union of `subtrahends`.
    ///
    /// See [`subtract_region`] for the decomposition rules.
    #[must_use]
    pub fn subtract(bounds: Rect, subtrahends: &[Rect]) -> Self {
        Self {
            rects: subtract_region(bounds, subtrahends),
        }
    }

    /// Returns the rectangles in emission order.
    #[inline]
    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Returns an iterator over the rectangles.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Rect> {
        self.rects.iter()
    }

    /// Number of rectangles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if the region covers nothing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Total number of pixels covered.
    ///
    /// Rectangles are disjoint, so this is a plain sum.
    #[must_use]
    pub fn area(&self) -> u64 {
        self.rects.iter().map(|r| r.area()).sum()
    }

    /// Returns `true` if the pixel at `(x, y)` is covered.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }

    /// Merges rectangles that share a complete edge.
    ///
    /// Two rectangles merge when they have the same top and height and touch
    /// horizontally, or the same left and width and touch vertically. Merging
    /// repeats until no such pair remains. The covered point set is unchanged
    /// and the result stays disjoint, but the rectangle count can only drop.
    /// The result is still not guaranteed to be minimal.
    pub fn coalesce(&mut self) {
        let rects = &mut self.rects;
        let mut i = 0;
        while i < rects.len() {
            let mut grew = false;
            let mut j = i + 1;
            while j < rects.len() {
                if let Some(merged) = merge_pair(rects[i], rects[j]) {
                    rects[i] = merged;
                    rects.remove(j);
                    grew = true;
                } else {
                    j += 1;
                }
            }
            // A grown rectangle may now line up with an earlier one.
            i = if grew { 0 } else { i + 1 };
        }
    }
}

/// Returns the union of `a` and `b` if it is itself a rectangle made of two
/// edge-sharing halves.
fn merge_pair(a: Rect, b: Rect) -> Option<Rect> {
    if a.top() == b.top() && a.height() == b.height() {
        if a.right() == b.left() {
            return Rect::from_ltrb(a.left(), a.top(), b.right(), a.bottom()).ok();
        }
        if b.right() == a.left() {
            return Rect::from_ltrb(b.left(), a.top(), a.right(), a.bottom()).ok();
        }
    }
    if a.left() == b.left() && a.width() == b.width() {
        if a.bottom() == b.top() {
            return Rect::from_ltrb(a.left(), a.top(), a.right(), b.bottom()).ok();
        }
        if b.bottom() == a.top() {
            return Rect::from_ltrb(a.left(), b.top(), a.right(), a.bottom()).ok();
        }
    }
    None
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Rect;
    type IntoIter = core::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
