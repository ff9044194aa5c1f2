// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer axis-aligned rectangles in device pixel space.
//!
//! [`Rect`] stores `left`, `top`, `width`, and `height` as `i32`. Width and
//! height are never negative, and the right and bottom edges always fit in an
//! `i32`; both are checked once by [`Rect::new`] so that subtraction and
//! intersection never need to re-validate their inputs.
//!
//! Edges are half-open: a rectangle covers the pixels `left..right` and
//! `top..bottom`. A rectangle with zero width or zero height is *empty*; it
//! covers no pixels and is a no-op wherever it is used as a subtrahend.

use core::fmt;

/// Error returned when a [`Rect`] cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// The requested width was negative.
    #[error("rectangle width must not be negative (got {0})")]
    NegativeWidth(i32),
    /// The requested height was negative.
    #[error("rectangle height must not be negative (got {0})")]
    NegativeHeight(i32),
    /// The far edge (`origin + extent`) does not fit in an `i32`.
    #[error("rectangle edge overflows i32 (origin {origin}, extent {extent})")]
    EdgeOverflow {
        /// Left or top coordinate.
        origin: i32,
        /// Width or height.
        extent: i32,
    },
    /// A far edge lies before its near edge.
    #[error("rectangle edges are inverted ({near} > {far})")]
    InvertedEdges {
        /// Left or top coordinate.
        near: i32,
        /// Right or bottom coordinate.
        far: i32,
    },
}

/// An axis-aligned rectangle with integer coordinates.
///
/// Construct with [`Rect::new`] (origin and size) or [`Rect::from_ltrb`]
/// (edges). Both reject negative sizes, so every `Rect` in existence has a
/// well-defined, non-negative area.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        width: 0,
        height: 0,
    };

    /// Creates a rectangle from its top-left corner and size.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeWidth`] or
    /// [`GeometryError::NegativeHeight`] for a negative size, and
    /// [`GeometryError::EdgeOverflow`] if the right or bottom edge would not
    /// fit in an `i32`.
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Result<Self, GeometryError> {
        if width < 0 {
            return Err(GeometryError::NegativeWidth(width));
        }
        if height < 0 {
            return Err(GeometryError::NegativeHeight(height));
        }
        if left.checked_add(width).is_none() {
            return Err(GeometryError::EdgeOverflow {
                origin: left,
                extent: width,
            });
        }
        if top.checked_add(height).is_none() {
            return Err(GeometryError::EdgeOverflow {
                origin: top,
                extent: height,
            });
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    /// Creates a rectangle from its four edges.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvertedEdges`] if `right < left` or
    /// `bottom < top`, and [`GeometryError::EdgeOverflow`] if the resulting
    /// width or height does not fit in an `i32`.
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self, GeometryError> {
        if right < left {
            return Err(GeometryError::InvertedEdges {
                near: left,
                far: right,
            });
        }
        if bottom < top {
            return Err(GeometryError::InvertedEdges {
                near: top,
                far: bottom,
            });
        }
        let Some(width) = right.checked_sub(left) else {
            return Err(GeometryError::EdgeOverflow {
                origin: left,
                extent: right,
            });
        };
        let Some(height) = bottom.checked_sub(top) else {
            return Err(GeometryError::EdgeOverflow {
                origin: top,
                extent: bottom,
            });
        };
        Self::new(left, top, width, height)
    }

    /// Builds a rectangle from edges already known to be ordered and in range.
    ///
    /// Only for callers that derive every edge from an existing valid `Rect`.
    #[inline]
    pub(crate) const fn from_ordered_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        debug_assert!(left <= right && top <= bottom, "edges must be ordered");
        Self {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Left edge.
    #[inline]
    #[must_use]
    pub const fn left(self) -> i32 {
        self.left
    }

    /// Top edge.
    #[inline]
    #[must_use]
    pub const fn top(self) -> i32 {
        self.top
    }

    /// Width (never negative).
    #[inline]
    #[must_use]
    pub const fn width(self) -> i32 {
        self.width
    }

    /// Height (never negative).
    #[inline]
    #[must_use]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub const fn right(self) -> i32 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub const fn bottom(self) -> i32 {
        self.top + self.height
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    #[inline]
    #[must_use]
    pub const fn area(self) -> u64 {
        self.width.unsigned_abs() as u64 * self.height.unsigned_abs() as u64
    }

    /// Returns the overlap of two rectangles, or `None` if they share no
    /// area.
    ///
    /// Rectangles that only touch along an edge or at a corner do not
    /// overlap.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Self::from_ordered_edges(left, top, right, bottom))
    }

    /// Returns `true` if the two rectangles share a positive area.
    #[inline]
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.intersect(other).is_some()
    }

    /// Returns `true` if the pixel at `(x, y)` lies inside the rectangle.
    #[inline]
    #[must_use]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    /// Grows the rectangle by `amount` on all four sides.
    ///
    /// A negative `amount` shrinks it. When shrinking would make a dimension
    /// negative, that dimension collapses to zero around the original
    /// centre line. Coordinates saturate at the `i32` range.
    #[must_use]
    pub fn inflate(self, amount: i32) -> Self {
        let amount = i64::from(amount);
        let (left, width) = inflate_axis(self.left, self.width, amount);
        let (top, height) = inflate_axis(self.top, self.height, amount);
        Self::saturating(left, top, width, height)
    }

    /// Moves the rectangle by `(dx, dy)`, saturating at the `i32` range.
    #[must_use]
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self::saturating(
            i64::from(self.left) + i64::from(dx),
            i64::from(self.top) + i64::from(dy),
            i64::from(self.width),
            i64::from(self.height),
        )
    }

    /// Builds a valid rectangle from wide values, clamping into range.
    fn saturating(left: i64, top: i64, width: i64, height: i64) -> Self {
        let left = clamp_i32(left);
        let top = clamp_i32(top);
        let width = clamp_i32(width.clamp(0, i64::from(i32::MAX) - i64::from(left)));
        let height = clamp_i32(height.clamp(0, i64::from(i32::MAX) - i64::from(top)));
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Inflates one axis, returning the new origin and extent as wide values.
fn inflate_axis(origin: i32, extent: i32, amount: i64) -> (i64, i64) {
    let grown = i64::from(extent) + 2 * amount;
    if grown >= 0 {
        (i64::from(origin) - amount, grown)
    } else {
        ((2 * i64::from(origin) + i64::from(extent)).div_euclid(2), 0)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped to the i32 range before narrowing"
)]
fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}x{})",
            self.left, self.top, self.width, self.height
        )
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        Self::new(
            f64::from(r.left),
            f64::from(r.top),
            f64::from(r.right()),
            f64::from(r.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(l: i32, t: i32, w: i32, h: i32) -> Rect {
        Rect::new(l, t, w, h).unwrap()
    }

    #[test]
    fn new_rejects_negative_size() {
        assert_eq!(
            Rect::new(0, 0, -1, 5),
            Err(GeometryError::NegativeWidth(-1))
        );
        assert_eq!(
            Rect::new(0, 0, 5, -3),
            Err(GeometryError::NegativeHeight(-3))
        );
    }

    #[test]
    fn new_rejects_edge_overflow() {
        assert_eq!(
            Rect::new(i32::MAX, 0, 1, 1),
            Err(GeometryError::EdgeOverflow {
                origin: i32::MAX,
                extent: 1
            })
        );
        assert!(Rect::new(i32::MAX - 10, 0, 10, 1).is_ok());
    }

    #[test]
    fn from_ltrb_checks_order() {
        assert_eq!(Rect::from_ltrb(10, 20, 30, 60), Ok(rect(10, 20, 20, 40)));
        assert_eq!(
            Rect::from_ltrb(30, 0, 10, 5),
            Err(GeometryError::InvertedEdges { near: 30, far: 10 })
        );
        assert!(Rect::from_ltrb(i32::MIN, 0, i32::MAX, 1).is_err());
    }

    #[test]
    fn empty_and_area() {
        assert!(rect(5, 5, 0, 10).is_empty());
        assert!(rect(5, 5, 10, 0).is_empty());
        assert!(!rect(5, 5, 1, 1).is_empty());
        assert_eq!(rect(0, 0, 100, 100).area(), 10_000);
        assert_eq!(rect(0, 0, 0, 100).area(), 0);
        assert_eq!(
            rect(0, 0, i32::MAX, i32::MAX).area(),
            (i32::MAX as u64) * (i32::MAX as u64)
        );
    }

    #[test]
    fn intersect_overlapping() {
        let a = rect(0, 0, 50, 50);
        let b = rect(25, 10, 50, 20);
        assert_eq!(a.intersect(b), Some(rect(25, 10, 25, 20)));
        assert_eq!(b.intersect(a), a.intersect(b));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = rect(0, 0, 10, 10);
        assert_eq!(a.intersect(rect(10, 0, 10, 10)), None);
        assert_eq!(a.intersect(rect(0, 10, 10, 10)), None);
        assert_eq!(a.intersect(rect(10, 10, 5, 5)), None);
        assert!(!a.overlaps(rect(-5, -5, 5, 5)));
    }

    #[test]
    fn empty_rect_never_intersects() {
        let a = rect(0, 0, 10, 10);
        assert_eq!(a.intersect(rect(5, 5, 0, 0)), None);
        assert_eq!(a.intersect(rect(5, 0, 0, 10)), None);
    }

    #[test]
    fn contains_is_half_open() {
        let r = rect(10, 10, 5, 5);
        assert!(r.contains(10, 10));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 10));
        assert!(!r.contains(10, 15));
        assert!(!r.contains(9, 12));
    }

    #[test]
    fn inflate_grows_every_side() {
        assert_eq!(rect(10, 10, 20, 20).inflate(5), rect(5, 5, 30, 30));
    }

    #[test]
    fn inflate_negative_shrinks_and_clamps() {
        assert_eq!(rect(10, 10, 20, 20).inflate(-5), rect(15, 15, 10, 10));
        let collapsed = rect(10, 20, 20, 6).inflate(-4);
        assert_eq!(collapsed, rect(14, 23, 12, 0));
        assert!(collapsed.is_empty());
        let gone = rect(10, 10, 4, 4).inflate(-10);
        assert_eq!(gone, rect(12, 12, 0, 0));
    }

    #[test]
    fn inflate_saturates() {
        let r = rect(i32::MIN, 0, 10, 10).inflate(5);
        assert_eq!(r.left(), i32::MIN);
        assert_eq!(r.top(), -5);
        let big = rect(i32::MAX - 2, 0, 1, 1).inflate(100);
        assert_eq!(big.right(), i32::MAX);
    }

    #[test]
    fn translate_moves_origin() {
        assert_eq!(rect(1, 2, 3, 4).translate(10, -20), rect(11, -18, 3, 4));
        let clamped = rect(i32::MAX - 5, 0, 5, 5).translate(10, 0);
        assert_eq!(clamped.right(), i32::MAX);
    }

    #[test]
    fn converts_to_kurbo() {
        let k: kurbo::Rect = rect(10, 20, 30, 40).into();
        assert_eq!(k, kurbo::Rect::new(10.0, 20.0, 40.0, 60.0));
    }

    #[test]
    fn debug_format() {
        assert_eq!(alloc::format!("{:?}", rect(1, 2, 3, 4)), "Rect(1, 2, 3x4)");
    }
}
