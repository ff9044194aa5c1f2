// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region subtraction and caching for dimming overlays.
//!
//! `penumbra_core` computes the part of an outer rectangle that is *not*
//! covered by a set of focus rectangles, as a list of disjoint rectangles
//! that can each be filled independently. It is `no_std` compatible (with
//! `alloc`) and works in integer device pixels.
//!
//! # Architecture
//!
//! ```text
//!   FocusSpec::resolve() ──► focus rects
//!                                │
//!   bounds ──► RegionCache::get() ── hit ──► Region ──► fills
//!                   │                          ▲
//!                  miss                        │
//!                   ▼                          │
//!   Region::subtract(bounds, focus) ──► RegionCache::insert()
//! ```
//!
//! **[`geometry`]**: Integer [`Rect`](geometry::Rect) with checked
//! construction, intersection, and padding.
//!
//! **[`subtract`]**: Single- and multi-rectangle subtraction. Total
//! functions; output is exact and disjoint but not minimal.
//!
//! **[`region`]**: [`Region`](region::Region), the disjoint result set, with
//! an optional edge-merging pass.
//!
//! **[`focus`]**: [`FocusSpec`](focus::FocusSpec) combines explicit focus
//! rectangles with tracked elements whose live bounds change over time, and
//! the [`BoundsSource`](focus::BoundsSource) notification seam.
//!
//! **[`cache`]**: FIFO [`RegionCache`](cache::RegionCache) keyed by exact
//! bounds, invalidated explicitly by its owner.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and paint-path event
//! types, with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! Painting the result belongs to `penumbra_render`.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod cache;
pub mod focus;
pub mod geometry;
pub mod region;
pub mod subtract;
pub mod trace;
