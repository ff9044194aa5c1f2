// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill plans and a caching highlight renderer for dimming overlays.
//!
//! This crate sits between [`penumbra_core`]'s region computation and a
//! backend's fill primitive. It defines:
//!
//! - [`HighlightRenderer`]: owns the focus set and region cache, keeps them
//!   consistent, and paints both overlay layers
//! - [`HighlightConfig`] / [`LayerFill`]: per-layer colors, padding, cache
//!   capacity
//! - [`FillPlan`] / [`FillCommand`]: the ordered list of fills a backend
//!   replays
//!
//! Owner-side events (invalidations, subscription churn, fill changes) are
//! logged with [`tracing`] at `debug` level. Paint-path events go through
//! [`penumbra_core::trace`] instead.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `penumbra_core/trace`.

mod config;
mod plan;
mod renderer;

pub use config::{HighlightConfig, LayerFill, OPACITY_EPSILON};
pub use plan::{FillCommand, FillLayer, FillPlan};
pub use renderer::HighlightRenderer;
