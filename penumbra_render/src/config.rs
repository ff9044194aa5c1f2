// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer configuration.

use peniko::Color;
use penumbra_core::cache::DEFAULT_CAPACITY;

/// Opacity at or below which a paint call draws nothing.
///
/// Half of one 8-bit alpha step: anything smaller rounds to fully
/// transparent on an 8-bit target.
pub const OPACITY_EPSILON: f32 = 1.0 / 512.0;

/// Fill settings for one overlay layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerFill {
    /// Whether the layer is drawn at all.
    pub enabled: bool,
    /// Fill color. An enabled layer without a color draws nothing.
    pub color: Option<Color>,
}

impl LayerFill {
    /// An enabled layer filled with `color`.
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self {
            enabled: true,
            color: Some(color),
        }
    }

    /// A layer that draws nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            color: None,
        }
    }

    /// Returns the color to fill with, if this layer draws anything.
    ///
    /// That requires the layer to be enabled and to have a color with
    /// non-zero alpha.
    #[must_use]
    pub fn visible_color(&self) -> Option<Color> {
        if !self.enabled {
            return None;
        }
        self.color.filter(|c| c.components[3] > 0.0)
    }

    /// Returns `true` if this layer draws anything.
    #[must_use]
    pub fn can_fill(&self) -> bool {
        self.visible_color().is_some()
    }
}

impl Default for LayerFill {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Configuration for a [`HighlightRenderer`](crate::HighlightRenderer).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightConfig {
    /// Fill for the focus rectangles themselves.
    pub focus_fill: LayerFill,
    /// Fill for everything inside the bounds outside the focus rectangles.
    pub unfocus_fill: LayerFill,
    /// Inflation applied to every tracked element's bounds. Negative values
    /// shrink.
    pub padding: i32,
    /// Number of bounds whose regions are cached. Fixed at construction.
    pub cache_capacity: usize,
    /// Merge edge-sharing rectangles before caching a region.
    pub coalesce: bool,
}

impl HighlightConfig {
    /// Dims everything outside the focus; the focus itself is untouched.
    #[must_use]
    pub const fn dim() -> Self {
        Self {
            focus_fill: LayerFill::disabled(),
            unfocus_fill: LayerFill::solid(Color::from_rgba8(0, 0, 0, 128)),
            padding: 0,
            cache_capacity: DEFAULT_CAPACITY,
            coalesce: false,
        }
    }

    /// Darker surround plus a faint wash over padded focus rectangles.
    #[must_use]
    pub const fn spotlight() -> Self {
        Self {
            focus_fill: LayerFill::solid(Color::from_rgba8(255, 255, 255, 24)),
            unfocus_fill: LayerFill::solid(Color::from_rgba8(0, 0, 0, 176)),
            padding: 4,
            cache_capacity: DEFAULT_CAPACITY,
            coalesce: true,
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::dim()
    }
}

/// Clamps `opacity` into `[0, 1]`, mapping NaN to 0.
#[must_use]
pub(crate) fn clamp_opacity(opacity: f32) -> f32 {
    if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}
