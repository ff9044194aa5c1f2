// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill plan: an ordered sequence of rectangle fills for one paint call.

use kurbo::{Rect, Vec2};
use peniko::Color;

/// Which overlay layer a fill belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillLayer {
    /// Fill over a focus rectangle.
    Focus,
    /// Fill over the region outside every focus rectangle.
    Unfocus,
}

/// A single solid rectangle fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillCommand {
    /// Layer the fill belongs to.
    pub layer: FillLayer,
    /// Target rectangle in device pixels, offset already applied.
    pub rect: Rect,
    /// Fill color, alpha already scaled by the paint opacity.
    pub color: Color,
}

/// An ordered list of fills for one paint call.
///
/// Backends replay the commands in order with their own fill primitive.
/// Focus fills (if any) come before unfocus fills.
#[derive(Clone, Debug, Default)]
pub struct FillPlan {
    /// Translation added to every rectangle pushed into the plan.
    pub offset: Vec2,
    /// Fill commands in paint order.
    pub commands: Vec<FillCommand>,
}

impl FillPlan {
    /// Creates an empty plan whose rectangles are shifted by `offset`.
    #[must_use]
    pub fn new(offset: Vec2) -> Self {
        Self {
            offset,
            commands: Vec::new(),
        }
    }

    /// Clears the plan for reuse, keeping the offset.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Appends a fill of `rect`, shifted by [`offset`](Self::offset).
    pub fn push(&mut self, layer: FillLayer, rect: penumbra_core::geometry::Rect, color: Color) {
        self.commands.push(FillCommand {
            layer,
            rect: Rect::from(rect) + self.offset,
            color,
        });
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the plan draws nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over the commands for one layer, in order.
    pub fn layer(&self, layer: FillLayer) -> impl Iterator<Item = &FillCommand> {
        self.commands.iter().filter(move |c| c.layer == layer)
    }

    /// Total area covered by one layer's fills, counting overlaps twice.
    #[must_use]
    pub fn layer_area(&self, layer: FillLayer) -> f64 {
        self.layer(layer).map(|c| c.rect.area()).sum()
    }
}
