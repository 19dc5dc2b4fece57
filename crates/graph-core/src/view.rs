// File: crates/graph-core/src/view.rs
// Summary: Viewport derived from the zoom scale: square surface, centered origin, scroll helpers.

use crate::error::{GraphError, Result};
use crate::geometry::{Pixel, RectI32};
use crate::scale::CoordinateSpace;
use crate::types::GRID_UNITS;

/// Surface dimensions for one render pass.
///
/// Contract: `width_px == height_px == floor(units * scale)` and `scale > 0`.
/// Only constructed through [`Viewport::from_scale`] / [`Viewport::with_units`],
/// which enforce both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width_px: u32,
    pub height_px: u32,
    pub scale: f64,
}

impl Viewport {
    /// Viewport spanning [`GRID_UNITS`] units per side.
    pub fn from_scale(scale: f64) -> Result<Self> {
        Self::with_units(scale, GRID_UNITS)
    }

    pub fn with_units(scale: f64, units: u32) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GraphError::invalid_configuration(format!(
                "scale must be a positive number, got {scale}"
            )));
        }
        if units == 0 {
            return Err(GraphError::invalid_configuration("grid must span at least one unit"));
        }
        // fractional sides truncate, like assigning to a canvas width
        let side = (units as f64 * scale).floor();
        if side < 1.0 || side > u32::MAX as f64 {
            return Err(GraphError::invalid_configuration(format!(
                "scale {scale} gives a {side}px canvas"
            )));
        }
        let side = side as u32;
        Ok(Self { width_px: side, height_px: side, scale })
    }

    #[inline]
    pub fn center_x(&self) -> f64 { self.width_px as f64 / 2.0 }
    #[inline]
    pub fn center_y(&self) -> f64 { self.height_px as f64 / 2.0 }

    /// Image of mathematical (0, 0).
    pub fn origin(&self) -> Pixel {
        Pixel::new(self.center_x(), self.center_y())
    }

    pub fn rect(&self) -> RectI32 {
        RectI32::from_ltwh(0, 0, self.width_px as i32, self.height_px as i32)
    }

    pub fn space(&self) -> CoordinateSpace {
        CoordinateSpace::new(self.scale, self.center_x(), self.center_y())
    }

    /// Scroll offset (left, top) that centers a `container_w` x `container_h` window on
    /// the origin. Clamped at zero when the container is larger than the canvas.
    pub fn centered_scroll(&self, container_w: u32, container_h: u32) -> (u32, u32) {
        let left = (self.width_px as f64 / 2.0 - container_w as f64 / 2.0).max(0.0);
        let top = (self.height_px as f64 / 2.0 - container_h as f64 / 2.0).max(0.0);
        (left as u32, top as u32)
    }

    /// Clamp a scroll offset so a `container_w` x `container_h` window stays on the canvas.
    pub fn clamp_scroll(&self, left: i64, top: i64, container_w: u32, container_h: u32) -> (u32, u32) {
        let max_left = (self.width_px as i64 - container_w as i64).max(0);
        let max_top = (self.height_px as i64 - container_h as i64).max(0);
        (left.clamp(0, max_left) as u32, top.clamp(0, max_top) as u32)
    }
}
