// File: crates/graph-core/src/scale.rs
// Summary: Transform between mathematical units and pixel coordinates around a centered origin.

use crate::geometry::Pixel;

/// Mapping for one render pass. Pure function of `(scale, center_x, center_y)`.
///
/// Two conventions meet here:
/// - sampled values coming out of [`crate::FunctionSampler`] are mapped with
///   [`to_pixel_y`](Self::to_pixel_y), which divides by `scale` once;
/// - true mathematical points (grid units, test fixtures) go through
///   [`to_pixel`](Self::to_pixel) / [`math_x`](Self::math_x) / [`math_y`](Self::math_y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateSpace {
    pub scale: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl CoordinateSpace {
    pub const fn new(scale: f64, center_x: f64, center_y: f64) -> Self {
        Self { scale, center_x, center_y }
    }

    /// Columns are sampled directly in pixel space.
    #[inline]
    pub fn to_pixel_x(&self, column: u32) -> f64 {
        column as f64
    }

    /// Sampled value to pixel row; larger values move up the screen.
    #[inline]
    pub fn to_pixel_y(&self, value: f64) -> f64 {
        -value / self.scale + self.center_y
    }

    /// Inverse of [`to_pixel_y`](Self::to_pixel_y).
    #[inline]
    pub fn from_pixel_y(&self, py: f64) -> f64 {
        (py - self.center_y) * -self.scale
    }

    /// Horizontal pixel distance from the origin column.
    #[inline]
    pub fn offset_x(&self, column: u32) -> f64 {
        self.to_pixel_x(column) - self.center_x
    }

    #[inline]
    pub fn math_x(&self, px: f64) -> f64 {
        (px - self.center_x) / self.scale
    }

    #[inline]
    pub fn math_y(&self, py: f64) -> f64 {
        (self.center_y - py) / self.scale
    }

    /// Mathematical point to pixel.
    pub fn to_pixel(&self, x: f64, y: f64) -> Pixel {
        Pixel::new(self.center_x + x * self.scale, self.center_y - y * self.scale)
    }

    pub fn origin(&self) -> Pixel {
        Pixel::new(self.center_x, self.center_y)
    }
}
