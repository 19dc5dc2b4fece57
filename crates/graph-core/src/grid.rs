// File: crates/graph-core/src/grid.rs
// Summary: Axis lines plus a faint unit grid covering the whole viewport.

use tracing::trace;

use crate::axis::{Axis, AxisKind};
use crate::canvas::Canvas2D;
use crate::geometry::Pixel;
use crate::scale::CoordinateSpace;
use crate::view::Viewport;
use crate::Color;

/// Number of unit lines that fit between the origin and the edge of a `center`-wide half.
#[inline]
pub fn axis_count(center: f64, scale: f64) -> u32 {
    // epsilon keeps e.g. 615 / 12.3 from flooring to 49
    (center / scale + 1e-9).floor().max(0.0) as u32
}

/// Pixel offsets `k * scale` for `k` in `0..=2 * axis_count`, symmetric about the center.
pub fn unit_offsets(center: f64, scale: f64) -> impl Iterator<Item = f64> {
    let n = axis_count(center, scale);
    (0..=2 * n).map(move |k| k as f64 * scale)
}

/// Lines issued by one [`GridRenderer::draw`] call (axes excluded).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSummary {
    pub vertical: usize,
    pub horizontal: usize,
}

pub struct GridRenderer {
    viewport: Viewport,
    space: CoordinateSpace,
    axis_color: Color,
    axis_weight: f32,
    grid_color: Color,
    grid_weight: f32,
}

impl GridRenderer {
    pub fn new(viewport: Viewport, axis_color: Color, axis_weight: f32, grid_color: Color, grid_weight: f32) -> Self {
        Self { viewport, space: viewport.space(), axis_color, axis_weight, grid_color, grid_weight }
    }

    /// Bold axes first, then vertical and horizontal grid lines.
    pub fn draw<C: Canvas2D + ?Sized>(&self, canvas: &mut C) -> GridSummary {
        Axis::new(AxisKind::X, self.axis_color, self.axis_weight).draw(canvas, &self.viewport);
        Axis::new(AxisKind::Y, self.axis_color, self.axis_weight).draw(canvas, &self.viewport);

        let w = self.viewport.width_px as f64;
        let h = self.viewport.height_px as f64;
        let mut summary = GridSummary::default();

        for x in unit_offsets(self.space.center_x, self.space.scale) {
            canvas.stroke_line(Pixel::new(x, 0.0), Pixel::new(x, h), self.grid_color, self.grid_weight);
            summary.vertical += 1;
        }
        for y in unit_offsets(self.space.center_y, self.space.scale) {
            canvas.stroke_line(Pixel::new(0.0, y), Pixel::new(w, y), self.grid_color, self.grid_weight);
            summary.horizontal += 1;
        }

        trace!(vertical = summary.vertical, horizontal = summary.horizontal, "grid drawn");
        summary
    }
}
