// File: crates/graph-core/src/axis.rs
// Summary: The two bold axes through the origin.

use crate::canvas::Canvas2D;
use crate::geometry::Pixel;
use crate::view::Viewport;
use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    /// Horizontal line through `center_y`.
    X,
    /// Vertical line through `center_x`.
    Y,
}

#[derive(Clone, Copy, Debug)]
pub struct Axis {
    pub kind: AxisKind,
    pub color: Color,
    pub weight: f32,
}

impl Axis {
    pub fn new(kind: AxisKind, color: Color, weight: f32) -> Self {
        Self { kind, color, weight }
    }

    /// Endpoints spanning the full viewport.
    pub fn endpoints(&self, viewport: &Viewport) -> (Pixel, Pixel) {
        match self.kind {
            AxisKind::X => {
                let y = viewport.center_y();
                (Pixel::new(0.0, y), Pixel::new(viewport.width_px as f64, y))
            }
            AxisKind::Y => {
                let x = viewport.center_x();
                (Pixel::new(x, 0.0), Pixel::new(x, viewport.height_px as f64))
            }
        }
    }

    pub fn draw<C: Canvas2D + ?Sized>(&self, canvas: &mut C, viewport: &Viewport) {
        let (from, to) = self.endpoints(viewport);
        canvas.stroke_line(from, to, self.color, self.weight);
    }
}
