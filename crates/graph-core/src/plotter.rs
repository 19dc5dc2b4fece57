// File: crates/graph-core/src/plotter.rs
// Summary: Turns sampled columns into a connected polyline of stroked segments.

use tracing::warn;

use crate::canvas::Canvas2D;
use crate::function::StrokeStyle;
use crate::geometry::Pixel;
use crate::sampler::SamplePoint;
use crate::scale::CoordinateSpace;
use crate::Color;

/// A single stroked piece of a curve. Produced and drawn immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Pixel,
    pub end: Pixel,
    pub color: Color,
    pub weight: f32,
}

impl Segment {
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    pub fn draw<C: Canvas2D + ?Sized>(&self, canvas: &mut C) {
        canvas.stroke_line(self.start, self.end, self.color, self.weight);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlotStats {
    /// Segments handed to the canvas.
    pub segments: usize,
    /// Segments dropped because an endpoint was NaN or infinite.
    pub skipped: usize,
}

pub struct CurvePlotter {
    space: CoordinateSpace,
}

impl CurvePlotter {
    pub fn new(space: CoordinateSpace) -> Self {
        Self { space }
    }

    /// Stroke `previous -> current` for every sample after the first.
    ///
    /// A fully finite run of `n` samples yields `n - 1` segments. Non-finite
    /// samples leave a gap instead of a segment.
    pub fn plot<C, I>(&self, canvas: &mut C, samples: I, stroke: &StrokeStyle) -> PlotStats
    where
        C: Canvas2D + ?Sized,
        I: IntoIterator<Item = SamplePoint>,
    {
        let mut stats = PlotStats::default();
        let mut previous: Option<Pixel> = None;

        for sample in samples {
            let current = Pixel::new(
                self.space.to_pixel_x(sample.column),
                self.space.to_pixel_y(sample.value),
            );
            if let Some(start) = previous {
                let segment = Segment { start, end: current, color: stroke.color, weight: stroke.weight };
                if segment.is_finite() {
                    segment.draw(canvas);
                    stats.segments += 1;
                } else {
                    stats.skipped += 1;
                }
            }
            previous = Some(current);
        }

        if stats.skipped > 0 {
            warn!(skipped = stats.skipped, drawn = stats.segments, "curve has non-finite samples");
        }
        stats
    }
}
