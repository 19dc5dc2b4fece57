// File: crates/graph-core/src/canvas.rs
// Summary: Immediate-mode 2D drawing capability consumed by the engine, plus an in-memory recorder.

use crate::error::Result;
use crate::geometry::{Pixel, RectI32};
use crate::Color;

/// Minimal drawing surface the engine renders into.
pub trait Canvas2D {
    /// Resize the surface, discarding its content. Called once per render pass,
    /// before [`clear`](Self::clear).
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;
    fn clear(&mut self, rect: RectI32);
    fn stroke_line(&mut self, from: Pixel, to: Pixel, color: Color, weight: f32);
}

impl<C: Canvas2D + ?Sized> Canvas2D for &mut C {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> { (**self).resize(width, height) }
    fn clear(&mut self, rect: RectI32) { (**self).clear(rect) }
    fn stroke_line(&mut self, from: Pixel, to: Pixel, color: Color, weight: f32) {
        (**self).stroke_line(from, to, color, weight)
    }
}

/// One recorded call on a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Resize { width: u32, height: u32 },
    Clear(RectI32),
    Line { from: Pixel, to: Pixel, color: Color, weight: f32 },
}

/// Canvas that keeps the display list instead of rasterizing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub width: u32,
    pub height: u32,
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self { Self::default() }

    /// Stroked lines in issue order as `(from, to, color, weight)`.
    pub fn lines(&self) -> impl Iterator<Item = (Pixel, Pixel, Color, f32)> + '_ {
        self.calls.iter().filter_map(|c| match *c {
            DrawCall::Line { from, to, color, weight } => Some((from, to, color, weight)),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize { self.lines().count() }

    /// Lines stroked with exactly `color`.
    pub fn lines_with_color(&self, color: Color) -> Vec<(Pixel, Pixel)> {
        self.lines().filter(|l| l.2 == color).map(|l| (l.0, l.1)).collect()
    }
}

impl Canvas2D for RecordingCanvas {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        // a resized surface starts blank, like a resized HTML canvas
        self.calls.clear();
        self.calls.push(DrawCall::Resize { width, height });
        Ok(())
    }

    fn clear(&mut self, rect: RectI32) {
        self.calls.push(DrawCall::Clear(rect));
    }

    fn stroke_line(&mut self, from: Pixel, to: Pixel, color: Color, weight: f32) {
        self.calls.push(DrawCall::Line { from, to, color, weight });
    }
}
