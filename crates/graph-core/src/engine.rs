// File: crates/graph-core/src/engine.rs
// Summary: Render pass orchestration: viewport -> clear -> grid -> one curve per active slot.

use std::path::Path;

use tracing::{debug, trace};

use crate::canvas::Canvas2D;
use crate::error::Result;
use crate::function::{FunctionKind, FunctionSpec};
use crate::grid::{GridRenderer, GridSummary};
use crate::plotter::CurvePlotter;
use crate::raster::SkiaCanvas;
use crate::sampler::FunctionSampler;
use crate::theme::Theme;
use crate::types::{AXIS_WEIGHT, GRID_UNITS, GRID_WEIGHT};
use crate::view::Viewport;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Units per canvas side; the surface is `grid_units * scale` pixels square.
    pub grid_units: u32,
    pub axis_weight: f32,
    pub grid_weight: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            grid_units: GRID_UNITS,
            axis_weight: AXIS_WEIGHT,
            grid_weight: GRID_WEIGHT,
        }
    }
}

/// Outcome of plotting one active slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSummary {
    pub slot: usize,
    pub kind: FunctionKind,
    pub segments: usize,
    pub skipped: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSummary {
    pub viewport: Viewport,
    pub grid: GridSummary,
    /// Active slots only, in draw order.
    pub curves: Vec<CurveSummary>,
}

impl RenderSummary {
    pub fn total_segments(&self) -> usize {
        self.curves.iter().map(|c| c.segments).sum()
    }
}

#[derive(Clone, Debug, Default)]
pub struct GraphEngine {
    options: RenderOptions,
}

impl GraphEngine {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn theme(&self) -> &Theme { &self.options.theme }

    pub fn viewport(&self, scale: f64) -> Result<Viewport> {
        Viewport::with_units(scale, self.options.grid_units)
    }

    /// Run one full pass into `canvas`.
    ///
    /// The scale is validated before the canvas is touched. Slots are drawn in
    /// slice order, so later slots paint over earlier ones. Identical inputs issue
    /// an identical call sequence.
    pub fn render<C: Canvas2D + ?Sized>(&self, canvas: &mut C, scale: f64, specs: &[FunctionSpec]) -> Result<RenderSummary> {
        let viewport = self.viewport(scale)?;
        canvas.resize(viewport.width_px, viewport.height_px)?;
        canvas.clear(viewport.rect());

        let theme = &self.options.theme;
        let grid = GridRenderer::new(
            viewport,
            theme.axis_line,
            self.options.axis_weight,
            theme.grid,
            self.options.grid_weight,
        )
        .draw(canvas);

        let space = viewport.space();
        let plotter = CurvePlotter::new(space);
        let mut curves = Vec::new();
        for (slot, spec) in specs.iter().enumerate() {
            let Some(sampler) = FunctionSampler::for_kind(&spec.kind, space, viewport.width_px) else {
                continue;
            };
            let stats = plotter.plot(canvas, sampler.samples(), &spec.stroke);
            trace!(slot, function = %spec.kind, segments = stats.segments, "curve plotted");
            curves.push(CurveSummary { slot, kind: spec.kind, segments: stats.segments, skipped: stats.skipped });
        }

        debug!(
            scale,
            width = viewport.width_px,
            height = viewport.height_px,
            vertical = grid.vertical,
            horizontal = grid.horizontal,
            curves = curves.len(),
            "render pass complete"
        );
        Ok(RenderSummary { viewport, grid, curves })
    }

    /// Render onto a fresh raster surface painted with the theme background.
    pub fn render_to_surface(&self, scale: f64, specs: &[FunctionSpec]) -> Result<(SkiaCanvas, RenderSummary)> {
        let mut canvas = SkiaCanvas::with_background(self.options.theme.background)?;
        let summary = self.render(&mut canvas, scale, specs)?;
        Ok((canvas, summary))
    }

    pub fn render_to_png(&self, scale: f64, specs: &[FunctionSpec], output_png_path: impl AsRef<Path>) -> Result<RenderSummary> {
        let (mut canvas, summary) = self.render_to_surface(scale, specs)?;
        canvas.write_png(output_png_path)?;
        Ok(summary)
    }

    pub fn render_to_png_bytes(&self, scale: f64, specs: &[FunctionSpec]) -> Result<Vec<u8>> {
        let (mut canvas, _) = self.render_to_surface(scale, specs)?;
        canvas.png_bytes()
    }

    /// RGBA8 pixels as `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, scale: f64, specs: &[FunctionSpec]) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (mut canvas, _) = self.render_to_surface(scale, specs)?;
        canvas.rgba8()
    }
}
