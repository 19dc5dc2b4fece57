// File: crates/graph-core/src/raster.rs
// Summary: Canvas2D backed by a Skia CPU raster surface, with PNG and RGBA8 readback.

use std::path::Path;

use skia_safe as skia;

use crate::canvas::Canvas2D;
use crate::error::{GraphError, Result};
use crate::geometry::{Pixel, RectI32};
use crate::types::MAX_SURFACE_PX;

/// Raster surface the engine can draw into and the host can read back.
///
/// `clear` paints with `background` rather than leaving transparent pixels, so
/// exported PNGs look like the page the canvas sits on.
pub struct SkiaCanvas {
    surface: skia::Surface,
    width: u32,
    height: u32,
    background: skia::Color,
}

impl SkiaCanvas {
    pub fn new(width: u32, height: u32, background: skia::Color) -> Result<Self> {
        let mut surface = raster_surface(width, height)?;
        surface.canvas().clear(background);
        Ok(Self { surface, width, height, background })
    }

    /// Placeholder 1x1 surface; the first render pass resizes it.
    pub fn with_background(background: skia::Color) -> Result<Self> {
        Self::new(1, 1, background)
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        let data = image
            .encode(None, skia::EncodedImageFormat::PNG, None)
            .ok_or_else(|| GraphError::Encode("PNG encoder returned no data".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels as `(pixels, width, height, stride)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width as i32, self.height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(GraphError::Encode("failed to read back surface pixels".into()));
        }
        Ok((pixels, self.width, self.height, stride))
    }
}

impl Canvas2D for SkiaCanvas {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width != self.width || height != self.height {
            self.surface = raster_surface(width, height)?;
            self.width = width;
            self.height = height;
        }
        self.surface.canvas().clear(skia::Color::TRANSPARENT);
        Ok(())
    }

    fn clear(&mut self, rect: RectI32) {
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_blend_mode(skia::BlendMode::Src);
        paint.set_color(self.background);
        let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn stroke_line(&mut self, from: Pixel, to: Pixel, color: skia::Color, weight: f32) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(weight);
        stroke.set_color(color);
        self.surface.canvas().draw_line(from.to_f32(), to.to_f32(), &stroke);
    }
}

fn raster_surface(width: u32, height: u32) -> Result<skia::Surface> {
    if width == 0 || height == 0 || width > MAX_SURFACE_PX || height > MAX_SURFACE_PX {
        return Err(GraphError::Surface { width, height });
    }
    skia::surfaces::raster_n32_premul((width as i32, height as i32))
        .ok_or(GraphError::Surface { width, height })
}
