// File: crates/graph-core/src/theme.rs
// Summary: Light/Dark theming for canvas background, axes, grid and default curve colors.

use skia_safe as skia;

use crate::types::SLOT_COUNT;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    /// Low-alpha so the unit grid stays faint under curves and axes.
    pub grid: skia::Color,
    /// Default stroke color per function slot.
    pub curves: [skia::Color; SLOT_COUNT],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(26, 0, 0, 0),
            curves: [
                skia::Color::from_argb(255, 220, 50, 47),
                skia::Color::from_argb(255, 38, 139, 210),
                skia::Color::from_argb(255, 40, 160, 80),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            grid: skia::Color::from_argb(40, 255, 255, 255),
            curves: [
                skia::Color::from_argb(255, 255, 110, 90),
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            grid: skia::Color::from_argb(64, 0xff, 0xff, 0xff),
            curves: [
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0xff, 0x00, 0xff),
            ],
        }
    }

    /// Default curve color for `slot`, cycling past the palette length.
    pub fn curve_color(&self, slot: usize) -> skia::Color {
        self.curves[slot % self.curves.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
