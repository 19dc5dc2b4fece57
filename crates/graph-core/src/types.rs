// File: crates/graph-core/src/types.rs
// Summary: Shared constants (grid extent, default scale, stroke weights, slot count).

/// Mathematical units spanned by one side of the canvas.
pub const GRID_UNITS: u32 = 100;

/// Scale (pixels per unit) used when the host has not chosen one.
pub const DEFAULT_SCALE: f64 = 50.0;

/// Number of independently configurable function slots in the reference host.
pub const SLOT_COUNT: usize = 3;

/// Side of the scrollable container the canvas is shown through, in pixels.
pub const CONTAINER_PX: u32 = 540;

/// Stroke width of the two axes through the origin.
pub const AXIS_WEIGHT: f32 = 2.0;

/// Stroke width of the unit grid.
pub const GRID_WEIGHT: f32 = 0.5;

/// Curve stroke width when a slot leaves the weight field empty.
pub const DEFAULT_STROKE_WEIGHT: f32 = 2.0;

/// Largest side the Skia raster backend will allocate; other canvases are unbounded.
pub const MAX_SURFACE_PX: u32 = 20_000;
