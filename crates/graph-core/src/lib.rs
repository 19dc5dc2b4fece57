// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports the coordinate mapping, grid, sampling and plotting API.

pub mod error;
pub mod types;
pub mod geometry;
pub mod view;
pub mod scale;
pub mod axis;
pub mod grid;
pub mod function;
pub mod sampler;
pub mod plotter;
pub mod canvas;
pub mod raster;
pub mod theme;
pub mod engine;
pub mod host;

pub use skia_safe::Color;

pub use error::{GraphError, Result};
pub use geometry::{Pixel, RectI32};
pub use view::Viewport;
pub use scale::CoordinateSpace;
pub use grid::{GridRenderer, GridSummary};
pub use function::{FunctionKind, FunctionSpec, Linear, Quadratic, StrokeStyle};
pub use sampler::{Curve, FunctionSampler, SamplePoint};
pub use plotter::{CurvePlotter, PlotStats, Segment};
pub use canvas::{Canvas2D, DrawCall, RecordingCanvas};
pub use raster::SkiaCanvas;
pub use theme::Theme;
pub use engine::{CurveSummary, GraphEngine, RenderOptions, RenderSummary};
pub use host::{GraphSession, SlotInput, Trigger};
