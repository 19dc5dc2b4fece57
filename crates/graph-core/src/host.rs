// File: crates/graph-core/src/host.rs
// Summary: Thin host adapter: raw slot text -> FunctionSpec, and UI triggers -> render passes.
// Notes:
// - Nothing here knows about a particular UI toolkit. Window/CLI front-ends feed
//   strings and triggers in and read the canvas back out.

use std::str::FromStr;

use tracing::{info, warn};

use crate::canvas::Canvas2D;
use crate::engine::{GraphEngine, RenderSummary};
use crate::error::{GraphError, Result};
use crate::function::{FunctionKind, FunctionSpec, StrokeStyle};
use crate::theme::Theme;
use crate::types::{DEFAULT_SCALE, DEFAULT_STROKE_WEIGHT, SLOT_COUNT};
use crate::view::Viewport;
use crate::Color;

/// Key code that re-graphs from the form (Enter).
pub const ENTER_KEY_CODE: u32 = 13;

/// Empty fields count as zero; anything else must parse as a number.
pub fn parse_coefficient(raw: &str) -> Result<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(0.0);
    }
    s.parse::<f64>().map_err(|_| GraphError::invalid_coefficient(raw))
}

/// `#rgb` or `#rrggbb`, always opaque.
pub fn parse_color(raw: &str) -> Result<Color> {
    let s = raw.trim();
    let hex = s.strip_prefix('#').ok_or_else(|| GraphError::invalid_color(raw))?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(GraphError::invalid_color(raw));
    }
    let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| GraphError::invalid_color(raw));
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1])? * 17;
            let g = channel(&hex[1..2])? * 17;
            let b = channel(&hex[2..3])? * 17;
            Ok(Color::from_argb(255, r, g, b))
        }
        6 => Ok(Color::from_argb(255, channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => Err(GraphError::invalid_color(raw)),
    }
}

/// Empty means [`DEFAULT_STROKE_WEIGHT`]; otherwise a finite, positive width.
pub fn parse_weight(raw: &str) -> Result<f32> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(DEFAULT_STROKE_WEIGHT);
    }
    match s.parse::<f32>() {
        Ok(w) if w.is_finite() && w > 0.0 => Ok(w),
        _ => Err(GraphError::invalid_weight(raw)),
    }
}

/// Raw text of one function slot, as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotInput {
    pub kind: String,
    pub coefficients: [String; 3],
    /// Empty picks the theme's color for the slot.
    pub color: String,
    pub weight: String,
}

impl SlotInput {
    pub fn new(kind: impl Into<String>, coefficients: &[&str]) -> Self {
        let mut slot = Self { kind: kind.into(), ..Self::default() };
        for (dst, src) in slot.coefficients.iter_mut().zip(coefficients) {
            *dst = (*src).to_string();
        }
        slot
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Validate and convert. Only the coefficient fields the family uses are parsed.
    pub fn resolve(&self, slot: usize, theme: &Theme) -> Result<FunctionSpec> {
        let arity = FunctionKind::from_coefficients(&self.kind, &[])?.arity();
        let coefficients = self.coefficients[..arity]
            .iter()
            .map(|c| parse_coefficient(c))
            .collect::<Result<Vec<f64>>>()?;
        let kind = FunctionKind::from_coefficients(&self.kind, &coefficients)?;

        let color = if self.color.trim().is_empty() { theme.curve_color(slot) } else { parse_color(&self.color)? };
        let weight = parse_weight(&self.weight)?;
        Ok(FunctionSpec::new(kind, StrokeStyle::new(color, weight)))
    }
}

/// `kind[:c0,c1,c2[:color[:weight]]]`, e.g. `linear:1,0`, `quadratic:1,0,-2:#3366ff:3`.
impl FromStr for SlotInput {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(4, ':');
        let kind = parts.next().unwrap_or_default().trim();
        // reject unknown names early; coefficients are validated at resolve time
        FunctionKind::from_coefficients(kind, &[])?;

        let mut slot = SlotInput { kind: kind.to_string(), ..SlotInput::default() };
        if let Some(coeffs) = parts.next() {
            let fields: Vec<&str> = coeffs.split(',').collect();
            if fields.len() > slot.coefficients.len() {
                return Err(GraphError::invalid_coefficient(coeffs));
            }
            for (dst, src) in slot.coefficients.iter_mut().zip(fields) {
                *dst = src.trim().to_string();
            }
        }
        if let Some(color) = parts.next() {
            slot.color = color.trim().to_string();
        }
        if let Some(weight) = parts.next() {
            slot.weight = weight.trim().to_string();
        }
        Ok(slot)
    }
}

/// Things a host can ask for a redraw with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// The zoom control moved.
    ScaleChanged(f64),
    /// The explicit "graph" action.
    Graph,
    /// The designated key (Enter).
    Enter,
}

impl Trigger {
    pub fn from_key_code(code: u32) -> Option<Self> {
        (code == ENTER_KEY_CODE).then_some(Self::Enter)
    }
}

/// Owns the canvas and the form state; each trigger runs one full pass.
///
/// Passes cannot overlap: `handle` takes `&mut self` and runs to completion.
/// A slot that fails validation is logged and drawn as inactive.
pub struct GraphSession<C: Canvas2D> {
    engine: GraphEngine,
    canvas: C,
    scale: f64,
    slots: Vec<SlotInput>,
    last: Option<RenderSummary>,
}

impl<C: Canvas2D> GraphSession<C> {
    pub fn new(engine: GraphEngine, canvas: C) -> Self {
        Self {
            engine,
            canvas,
            scale: DEFAULT_SCALE,
            slots: vec![SlotInput::default(); SLOT_COUNT],
            last: None,
        }
    }

    pub fn engine(&self) -> &GraphEngine { &self.engine }
    pub fn canvas(&self) -> &C { &self.canvas }
    pub fn canvas_mut(&mut self) -> &mut C { &mut self.canvas }
    pub fn scale(&self) -> f64 { self.scale }
    pub fn slots(&self) -> &[SlotInput] { &self.slots }
    pub fn last_summary(&self) -> Option<&RenderSummary> { self.last.as_ref() }

    /// Replace slot `index`. Out-of-range indices are ignored with a warning.
    pub fn set_slot(&mut self, index: usize, slot: SlotInput) {
        match self.slots.get_mut(index) {
            Some(dst) => *dst = slot,
            None => warn!(index, slots = self.slots.len(), "slot index out of range"),
        }
    }

    /// Text shown next to the scale control.
    pub fn scale_label(&self) -> String {
        format!("{}", self.scale)
    }

    /// Scroll offset that centers a container on the origin of the current canvas.
    pub fn centered_scroll(&self, container_w: u32, container_h: u32) -> Option<(u32, u32)> {
        self.last.as_ref().map(|s| s.viewport.centered_scroll(container_w, container_h))
    }

    /// Resolved specs for every slot; invalid slots become inactive.
    pub fn specs(&self) -> Vec<FunctionSpec> {
        let theme = self.engine.theme();
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| match slot.resolve(i, theme) {
                Ok(spec) => spec,
                Err(err) => {
                    warn!(slot = i, error = %err, "slot disabled");
                    FunctionSpec::none()
                }
            })
            .collect()
    }

    /// A rejected scale leaves the previous scale and image in place.
    pub fn handle(&mut self, trigger: Trigger) -> Result<&RenderSummary> {
        let scale = match trigger {
            Trigger::ScaleChanged(scale) => scale,
            Trigger::Graph | Trigger::Enter => self.scale,
        };
        let specs = self.specs();
        // committed only once the canvas accepted the pass
        let summary = self.engine.render(&mut self.canvas, scale, &specs)?;
        self.scale = scale;
        info!(?trigger, scale, curves = summary.curves.len(), "graph rendered");
        Ok(self.last.insert(summary))
    }

    /// Viewport of the most recent pass.
    pub fn viewport(&self) -> Option<Viewport> {
        self.last.as_ref().map(|s| s.viewport)
    }
}
