// File: crates/graph-core/src/function.rs
// Summary: Function slot model: a closed set of polynomial families plus stroke attributes.

use std::fmt;
use std::str::FromStr;

use crate::error::GraphError;
use crate::types::DEFAULT_STROKE_WEIGHT;
use crate::Color;

/// `y = m x + b`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Linear {
    pub m: f64,
    pub b: f64,
}

/// `y = a x² + b x + c`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum FunctionKind {
    #[default]
    None,
    Linear(Linear),
    Quadratic(Quadratic),
}

impl FunctionKind {
    pub fn linear(m: f64, b: f64) -> Self {
        Self::Linear(Linear { m, b })
    }

    pub fn quadratic(a: f64, b: f64, c: f64) -> Self {
        Self::Quadratic(Quadratic { a, b, c })
    }

    /// Slot name as shown in the type selector.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Linear(_) => "linear",
            Self::Quadratic(_) => "quadratic",
        }
    }

    /// Number of coefficient fields the family reads.
    pub fn arity(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Linear(_) => 2,
            Self::Quadratic(_) => 3,
        }
    }

    /// Build the family named `name` from positional coefficients; missing ones are 0.
    pub fn from_coefficients(name: &str, coefficients: &[f64]) -> Result<Self, GraphError> {
        let at = |i: usize| coefficients.get(i).copied().unwrap_or(0.0);
        match name.parse::<KindName>()? {
            KindName::None => Ok(Self::None),
            KindName::Linear => Ok(Self::linear(at(0), at(1))),
            KindName::Quadratic => Ok(Self::quadratic(at(0), at(1), at(2))),
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Linear(l) => write!(f, "y = {}x + {}", l.m, l.b),
            Self::Quadratic(q) => write!(f, "y = {}x^2 + {}x + {}", q.a, q.b, q.c),
        }
    }
}

/// Family selector parsed from a slot's type field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KindName {
    None,
    Linear,
    Quadratic,
}

impl FromStr for KindName {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "linear" => Ok(Self::Linear),
            // "cuadratic" is the value older calculator forms submit
            "quadratic" | "cuadratic" => Ok(Self::Quadratic),
            other => Err(GraphError::unknown_function(other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub weight: f32,
}

impl StrokeStyle {
    pub fn new(color: Color, weight: f32) -> Self {
        Self { color, weight }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { color: Color::BLACK, weight: DEFAULT_STROKE_WEIGHT }
    }
}

/// One function slot as the engine sees it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FunctionSpec {
    pub kind: FunctionKind,
    pub stroke: StrokeStyle,
}

impl FunctionSpec {
    pub fn new(kind: FunctionKind, stroke: StrokeStyle) -> Self {
        Self { kind, stroke }
    }

    pub fn none() -> Self { Self::default() }

    pub fn linear(m: f64, b: f64, stroke: StrokeStyle) -> Self {
        Self::new(FunctionKind::linear(m, b), stroke)
    }

    pub fn quadratic(a: f64, b: f64, c: f64, stroke: StrokeStyle) -> Self {
        Self::new(FunctionKind::quadratic(a, b, c), stroke)
    }

    /// Active slots are plotted; `None` slots are skipped.
    pub fn is_active(&self) -> bool {
        !matches!(self.kind, FunctionKind::None)
    }
}
