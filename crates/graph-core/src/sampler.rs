// File: crates/graph-core/src/sampler.rs
// Summary: Per-column evaluation of a function family into values ready for `CoordinateSpace::to_pixel_y`.

use crate::function::{FunctionKind, Linear, Quadratic};
use crate::scale::CoordinateSpace;

/// A function family that can be sampled at pixel offsets from the origin column.
///
/// `dx` is measured in pixels and the result must carry a factor of `scale²`
/// relative to the mathematical y, so that the single division in
/// [`CoordinateSpace::to_pixel_y`] lands on `center_y - y * scale`.
pub trait Curve {
    fn value_at(&self, dx: f64, scale: f64) -> f64;
}

impl Curve for Linear {
    #[inline]
    fn value_at(&self, dx: f64, scale: f64) -> f64 {
        self.m * scale * dx + self.b * scale * scale
    }
}

impl Curve for Quadratic {
    /// `a` multiplies the squared pixel offset directly: `dx² = x² · scale²`
    /// already carries the factor the other terms get from `scale`.
    #[inline]
    fn value_at(&self, dx: f64, scale: f64) -> f64 {
        self.a * dx * dx + self.b * scale * dx + self.c * scale * scale
    }
}

impl FunctionKind {
    /// The curve to sample, or `None` for an inactive slot.
    pub fn curve(&self) -> Option<&dyn Curve> {
        match self {
            FunctionKind::None => None,
            FunctionKind::Linear(l) => Some(l as &dyn Curve),
            FunctionKind::Quadratic(q) => Some(q as &dyn Curve),
        }
    }
}

/// One sampled column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub column: u32,
    pub value: f64,
}

/// Samples a curve at every integer column in `[0, width)`.
///
/// Cheap to hold; [`samples`](Self::samples) can be called any number of times and
/// always yields the same `width` values in increasing column order.
#[derive(Clone, Copy)]
pub struct FunctionSampler<'a> {
    curve: &'a dyn Curve,
    space: CoordinateSpace,
    width: u32,
}

impl<'a> FunctionSampler<'a> {
    pub fn new(curve: &'a dyn Curve, space: CoordinateSpace, width: u32) -> Self {
        Self { curve, space, width }
    }

    /// Sampler for `kind`, or `None` when the slot is inactive.
    pub fn for_kind(kind: &'a FunctionKind, space: CoordinateSpace, width: u32) -> Option<Self> {
        kind.curve().map(|curve| Self::new(curve, space, width))
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn samples(&self) -> Samples<'a> {
        Samples { curve: self.curve, space: self.space, next: 0, width: self.width }
    }
}

pub struct Samples<'a> {
    curve: &'a dyn Curve,
    space: CoordinateSpace,
    next: u32,
    width: u32,
}

impl Iterator for Samples<'_> {
    type Item = SamplePoint;

    fn next(&mut self) -> Option<SamplePoint> {
        if self.next >= self.width {
            return None;
        }
        let column = self.next;
        self.next += 1;
        let value = self.curve.value_at(self.space.offset_x(column), self.space.scale);
        Some(SamplePoint { column, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.width - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Samples<'_> {}
