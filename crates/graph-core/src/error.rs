// File: crates/graph-core/src/error.rs
// Summary: Error type shared by the engine, the raster backend and the host adapter.

use thiserror::Error;

/// Result type alias for graph-core operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised before or around a render pass.
///
/// Nothing in here is raised from inside the sampling/plotting loop: bad numbers
/// that reach the sampler degrade into gaps in the drawn curve instead.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Scale or surface size outside what a render pass accepts.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A coefficient field that is neither empty nor a number.
    #[error("invalid coefficient {value:?}")]
    InvalidCoefficient { value: String },

    #[error("invalid color {value:?} (expected #rgb or #rrggbb)")]
    InvalidColor { value: String },

    #[error("invalid stroke weight {value:?}")]
    InvalidWeight { value: String },

    #[error("unknown function kind {name:?} (expected none, linear or quadratic)")]
    UnknownFunction { name: String },

    /// The raster backend could not allocate a surface of the requested size.
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },

    #[error("failed to encode surface: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    pub fn invalid_coefficient(value: impl Into<String>) -> Self {
        Self::InvalidCoefficient { value: value.into() }
    }

    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor { value: value.into() }
    }

    pub fn invalid_weight(value: impl Into<String>) -> Self {
        Self::InvalidWeight { value: value.into() }
    }

    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }
}
