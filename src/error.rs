//! Error types for the canvas engine.
//!
//! The interaction engine itself never fails: invalid pointer sequences and
//! out-of-range zoom input are tolerated silently. Only the boundaries around
//! it (configuration parsing and toolbar validation) can reject input.

use thiserror::Error;

/// Errors surfaced at the configuration and toolbar boundaries.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Configuration JSON could not be parsed
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scale bounds are unusable (non-positive, non-finite or inverted)
    #[error("invalid scale bounds: min {min}, max {max}")]
    InvalidScaleBounds { min: f32, max: f32 },

    /// Wheel zoom factor must be finite and positive
    #[error("invalid wheel zoom factor: {0}")]
    InvalidWheelFactor(f32),

    /// A viewport dimension or margin is negative or non-finite
    #[error("invalid {field}: {value}")]
    InvalidDimension { field: &'static str, value: f32 },

    /// A requested port count lies outside the accepted range
    #[error("{kind} count {count} out of range (0..={max})")]
    PortCountOutOfRange {
        kind: &'static str,
        count: i64,
        max: u32,
    },
}

/// Result type alias for canvas boundary operations
pub type CanvasResult<T> = Result<T, CanvasError>;
