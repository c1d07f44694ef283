//! Tunable canvas parameters.
//!
//! Every field has a default matching the stock canvas behavior, so an empty
//! JSON object (or [`CanvasConfig::default`]) yields a working setup.

use crate::error::{CanvasError, CanvasResult};
use serde::{Deserialize, Serialize};

/// Smallest zoom scale
pub const DEFAULT_MIN_SCALE: f32 = 1.0;

/// Largest zoom scale
pub const DEFAULT_MAX_SCALE: f32 = 2.0;

/// Scale change per unit of wheel delta
pub const DEFAULT_WHEEL_ZOOM_FACTOR: f32 = 0.005;

/// Centering margin, in percent of the viewport, per unit of scale above 1.0
pub const DEFAULT_CENTERING_MARGIN_PERCENT: f32 = 50.0;

/// Highest port count the toolbar accepts on either side of a node
pub const DEFAULT_MAX_PORT_COUNT: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    pub wheel_zoom_factor: f32,
    pub centering_margin_percent: f32,
    /// Viewport width in pixels; new nodes are placed within it
    pub viewport_width: f32,
    /// Viewport height in pixels; new nodes are placed within it
    pub viewport_height: f32,
    pub max_port_count: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            wheel_zoom_factor: DEFAULT_WHEEL_ZOOM_FACTOR,
            centering_margin_percent: DEFAULT_CENTERING_MARGIN_PERCENT,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            max_port_count: DEFAULT_MAX_PORT_COUNT,
        }
    }
}

impl CanvasConfig {
    /// Parse a config from JSON, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> CanvasResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the viewport relies on.
    ///
    /// The scale clamp must keep the scale strictly positive, since every
    /// screen→workspace conversion divides by it.
    pub fn validate(&self) -> CanvasResult<()> {
        let (min, max) = (self.min_scale, self.max_scale);
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(CanvasError::InvalidScaleBounds { min, max });
        }
        if !self.wheel_zoom_factor.is_finite() || self.wheel_zoom_factor <= 0.0 {
            return Err(CanvasError::InvalidWheelFactor(self.wheel_zoom_factor));
        }
        check_dimension("viewport_width", self.viewport_width)?;
        check_dimension("viewport_height", self.viewport_height)?;
        check_dimension("centering_margin_percent", self.centering_margin_percent)?;
        Ok(())
    }
}

fn check_dimension(field: &'static str, value: f32) -> CanvasResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CanvasError::InvalidDimension { field, value })
    }
}
