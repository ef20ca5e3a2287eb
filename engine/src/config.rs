//! Rig Configuration
//!
//! Everything the rig needs at start-up, loaded from JSON. Every section
//! and field has a default, so `{}` is a valid config.
//!
//! ```json
//! {
//!   "camera": { "position": [0, 10, -6], "projection": { "kind": "orthographic", "half_height": 8 } },
//!   "crosshair": { "input_mode": "absolute", "height_bias": 0.05 },
//!   "zoom": { "speed": 0.05, "min": 3, "max": 20 }
//! }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Projection, ViewCamera, Viewport, ZoomConfig};
use crate::crosshair::CrosshairConfig;
use crate::error::{ConfigError, Result};

/// Initial camera placement and lens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
    pub near: f32,
    pub far: f32,
    pub viewport: Viewport,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = ViewCamera::default();
        Self {
            position: camera.position,
            target: camera.target,
            up: camera.up,
            projection: camera.projection,
            near: camera.near,
            far: camera.far,
            viewport: camera.viewport,
        }
    }
}

impl From<&CameraConfig> for ViewCamera {
    fn from(config: &CameraConfig) -> Self {
        ViewCamera {
            position: config.position,
            target: config.target,
            up: config.up,
            projection: config.projection,
            near: config.near,
            far: config.far,
            viewport: config.viewport,
        }
    }
}

/// Top-level config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub camera: CameraConfig,
    pub crosshair: CrosshairConfig,
    pub zoom: ZoomConfig,
}

fn check_scalar(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScalar { field, value })
    }
}

impl RigConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RigConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "loaded rig config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let zoom = &self.zoom;
        check_scalar("zoom.speed", zoom.speed)?;
        check_scalar("zoom.min", zoom.min)?;
        check_scalar("zoom.max", zoom.max)?;
        if zoom.min > zoom.max {
            return Err(ConfigError::EmptyZoomRange {
                min: zoom.min,
                max: zoom.max,
            });
        }

        let crosshair = &self.crosshair;
        check_scalar("crosshair.movement_scale", crosshair.movement_scale)?;
        if !crosshair.height_bias.is_finite() {
            return Err(ConfigError::InvalidScalar {
                field: "crosshair.height_bias",
                value: crosshair.height_bias,
            });
        }
        crosshair.plane()?;

        let camera = &self.camera;
        let Viewport { width, height } = camera.viewport;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::EmptyViewport { width, height });
        }
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(ConfigError::InvalidClipRange {
                near: camera.near,
                far: camera.far,
            });
        }
        check_scalar("camera.projection", camera.projection.zoom_parameter())?;

        let start = camera.projection.zoom_parameter();
        if !(zoom.min..=zoom.max).contains(&start) {
            tracing::warn!(
                start,
                min = zoom.min,
                max = zoom.max,
                "initial zoom is outside the zoom range; first zoom tick will clamp it"
            );
        }
        Ok(())
    }
}
