//! Scroll-driven camera zoom.
//!
//! Works on the field of view of a perspective camera or the half-height of
//! an orthographic one. The channel is chosen once from the camera handed to
//! [`ZoomController::new`].

use serde::{Deserialize, Serialize};

use super::view::{ProjectionKind, ViewCamera};

/// Zoom tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Zoom change per unit of axis input
    pub speed: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            speed: 0.1,
            min: 5.0,
            max: 50.0,
        }
    }
}

/// Applies `-axis * speed` to the camera's zoom parameter every tick.
#[derive(Clone, Debug)]
pub struct ZoomController {
    config: ZoomConfig,
    channel: ProjectionKind,
}

impl ZoomController {
    /// Bind to the projection kind `camera` has right now.
    pub fn new(config: ZoomConfig, camera: &ViewCamera) -> Self {
        let channel = camera.projection.kind();
        tracing::debug!(?channel, ?config, "zoom controller bound");
        Self { config, channel }
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn channel(&self) -> ProjectionKind {
        self.channel
    }

    /// Next zoom value for `current` and one tick of `axis` input.
    #[inline]
    pub fn step(&self, current: f32, axis: f32) -> f32 {
        (current - axis * self.config.speed).clamp(self.config.min, self.config.max)
    }

    /// Apply one tick of axis input.
    ///
    /// Returns the new zoom value, or `None` when the update was skipped
    /// (non-finite input, or the camera switched projection since binding).
    pub fn update(&self, axis: f32, camera: &mut ViewCamera) -> Option<f32> {
        if !axis.is_finite() {
            return None;
        }
        if camera.projection.kind() != self.channel {
            tracing::warn!(
                bound = ?self.channel,
                current = ?camera.projection.kind(),
                "camera projection changed after zoom setup; skipping zoom"
            );
            return None;
        }

        let zoom = self.step(camera.projection.zoom_parameter(), axis);
        camera.projection.set_zoom_parameter(zoom);
        Some(zoom)
    }
}
