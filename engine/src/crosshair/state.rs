//! Crosshair and target state owned by the controller.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// How pointer input moves the crosshair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Crosshair sits under the absolute pointer position
    Absolute,
    /// Crosshair is pushed around by pointer deltas, pointer stays locked
    #[default]
    Delta,
}

/// Where the crosshair is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrosshairState {
    /// World position, on the ground plane and inside the viewport
    pub position: Vec3,
    /// The latest tick produced a ray hit (false while frozen)
    pub active: bool,
    /// Screen projection of `position` after clamping
    pub last_screen_position: Vec2,
}

impl CrosshairState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            active: false,
            last_screen_position: Vec2::ZERO,
        }
    }
}

/// The committed target marker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TargetState {
    pub position: Vec3,
    pub visible: bool,
}

/// Selection lifecycle. There is no way back to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetPhase {
    /// No target has been selected yet
    Idle,
    /// A target is placed; further selections move it
    Targeted,
}

impl TargetState {
    pub fn phase(&self) -> TargetPhase {
        if self.visible {
            TargetPhase::Targeted
        } else {
            TargetPhase::Idle
        }
    }
}
