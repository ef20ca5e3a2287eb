//! The slice of a camera the rig consumes: picking rays, projection both
//! ways and the viewport size.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::raycast::Ray;

/// Visible rendering area in pixels. Screen coordinates have their origin
/// at the bottom-left corner with Y increasing upward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width / height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether `screen` lies inside `[0, width] x [0, height]` (edges included).
    pub fn contains(&self, screen: Vec2) -> bool {
        (0.0..=self.width).contains(&screen.x) && (0.0..=self.height).contains(&screen.y)
    }

    /// Clamp X and Y to the viewport rectangle.
    pub fn clamp(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x.clamp(0.0, self.width),
            screen.y.clamp(0.0, self.height),
        )
    }
}

/// Camera capabilities used by the crosshair.
pub trait CameraSurface {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Ray from the camera through a screen point (pixels).
    fn screen_point_to_ray(&self, screen: Vec2) -> Ray;

    /// Project a world point. X/Y are pixels, Z is the depth in world units
    /// along the view direction.
    fn world_to_screen(&self, world: Vec3) -> Vec3;

    /// Inverse of [`CameraSurface::world_to_screen`]: the world point under
    /// pixel (x, y) at depth z.
    fn screen_to_world(&self, screen: Vec3) -> Vec3;
}
