//! View Camera Module
//!
//! A look-at camera with either a perspective or an orthographic lens.
//! Projection is done analytically from the camera basis so that
//! `screen_to_world(world_to_screen(p))` returns `p` up to rounding.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::raycast::Ray;
use super::surface::{CameraSurface, Viewport};

/// Depth values closer to zero than this are nudged away to avoid
/// dividing by zero for points on the camera plane.
const DEPTH_EPSILON: f32 = 1e-6;

/// Lens of the camera. The numeric field is the zoom parameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Projection {
    /// Vertical field of view in degrees
    Perspective { fov_degrees: f32 },
    /// Half of the visible height in world units
    Orthographic { half_height: f32 },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective { fov_degrees: 40.0 }
    }
}

/// Which zoom parameter a projection exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectionKind {
    Perspective,
    Orthographic,
}

impl Projection {
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Projection::Perspective { .. } => ProjectionKind::Perspective,
            Projection::Orthographic { .. } => ProjectionKind::Orthographic,
        }
    }

    /// Field of view for perspective, half-height for orthographic.
    pub fn zoom_parameter(&self) -> f32 {
        match *self {
            Projection::Perspective { fov_degrees } => fov_degrees,
            Projection::Orthographic { half_height } => half_height,
        }
    }

    pub fn set_zoom_parameter(&mut self, value: f32) {
        match self {
            Projection::Perspective { fov_degrees } => *fov_degrees = value,
            Projection::Orthographic { half_height } => *half_height = value,
        }
    }
}

/// Orthonormal camera frame.
#[derive(Clone, Copy, Debug)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// Look-at camera state.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Point the camera is looking at
    pub target: Vec3,
    /// Preferred up direction
    pub up: Vec3,
    pub projection: Projection,
    /// Near clip distance; camera rays start on this plane
    pub near: f32,
    pub far: f32,
    pub viewport: Viewport,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 0.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection: Projection::default(),
            near: 0.3,
            far: 1000.0,
            viewport: Viewport::default(),
        }
    }
}

impl ViewCamera {
    /// Camera at `position` looking at `target`.
    pub fn looking_at(position: Vec3, target: Vec3, projection: Projection, viewport: Viewport) -> Self {
        Self {
            position,
            target,
            projection,
            viewport,
            ..Default::default()
        }
    }

    /// Forward/right/up frame.
    ///
    /// When looking (almost) along the up vector, world X is used as the
    /// right axis so top-down cameras still get a stable frame.
    pub fn basis(&self) -> CameraBasis {
        let forward = (self.target - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z);
        let up_world = self.up.try_normalize().unwrap_or(Vec3::Y);

        let (right, up) = if forward.dot(up_world).abs() > 0.99 {
            let right = Vec3::X;
            let up = right.cross(forward).normalize();
            (right, up)
        } else {
            let right = forward.cross(up_world).normalize();
            let up = right.cross(forward);
            (right, up)
        };

        CameraBasis { forward, right, up }
    }

    fn screen_to_ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x / self.viewport.width * 2.0 - 1.0,
            screen.y / self.viewport.height * 2.0 - 1.0,
        )
    }

    fn ndc_to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.width,
            (ndc.y + 1.0) * 0.5 * self.viewport.height,
        )
    }
}

impl CameraSurface for ViewCamera {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn screen_point_to_ray(&self, screen: Vec2) -> Ray {
        let CameraBasis { forward, right, up } = self.basis();
        let ndc = self.screen_to_ndc(screen);
        let aspect = self.viewport.aspect_ratio();

        match self.projection {
            Projection::Perspective { fov_degrees } => {
                let half_fov = (fov_degrees.to_radians() * 0.5).tan();
                let direction =
                    (forward + right * ndc.x * aspect * half_fov + up * ndc.y * half_fov).normalize();
                // Start on the near plane
                let origin = self.position + direction * (self.near / direction.dot(forward));
                Ray { origin, direction }
            }
            Projection::Orthographic { half_height } => {
                let origin = self.position
                    + right * ndc.x * half_height * aspect
                    + up * ndc.y * half_height
                    + forward * self.near;
                Ray {
                    origin,
                    direction: forward,
                }
            }
        }
    }

    fn world_to_screen(&self, world: Vec3) -> Vec3 {
        let CameraBasis { forward, right, up } = self.basis();
        let aspect = self.viewport.aspect_ratio();
        let offset = world - self.position;
        let depth = offset.dot(forward);

        let ndc = match self.projection {
            Projection::Perspective { fov_degrees } => {
                let half_fov = (fov_degrees.to_radians() * 0.5).tan();
                let d = if depth.abs() < DEPTH_EPSILON {
                    DEPTH_EPSILON.copysign(depth)
                } else {
                    depth
                };
                Vec2::new(
                    offset.dot(right) / (d * half_fov * aspect),
                    offset.dot(up) / (d * half_fov),
                )
            }
            Projection::Orthographic { half_height } => Vec2::new(
                offset.dot(right) / (half_height * aspect),
                offset.dot(up) / half_height,
            ),
        };

        self.ndc_to_screen(ndc).extend(depth)
    }

    fn screen_to_world(&self, screen: Vec3) -> Vec3 {
        let forward = self.basis().forward;
        let ray = self.screen_point_to_ray(screen.truncate());
        let origin_depth = (ray.origin - self.position).dot(forward);
        let along = ray.direction.dot(forward);
        ray.point_at((screen.z - origin_depth) / along)
    }
}
