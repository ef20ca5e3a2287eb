//! Raycast Module
//!
//! Rays and the ground plane they are cast against. Every screen-to-world
//! pick in the rig ends up here.

use glam::Vec3;

/// Directions closer to the plane than this are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A half-line in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Start of the ray (on the camera near plane for camera rays)
    pub origin: Vec3,
    /// Normalized direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point `distance` units along the ray.
    #[inline]
    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// An infinite plane described by a unit normal and its signed distance
/// from the origin (`normal · p + distance = 0` for points on the plane).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPlane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Default for GroundPlane {
    /// The board: Y-up plane through the world origin.
    fn default() -> Self {
        Self::horizontal(0.0)
    }
}

impl GroundPlane {
    /// Plane with the given normal passing through `point`.
    ///
    /// Returns `None` when the normal has no usable length.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self {
            normal,
            distance: -normal.dot(point),
        })
    }

    /// Horizontal Y-up plane at the given height.
    pub fn horizontal(height: f32) -> Self {
        Self {
            normal: Vec3::Y,
            distance: -height,
        }
    }

    /// Signed distance from `point` to the plane (positive on the normal side).
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Closest point on the plane to `point`.
    #[inline]
    pub fn project_point(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Distance along `ray` to the plane.
    ///
    /// `None` if the ray runs parallel to the plane or the hit lies behind
    /// the ray origin.
    pub fn raycast(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let enter = -self.signed_distance(ray.origin) / denom;
        if enter > 0.0 { Some(enter) } else { None }
    }

    /// Intersection point of `ray` with the plane, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        self.raycast(ray).map(|enter| ray.point_at(enter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_direction_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert!((ray.point_at(5.0) - Vec3::new(3.0, 0.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn test_straight_down_hits_origin() {
        let plane = GroundPlane::default();
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);

        let hit = plane.intersect(&ray).unwrap();
        assert!(hit.length() < 1e-6);
        assert!((plane.raycast(&ray).unwrap() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let plane = GroundPlane::default();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(plane.raycast(&ray).is_none());
    }

    #[test]
    fn test_hit_behind_origin_misses() {
        let plane = GroundPlane::default();
        // Above the board, looking up
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(plane.raycast(&ray).is_none());
    }

    #[test]
    fn test_plane_from_point_at_height() {
        let plane = GroundPlane::from_normal_and_point(Vec3::Y * 2.0, Vec3::new(4.0, 3.0, -1.0))
            .unwrap();
        assert_eq!(plane, GroundPlane::horizontal(3.0));

        let ray = Ray::new(Vec3::new(1.0, 8.0, 1.0), Vec3::NEG_Y);
        let hit = plane.intersect(&ray).unwrap();
        assert!((hit - Vec3::new(1.0, 3.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_project_point_lands_on_plane() {
        let plane = GroundPlane::horizontal(3.0);
        assert_eq!(plane.project_point(Vec3::new(1.0, -2.0, 4.0)), Vec3::new(1.0, 3.0, 4.0));

        let tilted = GroundPlane::from_normal_and_point(Vec3::new(1.0, 1.0, 0.0), Vec3::ZERO)
            .unwrap();
        let projected = tilted.project_point(Vec3::new(2.0, 5.0, -1.0));
        assert!(tilted.signed_distance(projected).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_normal_rejected() {
        assert!(GroundPlane::from_normal_and_point(Vec3::ZERO, Vec3::ZERO).is_none());
    }

    #[test]
    fn test_tilted_plane() {
        let plane = GroundPlane::from_normal_and_point(Vec3::new(0.0, 1.0, 1.0), Vec3::ZERO)
            .unwrap();
        let ray = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::NEG_Y);
        let hit = plane.intersect(&ray).unwrap();
        assert!(plane.signed_distance(hit).abs() < 1e-5);
    }
}
