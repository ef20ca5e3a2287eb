//! Crosshair Controller
//!
//! Turns per-tick pointer input into a crosshair position on the ground
//! plane and commits targets when the select control fires.
//!
//! Two input strategies are supported:
//!
//! - **Absolute**: cast a ray through the pointer position and put the
//!   crosshair on the hit point, lifted by `height_bias` along the plane
//!   normal so it does not z-fight with the board.
//! - **Delta**: project the current crosshair to the screen, push it by the
//!   scaled pointer delta and cast through the new screen point. Each
//!   successful move locks the pointer to the viewport centre so later
//!   deltas keep composing.
//!
//! A ray that misses the plane leaves the crosshair where it was. After
//! every tick the crosshair is clamped so that its projection stays inside
//! the viewport.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::events::{SelectionBroadcaster, SelectionEvent, SubscriptionId};
use super::registry::{InstanceClaim, InstanceRegistry};
use super::state::{CrosshairState, InputMode, TargetPhase, TargetState};
use crate::camera::{CameraSurface, GroundPlane};
use crate::error::{ConfigError, Result};
use crate::input::{CursorManager, PointerSample, PointerSampler};

/// Crosshair tuning, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairConfig {
    pub input_mode: InputMode,
    /// Screen pixels of crosshair travel per pixel of pointer delta
    pub movement_scale: f32,
    pub plane_normal: Vec3,
    /// Any point on the ground plane
    pub plane_point: Vec3,
    /// Lift applied to absolute-mode hits, along the plane normal
    pub height_bias: f32,
    pub initial_position: Vec3,
}

impl Default for CrosshairConfig {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Delta,
            movement_scale: 0.5,
            plane_normal: Vec3::Y,
            plane_point: Vec3::ZERO,
            height_bias: 0.1,
            initial_position: Vec3::ZERO,
        }
    }
}

impl CrosshairConfig {
    /// The configured ground plane.
    pub fn plane(&self) -> Result<GroundPlane> {
        GroundPlane::from_normal_and_point(self.plane_normal, self.plane_point)
            .ok_or(ConfigError::DegeneratePlaneNormal)
    }
}

/// What one tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CrosshairTick {
    /// The ray hit the plane and the crosshair moved to the hit
    pub moved: bool,
    /// Event raised this tick, if a target was committed
    pub selection: Option<SelectionEvent>,
}

/// Clamp `position` so its screen projection lies inside the viewport.
///
/// Positions that already project inside are returned untouched.
pub fn clamp_to_viewport<C: CameraSurface + ?Sized>(camera: &C, position: Vec3) -> Vec3 {
    let screen = camera.world_to_screen(position);
    let viewport = camera.viewport();
    if viewport.contains(screen.truncate()) {
        return position;
    }

    let clamped = viewport.clamp(screen.truncate());
    camera.screen_to_world(clamped.extend(screen.z))
}

/// Owns the crosshair and target and broadcasts selections.
#[derive(Debug)]
pub struct CrosshairController {
    config: CrosshairConfig,
    plane: GroundPlane,
    crosshair: CrosshairState,
    target: TargetState,
    listeners: SelectionBroadcaster,
    _claim: InstanceClaim,
}

impl CrosshairController {
    /// Create the controller, claiming the scene's single controller slot
    /// and hiding the OS cursor. The initial position is snapped onto the
    /// ground plane.
    pub fn new(
        config: CrosshairConfig,
        registry: &InstanceRegistry,
        cursor: &mut CursorManager,
    ) -> Result<Self> {
        let plane = config.plane()?;
        let claim = registry.claim()?;

        cursor.hide();

        Ok(Self {
            config,
            plane,
            crosshair: CrosshairState::new(plane.project_point(config.initial_position)),
            target: TargetState::default(),
            listeners: SelectionBroadcaster::new(),
            _claim: claim,
        })
    }

    pub fn config(&self) -> &CrosshairConfig {
        &self.config
    }

    pub fn plane(&self) -> &GroundPlane {
        &self.plane
    }

    pub fn crosshair(&self) -> &CrosshairState {
        &self.crosshair
    }

    pub fn target(&self) -> &TargetState {
        &self.target
    }

    pub fn phase(&self) -> TargetPhase {
        self.target.phase()
    }

    /// Register a selection listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&SelectionEvent) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Sample `sampler` once and update with the configured input mode.
    pub fn tick<C, S>(&mut self, camera: &C, cursor: &mut CursorManager, sampler: &mut S) -> CrosshairTick
    where
        C: CameraSurface + ?Sized,
        S: PointerSampler + ?Sized,
    {
        let sample = sampler.sample();
        self.update(camera, cursor, &sample, self.config.input_mode)
    }

    /// Run one tick of crosshair movement and target selection.
    pub fn update<C: CameraSurface + ?Sized>(
        &mut self,
        camera: &C,
        cursor: &mut CursorManager,
        sample: &PointerSample,
        mode: InputMode,
    ) -> CrosshairTick {
        tracing::debug!(delta = ?sample.delta, "pointer delta");

        let hit = match mode {
            InputMode::Absolute => self.pick_absolute(camera, sample.absolute),
            InputMode::Delta => self.pick_delta(camera, sample.delta),
        };

        let moved = hit.is_some();
        if let Some(position) = hit {
            self.crosshair.position = position;
            if mode == InputMode::Delta {
                cursor.lock_to_center();
            }
        }
        self.crosshair.active = moved;

        self.crosshair.position = clamp_to_viewport(camera, self.crosshair.position);
        self.crosshair.last_screen_position = camera.world_to_screen(self.crosshair.position).truncate();

        let selection = self.select_target(sample.select_edge);
        CrosshairTick { moved, selection }
    }

    fn pick_absolute<C: CameraSurface + ?Sized>(&self, camera: &C, pointer: Vec2) -> Option<Vec3> {
        let ray = camera.screen_point_to_ray(pointer);
        let hit = self.plane.intersect(&ray)?;
        Some(hit + self.plane.normal * self.config.height_bias)
    }

    fn pick_delta<C: CameraSurface + ?Sized>(&self, camera: &C, delta: Vec2) -> Option<Vec3> {
        let current = camera.world_to_screen(self.crosshair.position);
        let moved = current.truncate() + delta * self.config.movement_scale;
        let ray = camera.screen_point_to_ray(moved);
        self.plane.intersect(&ray)
    }

    /// Commit the crosshair as the target. `pressed` is already an edge:
    /// every press the sampler reports produces one event.
    fn select_target(&mut self, pressed: bool) -> Option<SelectionEvent> {
        if !pressed {
            return None;
        }

        self.target.visible = true;
        self.target.position = self.crosshair.position;

        let event = SelectionEvent {
            position: self.target.position,
        };
        tracing::info!(position = ?event.position, "target selected");
        self.listeners.emit(&event);
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Projection, ViewCamera, Viewport};

    fn top_down_camera() -> ViewCamera {
        ViewCamera::looking_at(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::ZERO,
            Projection::Perspective { fov_degrees: 60.0 },
            Viewport::new(800.0, 600.0),
        )
    }

    fn setup(config: CrosshairConfig) -> (CrosshairController, CursorManager, InstanceRegistry) {
        let registry = InstanceRegistry::new();
        let mut cursor = CursorManager::new();
        let controller = CrosshairController::new(config, &registry, &mut cursor).unwrap();
        (controller, cursor, registry)
    }

    #[test]
    fn test_new_hides_cursor_and_starts_idle() {
        let (controller, cursor, registry) = setup(CrosshairConfig::default());
        assert!(!cursor.is_visible());
        assert!(registry.is_claimed());
        assert_eq!(controller.phase(), TargetPhase::Idle);
        assert!(!controller.target().visible);
    }

    #[test]
    fn test_degenerate_plane_rejected_before_claim() {
        let registry = InstanceRegistry::new();
        let mut cursor = CursorManager::new();
        let config = CrosshairConfig {
            plane_normal: Vec3::ZERO,
            ..Default::default()
        };
        let result = CrosshairController::new(config, &registry, &mut cursor);
        assert!(matches!(result, Err(ConfigError::DegeneratePlaneNormal)));
        assert!(!registry.is_claimed());
    }

    #[test]
    fn test_absolute_hit_applies_bias() {
        let camera = top_down_camera();
        let (mut controller, mut cursor, _registry) = setup(CrosshairConfig::default());

        let tick = controller.update(
            &camera,
            &mut cursor,
            &PointerSample::at(Vec2::new(400.0, 300.0)),
            InputMode::Absolute,
        );
        assert!(tick.moved);
        assert!(controller.crosshair().active);
        assert!((controller.crosshair().position - Vec3::new(0.0, 0.1, 0.0)).length() < 1e-4);
        // Absolute mode never touches the pointer lock
        assert!(!cursor.is_locked());
    }

    #[test]
    fn test_delta_move_locks_pointer() {
        let camera = top_down_camera();
        let (mut controller, mut cursor, _registry) = setup(CrosshairConfig::default());

        let tick = controller.update(
            &camera,
            &mut cursor,
            &PointerSample::moved_by(Vec2::new(40.0, 0.0)),
            InputMode::Delta,
        );
        assert!(tick.moved);
        assert!(cursor.is_locked());
        // 20 screen pixels to the right moves along +X
        assert!(controller.crosshair().position.x > 0.0);
        assert!(controller.crosshair().position.y.abs() < 1e-4);
        assert!((controller.crosshair().last_screen_position.x - 420.0).abs() < 1e-2);
    }

    #[test]
    fn test_every_press_edge_commits() {
        let camera = top_down_camera();
        let (mut controller, mut cursor, _registry) = setup(CrosshairConfig::default());
        let press = PointerSample::default().with_select(true);

        // Presses on back-to-back ticks are separate clicks
        let first = controller.update(&camera, &mut cursor, &press, InputMode::Delta);
        let second = controller.update(&camera, &mut cursor, &press, InputMode::Delta);
        assert!(first.selection.is_some());
        assert!(second.selection.is_some());
        assert_eq!(controller.phase(), TargetPhase::Targeted);

        let quiet = controller.update(&camera, &mut cursor, &PointerSample::default(), InputMode::Delta);
        assert!(quiet.selection.is_none());
    }

    #[test]
    fn test_initial_position_projected_onto_plane() {
        let (controller, _cursor, _registry) = setup(CrosshairConfig {
            plane_point: Vec3::new(0.0, 3.0, 0.0),
            initial_position: Vec3::new(2.0, 0.0, -1.0),
            ..Default::default()
        });
        let position = controller.crosshair().position;
        assert!((position - Vec3::new(2.0, 3.0, -1.0)).length() < 1e-5);
        assert!(controller.plane().signed_distance(position).abs() < 1e-5);
    }

    #[test]
    fn test_clamp_pulls_point_back_into_view() {
        let camera = top_down_camera();
        let outside = Vec3::new(100.0, 0.0, 0.0);
        let clamped = clamp_to_viewport(&camera, outside);
        let screen = camera.world_to_screen(clamped);
        assert!((screen.x - 800.0).abs() < 1e-2);
        assert!((screen.y - 300.0).abs() < 1e-2);
    }
}
