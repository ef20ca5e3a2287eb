//! Scene Tests - Start-up Phases and the Tick Driver
//!
//! Exercises the assembled rig: selection listeners wired before start,
//! followers tracking a transform moved by a listener, and scroll zoom.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use marble_board_engine::camera::{Projection, Viewport};
use marble_board_engine::config::{CameraConfig, RigConfig};
use marble_board_engine::crosshair::{CrosshairConfig, InputMode, InstanceRegistry, TargetPhase};
use marble_board_engine::error::ConfigError;
use marble_board_engine::input::{PointerSample, ScriptedSampler, ScriptedTick};
use marble_board_engine::scene::SceneBuilder;

fn board_config(mode: InputMode) -> RigConfig {
    RigConfig {
        camera: CameraConfig {
            position: Vec3::new(0.0, 10.0, 0.0),
            target: Vec3::ZERO,
            projection: Projection::Perspective { fov_degrees: 40.0 },
            viewport: Viewport::new(800.0, 600.0),
            ..Default::default()
        },
        crosshair: CrosshairConfig {
            input_mode: mode,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_listener_moves_marble_and_follower_tracks_it() {
    let registry = InstanceRegistry::new();
    let mut wiring = SceneBuilder::new(board_config(InputMode::Absolute))
        .build(&registry)
        .unwrap();

    let marble = wiring.marble();
    let follower = wiring.add_follower(Some(Rc::clone(&marble)));
    wiring.subscribe(move |event| marble.borrow_mut().position = event.position);

    let mut scene = wiring.start();
    let mut input = ScriptedSampler::from_pointer([
        PointerSample::at(Vec2::new(400.0, 300.0)),
        PointerSample::at(Vec2::new(600.0, 450.0)).with_select(true),
    ]);
    let mut scroll = ScriptedSampler::default();

    scene.tick(&mut input, &mut scroll);
    assert_eq!(scene.crosshair().phase(), TargetPhase::Idle);
    assert_eq!(scene.followers()[follower].position(), Vec3::ZERO);

    let tick = scene.tick(&mut input, &mut scroll);
    let selected = tick.crosshair.selection.unwrap().position;
    assert_eq!(scene.crosshair().phase(), TargetPhase::Targeted);
    assert_eq!(scene.marble().borrow().position, selected);
    assert_eq!(scene.followers()[follower].position(), selected);
    assert_eq!(scene.tick_count(), 2);
}

#[test]
fn test_scroll_zooms_camera_within_range() {
    let registry = InstanceRegistry::new();
    let mut scene = SceneBuilder::new(board_config(InputMode::Delta))
        .build(&registry)
        .unwrap()
        .start();

    let mut input = ScriptedSampler::new([
        ScriptedTick {
            pointer: PointerSample::default(),
            zoom_axis: 120.0,
        },
        ScriptedTick {
            pointer: PointerSample::default(),
            zoom_axis: -1200.0,
        },
    ]);

    // 40 - 120 * 0.1
    let first = scene.tick_input(&mut input).zoom.unwrap();
    assert!((first - 28.0).abs() < 1e-4, "got {first}");

    let second = scene.tick_input(&mut input);
    assert_eq!(second.zoom, Some(50.0));
    assert_eq!(scene.camera().projection.zoom_parameter(), 50.0);

    // Script exhausted: idle ticks leave the zoom alone
    let idle = scene.tick_input(&mut input).zoom.unwrap();
    assert_eq!(idle, 50.0);
}

#[test]
fn test_delta_scene_locks_pointer_and_hides_cursor() {
    let registry = InstanceRegistry::new();
    let mut scene = SceneBuilder::new(board_config(InputMode::Delta))
        .build(&registry)
        .unwrap()
        .start();
    assert!(!scene.cursor().is_visible());
    assert!(!scene.cursor().is_locked());

    let mut input = ScriptedSampler::from_pointer([PointerSample::moved_by(Vec2::new(12.0, 4.0))]);
    let mut scroll = ScriptedSampler::default();
    let tick = scene.tick(&mut input, &mut scroll);

    assert!(tick.crosshair.moved);
    assert!(scene.cursor().is_locked());
}

#[test]
fn test_one_scene_per_registry() {
    let registry = InstanceRegistry::new();
    let first = SceneBuilder::new(RigConfig::default()).build(&registry).unwrap();

    let second = SceneBuilder::new(RigConfig::default()).build(&registry);
    assert!(matches!(second, Err(ConfigError::DuplicateController)));

    drop(first);
    assert!(SceneBuilder::new(RigConfig::default()).build(&registry).is_ok());
}

#[test]
fn test_invalid_config_fails_at_build() {
    let registry = InstanceRegistry::new();
    let mut config = RigConfig::default();
    config.zoom.min = 80.0;

    let result = SceneBuilder::new(config).build(&registry);
    assert!(matches!(result, Err(ConfigError::EmptyZoomRange { .. })));
    assert!(!registry.is_claimed());
}

#[test]
fn test_every_wired_listener_hears_selection() {
    let registry = InstanceRegistry::new();
    let mut wiring = SceneBuilder::new(board_config(InputMode::Delta))
        .build(&registry)
        .unwrap();

    let heard = Rc::new(RefCell::new(Vec::new()));
    for id in 0..3 {
        let heard = Rc::clone(&heard);
        wiring.subscribe(move |_| heard.borrow_mut().push(id));
    }

    let mut scene = wiring.start();
    let mut input = ScriptedSampler::from_pointer([
        PointerSample::default().with_select(true),
        PointerSample::default(),
        PointerSample::default().with_select(true),
    ]);
    let mut scroll = ScriptedSampler::default();
    for _ in 0..3 {
        scene.tick(&mut input, &mut scroll);
    }

    assert_eq!(*heard.borrow(), vec![0, 1, 2, 0, 1, 2]);
}

#[test]
fn test_follower_without_reference_stays_put() {
    let registry = InstanceRegistry::new();
    let mut wiring = SceneBuilder::new(RigConfig::default())
        .with_marble_at(Vec3::new(2.0, 0.0, 2.0))
        .build(&registry)
        .unwrap();
    let idle = wiring.add_follower(None);
    let tracking = wiring.add_follower(Some(wiring.marble()));

    let mut scene = wiring.start();
    let mut input = ScriptedSampler::default();
    let mut scroll = ScriptedSampler::default();
    scene.tick(&mut input, &mut scroll);

    assert_eq!(scene.followers()[idle].position(), Vec3::ZERO);
    assert_eq!(scene.followers()[tracking].position(), Vec3::new(2.0, 0.0, 2.0));
}
