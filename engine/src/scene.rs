//! Scene Assembly
//!
//! Start-up happens in two explicit phases before the first tick:
//!
//! 1. [`SceneBuilder::build`] constructs every component from the config.
//! 2. [`SceneWiring`] accepts selection subscriptions and followers.
//!
//! [`SceneWiring::start`] then hands back a [`Scene`] that can only tick, so
//! every listener is in place before a selection can fire.
//!
//! ```rust,ignore
//! let registry = InstanceRegistry::new();
//! let mut wiring = SceneBuilder::new(config).build(&registry)?;
//! wiring.subscribe(|event| println!("target at {}", event.position));
//! let mut scene = wiring.start();
//!
//! loop {
//!     scene.tick(&mut pointer, &mut scroll);
//! }
//! ```

use std::rc::Rc;

use glam::Vec3;

use crate::camera::{ViewCamera, ZoomController};
use crate::config::RigConfig;
use crate::crosshair::{CrosshairController, CrosshairTick, InstanceRegistry, SelectionEvent, SubscriptionId};
use crate::error::Result;
use crate::follower::{Follower, SharedTransform, shared_transform};
use crate::input::{AxisSampler, CursorManager, PointerSample, PointerSampler};

/// Phase one: holds the config until components are built.
#[derive(Clone, Debug)]
pub struct SceneBuilder {
    config: RigConfig,
    marble_start: Vec3,
}

impl SceneBuilder {
    pub fn new(config: RigConfig) -> Self {
        Self {
            config,
            marble_start: Vec3::ZERO,
        }
    }

    /// Where the tracked marble starts.
    pub fn with_marble_at(mut self, position: Vec3) -> Self {
        self.marble_start = position;
        self
    }

    /// Construct all components.
    pub fn build(self, registry: &InstanceRegistry) -> Result<SceneWiring> {
        self.config.validate()?;

        let camera = ViewCamera::from(&self.config.camera);
        let mut cursor = CursorManager::new();
        let crosshair = CrosshairController::new(self.config.crosshair, registry, &mut cursor)?;
        let zoom = ZoomController::new(self.config.zoom, &camera);

        tracing::info!(mode = ?self.config.crosshair.input_mode, "scene components built");

        Ok(SceneWiring {
            scene: Scene {
                camera,
                cursor,
                crosshair,
                zoom,
                followers: Vec::new(),
                marble: shared_transform(self.marble_start),
                ticks: 0,
            },
        })
    }
}

/// Phase two: components exist, subscriptions are being wired.
#[derive(Debug)]
pub struct SceneWiring {
    scene: Scene,
}

impl SceneWiring {
    /// Listen for target selections.
    pub fn subscribe(&mut self, listener: impl FnMut(&SelectionEvent) + 'static) -> SubscriptionId {
        self.scene.crosshair.subscribe(listener)
    }

    /// The marble transform followers track by default.
    pub fn marble(&self) -> SharedTransform {
        Rc::clone(&self.scene.marble)
    }

    /// Add a follower; returns its index in [`Scene::followers`].
    pub fn add_follower(&mut self, tracked: Option<SharedTransform>) -> usize {
        self.scene.followers.push(Follower::new(tracked));
        self.scene.followers.len() - 1
    }

    pub fn camera(&self) -> &ViewCamera {
        &self.scene.camera
    }

    /// Finish wiring and enter the tick phase.
    pub fn start(self) -> Scene {
        tracing::info!(
            listeners = self.scene.crosshair.listener_count(),
            followers = self.scene.followers.len(),
            "scene started"
        );
        self.scene
    }
}

/// Everything that happened during one scene tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneTick {
    pub crosshair: CrosshairTick,
    /// New zoom value, `None` if zoom was skipped
    pub zoom: Option<f32>,
}

/// Running scene.
#[derive(Debug)]
pub struct Scene {
    camera: ViewCamera,
    cursor: CursorManager,
    crosshair: CrosshairController,
    zoom: ZoomController,
    followers: Vec<Follower>,
    marble: SharedTransform,
    ticks: u64,
}

impl Scene {
    /// Run one tick with separate pointer and scroll sources.
    pub fn tick<P, A>(&mut self, pointer: &mut P, axis: &mut A) -> SceneTick
    where
        P: PointerSampler + ?Sized,
        A: AxisSampler + ?Sized,
    {
        let sample = pointer.sample();
        self.advance(&sample, axis.sample_axis())
    }

    /// Run one tick from a source that provides both pointer and scroll.
    pub fn tick_input<I>(&mut self, input: &mut I) -> SceneTick
    where
        I: PointerSampler + AxisSampler + ?Sized,
    {
        let sample = input.sample();
        let axis = input.sample_axis();
        self.advance(&sample, axis)
    }

    /// Crosshair, zoom, then followers.
    fn advance(&mut self, sample: &PointerSample, axis: f32) -> SceneTick {
        let mode = self.crosshair.config().input_mode;
        let crosshair = self.crosshair.update(&self.camera, &mut self.cursor, sample, mode);
        let zoom = self.zoom.update(axis, &mut self.camera);

        for follower in &mut self.followers {
            follower.update();
        }

        self.ticks += 1;
        SceneTick { crosshair, zoom }
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn camera(&self) -> &ViewCamera {
        &self.camera
    }

    /// The host may move the camera between ticks.
    pub fn camera_mut(&mut self) -> &mut ViewCamera {
        &mut self.camera
    }

    pub fn cursor(&self) -> &CursorManager {
        &self.cursor
    }

    /// For window focus handling and applying dirty state.
    pub fn cursor_mut(&mut self) -> &mut CursorManager {
        &mut self.cursor
    }

    pub fn crosshair(&self) -> &CrosshairController {
        &self.crosshair
    }

    pub fn followers(&self) -> &[Follower] {
        &self.followers
    }

    pub fn marble(&self) -> SharedTransform {
        Rc::clone(&self.marble)
    }
}
