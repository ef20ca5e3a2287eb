//! Marble Board Engine Library
//!
//! Gameplay behaviours for a board viewed through a single camera:
//! a crosshair that maps pointer input onto the board and raises target
//! selections, a scroll-wheel camera zoom, and a follower that mirrors a
//! tracked transform. Rendering, physics and the window loop belong to the
//! host; this crate only deals with state and math.
//!
//! # Modules
//!
//! - [`camera`] - View camera, picking rays, ground plane and zoom
//! - [`input`] - Per-tick pointer snapshots, cursor lock state, winit adapter
//! - [`crosshair`] - Crosshair controller, selection events, instance registry
//! - [`follower`] - Position follower
//! - [`config`] - JSON configuration
//! - [`scene`] - Two-phase scene start-up and the tick driver
//!
//! # Example
//!
//! ```ignore
//! use marble_board_engine::{InstanceRegistry, RigConfig, SceneBuilder, ScriptedSampler};
//!
//! let registry = InstanceRegistry::new();
//! let mut wiring = SceneBuilder::new(RigConfig::default()).build(&registry)?;
//! let marble = wiring.marble();
//! wiring.add_follower(Some(marble));
//! wiring.subscribe(|event| tracing::info!(position = ?event.position, "selected"));
//!
//! let mut scene = wiring.start();
//! let mut input = ScriptedSampler::default();
//! let mut scroll = ScriptedSampler::default();
//! scene.tick(&mut input, &mut scroll);
//! ```

pub mod camera;
pub mod config;
pub mod crosshair;
pub mod error;
pub mod follower;
pub mod input;
pub mod scene;

pub use camera::{CameraSurface, GroundPlane, Projection, Ray, ViewCamera, Viewport, ZoomController};
pub use config::{CameraConfig, RigConfig};
pub use crosshair::{CrosshairController, InputMode, InstanceRegistry, SelectionEvent};
pub use error::ConfigError;
pub use follower::{Follower, SharedTransform, Transform};
pub use input::{CursorManager, PointerSample, PointerSampler, ScriptedSampler};
pub use scene::{Scene, SceneBuilder, SceneWiring};
