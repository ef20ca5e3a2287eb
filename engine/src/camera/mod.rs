//! Camera Module
//!
//! Camera state, projection and picking math, plus the scroll zoom behaviour.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod raycast;
pub mod surface;
pub mod view;
pub mod zoom;

pub use raycast::{GroundPlane, Ray};
pub use surface::{CameraSurface, Viewport};
pub use view::{CameraBasis, Projection, ProjectionKind, ViewCamera};
pub use zoom::{ZoomConfig, ZoomController};
