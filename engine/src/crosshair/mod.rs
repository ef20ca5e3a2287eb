//! Crosshair Module
//!
//! Maps 2D pointer input onto the board and raises target selections.

pub mod controller;
pub mod events;
pub mod registry;
pub mod state;

pub use controller::{CrosshairConfig, CrosshairController, CrosshairTick, clamp_to_viewport};
pub use events::{SelectionBroadcaster, SelectionEvent, SubscriptionId};
pub use registry::{InstanceClaim, InstanceRegistry};
pub use state::{CrosshairState, InputMode, TargetPhase, TargetState};
