//! Input Module
//!
//! Pull-based pointer input for the rig. Device events are folded into one
//! snapshot per tick; the driver samples it and passes it on explicitly.
//!
//! # Example
//!
//! ```rust,ignore
//! use marble_board_engine::input::{PointerSampler, WinitPointerSampler};
//!
//! let mut input = WinitPointerSampler::new(MouseButton::Left, window.inner_size());
//!
//! // In the event loop
//! input.handle_window_event(&event);
//!
//! // Once per tick
//! let sample = input.sample();
//! ```

pub mod cursor_manager;
pub mod pointer;
pub mod winit_adapter;

pub use cursor_manager::{CursorManager, PointerLock};
pub use pointer::{AxisSampler, PointerSample, PointerSampler, ScriptedSampler, ScriptedTick};
pub use winit_adapter::{WHEEL_UNITS_PER_LINE, WinitPointerSampler};
