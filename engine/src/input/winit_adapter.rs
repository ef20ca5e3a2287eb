//! Adapter that folds winit events into per-tick pointer snapshots.
//!
//! Feed it every window and device event from the event loop, then call
//! [`PointerSampler::sample`] and [`AxisSampler::sample_axis`] once per tick.
//! Positions are converted from winit's top-left origin to the rig's
//! bottom-left origin.

use glam::Vec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use super::pointer::{AxisSampler, PointerSample, PointerSampler};

/// Axis units reported per wheel notch.
pub const WHEEL_UNITS_PER_LINE: f32 = 120.0;

/// Collects pointer events between ticks.
#[derive(Debug, Clone)]
pub struct WinitPointerSampler {
    /// Button that selects a target
    select_button: MouseButton,
    /// Window height in pixels, used to flip Y
    viewport_height: f32,
    /// Pointer position while it is over the window (bottom-left origin)
    position: Option<Vec2>,
    /// Reported as the absolute position; survives the pointer leaving
    last_position: Vec2,
    /// Movement derived from cursor positions since the last sample
    cursor_delta: Vec2,
    /// Raw device motion since the last sample
    raw_delta: Vec2,
    raw_motion_seen: bool,
    select_down: bool,
    /// A press happened since the last sample
    select_pressed: bool,
    scroll: f32,
}

impl WinitPointerSampler {
    pub fn new(select_button: MouseButton, window_size: PhysicalSize<u32>) -> Self {
        Self {
            select_button,
            viewport_height: window_size.height as f32,
            position: None,
            last_position: Vec2::new(
                window_size.width as f32 * 0.5,
                window_size.height as f32 * 0.5,
            ),
            cursor_delta: Vec2::ZERO,
            raw_delta: Vec2::ZERO,
            raw_motion_seen: false,
            select_down: false,
            select_pressed: false,
            scroll: 0.0,
        }
    }

    /// Route a window event. Returns `true` if it was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.on_cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => self.on_mouse_input(*state, *button),
            WindowEvent::MouseWheel { delta, .. } => self.on_mouse_wheel(*delta),
            WindowEvent::Resized(size) => self.on_resized(*size),
            WindowEvent::CursorLeft { .. } => self.on_cursor_left(),
            _ => return false,
        }
        true
    }

    /// Route a device event. Returns `true` if it was consumed.
    pub fn handle_device_event(&mut self, event: &DeviceEvent) -> bool {
        match event {
            DeviceEvent::MouseMotion { delta } => {
                self.on_mouse_motion(*delta);
                true
            }
            _ => false,
        }
    }

    pub fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let flipped = Vec2::new(
            position.x as f32,
            self.viewport_height - position.y as f32,
        );
        if let Some(previous) = self.position {
            self.cursor_delta += flipped - previous;
        }
        self.position = Some(flipped);
        self.last_position = flipped;
    }

    /// Re-entry starts a fresh delta; the last position is still reported.
    pub fn on_cursor_left(&mut self) {
        self.position = None;
    }

    /// Raw motion keeps arriving while the pointer is locked.
    pub fn on_mouse_motion(&mut self, delta: (f64, f64)) {
        self.raw_delta += Vec2::new(delta.0 as f32, -(delta.1 as f32));
        self.raw_motion_seen = true;
    }

    pub fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != self.select_button {
            return;
        }
        match state {
            ElementState::Pressed => {
                if !self.select_down {
                    self.select_pressed = true;
                }
                self.select_down = true;
            }
            ElementState::Released => self.select_down = false,
        }
    }

    pub fn on_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        self.scroll += match delta {
            MouseScrollDelta::LineDelta(_, y) => y * WHEEL_UNITS_PER_LINE,
            MouseScrollDelta::PixelDelta(position) => position.y as f32,
        };
    }

    pub fn on_resized(&mut self, size: PhysicalSize<u32>) {
        self.viewport_height = size.height as f32;
    }

    /// Last known position, if the pointer is over the window.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn is_select_down(&self) -> bool {
        self.select_down
    }
}

impl PointerSampler for WinitPointerSampler {
    fn sample(&mut self) -> PointerSample {
        let delta = if self.raw_motion_seen {
            self.raw_delta
        } else {
            self.cursor_delta
        };

        let sample = PointerSample {
            absolute: self.last_position,
            delta,
            select_edge: self.select_pressed,
        };

        self.cursor_delta = Vec2::ZERO;
        self.raw_delta = Vec2::ZERO;
        self.raw_motion_seen = false;
        self.select_pressed = false;
        sample
    }
}

impl AxisSampler for WinitPointerSampler {
    fn sample_axis(&mut self) -> f32 {
        std::mem::take(&mut self.scroll)
    }
}
