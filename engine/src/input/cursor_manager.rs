//! Cursor Manager Module
//!
//! Process-wide pointer state: OS cursor visibility and pointer lock.
//! The crosshair hides the cursor when it starts and locks the pointer to
//! the viewport centre after every successful delta-mode move, turning the
//! mouse into a delta-only device. Last writer wins; nothing else contends
//! for the lock.
//!
//! # Usage
//!
//! ```rust,ignore
//! use marble_board_engine::input::CursorManager;
//!
//! let mut cursor = CursorManager::new();
//! cursor.lock_to_center();
//!
//! if cursor.is_dirty() {
//!     window.set_cursor_visible(cursor.should_cursor_be_visible());
//!     let _ = window.set_cursor_grab(cursor.grab_mode());
//!     cursor.clear_dirty();
//! }
//! ```

use winit::window::CursorGrabMode;

/// How the pointer is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerLock {
    /// Pointer moves freely and reports absolute positions
    #[default]
    Free,
    /// Pointer pinned to the viewport centre, only deltas are reported
    Locked,
}

/// Tracks cursor visibility and lock state and whether the window needs
/// to be told about a change.
#[derive(Debug, Clone)]
pub struct CursorManager {
    lock: PointerLock,
    /// Whether the OS cursor should be drawn
    visible: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// Tracks if state changed and needs to be applied to the window
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Free, visible cursor.
    pub fn new() -> Self {
        Self {
            lock: PointerLock::Free,
            visible: true,
            has_focus: true,
            state_dirty: true, // Need to apply initial state
        }
    }

    pub fn lock(&self) -> PointerLock {
        self.lock
    }

    pub fn is_locked(&self) -> bool {
        self.lock == PointerLock::Locked
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Check if cursor state needs to be applied to the window.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Clear the dirty flag after applying state.
    pub fn clear_dirty(&mut self) {
        self.state_dirty = false;
    }

    pub fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            self.state_dirty = true;
        }
    }

    pub fn show(&mut self) {
        if !self.visible {
            self.visible = true;
            self.state_dirty = true;
        }
    }

    /// Pin the pointer to the viewport centre.
    pub fn lock_to_center(&mut self) {
        if self.lock != PointerLock::Locked {
            tracing::debug!("pointer locked to viewport centre");
            self.lock = PointerLock::Locked;
            self.state_dirty = true;
        }
    }

    /// Let the pointer move freely again.
    pub fn release(&mut self) {
        if self.lock != PointerLock::Free {
            tracing::debug!("pointer lock released");
            self.lock = PointerLock::Free;
            self.state_dirty = true;
        }
    }

    /// Window focus gained: state has to be re-applied.
    pub fn handle_focus_gained(&mut self) {
        self.has_focus = true;
        self.state_dirty = true;
    }

    /// Window focus lost. The lock preference is kept and restored on
    /// focus gain.
    pub fn handle_focus_lost(&mut self) {
        self.has_focus = false;
        self.state_dirty = true;
    }

    /// The OS cursor is shown unless hidden while the window has focus.
    pub fn should_cursor_be_visible(&self) -> bool {
        self.visible || !self.has_focus
    }

    /// Grab mode to hand to `Window::set_cursor_grab`.
    pub fn grab_mode(&self) -> CursorGrabMode {
        match (self.lock, self.has_focus) {
            (PointerLock::Locked, true) => CursorGrabMode::Locked,
            _ => CursorGrabMode::None,
        }
    }
}
