//! Follower
//!
//! Copies a tracked transform's position every tick. No smoothing; a
//! missing reference just means nothing happens.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

/// Minimal transform shared between scene objects.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self { position }
    }
}

/// Transform handle that several objects can read and one can drive.
pub type SharedTransform = Rc<RefCell<Transform>>;

pub fn shared_transform(position: Vec3) -> SharedTransform {
    Rc::new(RefCell::new(Transform::at(position)))
}

/// Mirrors the position of a tracked transform.
#[derive(Clone, Debug, Default)]
pub struct Follower {
    transform: Transform,
    tracked: Option<SharedTransform>,
}

impl Follower {
    pub fn new(tracked: Option<SharedTransform>) -> Self {
        Self {
            transform: Transform::default(),
            tracked,
        }
    }

    pub fn set_tracked(&mut self, tracked: Option<SharedTransform>) {
        self.tracked = tracked;
    }

    pub fn is_tracking(&self) -> bool {
        self.tracked.is_some()
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Snap to the tracked position, if there is one.
    pub fn update(&mut self) {
        if let Some(tracked) = &self.tracked {
            self.transform.position = tracked.borrow().position;
        }
    }
}
