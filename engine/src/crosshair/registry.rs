//! At most one live crosshair controller per scene.
//!
//! The registry is created by whoever assembles the scene and passed to
//! each controller constructor. A second claim while the first is alive is
//! a configuration error.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{ConfigError, Result};

/// Shared slot that a controller claims on construction.
#[derive(Clone, Debug, Default)]
pub struct InstanceRegistry {
    claimed: Rc<Cell<bool>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed.get()
    }

    /// Take the slot, failing if another controller holds it.
    pub fn claim(&self) -> Result<InstanceClaim> {
        if self.claimed.replace(true) {
            tracing::error!("there is more than one crosshair controller in the scene");
            return Err(ConfigError::DuplicateController);
        }
        Ok(InstanceClaim {
            slot: Rc::clone(&self.claimed),
        })
    }
}

/// Held by a live controller; frees the slot on drop.
#[derive(Debug)]
pub struct InstanceClaim {
    slot: Rc<Cell<bool>>,
}

impl Drop for InstanceClaim {
    fn drop(&mut self) {
        self.slot.set(false);
    }
}
