//! Pointer Sampling
//!
//! Per-tick snapshots of pointer input. The driver pulls exactly one
//! [`PointerSample`] per tick and hands it to the crosshair, so no component
//! reads device state behind the driver's back.

use std::collections::VecDeque;

use glam::Vec2;

/// Pointer input for one tick. Pixel units, origin at the bottom-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    /// Absolute pointer position
    pub absolute: Vec2,
    /// Movement since the previous tick
    pub delta: Vec2,
    /// The select control was pressed since the previous tick. Holding it
    /// down does not repeat the edge.
    pub select_edge: bool,
}

impl PointerSample {
    pub fn at(absolute: Vec2) -> Self {
        Self {
            absolute,
            ..Default::default()
        }
    }

    pub fn moved_by(delta: Vec2) -> Self {
        Self {
            delta,
            ..Default::default()
        }
    }

    pub fn with_select(mut self, select: bool) -> Self {
        self.select_edge = select;
        self
    }
}

/// Source of pointer snapshots.
pub trait PointerSampler {
    /// Take the snapshot for the current tick.
    fn sample(&mut self) -> PointerSample;
}

/// Source of the scalar zoom axis (scroll wheel).
pub trait AxisSampler {
    /// Axis value for the current tick.
    fn sample_axis(&mut self) -> f32;
}

/// One recorded tick of input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScriptedTick {
    pub pointer: PointerSample,
    pub zoom_axis: f32,
}

/// Replays a fixed input script, then idles.
///
/// `sample()` advances to the next tick; `sample_axis()` reports the zoom
/// value of the tick most recently returned by `sample()`, so drivers should
/// sample the pointer first.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSampler {
    pending: VecDeque<ScriptedTick>,
    current: ScriptedTick,
    /// Absolute position reported once the script runs out
    rest_position: Vec2,
}

impl ScriptedSampler {
    pub fn new(ticks: impl IntoIterator<Item = ScriptedTick>) -> Self {
        Self {
            pending: ticks.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Script made of pointer samples only.
    pub fn from_pointer(samples: impl IntoIterator<Item = PointerSample>) -> Self {
        Self::new(samples.into_iter().map(|pointer| ScriptedTick {
            pointer,
            zoom_axis: 0.0,
        }))
    }

    pub fn push(&mut self, tick: ScriptedTick) {
        self.pending.push_back(tick);
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}

impl PointerSampler for ScriptedSampler {
    fn sample(&mut self) -> PointerSample {
        self.current = match self.pending.pop_front() {
            Some(tick) => tick,
            // Idle: pointer rests where it was, nothing moves or fires
            None => ScriptedTick {
                pointer: PointerSample::at(self.rest_position),
                zoom_axis: 0.0,
            },
        };
        self.rest_position = self.current.pointer.absolute;
        self.current.pointer
    }
}

impl AxisSampler for ScriptedSampler {
    fn sample_axis(&mut self) -> f32 {
        self.current.zoom_axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_sampler_replays_in_order() {
        let mut sampler = ScriptedSampler::from_pointer([
            PointerSample::at(Vec2::new(1.0, 2.0)),
            PointerSample::moved_by(Vec2::new(3.0, 4.0)).with_select(true),
        ]);
        assert_eq!(sampler.remaining(), 2);

        assert_eq!(sampler.sample().absolute, Vec2::new(1.0, 2.0));
        let second = sampler.sample();
        assert_eq!(second.delta, Vec2::new(3.0, 4.0));
        assert!(second.select_edge);
        assert!(sampler.is_finished());
    }

    #[test]
    fn test_scripted_sampler_idles_after_script() {
        let mut sampler = ScriptedSampler::from_pointer([PointerSample::at(Vec2::new(5.0, 6.0))
            .with_select(true)]);
        sampler.sample();

        let idle = sampler.sample();
        assert_eq!(idle.absolute, Vec2::new(5.0, 6.0));
        assert_eq!(idle.delta, Vec2::ZERO);
        assert!(!idle.select_edge);
    }

    #[test]
    fn test_axis_follows_current_tick() {
        let mut sampler = ScriptedSampler::new([
            ScriptedTick {
                pointer: PointerSample::default(),
                zoom_axis: 120.0,
            },
            ScriptedTick::default(),
        ]);
        assert_eq!(sampler.sample_axis(), 0.0);
        sampler.sample();
        assert_eq!(sampler.sample_axis(), 120.0);
        sampler.sample();
        assert_eq!(sampler.sample_axis(), 0.0);
    }
}
