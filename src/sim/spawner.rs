//! Obstacle spawning
//!
//! Spawn cadence is measured in "effective time": the frame delta scaled by
//! run speed, so faster runs spawn more often. When the accumulator crosses
//! the threshold a random obstacle is rolled and the accumulator restarts.

use rand::Rng;

use super::state::ObstacleKind;
use crate::tuning::Tuning;

/// What to spawn and where, relative to the right edge of the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleDescriptor {
    pub kind: ObstacleKind,
    /// Distance past the right edge of the viewport
    pub offset: f32,
    /// Height above the ground line (aerial kinds only)
    pub altitude: Option<f32>,
}

/// Spawn timer plus the rules for rolling a new obstacle
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    timer: f32,
    coupling: f32,
    threshold: f32,
    roll_max: u32,
    distance: (f32, f32),
    altitudes: [f32; 2],
}

impl ObstacleSpawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            timer: 0.0,
            coupling: tuning.spawn_coupling,
            threshold: tuning.spawn_threshold,
            roll_max: tuning.spawn_roll_max,
            distance: (tuning.spawn_distance_min, tuning.spawn_distance_max),
            altitudes: tuning.aerial_altitudes,
        }
    }

    /// Accumulated effective time since the last spawn
    #[inline]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    /// Accumulate one frame. Returns a descriptor when a spawn is due.
    pub fn advance<R: Rng>(&mut self, dt_ms: f32, speed: f32, rng: &mut R) -> Option<ObstacleDescriptor> {
        self.timer += dt_ms * speed * self.coupling;
        if self.timer >= self.threshold {
            self.timer = 0.0;
            Some(self.spawn_one(rng))
        } else {
            None
        }
    }

    /// Roll a single obstacle
    pub fn spawn_one<R: Rng>(&self, rng: &mut R) -> ObstacleDescriptor {
        let roll = rng.random_range(1..=self.roll_max);
        let offset = rng.random_range(self.distance.0..=self.distance.1);

        if roll == self.roll_max {
            let altitude = self.altitudes[rng.random_range(0..self.altitudes.len())];
            ObstacleDescriptor {
                kind: ObstacleKind::Bird,
                offset,
                altitude: Some(altitude),
            }
        } else {
            let kind = ObstacleKind::GROUND[rng.random_range(0..ObstacleKind::GROUND.len())];
            ObstacleDescriptor {
                kind,
                offset,
                altitude: None,
            }
        }
    }
}
