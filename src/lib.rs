//! Dino Dash - endless-runner run core
//!
//! Core modules:
//! - `sim`: Run state machine, warmup, spawning, difficulty, scoring, collision gate
//! - `highscores`: Session high score book
//! - `tuning`: Data-driven game balance
//! - `ui`: HUD model (score labels, game-over overlay)
//!
//! Rendering, physics, input capture and assets belong to the host. The core
//! consumes their outcomes and writes commands back through [`sim::GameState`].

pub mod highscores;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use highscores::HighScores;
pub use tuning::{GameVersion, Tuning, TuningError};

use glam::Vec2;

/// Fixed layout constants that are not balance knobs
pub mod consts {
    /// Player sprite width
    pub const PLAYER_WIDTH: f32 = 88.0;
    /// Player sprite height
    pub const PLAYER_HEIGHT: f32 = 94.0;
    /// Ground strip height
    pub const GROUND_HEIGHT: f32 = 26.0;
    /// Start trigger body size (square, invisible)
    pub const TRIGGER_SIZE: f32 = 32.0;
    /// Number of completed runs remembered by the high score book
    pub const RUN_HISTORY: usize = 10;
}

/// Axis-aligned bounding box in world space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box anchored at its bottom-left corner
    pub fn from_bottom_left(x: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, bottom - height),
            max: Vec2::new(x + width, bottom),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}
