//! Deterministic run core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only arrives through tick deltas
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, physics or platform dependencies

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod player;
pub mod run;
pub mod score;
pub mod session;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod warmup;

pub use clock::RepeatingTimer;
pub use collision::first_overlap;
pub use difficulty::DifficultyController;
pub use score::{ScoreTracker, format_score};
pub use session::Session;
pub use spawner::{ObstacleDescriptor, ObstacleSpawner};
pub use state::{
    Animation, GameEvent, GameState, Ground, Obstacle, ObstacleKind, Player, RunState,
    StartTrigger,
};
pub use tick::{TickInput, cull_off_screen, tick};
pub use warmup::{WarmupProgress, WarmupStep};
