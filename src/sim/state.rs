//! Game state and core simulation types
//!
//! Everything the run core owns for one session lives in [`GameState`]. The
//! host (physics, rendering, input) reads and writes the entity fields marked
//! as host-owned and feeds events back through the entry points in `run`,
//! `collision` and `tick`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyController;
use super::score::ScoreTracker;
use super::spawner::{ObstacleDescriptor, ObstacleSpawner};
use super::warmup::WarmupProgress;
use crate::consts::*;
use crate::highscores::HighScores;
use crate::tuning::Tuning;
use crate::ui::Hud;
use crate::Aabb;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Waiting for the player to touch the start trigger
    Idle,
    /// Automated intro: ground strip grows, player jogs in
    WarmingUp,
    /// Active gameplay
    Running,
    /// Run ended on collision, waiting for restart
    GameOver,
}

impl RunState {
    /// Whether the state machine allows moving from `self` to `to`
    pub fn can_transition(self, to: RunState) -> bool {
        matches!(
            (self, to),
            (RunState::Idle, RunState::WarmingUp)
                | (RunState::WarmingUp, RunState::Running)
                | (RunState::Running, RunState::GameOver)
                | (RunState::GameOver, RunState::Running)
        )
    }
}

/// Animation the host should be playing on the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Animation {
    /// Animation stopped, static standing frame
    Idle,
    Run,
    DuckRun,
    /// Static frame shown after a collision
    Hurt,
}

/// The player-controlled entity
///
/// Position is the bottom-left corner of the sprite. `pos`, `on_floor` and
/// `delta_abs_y` are written by the host physics each frame; the rest are
/// commands from the core.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision body height
    pub body_height: f32,
    /// Collision body offset from the sprite top
    pub body_offset_y: f32,
    pub animation: Animation,
    /// Host-provided floor contact flag
    pub on_floor: bool,
    /// Host-provided absolute vertical movement this frame
    pub delta_abs_y: f32,
}

impl Player {
    pub fn new(ground_y: f32, stand_height: f32) -> Self {
        Self {
            pos: Vec2::new(0.0, ground_y),
            vel: Vec2::ZERO,
            body_height: stand_height,
            body_offset_y: 0.0,
            animation: Animation::Idle,
            on_floor: true,
            delta_abs_y: 0.0,
        }
    }

    /// Collision box in world space
    pub fn hitbox(&self) -> Aabb {
        let top = self.pos.y - PLAYER_HEIGHT + self.body_offset_y;
        Aabb::new(
            Vec2::new(self.pos.x, top),
            Vec2::new(self.pos.x + PLAYER_WIDTH, top + self.body_height),
        )
    }
}

/// Scrolling ground strip
#[derive(Debug, Clone)]
pub struct Ground {
    /// Visible width of the strip
    pub width: f32,
    /// Horizontal texture offset (world scroll)
    pub tile_offset: f32,
}

/// Invisible zone whose first genuine overlap starts the warmup
#[derive(Debug, Clone)]
pub struct StartTrigger {
    pub pos: Vec2,
    /// Placement at construction; an overlap while still here is spurious
    pub initial_y: f32,
    pub enabled: bool,
}

impl StartTrigger {
    pub fn new(y: f32) -> Self {
        Self {
            pos: Vec2::new(0.0, y),
            initial_y: y,
            enabled: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_bottom_left(self.pos.x, self.pos.y, TRIGGER_SIZE, TRIGGER_SIZE)
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    CactusSmall1,
    CactusSmall2,
    CactusSmall3,
    CactusLarge1,
    CactusLarge2,
    CactusLarge3,
    Bird,
}

impl ObstacleKind {
    /// Ground variants, in sprite sheet order
    pub const GROUND: [ObstacleKind; 6] = [
        ObstacleKind::CactusSmall1,
        ObstacleKind::CactusSmall2,
        ObstacleKind::CactusSmall3,
        ObstacleKind::CactusLarge1,
        ObstacleKind::CactusLarge2,
        ObstacleKind::CactusLarge3,
    ];

    pub fn is_aerial(self) -> bool {
        self == ObstacleKind::Bird
    }

    /// Sprite size (width, height)
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::CactusSmall1 => Vec2::new(34.0, 70.0),
            ObstacleKind::CactusSmall2 => Vec2::new(68.0, 70.0),
            ObstacleKind::CactusSmall3 => Vec2::new(102.0, 70.0),
            ObstacleKind::CactusLarge1 => Vec2::new(50.0, 100.0),
            ObstacleKind::CactusLarge2 => Vec2::new(100.0, 100.0),
            ObstacleKind::CactusLarge3 => Vec2::new(150.0, 100.0),
            ObstacleKind::Bird => Vec2::new(92.0, 77.0),
        }
    }
}

/// A live obstacle in the shared collection
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Bottom-left corner of the sprite
    pub pos: Vec2,
    pub hitbox_height: f32,
    /// Collision body offset from the sprite top
    pub hitbox_offset_y: f32,
    /// Immovable bodies do not react to being touched
    pub immovable: bool,
}

impl Obstacle {
    /// Sprite bounds, used for culling
    pub fn bounds(&self) -> Aabb {
        let size = self.kind.size();
        Aabb::from_bottom_left(self.pos.x, self.pos.y, size.x, size.y)
    }

    /// Collision box in world space
    pub fn hitbox(&self) -> Aabb {
        let size = self.kind.size();
        let top = self.pos.y - size.y + self.hitbox_offset_y;
        Aabb::new(
            Vec2::new(self.pos.x, top),
            Vec2::new(self.pos.x + size.x, top + self.hitbox_height),
        )
    }

    /// True once the obstacle has fully left the viewport on the left
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.bounds().right() < 0.0
    }
}

/// Things that happened during a tick or event, for the host to act on
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RunStateChanged { from: RunState, to: RunState },
    /// Spurious trigger overlap neutralised by moving the trigger
    TriggerRelocated { y: f32 },
    /// Warmup repeating tick should be cancelled
    WarmupFinished,
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    ObstacleCulled { id: u32 },
    /// Score reached a milestone (flash the label)
    ScoreMilestone(u32),
    /// Run ended; `rank` is the run's position in the recent history (1 = best)
    GameOver {
        score: u32,
        high_score: u32,
        new_record: bool,
        rank: usize,
    },
    PhysicsPaused,
    PhysicsResumed,
    AnimationsPaused,
    AnimationsResumed,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    run_state: RunState,
    pub difficulty: DifficultyController,
    pub spawner: ObstacleSpawner,
    pub score: ScoreTracker,
    pub high_scores: HighScores,
    /// Present only while warming up
    pub(super) warmup: Option<WarmupProgress>,
    pub player: Player,
    pub ground: Ground,
    pub trigger: StartTrigger,
    /// Shared active-obstacle collection (sorted by id)
    pub obstacles: Vec<Obstacle>,
    pub hud: Hud,
    pub physics_paused: bool,
    pub animations_paused: bool,
    /// Running frames in the current run
    pub frame_ticks: u64,
    events: Vec<GameEvent>,
    pub(super) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new session in the Idle state
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            run_state: RunState::Idle,
            difficulty: DifficultyController::new(tuning.base_speed, tuning.speed_increment),
            spawner: ObstacleSpawner::new(&tuning),
            score: ScoreTracker::new(tuning.score_digits, tuning.score_milestone),
            high_scores: HighScores::new(),
            warmup: None,
            player: Player::new(tuning.viewport_height, tuning.stand_height),
            ground: Ground {
                width: tuning.ground_start_width,
                tile_offset: 0.0,
            },
            trigger: StartTrigger::new(tuning.start_trigger_y),
            obstacles: Vec::new(),
            hud: Hud::new(tuning.score_digits),
            physics_paused: false,
            animations_paused: false,
            frame_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tuning,
        }
    }

    #[inline]
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Warmup progress, if warming up
    pub fn warmup(&self) -> Option<&WarmupProgress> {
        self.warmup.as_ref()
    }

    /// Move to `to` if legal. Returns false (and changes nothing) otherwise.
    pub(super) fn transition(&mut self, to: RunState) -> bool {
        let from = self.run_state;
        if !from.can_transition(to) {
            log::debug!("Ignoring illegal transition {:?} -> {:?}", from, to);
            return false;
        }
        self.run_state = to;
        log::info!("Run state {:?} -> {:?}", from, to);
        self.push_event(GameEvent::RunStateChanged { from, to });
        true
    }

    pub(super) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at pending events without draining them
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Turn a spawn descriptor into a live obstacle at the right of the viewport
    pub fn place_obstacle(&mut self, desc: ObstacleDescriptor) -> u32 {
        let id = self.next_entity_id();
        let size = desc.kind.size();
        let ground_y = self.tuning.viewport_height;
        let (bottom, hitbox_height, hitbox_offset_y) = match desc.altitude {
            Some(altitude) => (
                ground_y - altitude,
                size.y / self.tuning.aerial_hitbox_divisor,
                0.0,
            ),
            None => (ground_y, size.y, self.tuning.ground_hitbox_offset),
        };
        self.obstacles.push(Obstacle {
            id,
            kind: desc.kind,
            pos: Vec2::new(self.tuning.viewport_width + desc.offset, bottom),
            hitbox_height,
            hitbox_offset_y,
            immovable: true,
        });
        log::debug!(
            "Spawned {:?} #{} at x={:.0} ({} live)",
            desc.kind,
            id,
            self.tuning.viewport_width + desc.offset,
            self.obstacles.len()
        );
        self.push_event(GameEvent::ObstacleSpawned { id, kind: desc.kind });
        id
    }

    /// Ensure obstacles are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.obstacles.sort_by_key(|o| o.id);
    }
}
