//! Run state machine entry points
//!
//! Idle -> WarmingUp -> Running -> GameOver -> Running. Every transition goes
//! through [`GameState::transition`]; requests that do not fit the current
//! state are ignored.

use super::state::{Animation, GameEvent, GameState, RunState};
use super::warmup::{WarmupProgress, WarmupStep};

impl GameState {
    /// The host saw the player overlap the start trigger.
    ///
    /// The first overlap happens while the trigger still sits at its initial
    /// placement and is spurious: the trigger is moved down to the ground line
    /// and nothing else happens. The next overlap starts the warmup.
    /// Returns true if the warmup started.
    pub fn on_trigger_overlap(&mut self) -> bool {
        if self.run_state() != RunState::Idle || !self.trigger.enabled {
            log::debug!("Ignoring trigger overlap in {:?}", self.run_state());
            return false;
        }

        if self.trigger.pos.y == self.trigger.initial_y {
            let ground_y = self.tuning.viewport_height;
            self.trigger.pos.x = 0.0;
            self.trigger.pos.y = ground_y;
            log::debug!("Start trigger relocated to y={}", ground_y);
            self.push_event(GameEvent::TriggerRelocated { y: ground_y });
            return false;
        }

        if !self.transition(RunState::WarmingUp) {
            return false;
        }
        self.trigger.enabled = false;
        self.difficulty.reset();
        self.spawner.reset();
        self.score.reset();
        self.warmup = Some(WarmupProgress::new(self.ground.width));
        true
    }

    /// One fixed-rate warmup tick. Returns true on the tick that starts the run.
    pub fn warmup_tick(&mut self) -> bool {
        if self.run_state() != RunState::WarmingUp {
            return false;
        }
        let growth = self.tuning.warmup_ground_growth;
        let complete_width = self.tuning.warmup_complete_width;
        let viewport_width = self.tuning.viewport_width;

        let Some(warmup) = self.warmup.as_mut() else {
            return false;
        };
        let step = warmup.advance(growth, complete_width);
        let visible = warmup.visible_width(viewport_width);

        self.player.vel.x = self.tuning.warmup_velocity;
        self.player.animation = Animation::Run;
        self.ground.width = visible;

        if step == WarmupStep::Growing {
            return false;
        }

        self.ground.width = viewport_width;
        self.player.vel.x = 0.0;
        self.warmup = None;
        self.transition(RunState::Running);
        self.hud.score.set_text(self.score.display());
        self.hud.score.show();
        self.push_event(GameEvent::WarmupFinished);
        true
    }

    /// Explicit restart from the game-over screen. Returns true if it happened.
    pub fn restart(&mut self) -> bool {
        if self.run_state() != RunState::GameOver {
            log::debug!("Ignoring restart in {:?}", self.run_state());
            return false;
        }
        self.transition(RunState::Running);
        self.difficulty.reset();
        self.spawner.reset();
        self.score.reset();
        self.frame_ticks = 0;
        let cleared = self.obstacles.len();
        self.obstacles.clear();
        log::debug!("Restart cleared {} obstacles", cleared);

        self.player.vel.y = 0.0;
        self.player.body_height = self.tuning.stand_height;
        self.player.body_offset_y = 0.0;
        self.player.animation = Animation::Run;

        self.physics_paused = false;
        self.animations_paused = false;
        self.push_event(GameEvent::PhysicsResumed);
        self.push_event(GameEvent::AnimationsResumed);

        self.hud.score.set_text(self.score.display());
        self.hud.game_over.hide();
        true
    }
}
