//! Session driver
//!
//! Owns the game state and the two fixed-rate timers (score and warmup) and
//! turns wall-clock frame deltas into the right mix of ticks. Fixed-rate
//! timers fire before the frame update, matching a pre-update clock.

use super::clock::RepeatingTimer;
use super::state::{GameEvent, GameState, RunState};
use super::tick::{TickInput, tick};
use crate::tuning::Tuning;

pub struct Session {
    state: GameState,
    score_timer: RepeatingTimer,
    warmup_timer: Option<RepeatingTimer>,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!(
            "New session: seed {} version {} base speed {}",
            seed,
            tuning.version.as_str(),
            tuning.base_speed
        );
        Self {
            score_timer: RepeatingTimer::new(tuning.score_interval_ms),
            warmup_timer: None,
            state: GameState::new(seed, tuning),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for the host to write physics outcomes
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state()
    }

    /// Whether the warmup repeating tick is currently scheduled
    pub fn warmup_timer_active(&self) -> bool {
        self.warmup_timer.is_some()
    }

    /// Host saw the player touch the start trigger
    pub fn on_trigger_overlap(&mut self) -> bool {
        let started = self.state.on_trigger_overlap();
        self.sync_warmup_timer();
        started
    }

    /// Host saw the player hit an obstacle
    pub fn on_collision(&mut self) -> bool {
        self.state.on_collision()
    }

    /// Restart requested from the game-over screen
    pub fn restart(&mut self) -> bool {
        self.state.restart()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Advance wall-clock time by `dt_ms` and run one frame
    pub fn advance(&mut self, dt_ms: f32, input: &TickInput) {
        let dt_ms = dt_ms.clamp(0.0, self.state.tuning.max_frame_ms);

        self.sync_warmup_timer();
        if let Some(timer) = self.warmup_timer.as_mut() {
            for _ in 0..timer.advance(dt_ms) {
                if self.state.warmup_tick() {
                    timer.cancel();
                    break;
                }
            }
            if timer.is_cancelled() {
                self.warmup_timer = None;
            }
        }

        for _ in 0..self.score_timer.advance(dt_ms) {
            self.state.score_tick();
        }

        tick(&mut self.state, input, dt_ms);
    }

    /// Schedule the warmup tick on entry into WarmingUp
    fn sync_warmup_timer(&mut self) {
        if self.state.run_state() == RunState::WarmingUp && self.warmup_timer.is_none() {
            log::debug!("Scheduling warmup tick");
            self.warmup_timer = Some(RepeatingTimer::new(self.state.tuning.warmup_interval_ms));
        }
    }
}
