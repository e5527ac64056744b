//! Frame tick and score tick
//!
//! `tick` runs once per rendered frame with a variable delta. `score_tick`
//! runs on its own fixed cadence so score and difficulty progress at the same
//! rate regardless of frame rate.

use super::state::{GameEvent, GameState, RunState};

/// Intents gathered from input for a single frame (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump pressed this frame (one-shot)
    pub jump: bool,
    /// Duck key currently held
    pub duck_held: bool,
    /// Restart requested from the game-over screen (one-shot)
    pub restart: bool,
}

/// Advance the frame-driven part of the game by `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if input.restart {
        state.restart();
    }

    // Physics is paused on game over, so movement intents are dropped
    if state.run_state() != RunState::GameOver {
        let jumped = input.jump && state.player.try_jump(&state.tuning);
        // A jump leaves the ground standing even if duck is held
        if !jumped {
            state.player.apply_duck(input.duck_held, &state.tuning);
        }
    }

    if !state.is_running() {
        return;
    }

    state.frame_ticks += 1;
    let speed = state.difficulty.speed();

    // World scroll: ground and obstacles move in lockstep
    state.ground.tile_offset += speed;
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
    }

    if let Some(desc) = state.spawner.advance(dt_ms, speed, &mut state.rng) {
        state.place_obstacle(desc);
    }

    cull_off_screen(state);

    state.player.select_animation(&state.tuning);

    // Ensure deterministic ordering
    state.normalize_order();
}

/// Drop every obstacle that has fully left the viewport. Returns how many.
pub fn cull_off_screen(state: &mut GameState) -> usize {
    let mut culled = Vec::new();
    state.obstacles.retain(|o| {
        if o.is_off_screen() {
            culled.push(o.id);
            false
        } else {
            true
        }
    });
    for &id in &culled {
        log::debug!("Culled obstacle #{}", id);
        state.push_event(GameEvent::ObstacleCulled { id });
    }
    culled.len()
}

impl GameState {
    /// One fixed-rate score tick. No-op unless running.
    pub fn score_tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let milestone = self.score.tick();
        self.difficulty.ramp();
        self.hud.score.set_text(self.score.display());
        if let Some(score) = milestone {
            log::debug!("Score milestone {}", score);
            self.push_event(GameEvent::ScoreMilestone(score));
        }
        true
    }
}
