//! Collision gate: the only way a run ends
//!
//! The host detects contact between the player and the obstacle collection
//! and calls [`GameState::on_collision`]. Only the first collision of a run
//! has any effect.

use super::state::{Animation, GameEvent, GameState, RunState};
use crate::Aabb;

impl GameState {
    /// Finalise the run after a collision. Returns true if the run ended.
    pub fn on_collision(&mut self) -> bool {
        if self.run_state() != RunState::Running {
            log::debug!("Ignoring collision in {:?}", self.run_state());
            return false;
        }

        let score = self.score.value();
        let new_record = self.high_scores.record_run(score, self.frame_ticks);
        let high_score = self.high_scores.best();
        let rank = self.high_scores.rank_of(score);
        self.hud.show_high_score(high_score);

        self.physics_paused = true;
        self.animations_paused = true;
        self.player.animation = Animation::Hurt;
        self.push_event(GameEvent::PhysicsPaused);
        self.push_event(GameEvent::AnimationsPaused);

        self.transition(RunState::GameOver);
        self.spawner.reset();
        self.difficulty.reset();
        self.hud.game_over.show();
        self.score.reset();

        log::info!(
            "Game over: score {} (best {}, rank {}{})",
            score,
            high_score,
            rank,
            if new_record { ", new record" } else { "" }
        );
        self.push_event(GameEvent::GameOver {
            score,
            high_score,
            new_record,
            rank,
        });
        true
    }
}

/// First obstacle id whose hitbox overlaps `hitbox`, in id order
pub fn first_overlap<'a, I>(hitbox: &Aabb, obstacles: I) -> Option<u32>
where
    I: IntoIterator<Item = &'a super::state::Obstacle>,
{
    obstacles
        .into_iter()
        .find(|o| o.hitbox().intersects(hitbox))
        .map(|o| o.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawner::ObstacleDescriptor;
    use crate::sim::state::ObstacleKind;
    use crate::tuning::Tuning;

    fn running() -> GameState {
        let mut state = GameState::new(3, Tuning::default());
        state.on_trigger_overlap();
        state.on_trigger_overlap();
        while !state.warmup_tick() {}
        state.drain_events();
        state
    }

    #[test]
    fn test_collision_ends_run() {
        let mut state = running();
        for _ in 0..150 {
            state.score_tick();
        }
        assert!(state.difficulty.speed() > 20.0);

        assert!(state.on_collision());
        assert_eq!(state.run_state(), RunState::GameOver);
        assert_eq!(state.high_scores.best(), 150);
        assert_eq!(state.score.value(), 0);
        assert_eq!(state.difficulty.speed(), 20.0);
        assert_eq!(state.spawner.timer(), 0.0);
        assert!(state.physics_paused);
        assert!(state.animations_paused);
        assert!(state.hud.game_over.visible);
        assert!(state.hud.high_score.visible);
        assert_eq!(state.hud.high_score.text, "Top: 00150");
        assert_eq!(state.player.animation, Animation::Hurt);
        assert!(state.events().contains(&GameEvent::GameOver {
            score: 150,
            high_score: 150,
            new_record: true,
            rank: 1,
        }));
    }

    #[test]
    fn test_second_collision_ignored() {
        let mut state = running();
        for _ in 0..10 {
            state.score_tick();
        }
        assert!(state.on_collision());
        state.drain_events();

        assert!(!state.on_collision());
        assert!(state.drain_events().is_empty());
        assert_eq!(state.high_scores.best(), 10);
        assert_eq!(state.high_scores.runs().len(), 1);
    }

    #[test]
    fn test_collision_before_running_ignored() {
        let mut state = GameState::new(3, Tuning::default());
        assert!(!state.on_collision());
        assert_eq!(state.run_state(), RunState::Idle);
        assert!(!state.hud.game_over.visible);
    }

    #[test]
    fn test_lower_score_keeps_high_score() {
        let mut state = running();
        for _ in 0..150 {
            state.score_tick();
        }
        state.on_collision();
        state.restart();
        for _ in 0..40 {
            state.score_tick();
        }
        state.drain_events();
        state.on_collision();
        assert_eq!(state.high_scores.best(), 150);
        assert_eq!(state.hud.high_score.text, "Top: 00150");
        assert!(state.events().contains(&GameEvent::GameOver {
            score: 40,
            high_score: 150,
            new_record: false,
            rank: 2,
        }));
    }

    #[test]
    fn test_first_overlap() {
        let mut state = GameState::new(3, Tuning::default());
        state.place_obstacle(ObstacleDescriptor {
            kind: ObstacleKind::CactusSmall1,
            offset: 0.0,
            altitude: None,
        });
        let id = state.obstacles[0].id;
        assert_eq!(first_overlap(&state.player.hitbox(), &state.obstacles), None);

        state.obstacles[0].pos.x = 40.0;
        assert_eq!(first_overlap(&state.player.hitbox(), &state.obstacles), Some(id));

        // Ducking under a high bird
        state.obstacles[0].kind = ObstacleKind::Bird;
        state.obstacles[0].pos.y = 300.0 - 50.0;
        state.obstacles[0].hitbox_height = 77.0 / 1.5;
        state.obstacles[0].hitbox_offset_y = 0.0;
        state.player.body_height = 58.0;
        state.player.body_offset_y = 34.0;
        assert_eq!(first_overlap(&state.player.hitbox(), &state.obstacles), None);
    }
}
