//! Player intents and animation selection
//!
//! The core never touches physics directly. It sets velocity and collision
//! body dimensions on [`Player`] and the host applies them.

use super::state::{Animation, Player};
use crate::tuning::Tuning;

impl Player {
    /// Jump if standing on the floor. Returns true if the jump happened.
    pub fn try_jump(&mut self, tuning: &Tuning) -> bool {
        if !self.on_floor {
            return false;
        }
        self.stand(tuning);
        self.animation = Animation::Idle;
        self.vel.y = tuning.jump_velocity;
        true
    }

    /// Duck while held and grounded, stand up as soon as released
    pub fn apply_duck(&mut self, held: bool, tuning: &Tuning) {
        if held {
            if self.on_floor {
                self.body_height = tuning.duck_height;
                self.body_offset_y = tuning.duck_offset;
            }
        } else {
            self.stand(tuning);
        }
    }

    fn stand(&mut self, tuning: &Tuning) {
        self.body_height = tuning.stand_height;
        self.body_offset_y = 0.0;
    }

    #[inline]
    pub fn is_ducking(&self, tuning: &Tuning) -> bool {
        self.body_height <= tuning.duck_height
    }

    /// Pick the animation for this frame from movement and body shape
    pub fn select_animation(&mut self, tuning: &Tuning) {
        self.animation = if self.delta_abs_y > 0.0 {
            Animation::Idle
        } else if self.is_ducking(tuning) {
            Animation::DuckRun
        } else {
            Animation::Run
        };
    }
}
