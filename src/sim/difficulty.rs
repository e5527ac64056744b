//! Run speed and its ramp
//!
//! One scalar drives world scroll, obstacle approach and spawn cadence, so
//! everything speeds up together.

/// Owns the difficulty scalar
#[derive(Debug, Clone)]
pub struct DifficultyController {
    base: f32,
    increment: f32,
    speed: f32,
}

impl DifficultyController {
    pub fn new(base: f32, increment: f32) -> Self {
        Self {
            base,
            increment,
            speed: base,
        }
    }

    /// Current run speed
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn base(&self) -> f32 {
        self.base
    }

    /// One step of the ramp (called per score tick while running)
    pub fn ramp(&mut self) {
        self.speed += self.increment;
    }

    /// Back to the base speed
    pub fn reset(&mut self) {
        self.speed = self.base;
    }
}
