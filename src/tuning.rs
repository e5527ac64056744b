//! Data-driven game balance
//!
//! Every constant the run core uses lives here so a version of the game is
//! just a different `Tuning`. Loaded from JSON, validated before use.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Game version presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameVersion {
    /// First release: slower base speed, tighter obstacle spacing
    Classic,
    /// Later release: faster base speed, wider obstacle spacing
    #[default]
    Turbo,
}

impl GameVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameVersion::Classic => "Classic",
            GameVersion::Turbo => "Turbo",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "v1" => Some(GameVersion::Classic),
            "turbo" | "v2" => Some(GameVersion::Turbo),
            _ => None,
        }
    }

    /// Base run speed for this version
    pub fn base_speed(&self) -> f32 {
        match self {
            GameVersion::Classic => 10.0,
            GameVersion::Turbo => 20.0,
        }
    }

    /// Horizontal spawn distance range past the right edge (min, max)
    pub fn spawn_distance(&self) -> (f32, f32) {
        match self {
            GameVersion::Classic => (600.0, 900.0),
            GameVersion::Turbo => (800.0, 1100.0),
        }
    }
}

/// Configuration problems detected by [`Tuning::validate`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("base speed must be positive, got {0}")]
    NonPositiveBaseSpeed(f32),
    #[error("speed increment must not be negative, got {0}")]
    NegativeSpeedIncrement(f32),
    #[error("spawn threshold must be positive, got {0}")]
    NonPositiveSpawnThreshold(f32),
    #[error("spawn coupling must be positive, got {0}")]
    NonPositiveSpawnCoupling(f32),
    #[error("spawn distance range is empty: min {min} > max {max}")]
    EmptySpawnDistance { min: f32, max: f32 },
    #[error("spawn roll needs at least one ground and one aerial outcome, got 1..={0}")]
    SpawnRollTooSmall(u32),
    #[error("warmup completes at width {complete} but the viewport is {viewport} wide")]
    WarmupThresholdBelowViewport { complete: f32, viewport: f32 },
    #[error("{name} interval must be positive, got {value} ms")]
    NonPositiveInterval { name: &'static str, value: f32 },
    #[error("aerial hitbox divisor must be at least 1, got {0}")]
    AerialHitboxDivisor(f32),
    #[error("duck body height {duck} must be below standing height {stand}")]
    DuckNotShorter { duck: f32, stand: f32 },
    #[error("invalid tuning json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game balance and layout constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Preset this tuning was derived from
    pub version: GameVersion,

    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Difficulty ===
    /// Run speed at the start of every run
    pub base_speed: f32,
    /// Added to run speed on every score tick
    pub speed_increment: f32,

    // === Spawning ===
    /// Multiplier applied to `dt * speed` before accumulating
    pub spawn_coupling: f32,
    /// Accumulated effective time that triggers a spawn
    pub spawn_threshold: f32,
    /// Spawn roll is uniform in `1..=spawn_roll_max`; the top value is aerial
    pub spawn_roll_max: u32,
    pub spawn_distance_min: f32,
    pub spawn_distance_max: f32,
    /// Aerial altitudes above the ground line
    pub aerial_altitudes: [f32; 2],
    /// Aerial collision height = sprite height / divisor
    pub aerial_hitbox_divisor: f32,
    /// Ground obstacle hitbox is pushed down by this much
    pub ground_hitbox_offset: f32,

    // === Warmup ===
    /// Initial ground strip width before warmup
    pub ground_start_width: f32,
    /// Ground width added per warmup tick
    pub warmup_ground_growth: f32,
    /// Ground width at which warmup completes (independent of viewport)
    pub warmup_complete_width: f32,
    /// Forward velocity applied to the player during warmup
    pub warmup_velocity: f32,
    pub warmup_interval_ms: f32,
    /// Initial y of the start trigger
    pub start_trigger_y: f32,

    // === Score ===
    pub score_interval_ms: f32,
    pub score_digits: usize,
    /// Milestone event every N points (0 disables)
    pub score_milestone: u32,

    // === Player ===
    pub jump_velocity: f32,
    pub stand_height: f32,
    pub duck_height: f32,
    pub duck_offset: f32,

    /// Longest frame delta the session will accept in one step
    pub max_frame_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from_version(GameVersion::default())
    }
}

impl Tuning {
    /// Create tuning from a version preset
    pub fn from_version(version: GameVersion) -> Self {
        let (spawn_distance_min, spawn_distance_max) = version.spawn_distance();
        Self {
            version,

            viewport_width: 600.0,
            viewport_height: 300.0,

            base_speed: version.base_speed(),
            speed_increment: 0.01,

            spawn_coupling: 0.08,
            spawn_threshold: 1500.0,
            spawn_roll_max: 7,
            spawn_distance_min,
            spawn_distance_max,
            aerial_altitudes: [22.0, 50.0],
            aerial_hitbox_divisor: 1.5,
            ground_hitbox_offset: 10.0,

            ground_start_width: 88.0,
            warmup_ground_growth: 34.0,
            warmup_complete_width: 1000.0,
            warmup_velocity: 80.0,
            warmup_interval_ms: 1000.0 / 60.0,
            start_trigger_y: 10.0,

            score_interval_ms: 100.0,
            score_digits: 5,
            score_milestone: 100,

            jump_velocity: -1600.0,
            stand_height: 92.0,
            duck_height: 58.0,
            duck_offset: 34.0,

            max_frame_ms: 100.0,
        }
    }

    /// Parse tuning from JSON. Missing fields fall back to the default preset.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the constants describe a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.base_speed <= 0.0 {
            return Err(TuningError::NonPositiveBaseSpeed(self.base_speed));
        }
        if self.speed_increment < 0.0 {
            return Err(TuningError::NegativeSpeedIncrement(self.speed_increment));
        }
        if self.spawn_threshold <= 0.0 {
            return Err(TuningError::NonPositiveSpawnThreshold(self.spawn_threshold));
        }
        if self.spawn_coupling <= 0.0 {
            return Err(TuningError::NonPositiveSpawnCoupling(self.spawn_coupling));
        }
        if self.spawn_distance_min > self.spawn_distance_max {
            return Err(TuningError::EmptySpawnDistance {
                min: self.spawn_distance_min,
                max: self.spawn_distance_max,
            });
        }
        if self.spawn_roll_max < 2 {
            return Err(TuningError::SpawnRollTooSmall(self.spawn_roll_max));
        }
        if self.warmup_complete_width < self.viewport_width {
            return Err(TuningError::WarmupThresholdBelowViewport {
                complete: self.warmup_complete_width,
                viewport: self.viewport_width,
            });
        }
        for (name, value) in [
            ("warmup", self.warmup_interval_ms),
            ("score", self.score_interval_ms),
            ("max frame", self.max_frame_ms),
        ] {
            if value <= 0.0 {
                return Err(TuningError::NonPositiveInterval { name, value });
            }
        }
        if self.aerial_hitbox_divisor < 1.0 {
            return Err(TuningError::AerialHitboxDivisor(self.aerial_hitbox_divisor));
        }
        if self.duck_height >= self.stand_height {
            return Err(TuningError::DuckNotShorter {
                duck: self.duck_height,
                stand: self.stand_height,
            });
        }
        Ok(())
    }
}
