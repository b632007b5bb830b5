//! Data-driven game balance
//!
//! Every number that shapes difficulty lives here so it can be tweaked from a
//! JSON file without touching the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::PLAYER_WIDTH;

/// Reasons a tuning file is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("stage must be at least {min_width}x1 pixels, got {width}x{height}")]
    StageTooSmall {
        width: f32,
        height: f32,
        min_width: f32,
    },
    #[error("`{field}` must be greater than zero")]
    NotPositive { field: &'static str },
    #[error("minimum spawn interval {floor}s exceeds the starting interval {start}s")]
    FloorAboveStart { floor: f32, start: f32 },
}

/// Game balance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Stage ===
    pub stage_width: f32,
    pub stage_height: f32,

    // === Run ===
    /// Lives at the start of a run
    pub starting_lives: u32,
    /// Cadence emitter interval at level 1 (seconds)
    pub spawn_interval: f32,
    /// Lower bound for the cadence interval (seconds)
    pub min_spawn_interval: f32,
    /// Interval reduction per level gained (seconds)
    pub spawn_interval_step: f32,
    /// Interval relief granted when the boss is defeated (seconds)
    pub boss_defeat_ease: f32,
    /// Dropper's own drop interval (seconds)
    pub dropper_interval: f32,

    // === Gift speed ===
    /// Base fall speed at level 1 (pixels/s)
    pub base_fall_speed: f32,
    /// Added to the base fall speed per level gained
    pub fall_speed_step: f32,
    /// Extra per-gift speed per level above 1
    pub gift_speed_per_level: f32,
    /// Upper bound of the random per-gift speed bonus
    pub gift_speed_jitter: f32,

    // === Scoring ===
    pub points_per_level: u32,
    pub gift_points: u32,
    pub star_points: u32,
    pub boss_bonus: u32,
    /// First level at which the boss engages
    pub boss_level: u32,

    // === Timing and bounds ===
    /// Upper bound on a single integration step (seconds)
    pub max_frame_dt: f32,
    /// How far below the stage a gift falls before it counts as missed
    pub gift_miss_margin: f32,
    /// How far below the stage a hazard falls before it is discarded
    pub hazard_exit_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            stage_width: 800.0,
            stage_height: 600.0,

            starting_lives: 5,
            spawn_interval: 1.6,
            min_spawn_interval: 0.4,
            spawn_interval_step: 0.12,
            boss_defeat_ease: 0.2,
            dropper_interval: 1.4,

            base_fall_speed: 60.0,
            fall_speed_step: 18.0,
            gift_speed_per_level: 12.0,
            gift_speed_jitter: 40.0,

            points_per_level: 50,
            gift_points: 10,
            star_points: 15,
            boss_bonus: 80,
            boss_level: 5,

            max_frame_dt: 0.05,
            gift_miss_margin: 20.0,
            hazard_exit_margin: 40.0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the values the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.stage_width < PLAYER_WIDTH || self.stage_height <= 0.0 {
            return Err(TuningError::StageTooSmall {
                width: self.stage_width,
                height: self.stage_height,
                min_width: PLAYER_WIDTH,
            });
        }

        let positive = [
            ("spawn_interval", self.spawn_interval),
            ("min_spawn_interval", self.min_spawn_interval),
            ("dropper_interval", self.dropper_interval),
            ("base_fall_speed", self.base_fall_speed),
            ("max_frame_dt", self.max_frame_dt),
        ];
        if let Some(&(field, _)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(TuningError::NotPositive { field });
        }
        if self.starting_lives == 0 {
            return Err(TuningError::NotPositive {
                field: "starting_lives",
            });
        }
        if self.points_per_level == 0 {
            return Err(TuningError::NotPositive {
                field: "points_per_level",
            });
        }
        if self.boss_level == 0 {
            return Err(TuningError::NotPositive { field: "boss_level" });
        }

        if self.min_spawn_interval > self.spawn_interval {
            return Err(TuningError::FloorAboveStart {
                floor: self.min_spawn_interval,
                start: self.spawn_interval,
            });
        }
        Ok(())
    }

    /// Sled center height
    pub fn player_y(&self) -> f32 {
        self.stage_height - crate::consts::PLAYER_BOTTOM_OFFSET
    }
}
