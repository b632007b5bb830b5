//! Gift Rush - catch the falling gifts, dodge the boss's spikes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, boss, scoring)
//! - `driver`: Frame clock and command surface (start/pause/reset, input events)
//! - `tuning`: Data-driven game balance
//! - `platform`: Browser bridge (wasm32 only)

pub mod driver;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod sim;
pub mod tuning;

pub use driver::{FrameDriver, GameOverReport};
pub use tuning::{Tuning, TuningError};

/// Entity geometry and fixed placement constants
pub mod consts {
    /// Player sled size (centered box)
    pub const PLAYER_WIDTH: f32 = 110.0;
    pub const PLAYER_HEIGHT: f32 = 34.0;
    /// Distance from the stage bottom to the sled center
    pub const PLAYER_BOTTOM_OFFSET: f32 = 60.0;
    /// Maximum sled speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 380.0;

    /// Dropper (Santa's sleigh)
    pub const DROPPER_Y: f32 = 60.0;
    pub const DROPPER_WIDTH: f32 = 84.0;
    pub const DROPPER_HEIGHT: f32 = 28.0;
    pub const DROPPER_SPEED: f32 = 60.0;
    /// Dropper starts at this fraction of the stage width
    pub const DROPPER_START_FRACTION: f32 = 0.15;
    /// Dropper turns around this far from either stage edge
    pub const DROPPER_EDGE_MARGIN: f32 = 40.0;

    /// Boss (Krampus)
    pub const BOSS_Y: f32 = 120.0;
    pub const BOSS_WIDTH: f32 = 96.0;
    pub const BOSS_HEIGHT: f32 = 46.0;
    pub const BOSS_SPEED: f32 = 30.0;
    /// Boss spawns and patrols this far in from the stage edges
    pub const BOSS_EDGE_MARGIN: f32 = 120.0;
    pub const BOSS_BASE_HP: u32 = 2;
    /// One extra hit point every N levels past activation
    pub const BOSS_HP_LEVEL_STEP: u32 = 3;
    pub const BOSS_BASE_ATTACK_INTERVAL: f32 = 2.2;
    pub const BOSS_ATTACK_INTERVAL_PER_LEVEL: f32 = 0.2;
    pub const BOSS_MAX_THROWS: u32 = 2;

    /// Gifts
    pub const GIFT_MIN_SIZE: i32 = 22;
    pub const GIFT_MAX_SIZE: i32 = 44;
    /// Gifts never spawn closer than this to a side wall
    pub const GIFT_WALL_MARGIN: f32 = 12.0;
    /// Gap between the dropper's underside and a fresh gift's bottom edge
    pub const GIFT_DROP_GAP: f32 = 6.0;
    /// Horizontal jitter of the cadence emitter and the dropper's own drops
    pub const CADENCE_JITTER: i32 = 24;
    pub const DROP_JITTER: i32 = 18;

    /// Hazards
    pub const HAZARD_SIZE: f32 = 18.0;
    pub const HAZARD_BASE_FALL_SPEED: f32 = 120.0;
    pub const HAZARD_FALL_JITTER: f32 = 60.0;
    pub const HAZARD_MAX_DRIFT: i32 = 40;
    /// Reroll range (+/-) for a throw whose drift came out zero
    pub const HAZARD_FALLBACK_DRIFT: f32 = 15.0;
    pub const HAZARD_SPAWN_JITTER: i32 = 24;
    /// Hazards are thrown slightly left of the aim point
    pub const HAZARD_SPAWN_OFFSET: f32 = 10.0;
}
