//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]; the player, dropper and
//! boss are singletons rebuilt on every start/reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawner::Emitter;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started (fresh load or after reset)
    Ready,
    /// Active gameplay
    Playing,
    /// Run frozen by the player
    Paused,
    /// Lives ran out
    GameOver,
}

/// The player's sled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center of the sled; y never changes
    pub pos: Vec2,
    pub half_extents: Vec2,
    /// Maximum horizontal speed (pixels/s)
    pub speed: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.stage_width / 2.0, tuning.player_y()),
            half_extents: Vec2::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0),
            speed: PLAYER_SPEED,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.half_extents)
    }

    /// Clamp an x coordinate so the sled stays fully on stage
    pub fn clamp_x(&self, x: f32, stage_width: f32) -> f32 {
        x.clamp(self.half_extents.x, stage_width - self.half_extents.x)
    }
}

/// Santa's sleigh, patrolling the top of the stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dropper {
    /// Center of the sleigh
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity (pixels/s); sign is the travel direction
    pub vel_x: f32,
    /// The sleigh's own drop timer, independent of the level cadence
    pub drop_timer: Emitter,
    pub drop_interval: f32,
}

impl Dropper {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.stage_width * DROPPER_START_FRACTION, DROPPER_Y),
            size: Vec2::new(DROPPER_WIDTH, DROPPER_HEIGHT),
            vel_x: DROPPER_SPEED,
            drop_timer: Emitter::default(),
            drop_interval: tuning.dropper_interval,
        }
    }

    /// Move horizontally, turning around at the stage margins
    pub fn advance(&mut self, dt: f32, stage_width: f32) {
        self.pos.x += self.vel_x * dt;
        if self.pos.x < DROPPER_EDGE_MARGIN {
            self.vel_x = self.vel_x.abs();
        } else if self.pos.x > stage_width - DROPPER_EDGE_MARGIN {
            self.vel_x = -self.vel_x.abs();
        }
    }

    /// y of the sleigh's underside
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Boss encounter phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Waiting for the activation level
    Dormant,
    /// Patrolling and throwing hazards
    Active,
    /// Beaten at `at_level`; stays down until the player levels past it
    Defeated { at_level: u32 },
}

/// Krampus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub phase: BossPhase,
    /// Center of the boss
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_x: f32,
    pub hp: u32,
    pub max_hp: u32,
    pub attack_timer: Emitter,
    /// Seconds between throws
    pub attack_interval: f32,
}

impl Boss {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: BossPhase::Dormant,
            pos: Vec2::new(tuning.stage_width - BOSS_EDGE_MARGIN, BOSS_Y),
            size: Vec2::new(BOSS_WIDTH, BOSS_HEIGHT),
            vel_x: -BOSS_SPEED,
            hp: 0,
            max_hp: 0,
            attack_timer: Emitter::default(),
            attack_interval: BOSS_BASE_ATTACK_INTERVAL,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == BossPhase::Active
    }

    /// y of the boss's underside, where hazards are released
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Gift variants; only `Star` has a gameplay effect (it hurts the boss)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GiftKind {
    Box,
    Star,
    Ornament,
}

impl GiftKind {
    pub const ALL: [GiftKind; 3] = [GiftKind::Box, GiftKind::Star, GiftKind::Ornament];
}

/// A falling gift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Edge length (gifts are square)
    pub size: f32,
    /// Downward speed (pixels/s), always positive
    pub fall_speed: f32,
    pub kind: GiftKind,
}

impl Gift {
    pub fn aabb(&self) -> Aabb {
        let half = Vec2::splat(self.size / 2.0);
        Aabb::new(self.pos + half, half)
    }
}

/// Hazard variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Spike,
}

/// A thrown hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    /// x = horizontal drift, y = fall speed (pixels/s)
    pub vel: Vec2,
    pub kind: HazardKind,
}

impl Hazard {
    pub fn aabb(&self) -> Aabb {
        let half = Vec2::splat(self.size / 2.0);
        Aabb::new(self.pos + half, half)
    }
}

/// Something that happened during a tick, for HUD/audio/visual cues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GiftCaught { id: u32, kind: GiftKind, points: u32 },
    GiftMissed { id: u32 },
    HazardHit { id: u32 },
    BossActivated { level: u32, hp: u32 },
    BossDamaged { hp: u32 },
    BossDefeated { bonus: u32 },
    LevelUp { level: u32 },
    GameOver { score: u32, level: u32 },
}

/// Complete state of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    /// Current cadence emitter interval (seconds)
    pub spawn_interval: f32,
    /// Base fall speed for new gifts (pixels/s)
    pub base_fall_speed: f32,
    pub spawn_timer: Emitter,
    pub player: Player,
    pub dropper: Dropper,
    pub boss: Boss,
    /// Falling gifts, in spawn order
    pub gifts: Vec<Gift>,
    /// Falling hazards, in spawn order
    pub hazards: Vec<Hazard>,
    /// Simulated seconds since the run started
    pub elapsed: f32,
    next_id: u32,
}

impl GameState {
    /// Create an idle (not started) state with default values
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Ready,
            score: 0,
            lives: tuning.starting_lives,
            level: 1,
            spawn_interval: tuning.spawn_interval,
            base_fall_speed: tuning.base_fall_speed,
            spawn_timer: Emitter::default(),
            player: Player::new(&tuning),
            dropper: Dropper::new(&tuning),
            boss: Boss::new(&tuning),
            gifts: Vec::new(),
            hazards: Vec::new(),
            elapsed: 0.0,
            next_id: 1,
            tuning,
        }
    }

    /// Restore defaults and stop; entities and boss are cleared
    pub fn reset(&mut self) {
        let tuning = self.tuning.clone();
        *self = Self::new(tuning);
    }

    /// Begin a fresh run
    pub fn start(&mut self) {
        self.reset();
        self.phase = GamePhase::Playing;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::Paused)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
