//! Periodic emission of gifts and hazards
//!
//! All three emitters (level cadence, the dropper's own drops, boss attacks)
//! share [`Emitter`]: accumulate elapsed time, fire once the interval is
//! reached, then start over from zero.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::{GameState, Gift, GiftKind, Hazard, HazardKind};
use crate::consts::*;

/// Accumulator-based periodic trigger
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Emitter {
    /// Seconds accumulated since the last fire
    pub elapsed: f32,
}

impl Emitter {
    /// Advance by `dt`; returns true (and rewinds to zero) once `interval` is reached
    pub fn fire(&mut self, dt: f32, interval: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Run the level cadence emitter and the dropper's own drop timer
pub fn emit_gifts<R: RandomSource>(state: &mut GameState, rng: &mut R, dt: f32) {
    let interval = state.spawn_interval;
    if state.spawn_timer.fire(dt, interval) {
        let jitter = rng.range_inclusive(-CADENCE_JITTER, CADENCE_JITTER);
        let from_x = state.dropper.pos.x + jitter as f32;
        spawn_gift(state, rng, from_x);
    }

    let drop_interval = state.dropper.drop_interval;
    if state.dropper.drop_timer.fire(dt, drop_interval) {
        let jitter = rng.range_inclusive(-DROP_JITTER, DROP_JITTER);
        let from_x = state.dropper.pos.x + jitter as f32;
        spawn_gift(state, rng, from_x);
    }
}

/// Drop one gift centered (before clamping) on `from_x`, just under the dropper
pub fn spawn_gift<R: RandomSource>(state: &mut GameState, rng: &mut R, from_x: f32) -> u32 {
    let size = rng.range_inclusive(GIFT_MIN_SIZE, GIFT_MAX_SIZE) as f32;
    let max_x = (state.tuning.stage_width - GIFT_WALL_MARGIN - size).max(GIFT_WALL_MARGIN);
    let x = (from_x - size / 2.0).round().clamp(GIFT_WALL_MARGIN, max_x);
    let y = state.dropper.bottom() + GIFT_DROP_GAP - size;
    let kind = rng.pick(&GiftKind::ALL);

    let tuning = &state.tuning;
    let fall_speed = state.base_fall_speed
        + rng.uniform(0.0, tuning.gift_speed_jitter)
        + (state.level - 1) as f32 * tuning.gift_speed_per_level;

    let id = state.next_entity_id();
    log::trace!("gift {id} ({kind:?}) at x={x} speed={fall_speed:.1}");
    state.gifts.push(Gift {
        id,
        pos: Vec2::new(x, y),
        size,
        fall_speed,
        kind,
    });
    id
}

/// Throw one hazard aimed at `from_x`, released from the boss's underside
pub fn spawn_hazard<R: RandomSource>(state: &mut GameState, rng: &mut R, from_x: f32) -> u32 {
    let fall_speed = HAZARD_BASE_FALL_SPEED + rng.uniform(0.0, HAZARD_FALL_JITTER);
    let mut drift = rng.range_inclusive(-HAZARD_MAX_DRIFT, HAZARD_MAX_DRIFT) as f32;
    if drift == 0.0 {
        drift = rng.uniform(-HAZARD_FALLBACK_DRIFT, HAZARD_FALLBACK_DRIFT);
    }
    let pos = Vec2::new(from_x - HAZARD_SPAWN_OFFSET, state.boss.bottom());

    let id = state.next_entity_id();
    log::trace!("hazard {id} at x={} drift={drift}", pos.x);
    state.hazards.push(Hazard {
        id,
        pos,
        size: HAZARD_SIZE,
        vel: Vec2::new(drift, fall_speed),
        kind: HazardKind::Spike,
    });
    id
}
