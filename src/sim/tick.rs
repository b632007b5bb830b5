//! Per-frame simulation tick
//!
//! Core game loop that advances the state by one capped timestep.

use super::boss;
use super::collision::{catch_gifts, hazard_contacts, sweep_gifts, sweep_hazards};
use super::input::MoveIntent;
use super::progression::update_level;
use super::rng::RandomSource;
use super::spawner::emit_gifts;
use super::state::{GameEvent, GamePhase, GameState, GiftKind};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub intent: MoveIntent,
}

/// What a tick did
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// False when the state was not playing and nothing moved
    pub advanced: bool,
    /// The run ended during this tick; remaining steps were skipped
    pub terminated: bool,
    pub events: Vec<GameEvent>,
}

/// Advance the game state by `dt` seconds (capped by `max_frame_dt`)
pub fn tick<R: RandomSource>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
    dt: f32,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.phase != GamePhase::Playing {
        return outcome;
    }
    outcome.advanced = true;

    let dt = dt.clamp(0.0, state.tuning.max_frame_dt);
    state.elapsed += dt;

    // Dropper patrol
    let stage_width = state.tuning.stage_width;
    state.dropper.advance(dt, stage_width);

    // Spawning
    emit_gifts(state, rng, dt);

    // Boss
    boss::update(state, rng, dt, &mut outcome.events);

    // Player
    move_player(state, input.intent, dt);

    // Falling entities
    for gift in &mut state.gifts {
        gift.pos.y += gift.fall_speed * dt;
    }
    for hazard in &mut state.hazards {
        hazard.pos += hazard.vel * dt;
    }

    // Collisions
    let player_box = state.player.aabb();
    for gift in catch_gifts(&player_box, &mut state.gifts) {
        let points = match gift.kind {
            GiftKind::Star if state.boss.is_active() => state.tuning.star_points,
            _ => state.tuning.gift_points,
        };
        state.score += points;
        outcome.events.push(GameEvent::GiftCaught {
            id: gift.id,
            kind: gift.kind,
            points,
        });
        if gift.kind == GiftKind::Star {
            boss::strike(state, &mut outcome.events);
        }
    }

    // Progression, before any life loss can end the run
    update_level(state, &mut outcome.events);

    for hazard in hazard_contacts(&player_box, &mut state.hazards) {
        outcome.events.push(GameEvent::HazardHit { id: hazard.id });
        if lose_life(state, &mut outcome) {
            return outcome;
        }
    }

    // Stage exits
    let height = state.tuning.stage_height;
    for gift in sweep_gifts(&mut state.gifts, height + state.tuning.gift_miss_margin) {
        outcome.events.push(GameEvent::GiftMissed { id: gift.id });
        if lose_life(state, &mut outcome) {
            return outcome;
        }
    }
    sweep_hazards(&mut state.hazards, height + state.tuning.hazard_exit_margin);

    outcome
}

/// Apply the movement intent, keeping the sled on stage
fn move_player(state: &mut GameState, intent: MoveIntent, dt: f32) {
    let player = &mut state.player;
    let x = match intent {
        MoveIntent::Idle => player.pos.x,
        MoveIntent::Left => player.pos.x - player.speed * dt,
        MoveIntent::Right => player.pos.x + player.speed * dt,
        MoveIntent::PointAt(target) => target,
    };
    player.pos.x = player.clamp_x(x, state.tuning.stage_width);
}

/// Take one life; returns true when that ended the run
fn lose_life(state: &mut GameState, outcome: &mut TickOutcome) -> bool {
    state.lives = state.lives.saturating_sub(1);
    if state.lives > 0 {
        return false;
    }

    state.phase = GamePhase::GameOver;
    log::info!("Game over: score {} at level {}", state.score, state.level);
    outcome.events.push(GameEvent::GameOver {
        score: state.score,
        level: state.level,
    });
    outcome.terminated = true;
    true
}
