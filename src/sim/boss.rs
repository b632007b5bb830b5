//! Boss encounter state machine
//!
//! Dormant -> Active once the level threshold is reached, Active ->
//! Defeated when star gifts drain its hp, Defeated -> Dormant once the
//! player levels past the level it was beaten on.

use super::progression::ease_spawn_interval;
use super::rng::RandomSource;
use super::spawner::spawn_hazard;
use super::state::{BossPhase, GameEvent, GameState};
use crate::consts::*;

/// Hit points for an encounter starting at `level`
pub fn hp_for_level(level: u32, boss_level: u32) -> u32 {
    BOSS_BASE_HP + level.saturating_sub(boss_level) / BOSS_HP_LEVEL_STEP
}

/// Seconds between throws for an encounter starting at `level`
pub fn attack_interval_for_level(level: u32, boss_level: u32) -> f32 {
    let levels_past = level.saturating_sub(boss_level) as f32;
    BOSS_BASE_ATTACK_INTERVAL + levels_past * BOSS_ATTACK_INTERVAL_PER_LEVEL
}

/// Upper bound on hazards per attack at `level`
pub fn max_throws_for_level(level: u32) -> u32 {
    (1 + level.saturating_sub(2) / 3).min(BOSS_MAX_THROWS)
}

/// Advance the boss for one tick: phase transitions, patrol and attacks
pub fn update<R: RandomSource>(
    state: &mut GameState,
    rng: &mut R,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    match state.boss.phase {
        BossPhase::Dormant => {
            if state.level >= state.tuning.boss_level {
                activate(state, events);
            }
        }
        BossPhase::Active => {
            patrol(state, dt);
            let interval = state.boss.attack_interval;
            if state.boss.attack_timer.fire(dt, interval) {
                attack(state, rng);
            }
        }
        BossPhase::Defeated { at_level } => {
            if state.level > at_level {
                log::debug!("boss stirs again at level {}", state.level);
                state.boss.phase = BossPhase::Dormant;
            }
        }
    }
}

fn activate(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let level = state.level;
    let boss_level = state.tuning.boss_level;
    let stage_width = state.tuning.stage_width;
    let boss = &mut state.boss;

    boss.phase = BossPhase::Active;
    boss.hp = hp_for_level(level, boss_level);
    boss.max_hp = boss.hp.max(1);
    boss.pos.x = stage_width - BOSS_EDGE_MARGIN;
    boss.vel_x = -BOSS_SPEED;
    boss.attack_interval = attack_interval_for_level(level, boss_level);
    boss.attack_timer.reset();

    log::debug!(
        "boss active at level {level}: hp {} attack every {:.1}s",
        boss.hp,
        boss.attack_interval
    );
    events.push(GameEvent::BossActivated { level, hp: boss.hp });
}

fn patrol(state: &mut GameState, dt: f32) {
    let max_x = state.tuning.stage_width - BOSS_EDGE_MARGIN;
    let boss = &mut state.boss;
    boss.pos.x += boss.vel_x * dt;
    if boss.pos.x < BOSS_EDGE_MARGIN {
        boss.vel_x = boss.vel_x.abs();
    } else if boss.pos.x > max_x {
        boss.vel_x = -boss.vel_x.abs();
    }
}

fn attack<R: RandomSource>(state: &mut GameState, rng: &mut R) {
    let throws = rng.range_inclusive(1, max_throws_for_level(state.level) as i32);
    for _ in 0..throws {
        let from_x = state.boss.pos.x
            + rng.range_inclusive(-HAZARD_SPAWN_JITTER, HAZARD_SPAWN_JITTER) as f32;
        spawn_hazard(state, rng, from_x);
    }
}

/// Apply a caught star to the boss; no effect unless it is active. Defeat
/// awards the bonus and eases the cadence.
pub fn strike(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.boss.is_active() {
        return;
    }

    state.boss.hp = state.boss.hp.saturating_sub(1);
    if state.boss.hp > 0 {
        events.push(GameEvent::BossDamaged { hp: state.boss.hp });
        return;
    }

    let bonus = state.tuning.boss_bonus;
    state.boss.phase = BossPhase::Defeated {
        at_level: state.level,
    };
    state.score += bonus;
    ease_spawn_interval(state);
    log::debug!("boss defeated at level {} (+{bonus})", state.level);
    events.push(GameEvent::BossDamaged { hp: 0 });
    events.push(GameEvent::BossDefeated { bonus });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;
    use crate::tuning::Tuning;

    fn state_at_level(level: u32) -> GameState {
        let mut state = GameState::new(Tuning::default());
        state.start();
        state.level = level;
        state.score = (level - 1) * 50;
        state
    }

    #[test]
    fn test_scaling_formulas() {
        assert_eq!(hp_for_level(5, 5), 2);
        assert_eq!(hp_for_level(7, 5), 2);
        assert_eq!(hp_for_level(8, 5), 3);
        assert_eq!(hp_for_level(11, 5), 4);
        assert!((attack_interval_for_level(5, 5) - 2.2).abs() < 1e-5);
        assert!((attack_interval_for_level(8, 5) - 2.8).abs() < 1e-5);
        assert_eq!(max_throws_for_level(2), 1);
        assert_eq!(max_throws_for_level(5), 2);
        assert_eq!(max_throws_for_level(20), 2);
    }

    #[test]
    fn test_stays_dormant_below_threshold() {
        let mut state = state_at_level(4);
        let mut rng = ScriptedRng::constant(0.5);
        let mut events = Vec::new();
        update(&mut state, &mut rng, 0.016, &mut events);
        assert_eq!(state.boss.phase, BossPhase::Dormant);
        assert_eq!(state.boss.hp, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_activation_at_level_five() {
        let mut state = state_at_level(5);
        let mut rng = ScriptedRng::constant(0.5);
        let mut events = Vec::new();
        update(&mut state, &mut rng, 0.016, &mut events);

        assert!(state.boss.is_active());
        assert_eq!(state.boss.hp, 2);
        assert_eq!(state.boss.max_hp, 2);
        assert_eq!(state.boss.pos.x, 800.0 - BOSS_EDGE_MARGIN);
        assert_eq!(state.boss.attack_timer.elapsed, 0.0);
        assert_eq!(events, vec![GameEvent::BossActivated { level: 5, hp: 2 }]);
    }

    #[test]
    fn test_attack_throws_hazards() {
        let mut state = state_at_level(5);
        let mut rng = ScriptedRng::constant(0.99);
        let mut events = Vec::new();
        update(&mut state, &mut rng, 0.016, &mut events);

        // One attack interval later the boss throws max_throws hazards
        update(&mut state, &mut rng, 2.2, &mut events);
        assert_eq!(state.hazards.len(), 2);
        assert!(state.hazards.iter().all(|h| h.vel.y >= HAZARD_BASE_FALL_SPEED));
    }

    #[test]
    fn test_patrol_reverses_at_bounds() {
        let mut state = state_at_level(5);
        let mut rng = ScriptedRng::constant(0.5);
        let mut events = Vec::new();
        update(&mut state, &mut rng, 0.016, &mut events);

        state.boss.pos.x = BOSS_EDGE_MARGIN + 0.1;
        update(&mut state, &mut rng, 0.05, &mut events);
        assert!(state.boss.vel_x > 0.0);
        for _ in 0..2000 {
            update(&mut state, &mut rng, 0.05, &mut events);
            assert!(state.boss.pos.x > BOSS_EDGE_MARGIN - 2.0);
            assert!(state.boss.pos.x < 800.0 - BOSS_EDGE_MARGIN + 2.0);
        }
    }

    #[test]
    fn test_strike_until_defeated() {
        let mut state = state_at_level(5);
        let mut rng = ScriptedRng::constant(0.5);
        let mut events = Vec::new();
        update(&mut state, &mut rng, 0.016, &mut events);
        let score = state.score;
        let interval = state.spawn_interval;

        events.clear();

        strike(&mut state, &mut events);
        assert!(state.boss.is_active());
        assert_eq!(state.boss.hp, 1);
        assert_eq!(events, vec![GameEvent::BossDamaged { hp: 1 }]);

        strike(&mut state, &mut events);
        assert_eq!(state.boss.phase, BossPhase::Defeated { at_level: 5 });
        assert_eq!(state.boss.hp, 0);
        assert_eq!(state.score, score + 80);
        assert!((state.spawn_interval - (interval + 0.2)).abs() < 1e-5);
        assert_eq!(events.last(), Some(&GameEvent::BossDefeated { bonus: 80 }));

        // Nothing left to hit
        let seen = events.len();
        strike(&mut state, &mut events);
        assert_eq!(events.len(), seen);
        assert_eq!(state.score, score + 80);
    }

    #[test]
    fn test_reengages_after_next_level() {
        let mut state = state_at_level(5);
        let mut rng = ScriptedRng::constant(0.5);
        let mut events = Vec::new();
        update(&mut state, &mut rng, 0.016, &mut events);
        strike(&mut state, &mut events);
        strike(&mut state, &mut events);

        // Same level: stays down
        update(&mut state, &mut rng, 0.016, &mut events);
        assert_eq!(state.boss.phase, BossPhase::Defeated { at_level: 5 });

        state.level = 8;
        update(&mut state, &mut rng, 0.016, &mut events);
        assert_eq!(state.boss.phase, BossPhase::Dormant);
        update(&mut state, &mut rng, 0.016, &mut events);
        assert!(state.boss.is_active());
        assert_eq!(state.boss.hp, 3);
    }
}
