//! Scoring and difficulty progression

use super::state::{GameEvent, GameState};

/// Level implied by a score
#[inline]
pub fn level_for_score(score: u32, points_per_level: u32) -> u32 {
    score / points_per_level.max(1) + 1
}

/// Tighten the cadence one step, never below the floor
pub fn tighten_spawn_interval(state: &mut GameState) {
    let t = &state.tuning;
    state.spawn_interval = (state.spawn_interval - t.spawn_interval_step).max(t.min_spawn_interval);
}

/// Relax the cadence after a boss defeat, clamped to the same floor
pub fn ease_spawn_interval(state: &mut GameState) {
    let t = &state.tuning;
    state.spawn_interval = (state.spawn_interval + t.boss_defeat_ease).max(t.min_spawn_interval);
}

/// Bring `level` up to date with `score`. Crossing one or several
/// thresholds at once counts as a single level-up: one difficulty step and
/// one `LevelUp` event. Levels never go down within a run.
pub fn update_level(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let target = level_for_score(state.score, state.tuning.points_per_level);
    if target <= state.level {
        return;
    }

    state.level = target;
    tighten_spawn_interval(state);
    state.base_fall_speed += state.tuning.fall_speed_step;
    log::debug!(
        "level {} (spawn every {:.2}s, base speed {:.0})",
        state.level,
        state.spawn_interval,
        state.base_fall_speed
    );
    events.push(GameEvent::LevelUp { level: state.level });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn playing_state() -> GameState {
        let mut state = GameState::new(Tuning::default());
        state.start();
        state
    }

    #[test]
    fn test_level_formula() {
        assert_eq!(level_for_score(0, 50), 1);
        assert_eq!(level_for_score(49, 50), 1);
        assert_eq!(level_for_score(50, 50), 2);
        assert_eq!(level_for_score(55, 50), 2);
        assert_eq!(level_for_score(250, 50), 6);
    }

    #[test]
    fn test_level_up_adjusts_difficulty() {
        let mut state = playing_state();
        let mut events = Vec::new();
        state.score = 55;
        update_level(&mut state, &mut events);

        assert_eq!(state.level, 2);
        assert!((state.spawn_interval - 1.48).abs() < 1e-5);
        assert!((state.base_fall_speed - 78.0).abs() < 1e-5);
        assert_eq!(events, vec![GameEvent::LevelUp { level: 2 }]);
    }

    #[test]
    fn test_no_change_without_threshold() {
        let mut state = playing_state();
        let mut events = Vec::new();
        state.score = 45;
        update_level(&mut state, &mut events);
        assert_eq!(state.level, 1);
        assert_eq!(state.spawn_interval, 1.6);
        assert!(events.is_empty());
    }

    #[test]
    fn test_multi_level_jump_is_one_step() {
        let mut state = playing_state();
        let mut events = Vec::new();
        state.score = 110;
        update_level(&mut state, &mut events);
        assert_eq!(state.level, 3);
        assert!((state.spawn_interval - 1.48).abs() < 1e-5);
        assert!((state.base_fall_speed - 78.0).abs() < 1e-5);
        assert_eq!(events, vec![GameEvent::LevelUp { level: 3 }]);

        // Already up to date: nothing more happens
        update_level(&mut state, &mut events);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_interval_floor() {
        let mut state = playing_state();
        state.spawn_interval = 0.45;
        tighten_spawn_interval(&mut state);
        assert_eq!(state.spawn_interval, 0.4);
        tighten_spawn_interval(&mut state);
        assert_eq!(state.spawn_interval, 0.4);

        ease_spawn_interval(&mut state);
        assert!((state.spawn_interval - 0.6).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn level_tracks_score(steps in proptest::collection::vec(0u32..120, 1..40)) {
            let mut state = playing_state();
            let mut events = Vec::new();
            let mut last_level = state.level;
            for gain in steps {
                state.score += gain;
                update_level(&mut state, &mut events);
                prop_assert_eq!(state.level, state.score / 50 + 1);
                prop_assert!(state.level >= last_level);
                prop_assert!(state.spawn_interval >= 0.4);
                last_level = state.level;
            }
        }
    }
}
