//! Read-only view of a frame for the renderer

use glam::Vec2;
use serde::Serialize;

use super::state::{BossPhase, GamePhase, GameState, Gift, Hazard};

/// Boss as the renderer needs it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BossView {
    pub phase: BossPhase,
    pub active: bool,
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: u32,
    pub max_hp: u32,
}

/// Immutable per-frame snapshot of the simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub running: bool,
    pub paused: bool,
    pub game_over: bool,
    /// Set on the frame a level was gained (border flash cue)
    pub level_up: bool,
    pub stage: Vec2,
    pub player_pos: Vec2,
    pub player_size: Vec2,
    pub dropper_pos: Vec2,
    pub dropper_size: Vec2,
    pub boss: BossView,
    pub gifts: Vec<Gift>,
    pub hazards: Vec<Hazard>,
}

impl Snapshot {
    pub fn capture(state: &GameState, level_up: bool) -> Self {
        Self {
            score: state.score,
            lives: state.lives,
            level: state.level,
            running: state.is_running(),
            paused: state.is_paused(),
            game_over: state.phase == GamePhase::GameOver,
            level_up,
            stage: Vec2::new(state.tuning.stage_width, state.tuning.stage_height),
            player_pos: state.player.pos,
            player_size: state.player.half_extents * 2.0,
            dropper_pos: state.dropper.pos,
            dropper_size: state.dropper.size,
            boss: BossView {
                phase: state.boss.phase,
                active: state.boss.is_active(),
                pos: state.boss.pos,
                size: state.boss.size,
                hp: state.boss.hp,
                max_hp: state.boss.max_hp,
            },
            gifts: state.gifts.clone(),
            hazards: state.hazards.clone(),
        }
    }

    /// JSON form handed to the browser renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_reflects_state() {
        let mut state = GameState::new(Tuning::default());
        state.start();
        state.score = 70;
        state.level = 2;

        let snap = Snapshot::capture(&state, true);
        assert_eq!(snap.score, 70);
        assert_eq!(snap.level, 2);
        assert!(snap.running);
        assert!(!snap.paused);
        assert!(!snap.game_over);
        assert!(snap.level_up);
        assert_eq!(snap.player_size, Vec2::new(110.0, 34.0));
        assert!(!snap.boss.active);
    }

    #[test]
    fn test_json_shape() {
        let state = GameState::new(Tuning::default());
        let json = Snapshot::capture(&state, false).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["lives"], 5);
        assert_eq!(value["boss"]["phase"], "Dormant");
        assert!(value["gifts"].as_array().unwrap().is_empty());
    }
}
