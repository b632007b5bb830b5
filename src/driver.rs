//! Frame driver: owns a run and exposes the command surface
//!
//! The host calls [`FrameDriver::tick`] once per display frame with its
//! frame timestamp (milliseconds, as from `requestAnimationFrame`). The
//! driver turns that into a capped `dt`, feeds input into the simulation and
//! keeps the latest [`Snapshot`] for the renderer.

use crate::sim::{
    GameEvent, GamePhase, GameState, InputMapper, RandomSource, SeededRng, Snapshot, TickInput,
    tick,
};
use crate::tuning::{Tuning, TuningError};

/// Final result of a run, reported once when lives run out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverReport {
    pub score: u32,
    pub level: u32,
}

/// Game instance holding all state
pub struct FrameDriver<R: RandomSource = SeededRng> {
    state: GameState,
    rng: R,
    input: InputMapper,
    /// Timestamp of the previous active frame; `None` forces a resync
    last_timestamp: Option<f64>,
    /// dt used by the most recent active tick (seconds)
    last_dt: f32,
    snapshot: Snapshot,
    events: Vec<GameEvent>,
    report: Option<GameOverReport>,
}

impl FrameDriver<SeededRng> {
    /// Driver backed by a seeded PCG generator
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Self::with_rng(tuning, SeededRng::new(seed))
    }
}

impl<R: RandomSource> FrameDriver<R> {
    /// Rejects tuning the simulation cannot run with
    pub fn with_rng(tuning: Tuning, rng: R) -> Result<Self, TuningError> {
        tuning.validate()?;
        let state = GameState::new(tuning);
        let snapshot = Snapshot::capture(&state, false);
        Ok(Self {
            state,
            rng,
            input: InputMapper::new(),
            last_timestamp: None,
            last_dt: 0.0,
            snapshot,
            events: Vec::new(),
            report: None,
        })
    }

    /// Begin a fresh run. Ignored while a run is in progress.
    pub fn start(&mut self) -> bool {
        if self.state.is_running() {
            return false;
        }
        self.state.start();
        self.input.clear();
        self.last_timestamp = None;
        self.last_dt = 0.0;
        self.events.clear();
        self.report = None;
        self.refresh_snapshot();
        log::info!(
            "Run started: {} lives, stage {}x{}",
            self.state.lives,
            self.state.tuning.stage_width,
            self.state.tuning.stage_height
        );
        true
    }

    /// Freeze the run. No-op unless playing.
    pub fn pause(&mut self) -> bool {
        if self.state.phase != GamePhase::Playing {
            return false;
        }
        self.state.phase = GamePhase::Paused;
        self.refresh_snapshot();
        log::debug!("Paused");
        true
    }

    /// Unfreeze the run; the paused wall-clock time is never simulated
    pub fn resume(&mut self) -> bool {
        if self.state.phase != GamePhase::Paused {
            return false;
        }
        self.state.phase = GamePhase::Playing;
        self.last_timestamp = None;
        self.refresh_snapshot();
        log::debug!("Resumed");
        true
    }

    /// Pause button behavior
    pub fn toggle_pause(&mut self) -> bool {
        if self.state.is_paused() {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Stop and restore the default state
    pub fn reset(&mut self) {
        self.state.reset();
        self.input.clear();
        self.last_timestamp = None;
        self.last_dt = 0.0;
        self.events.clear();
        self.report = None;
        self.refresh_snapshot();
        log::info!("Reset");
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.key_up(key)
    }

    /// Stage-relative pointer/touch x; ignored unless playing
    pub fn pointer_move(&mut self, x: f32) {
        if self.state.phase == GamePhase::Playing {
            self.input.pointer_move(x);
        }
    }

    /// Advance one display frame
    pub fn tick(&mut self, now_ms: f64) -> &Snapshot {
        if self.state.phase != GamePhase::Playing {
            return &self.snapshot;
        }

        let max_dt = self.state.tuning.max_frame_dt as f64;
        let dt = match self.last_timestamp {
            Some(prev) => ((now_ms - prev) / 1000.0).clamp(0.0, max_dt) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);
        self.last_dt = dt;

        let input = TickInput {
            intent: self.input.take_intent(),
        };
        let outcome = tick(&mut self.state, &input, &mut self.rng, dt);

        let level_up = outcome
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::LevelUp { .. }));
        if outcome.terminated {
            self.report = Some(GameOverReport {
                score: self.state.score,
                level: self.state.level,
            });
        }
        self.events.extend(outcome.events);
        self.snapshot = Snapshot::capture(&self.state, level_up);
        &self.snapshot
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// dt of the most recent active tick (seconds)
    pub fn last_dt(&self) -> f32 {
        self.last_dt
    }

    /// Events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Final score and level once the run has ended
    pub fn game_over(&self) -> Option<GameOverReport> {
        self.report
    }

    fn refresh_snapshot(&mut self) {
        self.snapshot = Snapshot::capture(&self.state, false);
    }
}
