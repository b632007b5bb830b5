//! Gift Rush entry point
//!
//! The browser build is driven from `platform::WebGame`. Natively this runs a
//! headless session with a simple autopilot, which is handy for checking
//! balance changes in a tuning file.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use gift_rush::sim::{GameEvent, GameState};
    use gift_rush::{FrameDriver, Tuning};

    /// Five minutes at 60 Hz per run, at most
    const MAX_FRAMES: u32 = 60 * 60 * 5;
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const DEFAULT_SEED: u64 = 0x6966_7473;

    fn load_tuning(path: Option<String>) -> Tuning {
        let Some(path) = path else {
            return Tuning::default();
        };
        let loaded = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
        match loaded {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Failed to load tuning from {}: {}, using defaults", path, e);
                Tuning::default()
            }
        }
    }

    /// Chase the gift closest to the ground; hazards are ignored
    fn autopilot_target(state: &GameState) -> Option<f32> {
        state
            .gifts
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|gift| gift.pos.x + gift.size / 2.0)
    }

    pub fn run() {
        let mut args = std::env::args().skip(1);
        let tuning = load_tuning(args.next());
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);

        let mut driver = match FrameDriver::new(tuning, seed) {
            Ok(driver) => driver,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };
        driver.start();
        log::info!("Headless run with seed {}", seed);

        let mut caught = 0u32;
        let mut missed = 0u32;
        let mut hits = 0u32;
        let mut now = 0.0;
        for _ in 0..MAX_FRAMES {
            if let Some(x) = autopilot_target(driver.state()) {
                driver.pointer_move(x);
            }
            driver.tick(now);
            now += FRAME_MS;

            for event in driver.drain_events() {
                match event {
                    GameEvent::GiftCaught { .. } => caught += 1,
                    GameEvent::GiftMissed { .. } => missed += 1,
                    GameEvent::HazardHit { .. } => hits += 1,
                    GameEvent::LevelUp { level } => log::info!("Level {}", level),
                    GameEvent::BossActivated { level, hp } => {
                        log::info!("Boss appeared at level {} with {} hp", level, hp)
                    }
                    GameEvent::BossDefeated { bonus } => log::info!("Boss defeated (+{})", bonus),
                    _ => {}
                }
            }
            if driver.game_over().is_some() {
                break;
            }
        }

        let snap = driver.snapshot();
        match driver.game_over() {
            Some(report) => log::info!(
                "Game over: score {} at level {} after {:.1}s",
                report.score,
                report.level,
                driver.state().elapsed
            ),
            None => log::info!(
                "Survived: score {} at level {} with {} lives",
                snap.score,
                snap.level,
                snap.lives
            ),
        }
        log::info!(
            "Caught {}, missed {}, hit by {} hazards",
            caught,
            missed,
            hits
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Gift Rush (native) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::init, this is just to satisfy the compiler
}
