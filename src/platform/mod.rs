//! Browser bridge
//!
//! Exposes the frame driver's command surface to the page. The page owns the
//! canvas, buttons and `requestAnimationFrame`; it forwards input events here
//! and draws whatever JSON snapshot `frame` returns.

use wasm_bindgen::prelude::*;

use crate::driver::FrameDriver;
use crate::tuning::{Tuning, TuningError};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Gift Rush starting...");
}

/// Game instance held by the page
#[wasm_bindgen]
pub struct WebGame {
    driver: FrameDriver,
}

impl WebGame {
    fn with_tuning(tuning: Tuning) -> Result<WebGame, TuningError> {
        let seed = js_sys::Date::now() as u64;
        let driver = FrameDriver::new(tuning, seed)?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(WebGame { driver })
    }
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game for a canvas of the given size, falling back to the
    /// default stage when the canvas is too small
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<WebGame, JsError> {
        let tuning = Tuning {
            stage_width: width,
            stage_height: height,
            ..Tuning::default()
        };
        match Self::with_tuning(tuning) {
            Ok(game) => Ok(game),
            Err(e) => {
                log::warn!("Invalid canvas size ({e}), using defaults");
                Ok(Self::with_tuning(Tuning::default())?)
            }
        }
    }

    /// Create a game from a tuning JSON document
    #[wasm_bindgen(js_name = fromTuning)]
    pub fn from_tuning(json: &str) -> Result<WebGame, JsError> {
        let tuning = Tuning::from_json(json)?;
        Ok(Self::with_tuning(tuning)?)
    }

    pub fn start(&mut self) -> bool {
        self.driver.start()
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) -> bool {
        self.driver.toggle_pause()
    }

    pub fn pause(&mut self) -> bool {
        self.driver.pause()
    }

    pub fn resume(&mut self) -> bool {
        self.driver.resume()
    }

    pub fn reset(&mut self) {
        self.driver.reset();
    }

    /// Returns true when the key is bound (the page should preventDefault)
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> bool {
        self.driver.key_down(key)
    }

    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, key: &str) -> bool {
        self.driver.key_up(key)
    }

    /// Canvas-relative pointer/touch x
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32) {
        self.driver.pointer_move(x);
    }

    /// Advance one animation frame and return the snapshot as JSON
    pub fn frame(&mut self, now: f64) -> Result<String, JsError> {
        Ok(self.driver.tick(now).to_json()?)
    }

    /// Current snapshot as JSON without advancing (used after reset)
    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(self.driver.snapshot().to_json()?)
    }

    /// Events since the last call, as a JSON array
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.driver.drain_events())?)
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.driver.snapshot().running
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool {
        self.driver.snapshot().paused
    }
}
