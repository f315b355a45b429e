//! Browser bindings
//!
//! The page owns the canvas and the animation loop. Each frame it calls
//! [`WebGame::frame`] with the `requestAnimationFrame` timestamp, forwards
//! pointer and keyboard input stamped with `performance.now()` (the same
//! clock), and draws from [`WebGame::snapshot_json`].

use wasm_bindgen::prelude::*;

use crate::audio::AudioFeedback;
use crate::feedback::FeedbackSink;
use crate::input::{Gesture, Key};
use crate::persistence::{KeyValueStore, LocalStore, MemoryStore};
use crate::runner::Runner;
use crate::settings::Settings;
use crate::sim::SeededRandom;

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    runner: Runner<SeededRandom, Box<dyn KeyValueStore>, Box<dyn FeedbackSink>>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create an idle game; `settings_json` may be omitted
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> WebGame {
        console_error_panic_hook::set_once();
        // Already initialized when the page builds a second game
        let _ = console_log::init_with_level(log::Level::Info);

        let settings = Settings::load_json_or_default(settings_json.as_deref());
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let store: Box<dyn KeyValueStore> = match LocalStore::new() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("localStorage unavailable, best score will not persist: {e}");
                Box::new(MemoryStore::new())
            }
        };
        let feedback: Box<dyn FeedbackSink> = Box::new(AudioFeedback::new(settings.feedback));

        let rng = SeededRandom::new(seed);
        log::info!("Dino runner ready (seed {})", rng.seed());
        WebGame {
            runner: Runner::new(&settings, rng, store, feedback),
        }
    }

    /// Begin the first run
    pub fn start(&mut self, now_ms: f64) -> bool {
        self.runner.start(now_ms / 1000.0)
    }

    /// Advance to the given frame timestamp (milliseconds)
    pub fn frame(&mut self, now_ms: f64) {
        self.runner.update(now_ms / 1000.0);
    }

    pub fn tap(&mut self, now_ms: f64) {
        self.runner.handle(Gesture::Tap, now_ms / 1000.0);
    }

    /// Pointer drag with vertical travel `dy` (screen pixels, down positive)
    pub fn drag(&mut self, dy: f32, now_ms: f64) {
        self.runner.handle(Gesture::Drag { dy }, now_ms / 1000.0);
    }

    /// Scroll wheel or crown rotation
    pub fn crown(&mut self, velocity: f64, now_ms: f64) {
        self.runner.handle(Gesture::Crown { velocity }, now_ms / 1000.0);
    }

    /// Keyboard input by `KeyboardEvent.code`
    pub fn key(&mut self, code: &str, now_ms: f64) {
        let key = match code {
            "Space" => Key::Space,
            "ArrowUp" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "KeyR" => Key::R,
            _ => Key::Other,
        };
        self.runner.handle(Gesture::Key(key), now_ms / 1000.0);
    }

    /// Dismiss the game-over overlay (starts the first run when idle)
    pub fn restart(&mut self, now_ms: f64) {
        self.runner.handle(Gesture::DismissGameOver, now_ms / 1000.0);
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.runner.set_autopilot(enabled);
    }

    /// Current render state as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.runner.snapshot()).unwrap_or_default()
    }

    /// Events since the last call, as a JSON array
    pub fn events_json(&mut self) -> String {
        serde_json::to_string(&self.runner.drain_events()).unwrap_or_default()
    }
}
