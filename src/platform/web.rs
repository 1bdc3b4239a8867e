//! Browser host binding
//!
//! JavaScript owns the canvas, the key listeners and `requestAnimationFrame`;
//! it forwards `KeyboardEvent.key` values and frame timestamps here and reads
//! back JSON snapshots and events.

use wasm_bindgen::prelude::*;

use crate::input::key_from_dom;
use crate::sim::{self, Phase, World};
use crate::tuning::{Tuning, Viewport};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Game instance exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    world: World,
    last_time: Option<f64>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create an idle game. `tuning_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, tuning_json: &str) -> Result<WebGame, JsValue> {
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).map_err(to_js)?
        };
        let seed = js_sys::Date::now() as u64;
        log::info!("Type Jumper starting with seed {}", seed);
        Ok(Self {
            world: World::new(seed, tuning, Viewport::new(width, height)),
            last_time: None,
        })
    }

    /// Load the newline-delimited word list; returns how many words were kept
    pub fn load_words(&mut self, text: &str) -> usize {
        self.world.load_words(text)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.set_viewport(Viewport::new(width, height));
    }

    pub fn key_down(&mut self, key: &str) -> Result<(), JsValue> {
        self.dispatch(key, true)
    }

    pub fn key_up(&mut self, key: &str) -> Result<(), JsValue> {
        self.dispatch(key, false)
    }

    /// Advance one tick using the `requestAnimationFrame` timestamp
    pub fn frame(&mut self, time_ms: f64) {
        let dt_ms = self.last_time.map_or(0.0, |last| (time_ms - last).clamp(0.0, 100.0));
        self.last_time = Some(time_ms);
        sim::tick(&mut self.world, dt_ms);
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.world.snapshot()).map_err(to_js)
    }

    /// Events since the previous call, as a JSON array
    pub fn take_events_json(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.world.take_events()).map_err(to_js)
    }
}

impl WebGame {
    fn dispatch(&mut self, key: &str, pressed: bool) -> Result<(), JsValue> {
        let round_over = self.world.phase == Phase::Over;
        let Some(event) = key_from_dom(key, pressed, round_over) else {
            return Ok(());
        };
        sim::handle_key(&mut self.world, event).map_err(to_js)
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
