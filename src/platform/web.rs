//! Browser host facade
//!
//! The page owns the canvas and the `requestAnimationFrame` loop; it calls
//! `tick` once per frame and draws from the JSON snapshot.

use wasm_bindgen::prelude::*;

use super::input::map_key;
use crate::game::Game;
use crate::settings::{Difficulty, Settings};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    /// `settings_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<WebGame, JsValue> {
        let mut settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        if settings.seed.is_none() {
            settings.seed = Some(js_sys::Date::now() as u64);
        }
        Ok(Self {
            game: Game::new(&settings, Tuning::default()),
        })
    }

    /// Advance one frame. Returns whether another frame should be scheduled.
    pub fn tick(&mut self) -> bool {
        self.game.tick()
    }

    /// Feed a `KeyboardEvent.key`. Returns whether the key was used.
    pub fn key_down(&mut self, key: &str) -> bool {
        match map_key(key) {
            Some(event) => {
                self.game.handle(event);
                true
            }
            None => false,
        }
    }

    pub fn toggle_running(&mut self) {
        self.game.toggle_running();
    }

    pub fn restart(&mut self) {
        self.game.restart();
    }

    pub fn set_multiplayer(&mut self, enabled: bool) {
        self.game.set_multiplayer(enabled);
    }

    /// Returns false for an unknown difficulty name
    pub fn select_difficulty(&mut self, name: &str) -> bool {
        match Difficulty::from_str(name) {
            Some(difficulty) => {
                self.game.select_difficulty(difficulty);
                true
            }
            None => false,
        }
    }

    /// Current frame as JSON for the canvas renderer
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.game
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
