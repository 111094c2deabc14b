//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard mapping)
//! - The browser host facade (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputEvent, map_key};
