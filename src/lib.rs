//! Carrot Dash - a lane-hopping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (characters, entities, collisions, spawning)
//! - `game`: Controller that owns the simulation and feeds it input
//! - `renderer`: Read-only snapshot handed to whatever draws the game
//! - `platform`: Keyboard mapping and the browser host facade
//! - `settings` / `tuning`: Difficulty selection and data-driven game balance

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::{Difficulty, DifficultyProfile, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Length of one hop (one lane / one column)
    pub const GRID_UNIT: f32 = 50.0;

    /// Playfield bounds for a character's top-left corner
    pub const PLAYFIELD_MIN_X: f32 = 0.0;
    pub const PLAYFIELD_MAX_X: f32 = SCREEN_WIDTH - GRID_UNIT;
    pub const PLAYFIELD_MIN_Y: f32 = 60.0;
    pub const PLAYFIELD_MAX_Y: f32 = 260.0;

    /// Rows a character can stand on (top y). The last one is the lane-free home row.
    pub const ROWS: [f32; 5] = [60.0, 110.0, 160.0, 210.0, 260.0];

    /// Bunny (player 1)
    pub const BUNNY_HOME: (f32, f32) = (100.0, 260.0);
    pub const BUNNY_WIDTH: f32 = 50.0;
    pub const BUNNY_HEIGHT: f32 = 60.0;

    /// Cat (player 2)
    pub const CAT_HOME: (f32, f32) = (200.0, 260.0);
    pub const CAT_WIDTH: f32 = 50.0;
    pub const CAT_HEIGHT: f32 = 50.0;

    /// Stats bounds
    pub const MAX_ENERGY: f64 = 100.0;
    /// Energy at or below this after a drain is treated as empty (absorbs float drift)
    pub const ENERGY_EPSILON: f64 = 1e-9;

    /// Hop animation: fraction of the remaining delta covered per tick
    pub const HOP_APPROACH: f32 = 0.3;
    /// Hop animation: an axis closer than this snaps onto the target
    pub const HOP_SNAP_DISTANCE: f32 = 1.0;

    /// Invulnerability window after a hit, and the blink half-period
    pub const INVULNERABLE_TICKS: u32 = 60;
    pub const FLASH_PERIOD_TICKS: u32 = 5;

    /// Obstacle (vehicle) size
    pub const OBSTACLE_WIDTH: f32 = 70.0;
    pub const OBSTACLE_HEIGHT: f32 = 30.0;

    /// Collectible (carrot / fish) size and vertical offset inside a row
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const COLLECTIBLE_ROW_OFFSET: f32 = 15.0;

    /// Rare bonus (golden carrot) radius and vertical offset of its centre inside a row
    pub const BONUS_RADIUS: f32 = 20.0;
    pub const BONUS_ROW_OFFSET: f32 = 25.0;

    /// Distance accumulated per tick is `speed * DISTANCE_SCALE`
    pub const DISTANCE_SCALE: f64 = 0.1;
}
