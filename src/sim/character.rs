//! Player characters and their hop movement
//!
//! A character is Idle or Hopping; invulnerability is an orthogonal flag and
//! death (energy 0) is decided by the simulation step, not by the character.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rules;
use crate::consts::*;

/// Which player a character / stats block belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// Player 1
    Bunny,
    /// Player 2
    Cat,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::Bunny, PlayerSlot::Cat];

    pub fn index(self) -> usize {
        match self {
            PlayerSlot::Bunny => 0,
            PlayerSlot::Cat => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerSlot::Bunny => "Bunny",
            PlayerSlot::Cat => "Cat",
        }
    }

    /// Home cell the character returns to after a survivable hit
    pub fn home(self) -> Vec2 {
        let (x, y) = match self {
            PlayerSlot::Bunny => BUNNY_HOME,
            PlayerSlot::Cat => CAT_HOME,
        };
        Vec2::new(x, y)
    }

    /// Bounding box size
    pub fn size(self) -> Vec2 {
        match self {
            PlayerSlot::Bunny => Vec2::new(BUNNY_WIDTH, BUNNY_HEIGHT),
            PlayerSlot::Cat => Vec2::new(CAT_WIDTH, CAT_HEIGHT),
        }
    }
}

/// Hop direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in screen space (y grows downward)
    pub fn step(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Energy and score for one player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Always within [0, MAX_ENERGY]
    pub energy: f64,
    /// Collectibles picked up this run
    pub collected: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            energy: MAX_ENERGY,
            collected: 0,
        }
    }
}

impl Stats {
    pub fn is_exhausted(&self) -> bool {
        self.energy <= 0.0
    }
}

/// A player-controlled character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub slot: PlayerSlot,
    /// Top-left corner
    pub pos: Vec2,
    /// Hop destination (None = not hopping)
    pub target: Option<Vec2>,
    pub hopping: bool,
    pub invulnerable: bool,
    pub invulnerable_ticks: u32,
    /// False while the Cat sits out of a single-player run
    pub active: bool,
    pub size: Vec2,
}

impl Character {
    pub fn new(slot: PlayerSlot) -> Self {
        Self {
            slot,
            pos: slot.home(),
            target: None,
            hopping: false,
            invulnerable: false,
            invulnerable_ticks: 0,
            active: slot == PlayerSlot::Bunny,
            size: slot.size(),
        }
    }

    /// Put the character back on its home cell with no hop or invulnerability
    pub fn reset(&mut self) {
        let active = self.active;
        *self = Self::new(self.slot);
        self.active = active;
    }

    /// Move instantly (hop target included) to `pos`
    pub fn teleport(&mut self, pos: Vec2) {
        self.pos = pos;
        self.target = Some(pos);
        self.hopping = false;
    }

    /// Centre of the bounding box
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Request one grid hop. Returns false if a hop is already in flight or the
    /// character is pinned against the playfield edge in that direction.
    pub fn hop(&mut self, direction: Direction) -> bool {
        if self.hopping {
            return false;
        }

        let min = Vec2::new(PLAYFIELD_MIN_X, PLAYFIELD_MIN_Y);
        let max = Vec2::new(PLAYFIELD_MAX_X, PLAYFIELD_MAX_Y);
        let wanted = self.pos + direction.step() * GRID_UNIT;
        let target = wanted.clamp(min, max);

        // Nothing left to move toward: already at the edge
        if (target - self.pos).abs().max_element() <= f32::EPSILON {
            return false;
        }

        self.target = Some(target);
        self.hopping = true;
        true
    }

    /// Advance the hop animation one tick and count down invulnerability
    pub fn update(&mut self, energy: f64) {
        if let Some(target) = self.target {
            self.pos.x = approach(self.pos.x, target.x);
            self.pos.y = approach(self.pos.y, target.y);
            if self.pos == target {
                self.hopping = false;
            }
        }

        rules::update_invulnerability(self, energy);
    }
}

/// Exponential approach on one axis, snapping once within `HOP_SNAP_DISTANCE`
fn approach(current: f32, target: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= HOP_SNAP_DISTANCE {
        target
    } else {
        current + delta * HOP_APPROACH
    }
}
