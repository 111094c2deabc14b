//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per logical frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod character;
pub mod collision;
pub mod entity;
pub mod rules;
pub mod spawn;
pub mod state;
pub mod tick;

pub use character::{Character, Direction, PlayerSlot, Stats};
pub use collision::{Aabb, circle_box_overlap};
pub use entity::{Entity, EntityKind, Heading, LANES, Lane, Shape};
pub use rules::{
    Reward, can_act, can_collect, collect_item, is_flashing, should_render, take_damage,
    update_invulnerability,
};
pub use spawn::{SpawnTimer, SpawnTimers};
pub use state::{GameOverCause, GamePhase, SimulationState};
pub use tick::{TickInput, tick};
