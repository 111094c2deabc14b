//! Data-driven game balance
//!
//! Everything a designer might tweak between builds. Difficulty multipliers are
//! applied on top of these base values when a run starts.

use serde::{Deserialize, Serialize};

/// Balance values for one build of the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Energy lost per tick before the difficulty multiplier
    pub base_drain: f64,
    /// Energy lost per obstacle hit
    pub obstacle_damage: f64,
    /// Energy restored by a carrot / fish
    pub collectible_restore: f64,
    /// Energy restored by a rare bonus
    pub bonus_restore: f64,

    /// Base spawn intervals in ticks (scaled by difficulty)
    pub collectible_a_interval: u32,
    pub collectible_b_interval: u32,
    pub obstacle_interval: u32,
    pub bonus_interval: u32,
    /// Chance that a due rare bonus actually appears
    pub bonus_chance: f64,

    /// Gap an obstacle keeps to the one ahead of it in its lane
    pub obstacle_safety_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_drain: 0.05,
            obstacle_damage: 25.0,
            collectible_restore: 20.0,
            bonus_restore: 50.0,

            collectible_a_interval: 90,
            collectible_b_interval: 90,
            obstacle_interval: 70,
            bonus_interval: 600,
            bonus_chance: 0.35,

            obstacle_safety_margin: 10.0,
        }
    }
}

impl Tuning {
    /// Balance with every spawner effectively switched off (for scripted scenarios)
    pub fn without_spawns() -> Self {
        Self {
            collectible_a_interval: u32::MAX,
            collectible_b_interval: u32::MAX,
            obstacle_interval: u32::MAX,
            bonus_interval: u32::MAX,
            ..Self::default()
        }
    }
}
