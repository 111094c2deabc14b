//! Character policy functions
//!
//! Stateless rules over a (character, stats) pair: what a character may do,
//! how damage and pickups change it, and what the renderer should show.

use glam::Vec2;

use super::character::{Character, Stats};
use crate::consts::*;

/// What a successful pickup grants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reward {
    /// Regular collectible: +1 to the collected counter and an energy restore
    Item { restore: f64 },
    /// Rare bonus: energy only, the counter is untouched
    Bonus { restore: f64 },
}

/// Whether the character accepts hop input this tick
pub fn can_act(character: &Character, stats: &Stats) -> bool {
    stats.energy > 0.0 && character.active
}

/// Whether touching a collectible is honored. Recovering characters can't collect.
pub fn can_collect(character: &Character, stats: &Stats) -> bool {
    can_act(character, stats) && !character.invulnerable
}

/// Dead or inactive characters are not drawn
pub fn should_render(character: &Character, stats: &Stats) -> bool {
    can_act(character, stats)
}

/// 5-ticks-on / 5-ticks-off blink while invulnerable
pub fn is_flashing(character: &Character, stats: &Stats) -> bool {
    character.invulnerable
        && stats.energy > 0.0
        && (character.invulnerable_ticks / FLASH_PERIOD_TICKS).is_multiple_of(2)
}

/// Apply a hit. Survivable hits send the character home; a lethal hit leaves
/// it where it fell. Returns false (and changes nothing) if the character is
/// already dead or invulnerable.
pub fn take_damage(character: &mut Character, stats: &mut Stats, amount: f64, home: Vec2) -> bool {
    if stats.energy <= 0.0 || character.invulnerable {
        return false;
    }

    let energy = (stats.energy - amount).max(0.0);
    if energy > 0.0 {
        character.teleport(home);
    }

    stats.energy = energy;
    character.invulnerable = true;
    character.invulnerable_ticks = INVULNERABLE_TICKS;
    true
}

/// Apply a pickup. Returns false (and changes nothing) unless `can_collect` holds.
pub fn collect_item(character: &Character, stats: &mut Stats, reward: Reward) -> bool {
    if !can_collect(character, stats) {
        return false;
    }

    let restore = match reward {
        Reward::Item { restore } => {
            stats.collected += 1;
            restore
        }
        Reward::Bonus { restore } => restore,
    };
    stats.energy = (stats.energy + restore).clamp(0.0, MAX_ENERGY);
    true
}

/// Count the invulnerability window down. Frozen once the character is dead.
pub fn update_invulnerability(character: &mut Character, energy: f64) {
    if character.invulnerable && character.invulnerable_ticks > 0 && energy > 0.0 {
        character.invulnerable_ticks -= 1;
        if character.invulnerable_ticks == 0 {
            character.invulnerable = false;
        }
    }
}
