//! Per-frame simulation step
//!
//! One call advances the run by exactly one tick. Sub-step order:
//!  0. Apply queued hop requests
//!  1. Move characters (hop integration + invulnerability countdown)
//!  2. Energy drain
//!  3. Game-over check
//!  4. Spawn timers
//!  5. Entity movement (obstacles keep their following distance)
//!  6. Collisions (collectibles, then rare bonuses, then obstacles), then culling
//!  7. Distance and background scroll

use glam::Vec2;

use super::character::{Direction, PlayerSlot};
use super::collision::{Aabb, circle_box_overlap};
use super::entity::{EntityKind, Shape, blocked_by};
use super::rules::{self, Reward};
use super::spawn::run_spawners;
use super::state::SimulationState;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Hop request per player, indexed by `PlayerSlot::index`
    pub hops: [Option<Direction>; 2],
}

impl TickInput {
    pub fn hop(slot: PlayerSlot, direction: Direction) -> Self {
        let mut input = Self::default();
        input.hops[slot.index()] = Some(direction);
        input
    }
}

/// Advance the run by one tick. Does nothing unless the run is in progress.
pub fn tick(state: &mut SimulationState, input: &TickInput) {
    if !state.is_running() {
        return;
    }
    state.time_ticks += 1;

    apply_hops(state, input);
    move_characters(state);
    drain_energy(state);
    state.check_game_over();
    run_spawners(state);
    move_entities(state);
    resolve_collisions(state);
    cull_entities(state);

    let speed = state.profile.speed;
    state.distance += f64::from(speed) * DISTANCE_SCALE;
    state.scroll_offset -= speed;
}

/// Hand each requested hop to its character if it can act
fn apply_hops(state: &mut SimulationState, input: &TickInput) {
    for slot in PlayerSlot::ALL {
        let Some(direction) = input.hops[slot.index()] else {
            continue;
        };
        let i = slot.index();
        if !rules::can_act(&state.characters[i], &state.stats[i]) {
            continue;
        }
        if !state.characters[i].hop(direction) {
            log::trace!("{} hop {:?} rejected", slot.name(), direction);
        }
    }
}

fn move_characters(state: &mut SimulationState) {
    for slot in PlayerSlot::ALL {
        let i = slot.index();
        if !state.characters[i].active {
            continue;
        }
        let energy = state.stats[i].energy;
        state.characters[i].update(energy);
    }
}

fn drain_energy(state: &mut SimulationState) {
    let drain = state.tuning.base_drain * state.profile.energy_drain_multiplier;
    for slot in PlayerSlot::ALL {
        let i = slot.index();
        if !state.characters[i].active || state.stats[i].is_exhausted() {
            continue;
        }
        let energy = state.stats[i].energy - drain;
        state.stats[i].energy = if energy <= ENERGY_EPSILON { 0.0 } else { energy };
    }
}

/// Move every entity one tick. Obstacle moves are decided against positions
/// from the start of the tick, so the outcome does not depend on pool order.
fn move_entities(state: &mut SimulationState) {
    let drift = state.profile.speed;
    let margin = state.tuning.obstacle_safety_margin;

    let obstacles: Vec<(u32, usize, Aabb)> = state
        .entities
        .iter()
        .filter_map(|e| match e.kind {
            EntityKind::Obstacle { lane, .. } => Some((e.id, lane, e.bounds())),
            _ => None,
        })
        .collect();

    for entity in &mut state.entities {
        let dx = entity.step_dx(drift);
        if let EntityKind::Obstacle { lane, .. } = entity.kind {
            let bounds = entity.bounds();
            let held = obstacles.iter().any(|&(id, other_lane, ahead)| {
                id != entity.id && other_lane == lane && blocked_by(&bounds, dx, &ahead, margin)
            });
            if held {
                continue;
            }
        }
        entity.pos.x += dx;
    }
}

fn character_box(state: &SimulationState, slot: PlayerSlot) -> Aabb {
    let character = state.character(slot);
    Aabb::new(character.pos, character.size)
}

/// Collision passes, each walking the pool in reverse so removals are safe
fn resolve_collisions(state: &mut SimulationState) {
    collect_collectibles(state);
    collect_bonuses(state);
    hit_obstacles(state);
}

fn collect_collectibles(state: &mut SimulationState) {
    for i in (0..state.entities.len()).rev() {
        let entity = &state.entities[i];
        let EntityKind::Collectible { owner, restore } = entity.kind else {
            continue;
        };
        let o = owner.index();
        if !state.characters[o].active {
            continue;
        }
        if !entity.bounds().overlaps(&character_box(state, owner)) {
            continue;
        }

        let reward = Reward::Item { restore };
        if rules::collect_item(&state.characters[o], &mut state.stats[o], reward) {
            let id = state.entities.remove(i).id;
            log::debug!(
                "{} collected #{} ({} total)",
                owner.name(),
                id,
                state.stats[o].collected
            );
        }
    }
}

fn collect_bonuses(state: &mut SimulationState) {
    for i in (0..state.entities.len()).rev() {
        let entity = &state.entities[i];
        let (EntityKind::RareBonus { restore }, Shape::Circle { radius }) =
            (entity.kind, entity.shape)
        else {
            continue;
        };
        let center: Vec2 = entity.pos;

        let collector = PlayerSlot::ALL.into_iter().find(|&slot| {
            let c = slot.index();
            state.characters[c].active
                && rules::can_collect(&state.characters[c], &state.stats[c])
                && circle_box_overlap(center, radius, &character_box(state, slot))
        });

        if let Some(slot) = collector {
            let c = slot.index();
            rules::collect_item(
                &state.characters[c],
                &mut state.stats[c],
                Reward::Bonus { restore },
            );
            let id = state.entities.remove(i).id;
            log::debug!("{} grabbed rare bonus #{}", slot.name(), id);
        }
    }
}

fn hit_obstacles(state: &mut SimulationState) {
    let damage = state.tuning.obstacle_damage;
    for i in (0..state.entities.len()).rev() {
        if !state.entities[i].is_obstacle() {
            continue;
        }
        let bounds = state.entities[i].bounds();

        for slot in PlayerSlot::ALL {
            let c = slot.index();
            if !state.characters[c].active || !bounds.overlaps(&character_box(state, slot)) {
                continue;
            }
            let home = slot.home();
            if rules::take_damage(&mut state.characters[c], &mut state.stats[c], damage, home) {
                log::debug!(
                    "{} hit by obstacle #{} (energy {:.1})",
                    slot.name(),
                    state.entities[i].id,
                    state.stats[c].energy
                );
            }
        }
    }
}

fn cull_entities(state: &mut SimulationState) {
    state.entities.retain(|e| !e.is_off_screen());
}
