//! Spawn timers and spawners
//!
//! Each spawner counts ticks up to its interval (scaled by difficulty), then
//! resets and tries to place one entity just off the trailing screen edge.

use glam::Vec2;
use rand::Rng;

use super::character::PlayerSlot;
use super::collision::Aabb;
use super::entity::{Entity, EntityKind, LANES};
use super::state::SimulationState;
use crate::consts::*;
use crate::settings::DifficultyProfile;
use crate::tuning::Tuning;

/// Tick counter that fires every `interval` ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimer {
    pub counter: u32,
    pub interval: u32,
}

impl SpawnTimer {
    pub fn new(interval: u32) -> Self {
        Self {
            counter: 0,
            interval,
        }
    }

    /// Count one tick. Returns true (and resets) when the interval is reached.
    pub fn advance(&mut self) -> bool {
        self.counter = self.counter.saturating_add(1);
        if self.counter >= self.interval {
            self.counter = 0;
            true
        } else {
            false
        }
    }
}

/// One timer per spawner, derived from the run's difficulty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnTimers {
    pub collectible_a: SpawnTimer,
    pub collectible_b: SpawnTimer,
    pub obstacle: SpawnTimer,
    pub bonus: SpawnTimer,
}

impl SpawnTimers {
    pub fn new(profile: &DifficultyProfile, tuning: &Tuning) -> Self {
        Self {
            collectible_a: SpawnTimer::new(profile.scale_interval(tuning.collectible_a_interval)),
            collectible_b: SpawnTimer::new(profile.scale_interval(tuning.collectible_b_interval)),
            obstacle: SpawnTimer::new(profile.scale_interval(tuning.obstacle_interval)),
            bonus: SpawnTimer::new(profile.scale_interval(tuning.bonus_interval)),
        }
    }
}

/// Advance every spawn timer one tick and spawn whatever came due
pub fn run_spawners(state: &mut SimulationState) {
    if state.timers.collectible_a.advance() {
        spawn_collectible(state, PlayerSlot::Bunny);
    }

    if state.multiplayer && state.timers.collectible_b.advance() {
        spawn_collectible(state, PlayerSlot::Cat);
    }

    if state.timers.obstacle.advance() {
        spawn_obstacle(state);
    }

    if state.timers.bonus.advance() {
        let chance = state.tuning.bonus_chance.clamp(0.0, 1.0);
        if state.rng.random_bool(chance) {
            spawn_bonus(state);
        }
    }
}

/// Row (character top y) for a new pickup
fn random_row(state: &mut SimulationState) -> f32 {
    ROWS[state.rng.random_range(0..ROWS.len())]
}

/// Spawn a carrot (Bunny) or fish (Cat) unless its owner can no longer collect
pub fn spawn_collectible(state: &mut SimulationState, owner: PlayerSlot) -> bool {
    if !state.is_participating(owner) || state.stats(owner).is_exhausted() {
        log::debug!("{} collectible suppressed: owner out", owner.name());
        return false;
    }

    let row = random_row(state);
    let id = state.next_entity_id();
    let pos = Vec2::new(SCREEN_WIDTH, row + COLLECTIBLE_ROW_OFFSET);
    let restore = state.tuning.collectible_restore;
    state
        .entities
        .push(Entity::collectible(id, owner, pos, restore));
    log::debug!("Spawned {} collectible #{} at y={}", owner.name(), id, pos.y);
    true
}

/// Spawn a vehicle in a random lane unless the lane entrance is still occupied
pub fn spawn_obstacle(state: &mut SimulationState) -> bool {
    let lane_index = state.rng.random_range(0..LANES.len());
    let lane = LANES[lane_index];

    let margin = state.tuning.obstacle_safety_margin;
    let entry = Aabb::new(
        Vec2::new(lane.entry_x() - margin, lane.top),
        Vec2::new(OBSTACLE_WIDTH + margin * 2.0, OBSTACLE_HEIGHT),
    );
    let blocked = state.entities.iter().any(|e| {
        matches!(e.kind, EntityKind::Obstacle { lane: other, .. } if other == lane_index)
            && e.bounds().overlaps(&entry)
    });
    if blocked {
        log::debug!("Obstacle spawn skipped: lane {} entrance occupied", lane_index);
        return false;
    }

    let id = state.next_entity_id();
    let speed = state.profile.speed;
    state
        .entities
        .push(Entity::obstacle(id, lane_index, lane.entry_x(), speed));
    log::debug!("Spawned obstacle #{} in lane {}", id, lane_index);
    true
}

/// Spawn a rare bonus unless nobody is left to collect it
pub fn spawn_bonus(state: &mut SimulationState) -> bool {
    let anyone_alive = state
        .participants()
        .any(|slot| !state.stats(slot).is_exhausted());
    if !anyone_alive {
        log::debug!("Rare bonus suppressed: no player can collect");
        return false;
    }

    let row = random_row(state);
    let id = state.next_entity_id();
    let center = Vec2::new(SCREEN_WIDTH + BONUS_RADIUS, row + BONUS_ROW_OFFSET);
    let restore = state.tuning.bonus_restore;
    state
        .entities
        .push(Entity::rare_bonus(id, center, restore));
    log::debug!("Spawned rare bonus #{} at y={}", id, center.y);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;

    fn fresh(multiplayer: bool, tuning: Tuning) -> SimulationState {
        SimulationState::new(7, DifficultyProfile::default(), tuning, multiplayer)
    }

    fn count(state: &SimulationState, pred: impl Fn(&EntityKind) -> bool) -> usize {
        state.entities.iter().filter(|e| pred(&e.kind)).count()
    }

    #[test]
    fn test_timer_fires_on_interval() {
        let mut timer = SpawnTimer::new(3);
        assert!(!timer.advance());
        assert!(!timer.advance());
        assert!(timer.advance());
        assert_eq!(timer.counter, 0);
        assert!(!timer.advance());
    }

    #[test]
    fn test_timers_scale_with_difficulty() {
        let tuning = Tuning::default();
        let hard = SpawnTimers::new(&Difficulty::Hard.profile(), &tuning);
        let easy = SpawnTimers::new(&Difficulty::Easy.profile(), &tuning);
        assert!(hard.obstacle.interval < easy.obstacle.interval);
        assert_eq!(hard.collectible_a.interval, 68); // round(90 * 0.75)
    }

    #[test]
    fn test_collectible_spawns_off_right_edge() {
        let mut state = fresh(false, Tuning::default());
        assert!(spawn_collectible(&mut state, PlayerSlot::Bunny));

        let carrot = &state.entities[0];
        assert_eq!(carrot.pos.x, SCREEN_WIDTH);
        assert!(ROWS.iter().any(|row| row + COLLECTIBLE_ROW_OFFSET == carrot.pos.y));
    }

    #[test]
    fn test_collectible_suppressed_for_dead_owner() {
        let mut state = fresh(true, Tuning::default());
        state.stats_mut(PlayerSlot::Cat).energy = 0.0;
        assert!(!spawn_collectible(&mut state, PlayerSlot::Cat));
        assert!(spawn_collectible(&mut state, PlayerSlot::Bunny));
        assert_eq!(state.entities.len(), 1);
    }

    #[test]
    fn test_collectible_suppressed_for_absent_cat() {
        let mut state = fresh(false, Tuning::default());
        assert!(!spawn_collectible(&mut state, PlayerSlot::Cat));
    }

    #[test]
    fn test_bonus_needs_a_living_player() {
        let mut state = fresh(false, Tuning::default());
        state.stats_mut(PlayerSlot::Bunny).energy = 0.0;
        assert!(!spawn_bonus(&mut state));

        state.stats_mut(PlayerSlot::Bunny).energy = 10.0;
        assert!(spawn_bonus(&mut state));
    }

    #[test]
    fn test_obstacle_spawn_skips_occupied_entrance() {
        let mut state = fresh(false, Tuning::default());
        for (index, lane) in LANES.iter().enumerate() {
            let id = state.next_entity_id();
            state
                .entities
                .push(Entity::obstacle(id, index, lane.entry_x(), 2.0));
        }
        assert!(!spawn_obstacle(&mut state));
        assert_eq!(state.entities.len(), LANES.len());
    }

    #[test]
    fn test_run_spawners_counts_every_timer() {
        let tuning = Tuning {
            collectible_a_interval: 2,
            collectible_b_interval: 3,
            obstacle_interval: 1000,
            bonus_interval: 1000,
            ..Tuning::default()
        };
        let mut state = fresh(true, tuning);
        for _ in 0..6 {
            run_spawners(&mut state);
        }
        let carrots = count(&state, |k| {
            matches!(k, EntityKind::Collectible { owner: PlayerSlot::Bunny, .. })
        });
        let fish = count(&state, |k| {
            matches!(k, EntityKind::Collectible { owner: PlayerSlot::Cat, .. })
        });
        assert_eq!(carrots, 3);
        assert_eq!(fish, 2);
    }

    #[test]
    fn test_cat_timer_idle_in_single_player() {
        let mut state = fresh(false, Tuning::default());
        for _ in 0..10 {
            run_spawners(&mut state);
        }
        assert_eq!(state.timers.collectible_b.counter, 0);
        assert_eq!(state.timers.collectible_a.counter, 10);
    }

    #[test]
    fn test_bonus_gate_always_and_never() {
        let always = Tuning {
            bonus_interval: 1,
            bonus_chance: 1.0,
            ..Tuning::without_spawns()
        };
        let mut state = fresh(false, always);
        run_spawners(&mut state);
        assert_eq!(count(&state, |k| matches!(k, EntityKind::RareBonus { .. })), 1);

        let never = Tuning {
            bonus_interval: 1,
            bonus_chance: 0.0,
            ..Tuning::without_spawns()
        };
        let mut state = fresh(false, never);
        for _ in 0..50 {
            run_spawners(&mut state);
        }
        assert!(state.entities.is_empty());
    }
}
