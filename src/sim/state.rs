//! Simulation state
//!
//! Everything one run needs lives in `SimulationState`; the controller owns
//! exactly one and hands it to `tick` by reference.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::character::{Character, PlayerSlot, Stats};
use super::entity::{Entity, EntityKind};
use super::spawn::SpawnTimers;
use crate::settings::DifficultyProfile;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh run, waiting for the first start toggle
    Ready,
    /// Ticking
    Running,
    /// Paused by the player
    Paused,
    /// Every participating player ran out of energy
    GameOver,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Single-player run: this player ran out of energy
    Exhausted(PlayerSlot),
    /// Multiplayer run: both players ran out of energy
    BothExhausted,
}

impl GameOverCause {
    /// End-screen line
    pub fn message(&self) -> String {
        match self {
            GameOverCause::Exhausted(slot) => format!("{} ran out of energy!", slot.name()),
            GameOverCause::BothExhausted => "Both players ran out of energy!".to_string(),
        }
    }
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub game_over_cause: Option<GameOverCause>,
    pub multiplayer: bool,
    /// Latched at run start
    pub profile: DifficultyProfile,
    pub tuning: Tuning,
    /// Indexed by `PlayerSlot::index`
    pub characters: [Character; 2],
    pub stats: [Stats; 2],
    /// All live entities, in spawn order
    pub entities: Vec<Entity>,
    pub timers: SpawnTimers,
    /// Distance travelled this run
    pub distance: f64,
    /// Background scroll offset, falling by `speed` each tick. Unwrapped; the renderer
    /// takes it modulo whatever period its backdrop repeats at.
    pub scroll_offset: f32,
    /// Ticks simulated this run
    pub time_ticks: u64,
    next_id: u32,
}

impl SimulationState {
    pub fn new(seed: u64, profile: DifficultyProfile, tuning: Tuning, multiplayer: bool) -> Self {
        let timers = SpawnTimers::new(&profile, &tuning);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            game_over_cause: None,
            multiplayer,
            profile,
            tuning,
            characters: [
                Character::new(PlayerSlot::Bunny),
                Character::new(PlayerSlot::Cat),
            ],
            stats: [Stats::default(); 2],
            entities: Vec::new(),
            timers,
            distance: 0.0,
            scroll_offset: 0.0,
            time_ticks: 0,
            next_id: 1,
        };
        state.character_mut(PlayerSlot::Cat).active = multiplayer;
        state
    }

    /// Reset every per-run value. Multiplayer and the RNG stream carry over.
    pub fn restart(&mut self, profile: DifficultyProfile) {
        self.profile = profile;
        self.phase = GamePhase::Ready;
        self.game_over_cause = None;
        for character in &mut self.characters {
            character.reset();
        }
        self.stats = [Stats::default(); 2];
        self.entities.clear();
        self.timers = SpawnTimers::new(&self.profile, &self.tuning);
        self.distance = 0.0;
        self.scroll_offset = 0.0;
        self.time_ticks = 0;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn character(&self, slot: PlayerSlot) -> &Character {
        &self.characters[slot.index()]
    }

    pub fn character_mut(&mut self, slot: PlayerSlot) -> &mut Character {
        &mut self.characters[slot.index()]
    }

    pub fn stats(&self, slot: PlayerSlot) -> &Stats {
        &self.stats[slot.index()]
    }

    pub fn stats_mut(&mut self, slot: PlayerSlot) -> &mut Stats {
        &mut self.stats[slot.index()]
    }

    /// Whether this player takes part in the run
    pub fn is_participating(&self, slot: PlayerSlot) -> bool {
        match slot {
            PlayerSlot::Bunny => true,
            PlayerSlot::Cat => self.multiplayer,
        }
    }

    /// Participating players, Bunny first
    pub fn participants(&self) -> impl Iterator<Item = PlayerSlot> + '_ {
        PlayerSlot::ALL
            .into_iter()
            .filter(move |&slot| self.is_participating(slot))
    }

    /// Turn the Cat on or off. Leaving clears the Cat's pickups; joining gives
    /// the Cat fresh stats on its home cell.
    pub fn set_multiplayer(&mut self, enabled: bool) {
        if self.multiplayer == enabled {
            return;
        }
        self.multiplayer = enabled;

        if enabled {
            self.stats[PlayerSlot::Cat.index()] = Stats::default();
            let cat = self.character_mut(PlayerSlot::Cat);
            cat.reset();
            cat.active = true;
            self.timers.collectible_b.counter = 0;
        } else {
            self.character_mut(PlayerSlot::Cat).active = false;
            self.entities.retain(|e| {
                !matches!(
                    e.kind,
                    EntityKind::Collectible {
                        owner: PlayerSlot::Cat,
                        ..
                    }
                )
            });
        }
        log::info!("Multiplayer {}", if enabled { "on" } else { "off" });
    }

    /// End the run if every participating player is out of energy
    pub fn check_game_over(&mut self) -> bool {
        if self.participants().any(|slot| !self.stats(slot).is_exhausted()) {
            return false;
        }

        let cause = if self.multiplayer {
            GameOverCause::BothExhausted
        } else {
            GameOverCause::Exhausted(PlayerSlot::Bunny)
        };
        self.phase = GamePhase::GameOver;
        self.game_over_cause = Some(cause);
        log::info!(
            "Game over after {} ticks: {} (distance {:.0})",
            self.time_ticks,
            cause.message(),
            self.distance
        );
        true
    }
}
