//! Renderer seam
//!
//! The simulation never draws. Each tick the controller builds a read-only
//! `Snapshot` and hands it to whatever implements `Renderer` (a canvas host,
//! a log line, a test double).

use serde::Serialize;

use crate::sim::{
    EntityKind, GameOverCause, GamePhase, PlayerSlot, SimulationState, Stats, is_flashing,
    should_render,
};

/// Anything that can present a frame
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Display data for one character
#[derive(Debug, Clone, Serialize)]
pub struct CharacterView {
    pub slot: PlayerSlot,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// False for dead or inactive characters
    pub visible: bool,
    /// Blink phase while invulnerable
    pub flashing: bool,
    pub stats: Stats,
}

/// What an entity looks like to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityView {
    Carrot,
    Fish,
    Vehicle,
    GoldenCarrot,
}

/// Display data for one live entity
#[derive(Debug, Clone, Serialize)]
pub struct EntitySprite {
    pub id: u32,
    pub view: EntityView,
    /// Top-left of the entity's bounds
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Read-only view of a tick's result
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub multiplayer: bool,
    pub characters: Vec<CharacterView>,
    pub entities: Vec<EntitySprite>,
    pub distance: f64,
    pub scroll_offset: f32,
    pub game_over: Option<GameOverCause>,
    /// End-screen text, if the run is over
    pub game_over_message: Option<String>,
}

impl Snapshot {
    pub fn capture(state: &SimulationState) -> Self {
        let characters = PlayerSlot::ALL
            .into_iter()
            .filter(|&slot| state.is_participating(slot))
            .map(|slot| {
                let character = state.character(slot);
                let stats = state.stats(slot);
                CharacterView {
                    slot,
                    x: character.pos.x,
                    y: character.pos.y,
                    width: character.size.x,
                    height: character.size.y,
                    visible: should_render(character, stats),
                    flashing: is_flashing(character, stats),
                    stats: *stats,
                }
            })
            .collect();

        let entities = state
            .entities
            .iter()
            .map(|entity| {
                let view = match entity.kind {
                    EntityKind::Collectible {
                        owner: PlayerSlot::Bunny,
                        ..
                    } => EntityView::Carrot,
                    EntityKind::Collectible {
                        owner: PlayerSlot::Cat,
                        ..
                    } => EntityView::Fish,
                    EntityKind::Obstacle { .. } => EntityView::Vehicle,
                    EntityKind::RareBonus { .. } => EntityView::GoldenCarrot,
                };
                let bounds = entity.bounds();
                EntitySprite {
                    id: entity.id,
                    view,
                    x: bounds.min.x,
                    y: bounds.min.y,
                    width: bounds.size.x,
                    height: bounds.size.y,
                }
            })
            .collect();

        Self {
            tick: state.time_ticks,
            phase: state.phase,
            multiplayer: state.multiplayer,
            characters,
            entities,
            distance: state.distance,
            scroll_offset: state.scroll_offset,
            game_over: state.game_over_cause,
            game_over_message: state.game_over_cause.map(|cause| cause.message()),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
