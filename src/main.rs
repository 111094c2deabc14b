//! Carrot Dash entry point
//!
//! The browser build is driven from JavaScript through `platform::web`. The
//! native build runs a headless autopilot session and logs how it went.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use carrot_dash::consts::*;
    use carrot_dash::renderer::{Renderer, Snapshot};
    use carrot_dash::sim::{Direction, EntityKind, PlayerSlot, SimulationState};
    use carrot_dash::{Difficulty, Game, Settings, Tuning};

    /// Logs a status line every couple of seconds of game time
    struct LogRenderer {
        every: u64,
    }

    impl Renderer for LogRenderer {
        fn render(&mut self, snapshot: &Snapshot) {
            if snapshot.tick % self.every != 0 {
                return;
            }
            for view in &snapshot.characters {
                log::info!(
                    "tick {:>5} {:<5} at ({:>5.1}, {:>5.1}) energy {:>5.1} collected {}{}",
                    snapshot.tick,
                    view.slot.name(),
                    view.x,
                    view.y,
                    view.stats.energy,
                    view.stats.collected,
                    if view.flashing { " (hit)" } else { "" }
                );
            }
        }
    }

    /// An obstacle in this row is within `reach` of x
    fn row_threatened(state: &SimulationState, row: f32, x: f32, reach: f32) -> bool {
        state.entities.iter().any(|e| match e.kind {
            EntityKind::Obstacle { .. } => {
                let bounds = e.bounds();
                bounds.min.y >= row
                    && bounds.min.y < row + BUNNY_HEIGHT
                    && (bounds.center().x - x).abs() < reach
            }
            _ => false,
        })
    }

    /// Chase the nearest carrot's row, backing off toward home when traffic is close
    fn autopilot(state: &SimulationState) -> Option<Direction> {
        let bunny = state.character(PlayerSlot::Bunny);
        if bunny.hopping {
            return None;
        }
        let x = bunny.center().x;
        let row = bunny.pos.y;

        if row < PLAYFIELD_MAX_Y && row_threatened(state, row, x, 110.0) {
            return Some(Direction::Down);
        }

        let carrot_row = state
            .entities
            .iter()
            .filter(|e| {
                matches!(
                    e.kind,
                    EntityKind::Collectible {
                        owner: PlayerSlot::Bunny,
                        ..
                    }
                ) && e.pos.x + COLLECTIBLE_SIZE > bunny.pos.x
            })
            .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
            .map(|e| e.pos.y - COLLECTIBLE_ROW_OFFSET)?;

        let direction = if carrot_row < row {
            Direction::Up
        } else if carrot_row > row {
            Direction::Down
        } else {
            return None;
        };
        let next_row = row + direction.step().y * GRID_UNIT;
        if row_threatened(state, next_row, x, 160.0) {
            None
        } else {
            Some(direction)
        }
    }

    pub fn run() {
        let difficulty = std::env::var("CARROT_DASH_DIFFICULTY")
            .ok()
            .and_then(|name| Difficulty::from_str(&name))
            .unwrap_or_default();
        let settings = Settings {
            difficulty,
            ..Settings::default()
        };

        let mut game = Game::new(&settings, Tuning::default());
        let mut renderer = LogRenderer { every: 240 };
        game.toggle_running();

        loop {
            if let Some(direction) = autopilot(game.state()) {
                game.hop(PlayerSlot::Bunny, direction);
            }
            if !game.frame(&mut renderer) {
                break;
            }
        }

        let state = game.state();
        let stats = state.stats(PlayerSlot::Bunny);
        let message = state
            .game_over_cause
            .map(|cause| cause.message())
            .unwrap_or_default();
        println!(
            "\n{} after {} ticks: distance {:.0}, carrots {}",
            message, state.time_ticks, state.distance, stats.collected
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Carrot Dash (native) starting headless autopilot run...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
