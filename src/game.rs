//! Game controller
//!
//! Owns the `SimulationState`, buffers input between frames and runs exactly
//! one simulation step per `tick`. Whatever schedules frames (a browser
//! animation callback, a native loop, a test) just calls `frame` or `tick`.

use crate::platform::InputEvent;
use crate::renderer::{Renderer, Snapshot};
use crate::settings::{Difficulty, Settings};
use crate::sim::{self, Direction, GamePhase, PlayerSlot, SimulationState, TickInput};
use crate::tuning::Tuning;

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    state: SimulationState,
    /// Hops requested since the last tick
    input: TickInput,
    /// Difficulty of the current run
    difficulty: Difficulty,
    /// Difficulty the next run will use
    next_difficulty: Difficulty,
}

impl Game {
    /// Create a game in the Ready phase. Without a seed in `settings` one is drawn at random.
    pub fn new(settings: &Settings, tuning: Tuning) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "New game: difficulty {}, multiplayer {}, seed {}",
            settings.difficulty.as_str(),
            settings.multiplayer,
            seed
        );
        Self {
            state: SimulationState::new(
                seed,
                settings.difficulty.profile(),
                tuning,
                settings.multiplayer,
            ),
            input: TickInput::default(),
            difficulty: settings.difficulty,
            next_difficulty: settings.difficulty,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Dispatch one input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Hop(slot, direction) => self.hop(slot, direction),
            InputEvent::ToggleRunning => self.toggle_running(),
            InputEvent::SelectDifficulty(difficulty) => self.select_difficulty(difficulty),
            InputEvent::SetMultiplayer(enabled) => self.set_multiplayer(enabled),
            InputEvent::ToggleMultiplayer => self.set_multiplayer(!self.state.multiplayer),
            InputEvent::Restart => self.restart(),
        }
    }

    /// Queue a hop for the next tick. The latest request per player wins.
    pub fn hop(&mut self, slot: PlayerSlot, direction: Direction) {
        self.input.hops[slot.index()] = Some(direction);
    }

    /// Start a fresh run, pause a running one, or resume a paused one.
    /// Ignored after game over: only a restart leaves that state.
    pub fn toggle_running(&mut self) {
        self.state.phase = match self.state.phase {
            GamePhase::Ready => {
                log::info!("Run started ({})", self.difficulty.as_str());
                GamePhase::Running
            }
            GamePhase::Running => {
                log::info!("Paused at tick {}", self.state.time_ticks);
                GamePhase::Paused
            }
            GamePhase::Paused => {
                log::info!("Resumed");
                GamePhase::Running
            }
            GamePhase::GameOver => GamePhase::GameOver,
        };
    }

    /// Pick the difficulty for the next run. A run that has not started yet picks it up now.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.next_difficulty = difficulty;
        if self.state.phase == GamePhase::Ready {
            self.difficulty = difficulty;
            self.state.restart(difficulty.profile());
        } else {
            log::info!("Difficulty {} applies from the next run", difficulty.as_str());
        }
    }

    pub fn set_multiplayer(&mut self, enabled: bool) {
        self.state.set_multiplayer(enabled);
        if !enabled {
            self.input.hops[PlayerSlot::Cat.index()] = None;
        }
    }

    /// Reset every per-run value and start running again
    pub fn restart(&mut self) {
        self.difficulty = self.next_difficulty;
        self.state.restart(self.difficulty.profile());
        self.input = TickInput::default();
        self.state.phase = GamePhase::Running;
        log::info!("Restarted ({})", self.difficulty.as_str());
    }

    /// Run one simulation step with the buffered input. Returns whether the
    /// run is still going (i.e. whether the host should schedule another frame).
    pub fn tick(&mut self) -> bool {
        let input = std::mem::take(&mut self.input);
        sim::tick(&mut self.state, &input);
        self.state.is_running()
    }

    /// One step followed by a hand-off to the renderer
    pub fn frame(&mut self, renderer: &mut dyn Renderer) -> bool {
        let running = self.tick();
        renderer.render(&self.snapshot());
        running
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameOverCause;

    fn quiet_game(multiplayer: bool) -> Game {
        let settings = Settings {
            difficulty: Difficulty::Normal,
            multiplayer,
            seed: Some(5),
        };
        Game::new(&settings, Tuning::without_spawns())
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<u64>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, snapshot: &Snapshot) {
            self.frames.push(snapshot.tick);
        }
    }

    #[test]
    fn test_toggle_running_cycle() {
        let mut game = quiet_game(false);
        assert_eq!(game.phase(), GamePhase::Ready);
        assert!(!game.tick());

        game.toggle_running();
        assert_eq!(game.phase(), GamePhase::Running);
        assert!(game.tick());

        game.toggle_running();
        assert_eq!(game.phase(), GamePhase::Paused);
        assert!(!game.tick());
        assert_eq!(game.state().time_ticks, 1);

        game.toggle_running();
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn test_hop_consumed_once() {
        let mut game = quiet_game(false);
        game.toggle_running();
        game.hop(PlayerSlot::Bunny, Direction::Up);
        game.tick();
        for _ in 0..30 {
            game.tick();
        }
        let bunny = game.state().character(PlayerSlot::Bunny);
        assert!(!bunny.hopping);
        assert_eq!(bunny.pos.y, 210.0);
    }

    #[test]
    fn test_difficulty_latched_until_restart() {
        let mut game = quiet_game(false);
        game.toggle_running();
        game.tick();

        game.select_difficulty(Difficulty::Hard);
        assert_eq!(game.difficulty(), Difficulty::Normal);
        assert_eq!(game.state().profile, Difficulty::Normal.profile());

        game.restart();
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.state().profile, Difficulty::Hard.profile());
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.state().time_ticks, 0);
    }

    #[test]
    fn test_difficulty_applies_before_start() {
        let mut game = quiet_game(false);
        game.select_difficulty(Difficulty::Easy);
        assert_eq!(game.difficulty(), Difficulty::Easy);
        assert_eq!(game.state().profile.speed, 1.5);
        assert_eq!(game.phase(), GamePhase::Ready);
    }

    #[test]
    fn test_game_over_requires_restart() {
        let mut game = quiet_game(false);
        game.toggle_running();
        game.state_mut().stats_mut(PlayerSlot::Bunny).energy = 0.01;
        assert!(!game.tick());
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(
            game.state().game_over_cause,
            Some(GameOverCause::Exhausted(PlayerSlot::Bunny))
        );

        game.toggle_running();
        assert_eq!(game.phase(), GamePhase::GameOver);

        game.handle(InputEvent::Restart);
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.state().stats(PlayerSlot::Bunny).energy, 100.0);
        assert!(game.state().game_over_cause.is_none());
    }

    #[test]
    fn test_toggle_multiplayer_event() {
        let mut game = quiet_game(false);
        game.handle(InputEvent::ToggleMultiplayer);
        assert!(game.state().multiplayer);
        assert!(game.state().character(PlayerSlot::Cat).active);

        game.hop(PlayerSlot::Cat, Direction::Up);
        game.handle(InputEvent::SetMultiplayer(false));
        assert!(!game.state().multiplayer);
        game.toggle_running();
        game.tick();
        assert!(!game.state().character(PlayerSlot::Cat).hopping);
    }

    #[test]
    fn test_frame_renders_every_tick() {
        let mut game = quiet_game(false);
        let mut recorder = Recorder::default();
        game.toggle_running();
        for _ in 0..3 {
            assert!(game.frame(&mut recorder));
        }
        assert_eq!(recorder.frames, vec![1, 2, 3]);
    }

    #[test]
    fn test_single_player_run_ends_by_tick_2000() {
        let mut game = quiet_game(false);
        game.toggle_running();
        let mut ticks = 0;
        while game.tick() {
            ticks += 1;
        }
        ticks += 1;
        assert!(ticks <= 2000);
        assert!(game.state().is_game_over());
        assert_eq!(game.state().stats(PlayerSlot::Bunny).energy, 0.0);
    }
}
