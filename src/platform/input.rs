//! Keyboard mapping
//!
//! Key names are `KeyboardEvent.key` strings. Arrow keys drive the Bunny,
//! WASD drives the Cat.

use serde::{Deserialize, Serialize};

use crate::settings::Difficulty;
use crate::sim::{Direction, PlayerSlot};

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Hop(PlayerSlot, Direction),
    /// Start / pause / resume
    ToggleRunning,
    /// Takes effect at the next run start
    SelectDifficulty(Difficulty),
    SetMultiplayer(bool),
    ToggleMultiplayer,
    Restart,
}

/// Map a pressed key to an input event
pub fn map_key(key: &str) -> Option<InputEvent> {
    use Direction::*;
    use PlayerSlot::*;

    let event = match key {
        "ArrowUp" => InputEvent::Hop(Bunny, Up),
        "ArrowDown" => InputEvent::Hop(Bunny, Down),
        "ArrowLeft" => InputEvent::Hop(Bunny, Left),
        "ArrowRight" => InputEvent::Hop(Bunny, Right),
        "w" | "W" => InputEvent::Hop(Cat, Up),
        "s" | "S" => InputEvent::Hop(Cat, Down),
        "a" | "A" => InputEvent::Hop(Cat, Left),
        "d" | "D" => InputEvent::Hop(Cat, Right),
        " " | "Enter" => InputEvent::ToggleRunning,
        "r" | "R" => InputEvent::Restart,
        "m" | "M" => InputEvent::ToggleMultiplayer,
        _ => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_drive_bunny() {
        assert_eq!(
            map_key("ArrowUp"),
            Some(InputEvent::Hop(PlayerSlot::Bunny, Direction::Up))
        );
        assert_eq!(
            map_key("ArrowRight"),
            Some(InputEvent::Hop(PlayerSlot::Bunny, Direction::Right))
        );
    }

    #[test]
    fn test_wasd_drives_cat() {
        assert_eq!(
            map_key("a"),
            Some(InputEvent::Hop(PlayerSlot::Cat, Direction::Left))
        );
        assert_eq!(
            map_key("S"),
            Some(InputEvent::Hop(PlayerSlot::Cat, Direction::Down))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(" "), Some(InputEvent::ToggleRunning));
        assert_eq!(map_key("R"), Some(InputEvent::Restart));
        assert_eq!(map_key("m"), Some(InputEvent::ToggleMultiplayer));
        assert_eq!(map_key("Escape"), None);
    }
}
