//! Game settings and difficulty selection
//!
//! The difficulty is latched into a `DifficultyProfile` when a run starts and
//! stays fixed until the next restart.

use serde::{Deserialize, Serialize};

/// Difficulty levels offered on the start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" | "med" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Multipliers applied for a run at this difficulty
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                speed: 1.5,
                spawn_interval_multiplier: 1.25,
                energy_drain_multiplier: 0.75,
            },
            Difficulty::Normal => DifficultyProfile {
                speed: 2.0,
                spawn_interval_multiplier: 1.0,
                energy_drain_multiplier: 1.0,
            },
            Difficulty::Hard => DifficultyProfile {
                speed: 3.0,
                spawn_interval_multiplier: 0.75,
                energy_drain_multiplier: 1.5,
            },
        }
    }
}

/// Per-run multiplier set. Immutable once a run has started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Base scroll speed (units per tick)
    pub speed: f32,
    /// Scales every spawn interval (larger = sparser)
    pub spawn_interval_multiplier: f32,
    /// Scales the per-tick energy drain
    pub energy_drain_multiplier: f64,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Difficulty::Normal.profile()
    }
}

impl DifficultyProfile {
    /// Scale a base interval (ticks) by this profile, never below one tick
    pub fn scale_interval(&self, base_ticks: u32) -> u32 {
        ((base_ticks as f32 * self.spawn_interval_multiplier).round() as u32).max(1)
    }
}

/// Game settings supplied by the host at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty for the first run
    pub difficulty: Difficulty,
    /// Whether the Cat joins from the start
    pub multiplayer: bool,
    /// Fixed RNG seed (None = host picks one)
    pub seed: Option<u64>,
}

impl Settings {
    /// Parse settings handed over by the host as JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_str("nightmare"), None);
        assert_eq!(Difficulty::Easy.as_str(), "Easy");
    }

    #[test]
    fn test_scale_interval() {
        let hard = Difficulty::Hard.profile();
        assert_eq!(hard.scale_interval(100), 75);
        assert_eq!(hard.scale_interval(1), 1);
        assert_eq!(Difficulty::Normal.profile().scale_interval(90), 90);

        let degenerate = DifficultyProfile {
            spawn_interval_multiplier: 0.0,
            ..Default::default()
        };
        assert_eq!(degenerate.scale_interval(90), 1);
    }

    #[test]
    fn test_settings_json_defaults() {
        let settings = Settings::from_json(r#"{"multiplayer": true}"#).unwrap();
        assert!(settings.multiplayer);
        assert_eq!(settings.difficulty, Difficulty::Normal);
        assert_eq!(settings.seed, None);

        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = Settings {
            difficulty: Difficulty::Hard,
            multiplayer: false,
            seed: Some(7),
        };
        let json = settings.to_json().unwrap();
        let back = Settings::from_json(&json).unwrap();
        assert_eq!(back.difficulty, Difficulty::Hard);
        assert_eq!(back.seed, Some(7));
    }
}
