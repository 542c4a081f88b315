//! Game Tuning Configuration
//!
//! Gameplay tunables live in `assets/config/game.json` so difficulty can be
//! adjusted without recompiling. Unlike textures, the config file is optional:
//! a missing or unreadable file falls back to the built-in defaults with a
//! warning, since every value has a sensible default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Lives at the start of a new game (also the life cap)
    pub starting_lives: i32,

    /// Score awarded for reaching the river
    pub river_reward: u32,

    /// Enemy speed is sampled uniformly from [min, max) pixels/second
    pub enemy_speed_min: f64,
    pub enemy_speed_max: f64,

    /// Rocks placed at distinct columns on each new game
    pub rock_count: usize,

    /// Upper bound on simultaneously active collectibles
    pub max_collectibles: usize,

    /// Seconds of simulated gameplay between collectible spawn attempts
    pub spawn_period: f64,

    /// Seconds between evictions of the oldest active collectible
    pub evict_period: f64,

    /// Character-select carousel slide speed in pixels/second
    pub slide_speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_lives: 3,
            river_reward: 10,
            enemy_speed_min: 80.0,
            enemy_speed_max: 280.0,
            rock_count: 3,
            max_collectibles: 3,
            spawn_period: 5.0,
            evict_period: 15.0,
            slide_speed: 500.0,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load the config, falling back to defaults if the file is absent or
    /// malformed
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: could not load {}: {} (using defaults)", path, e);
                GameConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_rules() {
        let config = GameConfig::default();
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.river_reward, 10);
        assert_eq!(config.enemy_speed_min, 80.0);
        assert_eq!(config.enemy_speed_max, 280.0);
        assert_eq!(config.max_collectibles, 3);
    }

    #[test]
    fn test_partial_json_fills_in_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"river_reward": 25}"#).unwrap();
        assert_eq!(config.river_reward, 25);
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.rock_count, 3);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_or_default("no/such/file.json");
        assert_eq!(config.spawn_period, 5.0);
    }
}
