//! Content domain: RON-backed game configuration.
//!
//! Tuning values live in `assets/data/config.ron`; a missing or malformed
//! file falls back to compiled defaults so the game always boots.

use bevy::prelude::*;
use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "assets/data/config.ron";

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Movement tuning knobs, in grid units and seconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementConfig {
    pub step_size: f32,
    pub step_cooldown: f32,
    pub slide_factor: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            step_size: 0.16,
            step_cooldown: 0.03,
            slide_factor: 1.0 / 3.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub target_rooms: usize,
    /// Full fade length in seconds; the room swap fires at the midpoint.
    pub fade_duration: f32,
    /// Minimum seconds between any two door transitions.
    pub door_cooldown: f32,
    pub movement: MovementConfig,
    /// Fixed dungeon seed. None = roll a fresh one per run.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_rows: 9,
            grid_cols: 9,
            target_rooms: 10,
            fade_duration: 0.3,
            door_cooldown: 1.0,
            movement: MovementConfig::default(),
            seed: None,
        }
    }
}

/// RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let file_name = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
            file: file_name.clone(),
            message: format!("IO error: {}", e),
        })?;

        ron_options()
            .from_str(&contents)
            .map_err(|e| ConfigLoadError {
                file: file_name,
                message: format!("Parse error: {}", e),
            })
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!("[CONTENT] Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("[CONTENT] {}; using default config", err);
                Self::default()
            }
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GameConfig::load_or_default(Path::new(CONFIG_PATH)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = GameConfig::default();
        assert_eq!(config.grid_rows, 9);
        assert_eq!(config.grid_cols, 9);
        assert_eq!(config.target_rooms, 10);
        assert_eq!(config.fade_duration, 0.3);
        assert_eq!(config.door_cooldown, 1.0);
        assert_eq!(config.movement.step_size, 0.16);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_parses_from_ron() {
        let source = r#"(
            grid_rows: 7,
            grid_cols: 11,
            target_rooms: 6,
            fade_duration: 0.5,
            door_cooldown: 2.0,
            movement: (step_size: 0.2, step_cooldown: 0.05, slide_factor: 0.25),
            seed: 42,
        )"#;

        let config: GameConfig = ron_options().from_str(source).unwrap();
        assert_eq!(config.grid_rows, 7);
        assert_eq!(config.grid_cols, 11);
        assert_eq!(config.target_rooms, 6);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.movement.slide_factor, 0.25);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: GameConfig = ron_options().from_str("(target_rooms: 4)").unwrap();
        assert_eq!(config.target_rooms, 4);
        assert_eq!(config.grid_rows, 9);
        assert_eq!(config.fade_duration, 0.3);
    }

    #[test]
    fn test_load_error_display_names_file() {
        let err = GameConfig::load(Path::new("does/not/exist.ron")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("does/not/exist.ron"));
        assert!(message.contains("IO error"));
    }
}
