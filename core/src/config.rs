use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::types::{Cell, Difficulty, Direction};

/// Fixed gameplay constants. Defaults reproduce the classic setup: a 625x625
/// pixel screen of 25-pixel cells (25x25 grid), a four-segment snake starting
/// at the top heading down, 10 steps/s on Easy and 30 steps/s on Hard.
///
/// A YAML file can override the defaults; values are validated on load and
/// never change at runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_size: u32,
    pub easy_tick_ms: u64,
    pub hard_tick_ms: u64,
    pub initial_body: Vec<Cell>,
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 625,
            screen_height: 625,
            cell_size: 25,
            easy_tick_ms: 100,
            hard_tick_ms: 33,
            initial_body: vec![
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(2, 3),
            ],
            initial_direction: Direction::Down,
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        Grid::from_pixels(self.screen_width, self.screen_height, self.cell_size)
    }

    pub fn tick_interval(&self, difficulty: Difficulty) -> Duration {
        match difficulty {
            Difficulty::Easy => Duration::from_millis(self.easy_tick_ms),
            Difficulty::Hard => Duration::from_millis(self.hard_tick_ms),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be positive".to_string());
        }
        if self.screen_width < self.cell_size || self.screen_height < self.cell_size {
            return Err("screen must be at least one cell in each dimension".to_string());
        }
        if self.easy_tick_ms == 0 || self.hard_tick_ms == 0 {
            return Err("tick intervals must be positive".to_string());
        }
        if self.initial_body.len() < 2 {
            return Err("initial snake body must have at least 2 cells".to_string());
        }
        let grid = self.grid();
        if self.initial_body.iter().any(|cell| !grid.contains(*cell)) {
            return Err("initial snake body must lie within the grid".to_string());
        }
        Ok(())
    }

    /// Loads a config from a YAML file. A missing file yields the defaults;
    /// an unreadable, unparsable or invalid file is an error.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid(), Grid::new(25, 25));
        assert_eq!(
            config.tick_interval(Difficulty::Easy),
            Duration::from_millis(100)
        );
        assert_eq!(
            config.tick_interval(Difficulty::Hard),
            Duration::from_millis(33)
        );
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let config = GameConfig::default();
        let serialized = serde_yaml_ng::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_yaml_ng::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config: GameConfig = serde_yaml_ng::from_str("cell_size: 20\n").unwrap();
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.screen_width, 625);
        assert_eq!(config.initial_direction, Direction::Down);
    }

    #[test]
    fn test_validate_rejects_zero_cell_size() {
        let config = GameConfig {
            cell_size: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_grid_initial_body() {
        let config = GameConfig {
            initial_body: vec![Cell::new(2, 0), Cell::new(2, 100)],
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_short_body() {
        let config = GameConfig {
            initial_body: vec![Cell::new(2, 0)],
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("snake_config_missing_{}.yaml", random_number));
        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_reads_and_validates_file() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("snake_config_{}.yaml", random_number));

        std::fs::write(&path, "easy_tick_ms: 200\nhard_tick_ms: 66\n").unwrap();
        let config = GameConfig::load(&path).unwrap();
        assert_eq!(
            config.tick_interval(Difficulty::Easy),
            Duration::from_millis(200)
        );

        std::fs::write(&path, "cell_size: 0\n").unwrap();
        assert!(GameConfig::load(&path).is_err());

        let _ = std::fs::remove_file(&path);
    }
}
