//! Startup configuration.
//!
//! Values are fixed once the game starts. `GameConfig::from_env` lets a
//! launcher override the defaults through `SNAKE_*` environment variables.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::{Position, CANVAS_SIZE, FOOD_REWARD, GRID_SIZE, START_FOOD, START_POSITION, TICK_MS};

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be non-zero")]
    ZeroGridSize,
    #[error("tile count {0} is too small (canvas {1}px / grid {2}px); need at least 2")]
    TooFewTiles(u32, u32, u32),
    #[error("tile count {0} exceeds the maximum of {max}", max = MAX_TILE_COUNT)]
    TooManyTiles(u32),
    #[error("tick interval must be non-zero")]
    ZeroTick,
    #[error("{what} {pos:?} lies outside the {tiles}x{tiles} grid")]
    OffGrid {
        what: &'static str,
        pos: Position,
        tiles: u32,
    },
    #[error("start food {0:?} overlaps the start position")]
    FoodOnSnake(Position),
}

/// Largest supported number of tiles per side. Keeps every board cell
/// addressable in u16 terminal coordinates at any tile width up to 16.
pub const MAX_TILE_COUNT: u32 = 1024;

/// Default number of random food draws for a `tiles` x `tiles` grid.
pub fn default_spawn_attempts(tiles: u32) -> u32 {
    tiles.saturating_mul(tiles).saturating_mul(4)
}

/// Game geometry, timing and scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Logical drawing surface size in pixels.
    pub canvas_size: u32,
    /// Pixel size of one tile.
    pub grid_size: u32,
    pub tick_ms: u32,
    pub food_reward: u32,
    pub start_position: Position,
    pub start_food: Position,
    /// Random draws tried before food placement falls back to a full scan.
    pub food_spawn_attempts: u32,
    pub seed: u32,
    /// File to write logs to. `None` disables logging.
    pub log_path: Option<String>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        let tiles = CANVAS_SIZE / GRID_SIZE;
        Self {
            canvas_size: CANVAS_SIZE,
            grid_size: GRID_SIZE,
            tick_ms: TICK_MS,
            food_reward: FOOD_REWARD,
            start_position: START_POSITION,
            start_food: START_FOOD,
            food_spawn_attempts: default_spawn_attempts(tiles),
            seed: 1,
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// Unset or unparseable values keep their defaults. Without `SNAKE_SEED`
    /// the seed is taken from the system clock.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(v) = parse_var("SNAKE_CANVAS_SIZE") {
            config.canvas_size = v;
        }
        if let Some(v) = parse_var("SNAKE_GRID_SIZE") {
            config.grid_size = v;
        }
        if let Some(v) = parse_var("SNAKE_TICK_MS") {
            config.tick_ms = v;
        }
        let tiles = config.tile_count() as u32;
        if tiles <= MAX_TILE_COUNT {
            config.food_spawn_attempts = default_spawn_attempts(tiles);
        }

        config.seed = parse_var("SNAKE_SEED").unwrap_or_else(clock_seed);

        config.log_path = env::var("SNAKE_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        if let Ok(level) = env::var("SNAKE_LOG_LEVEL") {
            let level = level.trim().to_lowercase();
            if !level.is_empty() {
                config.log_level = level;
            }
        }

        config
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Number of tiles per side.
    pub fn tile_count(&self) -> i32 {
        if self.grid_size == 0 {
            return 0;
        }
        i32::try_from(self.canvas_size / self.grid_size).unwrap_or(i32::MAX)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        let tiles = self.tile_count();
        if tiles < 2 {
            return Err(ConfigError::TooFewTiles(
                tiles as u32,
                self.canvas_size,
                self.grid_size,
            ));
        }
        if tiles as u32 > MAX_TILE_COUNT {
            return Err(ConfigError::TooManyTiles(tiles as u32));
        }
        for (what, pos) in [
            ("start position", self.start_position),
            ("start food", self.start_food),
        ] {
            if !pos.in_bounds(tiles) {
                return Err(ConfigError::OffGrid {
                    what,
                    pos,
                    tiles: tiles as u32,
                });
            }
        }
        if self.start_food == self.start_position {
            return Err(ConfigError::FoodOnSnake(self.start_food));
        }
        Ok(())
    }
}

fn parse_var(name: &str) -> Option<u32> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.tile_count(), 20);
        assert_eq!(config.food_spawn_attempts, 1600);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_grid() {
        let config = GameConfig {
            grid_size: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGridSize));
    }

    #[test]
    fn rejects_start_outside_small_grid() {
        let config = GameConfig {
            canvas_size: 200,
            ..GameConfig::default()
        };
        // 10 tiles: (10, 10) is just off the grid.
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OffGrid { what: "start position", .. })
        ));
    }

    #[test]
    fn rejects_oversized_grid() {
        let config = GameConfig {
            canvas_size: 40_000,
            grid_size: 1,
            ..GameConfig::default()
        };
        assert_eq!(config.tile_count(), 40_000);
        assert_eq!(config.validate(), Err(ConfigError::TooManyTiles(40_000)));

        let config = GameConfig {
            canvas_size: u32::MAX,
            grid_size: 1,
            ..GameConfig::default()
        };
        assert_eq!(config.tile_count(), i32::MAX);
        assert!(matches!(config.validate(), Err(ConfigError::TooManyTiles(_))));
    }

    #[test]
    fn spawn_attempts_saturate() {
        assert_eq!(default_spawn_attempts(20), 1600);
        assert_eq!(default_spawn_attempts(40_000), u32::MAX);
    }

    const ENV_VARS: [&str; 6] = [
        "SNAKE_CANVAS_SIZE",
        "SNAKE_GRID_SIZE",
        "SNAKE_TICK_MS",
        "SNAKE_SEED",
        "SNAKE_LOG_PATH",
        "SNAKE_LOG_LEVEL",
    ];

    fn set_env(values: [&str; 6]) {
        for (name, value) in ENV_VARS.iter().zip(values) {
            env::set_var(name, value);
        }
    }

    // Only test in this crate that touches the process environment.
    #[test]
    fn test_game_config_from_env() {
        set_env(["200", "10", "50", "42", " /tmp/snake.log ", "DEBUG"]);
        let config = GameConfig::from_env();
        assert_eq!(config.canvas_size, 200);
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.tile_count(), 20);
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.seed, 42);
        assert_eq!(config.food_spawn_attempts, 1600);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/snake.log"));
        assert_eq!(config.log_level, "debug");

        // Garbage keeps the defaults; blank log settings stay off.
        set_env(["big", "-3", "", "7", "   ", ""]);
        let config = GameConfig::from_env();
        let defaults = GameConfig::default();
        assert_eq!(config.canvas_size, defaults.canvas_size);
        assert_eq!(config.grid_size, defaults.grid_size);
        assert_eq!(config.tick_ms, defaults.tick_ms);
        assert_eq!(config.seed, 7);
        assert_eq!(config.food_spawn_attempts, 1600);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, "info");

        // Oversized geometry must not panic; validation rejects it.
        set_env(["40000", "1", "100", "1", "", ""]);
        let config = GameConfig::from_env();
        assert_eq!(config.tile_count(), 40_000);
        assert_eq!(config.validate(), Err(ConfigError::TooManyTiles(40_000)));

        // Smaller grid recomputes the attempt budget.
        set_env(["100", "10", "100", "1", "", ""]);
        assert_eq!(GameConfig::from_env().food_spawn_attempts, 400);

        for name in ENV_VARS {
            env::remove_var(name);
        }
    }

    #[test]
    fn rejects_food_on_start() {
        let config = GameConfig {
            start_food: START_POSITION,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FoodOnSnake(START_POSITION)));
    }
}
