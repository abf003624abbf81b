//! Difficulty presets and game configuration
//!
//! `GameConfig` carries every tunable of a session. It defaults to the classic
//! 500x600 layout and can be overridden by a (possibly partial) JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Polygon;

/// Difficulty chosen from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Built-in parameter bundle for this difficulty
    pub fn settings(&self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings {
                enemy_speed: 6.0,
                enemy_spawn_cap: 5,
                player_speed: 5.0,
                bullet_speed: 10.0,
            },
            Difficulty::Hard => DifficultySettings {
                enemy_speed: 8.0,
                enemy_spawn_cap: 5,
                player_speed: 8.0,
                bullet_speed: 12.0,
            },
        }
    }
}

/// Speeds are in pixels per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub enemy_speed: f32,
    /// Enemies on screen are topped up to this count, one per frame
    pub enemy_spawn_cap: usize,
    pub player_speed: f32,
    pub bullet_speed: f32,
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,

    // === Spawning / layout ===
    pub spawn_margin: f32,
    pub player_bottom_offset: f32,
    pub bullet_radius: f32,

    // === Pacing ===
    pub speed_ramp_interval_secs: f32,
    pub speed_ramp_step: f32,
    pub game_over_delay_ms: u64,

    // === Backdrop ===
    pub background_height: f32,
    pub background_scroll_speed: f32,

    // === Shapes (any offset; normalized on use) ===
    pub player_shape: Vec<Point>,
    pub enemy_shape: Vec<Point>,

    // === Difficulty bundles ===
    pub easy: DifficultySettings,
    pub hard: DifficultySettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,

            spawn_margin: SPAWN_MARGIN,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,
            bullet_radius: BULLET_RADIUS,

            speed_ramp_interval_secs: SPEED_RAMP_INTERVAL_SECS,
            speed_ramp_step: SPEED_RAMP_STEP,
            game_over_delay_ms: GAME_OVER_DELAY_MS,

            background_height: SCREEN_HEIGHT,
            background_scroll_speed: BACKGROUND_SCROLL_SPEED,

            player_shape: PLAYER_SHAPE.to_vec(),
            enemy_shape: ENEMY_SHAPE.to_vec(),

            easy: Difficulty::Easy.settings(),
            hard: Difficulty::Hard.settings(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Polygon::new(&self.player_shape, Point::ZERO, 0.0)
            .map_err(|source| ConfigError::InvalidShape { name: "player", source })?;
        Polygon::new(&self.enemy_shape, Point::ZERO, 0.0)
            .map_err(|source| ConfigError::InvalidShape { name: "enemy", source })?;

        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::InvalidValue(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.screen_width <= 2.0 * self.spawn_margin {
            return Err(ConfigError::InvalidValue(format!(
                "screen width {} leaves no room between spawn margins of {}",
                self.screen_width, self.spawn_margin
            )));
        }
        if self.fps == 0 {
            return Err(ConfigError::InvalidValue("fps must be non-zero".into()));
        }
        if !(self.speed_ramp_interval_secs > 0.0) {
            return Err(ConfigError::InvalidValue(format!(
                "speed ramp interval must be positive, got {}",
                self.speed_ramp_interval_secs
            )));
        }
        if !(self.background_height > 0.0) {
            return Err(ConfigError::InvalidValue(format!(
                "background height must be positive, got {}",
                self.background_height
            )));
        }
        Ok(())
    }

    /// Parameter bundle for a difficulty label
    pub fn settings_for(&self, difficulty: Difficulty) -> DifficultySettings {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Hard => self.hard,
        }
    }

    /// Fixed simulation step in seconds
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Inclusive x range for enemy spawns along the top edge
    pub fn spawn_x_range(&self) -> (f32, f32) {
        (self.spawn_margin, self.screen_width - self.spawn_margin)
    }
}
