//! Asteroid Avoidance - an arcade avoidance shooter
//!
//! Core modules:
//! - `sim`: Polygon geometry, entities and the per-frame coordinator
//! - `renderer`: Draw lists handed to the rendering collaborator
//! - `platform`: Input/present/timing collaborator trait + headless backend
//! - `game`: Round lifecycle (menu, round, game over, restart)
//! - `menu`: Difficulty selection screen
//! - `highscores`: Session leaderboard
//! - `settings`: Difficulty presets and game configuration

pub mod error;
pub mod game;
pub mod highscores;
pub mod menu;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, ShapeError};
pub use game::Game;
pub use highscores::HighScores;
pub use settings::{Difficulty, DifficultySettings, GameConfig};

use glam::Vec2;

/// 2D coordinate, used both as a vector and as a polygon vertex
pub type Point = Vec2;

/// Game configuration constants
pub mod consts {
    use super::Point;

    /// Window dimensions
    pub const SCREEN_WIDTH: f32 = 500.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Frame clock rate
    pub const FPS: u32 = 30;

    /// Enemies spawn at least this far from either side of the screen
    pub const SPAWN_MARGIN: f32 = 40.0;
    /// Player ship anchor distance from the bottom edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 70.0;

    pub const BULLET_RADIUS: f32 = 3.0;

    /// Enemy speed-up cadence
    pub const SPEED_RAMP_INTERVAL_SECS: f32 = 60.0;
    pub const SPEED_RAMP_STEP: f32 = 1.0;

    /// Pause on the game over screen before the menu comes back
    pub const GAME_OVER_DELAY_MS: u64 = 2000;

    /// Background scroll (pixels per frame)
    pub const BACKGROUND_SCROLL_SPEED: f32 = 5.0;

    /// Player ship outline (pointing up)
    pub const PLAYER_SHAPE: [Point; 5] = [
        Point::new(0.0, -20.0),  // nose
        Point::new(10.0, 10.0),  // right wing
        Point::new(5.0, 0.0),    // right notch
        Point::new(-5.0, 0.0),   // left notch
        Point::new(-10.0, 10.0), // left wing
    ];

    /// Enemy octagon
    pub const ENEMY_SHAPE: [Point; 8] = [
        Point::new(0.0, -25.0),
        Point::new(15.0, -10.0),
        Point::new(20.0, 0.0),
        Point::new(15.0, 10.0),
        Point::new(0.0, 25.0),
        Point::new(-15.0, 10.0),
        Point::new(-20.0, 0.0),
        Point::new(-15.0, -10.0),
    ];
}

/// Colors for game elements (RGBA, 0-1)
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PLAYER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER_BG: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const GAME_OVER_TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if d >= 360.0 { 0.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!(normalize_degrees(-1e-10) < 360.0);
    }
}
