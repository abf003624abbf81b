//! Game state and entity types
//!
//! One `GameState` is created per round and dropped when the round ends;
//! score and phase live here rather than on the driver.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::background::Background;
use super::polygon::{Polygon, Rect};
use super::tick::TickInput;
use crate::Point;
use crate::error::ShapeError;
use crate::colors;
use crate::settings::{Difficulty, DifficultySettings, GameConfig};

/// RGBA, 0-1
pub type Rgba = [f32; 4];

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Playing,
    /// An enemy reached the player
    Over,
}

/// Things that happened during a tick (for logging, audio cues, tests)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Fired { at: Point },
    EnemySpawned { id: u32, x: f32 },
    EnemyRecycled { id: u32, x: f32 },
    EnemyDestroyed { id: u32, at: Point },
    PlayerHit { enemy_id: u32 },
    SpeedIncreased { ramp: u32, enemies: usize },
}

/// A projectile travelling straight up
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub position: Point,
    /// Pixels per frame along y (negative is up)
    pub velocity: f32,
    pub radius: f32,
    pub color: Rgba,
}

impl Bullet {
    pub fn new(position: Point, velocity: f32, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            color: colors::BULLET,
        }
    }

    pub fn advance(&mut self) {
        self.position.y += self.velocity;
    }

    /// Crossed above the top of the screen
    pub fn is_off_screen(&self) -> bool {
        self.position.y < 0.0
    }
}

/// A descending polygonal enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub polygon: Polygon,
    pub speed: f32,
    pub color: Rgba,
}

impl Enemy {
    pub fn new(id: u32, polygon: Polygon, speed: f32, color: Rgba) -> Self {
        Self {
            id,
            polygon,
            speed,
            color,
        }
    }

    /// Move down by `speed`. An enemy that fell below `screen_height` is
    /// recycled to the top at a fresh x; returns true when that happens.
    pub fn advance(&mut self, screen_height: f32, spawn_x: impl FnOnce() -> f32) -> bool {
        self.polygon.translate(0.0, self.speed);
        if self.polygon.position().y > screen_height {
            self.polygon.set_position(Point::new(spawn_x(), 0.0));
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> Point {
        self.polygon.position()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.polygon.contains(point)
    }

    pub fn bounds(&self) -> Rect {
        self.polygon.bounds()
    }
}

/// The player's ship and its bullets
#[derive(Debug, Clone)]
pub struct Player {
    pub polygon: Polygon,
    pub speed: f32,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub bullets: Vec<Bullet>,
    pub color: Rgba,
    screen_width: f32,
}

impl Player {
    /// Ship centred horizontally, `player_bottom_offset` above the bottom edge
    pub fn new(config: &GameConfig, settings: &DifficultySettings) -> Result<Self, ShapeError> {
        let start = Point::new(
            (config.screen_width / 2.0).floor(),
            config.screen_height - config.player_bottom_offset,
        );
        Ok(Self {
            polygon: Polygon::new(&config.player_shape, start, 0.0)?,
            speed: settings.player_speed,
            bullet_speed: settings.bullet_speed,
            bullet_radius: config.bullet_radius,
            bullets: Vec::new(),
            color: colors::PLAYER,
            screen_width: config.screen_width,
        })
    }

    pub fn position(&self) -> Point {
        self.polygon.position()
    }

    /// Apply held keys: move within the screen, fire while the trigger is held.
    /// Returns true if a bullet was fired.
    pub fn steer(&mut self, input: &TickInput) -> bool {
        if input.left && self.position().x > 0.0 {
            self.polygon.translate(-self.speed, 0.0);
        }
        if input.right && self.position().x < self.screen_width {
            self.polygon.translate(self.speed, 0.0);
        }
        if input.fire {
            self.shoot();
        }
        input.fire
    }

    /// Fire a bullet upward from the ship's anchor
    pub fn shoot(&mut self) {
        self.bullets.push(Bullet::new(
            self.position(),
            -self.bullet_speed,
            self.bullet_radius,
        ));
    }

    /// Advance every bullet and drop the ones that left the top of the screen
    pub fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.advance();
        }
        self.bullets.retain(|b| !b.is_off_screen());
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameState {
    /// Round seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub config: GameConfig,
    pub difficulty: Difficulty,
    pub settings: DifficultySettings,
    pub score: u64,
    pub phase: RoundPhase,
    /// Frames simulated this round
    pub time_ticks: u64,
    /// Simulated round time
    pub elapsed_secs: f64,
    /// Speed-ups applied so far
    pub speed_ramps: u32,
    pub background: Background,
    pub player: Player,
    /// Active enemies in spawn order
    pub enemies: Vec<Enemy>,
    next_id: u32,
}

impl GameState {
    pub fn new(config: &GameConfig, difficulty: Difficulty, seed: u64) -> Result<Self, ShapeError> {
        let settings = config.settings_for(difficulty);
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config: config.clone(),
            difficulty,
            settings,
            score: 0,
            phase: RoundPhase::Playing,
            time_ticks: 0,
            elapsed_secs: 0.0,
            speed_ramps: 0,
            background: Background::new(config.background_height, config.background_scroll_speed),
            player: Player::new(config, &settings)?,
            enemies: Vec::new(),
            next_id: 1,
        })
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Over
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one enemy at a random x along the top edge
    pub fn spawn_enemy(&mut self) -> Result<u32, ShapeError> {
        let x = random_spawn_x(&mut self.rng, &self.config);
        self.spawn_enemy_at(Point::new(x, 0.0))
    }

    /// Place an enemy at an explicit position (scripted waves, tests)
    pub fn spawn_enemy_at(&mut self, position: Point) -> Result<u32, ShapeError> {
        let polygon = Polygon::new(&self.config.enemy_shape, position, 0.0)?;
        let color = random_color(&mut self.rng);
        let id = self.next_entity_id();
        self.enemies
            .push(Enemy::new(id, polygon, self.settings.enemy_speed, color));
        Ok(id)
    }
}

/// Whole-pixel x inside the spawn margins
pub fn random_spawn_x(rng: &mut impl Rng, config: &GameConfig) -> f32 {
    let (lo, hi) = config.spawn_x_range();
    let (lo, hi) = (lo.ceil() as i32, hi.floor() as i32);
    if lo > hi {
        return (config.screen_width / 2.0).floor();
    }
    rng.random_range(lo..=hi) as f32
}

fn random_color(rng: &mut impl Rng) -> Rgba {
    let [r, g, b]: [u8; 3] = rng.random();
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}
