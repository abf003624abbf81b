//! Rendering collaborator interface
//!
//! The game never rasterizes anything itself. Each frame it builds a `Frame`:
//! an ordered list of draw commands in screen space (y down) that a backend
//! replays. `shapes::tessellate` turns the filled shapes into a triangle list
//! for GPU backends.

pub mod shapes;
pub mod vertex;

pub use crate::colors;
pub use vertex::Vertex;

use crate::Point;
use crate::menu::DifficultyMenu;
use crate::settings::GameConfig;
use crate::sim::{Background, Bullet, Enemy, GameState, Player};

/// How a text position is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear([f32; 4]),
    /// Backdrop image with its top edge at `y`
    Backdrop { y: f32 },
    /// Filled polygon, world-space vertices
    Polygon { points: Vec<Point>, color: [f32; 4] },
    /// Filled circle
    Circle {
        center: Point,
        radius: f32,
        color: [f32; 4],
    },
    Text {
        text: String,
        position: Point,
        anchor: TextAnchor,
        color: [f32; 4],
    },
}

/// One frame's worth of draw commands, in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn clear(&mut self, color: [f32; 4]) {
        self.commands.push(DrawCommand::Clear(color));
    }

    pub fn backdrop(&mut self, y: f32) {
        self.commands.push(DrawCommand::Backdrop { y });
    }

    pub fn polygon(&mut self, points: Vec<Point>, color: [f32; 4]) {
        self.commands.push(DrawCommand::Polygon { points, color });
    }

    pub fn circle(&mut self, center: Point, radius: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, position: Point, anchor: TextAnchor, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            position,
            anchor,
            color,
        });
    }

    /// All text strings, in paint order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Background {
    pub fn draw(&self, frame: &mut Frame) {
        for y in self.offsets {
            frame.backdrop(y);
        }
    }
}

impl Bullet {
    pub fn draw(&self, frame: &mut Frame) {
        frame.circle(self.position, self.radius, self.color);
    }
}

impl Enemy {
    pub fn draw(&self, frame: &mut Frame) {
        frame.polygon(self.polygon.points(), self.color);
    }
}

impl Player {
    /// Ship, then its bullets
    pub fn draw(&self, frame: &mut Frame) {
        frame.polygon(self.polygon.points(), self.color);
        for bullet in &self.bullets {
            bullet.draw(frame);
        }
    }
}

/// In-round frame: backdrop, ship and bullets, enemies, score
pub fn round_frame(state: &GameState) -> Frame {
    let mut frame = Frame::default();
    frame.clear(colors::BACKGROUND);
    state.background.draw(&mut frame);
    state.player.draw(&mut frame);
    for enemy in &state.enemies {
        enemy.draw(&mut frame);
    }
    frame.text(
        format!("Score: {}", state.score),
        Point::new(10.0, 10.0),
        TextAnchor::TopLeft,
        colors::TEXT,
    );
    frame
}

/// Difficulty selection screen
pub fn menu_frame(menu: &DifficultyMenu) -> Frame {
    let mut frame = Frame::default();
    frame.clear(colors::BACKGROUND);
    for (difficulty, rect) in menu.labels() {
        frame.text(difficulty.as_str(), rect.center(), TextAnchor::Center, colors::TEXT);
    }
    frame
}

/// End-of-round summary
pub fn game_over_frame(score: u64, best: u64, config: &GameConfig) -> Frame {
    let center = Point::new(
        (config.screen_width / 2.0).floor(),
        (config.screen_height / 2.0).floor(),
    );
    let mut frame = Frame::default();
    frame.clear(colors::GAME_OVER_BG);
    frame.text("GAME OVER", center, TextAnchor::Center, colors::GAME_OVER_TEXT);
    frame.text(
        format!("Score: {score}"),
        center + Point::new(0.0, 50.0),
        TextAnchor::Center,
        colors::TEXT,
    );
    frame.text(
        format!("Best Score: {best}"),
        center + Point::new(0.0, 100.0),
        TextAnchor::Center,
        colors::TEXT,
    );
    frame
}
