//! Difficulty selection menu
//!
//! Two labels stacked around the screen center; a click inside a label's box
//! picks that difficulty.

use glam::Vec2;

use crate::Point;
use crate::settings::{Difficulty, GameConfig};
use crate::sim::Rect;

/// Hit box of a menu label (roughly a 36px font line)
pub const LABEL_SIZE: Vec2 = Vec2::new(64.0, 26.0);

/// Vertical distance of each label from the screen center
pub const LABEL_SPACING: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct DifficultyMenu {
    easy: Rect,
    hard: Rect,
}

impl DifficultyMenu {
    pub fn new(config: &GameConfig) -> Self {
        let center = Point::new(
            (config.screen_width / 2.0).floor(),
            (config.screen_height / 2.0).floor(),
        );
        Self {
            easy: Rect::from_center(center - Vec2::new(0.0, LABEL_SPACING), LABEL_SIZE),
            hard: Rect::from_center(center + Vec2::new(0.0, LABEL_SPACING), LABEL_SIZE),
        }
    }

    /// Labels in display order
    pub fn labels(&self) -> [(Difficulty, Rect); 2] {
        [(Difficulty::Easy, self.easy), (Difficulty::Hard, self.hard)]
    }

    /// Difficulty whose label contains the click, if any
    pub fn select(&self, click: Point) -> Option<Difficulty> {
        self.labels()
            .into_iter()
            .find(|(_, rect)| rect.contains_point(click))
            .map(|(difficulty, _)| difficulty)
    }

    /// Center of a label (where a scripted click should land)
    pub fn label_center(&self, difficulty: Difficulty) -> Point {
        match difficulty {
            Difficulty::Easy => self.easy.center(),
            Difficulty::Hard => self.hard.center(),
        }
    }
}
