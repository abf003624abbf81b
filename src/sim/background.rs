//! Two-tile vertical background scroll

/// Offsets of two stacked copies of the backdrop image
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub tile_height: f32,
    pub scroll_speed: f32,
    /// Top edge of each tile in screen space
    pub offsets: [f32; 2],
}

impl Background {
    pub fn new(tile_height: f32, scroll_speed: f32) -> Self {
        Self {
            tile_height,
            scroll_speed,
            offsets: [0.0, -tile_height],
        }
    }

    /// Scroll down one frame, wrapping tiles that left the bottom
    pub fn update(&mut self) {
        for y in &mut self.offsets {
            *y += self.scroll_speed;
            if *y > self.tile_height {
                *y = -self.tile_height;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_and_wrap() {
        let mut bg = Background::new(10.0, 5.0);
        bg.update();
        assert_eq!(bg.offsets, [5.0, -5.0]);
        bg.update();
        assert_eq!(bg.offsets, [10.0, 0.0]);
        // 15 > 10 wraps back above the screen
        bg.update();
        assert_eq!(bg.offsets, [-10.0, 5.0]);
    }
}
