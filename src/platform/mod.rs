//! Platform abstraction layer
//!
//! Everything the game needs from the outside world:
//! - Input events (quit, clicks, held keys)
//! - Presenting a finished frame
//! - Frame pacing and delays
//! - Background music

pub mod headless;

use std::time::Duration;

pub use headless::HeadlessPlatform;

use crate::Point;
use crate::renderer::Frame;
use crate::sim::TickInput;

/// Background music cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    /// Looped on the difficulty menu
    Menu,
    /// Looped during a round
    Battle,
}

/// Input gathered since the last poll
#[derive(Debug, Clone, Default)]
pub struct PlatformInput {
    /// Window closed / stop requested
    pub quit: bool,
    /// Mouse clicks in screen coordinates
    pub clicks: Vec<Point>,
    /// Keys currently held
    pub keys: TickInput,
}

pub trait Platform {
    fn poll(&mut self) -> PlatformInput;

    fn present(&mut self, frame: &Frame);

    /// Block until the next frame is due
    fn wait_frame(&mut self, fps: u32);

    fn delay(&mut self, duration: Duration);

    fn play_music(&mut self, _track: MusicTrack) {}
}
