//! Windowless platform
//!
//! Picks a difficulty on the menu and lets the autopilot fly every round.
//! Frames are tessellated but never shown, and pacing only sleeps in
//! realtime mode.

use std::time::{Duration, Instant};

use super::{MusicTrack, Platform, PlatformInput};
use crate::menu::DifficultyMenu;
use crate::renderer::{Frame, Vertex, shapes};
use crate::settings::{Difficulty, GameConfig};
use crate::sim::TickInput;

pub struct HeadlessPlatform {
    menu: DifficultyMenu,
    difficulty: Difficulty,
    /// Quit once this many frames were presented
    max_frames: Option<u64>,
    realtime: bool,
    frames_presented: u64,
    bytes_presented: u64,
    last_frame: Option<Instant>,
    music: Option<MusicTrack>,
}

impl HeadlessPlatform {
    pub fn new(config: &GameConfig, difficulty: Difficulty) -> Self {
        Self {
            menu: DifficultyMenu::new(config),
            difficulty,
            max_frames: None,
            realtime: false,
            frames_presented: 0,
            bytes_presented: 0,
            last_frame: None,
            music: None,
        }
    }

    pub fn with_max_frames(mut self, max_frames: Option<u64>) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Sleep to hold the configured frame rate
    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Size of every vertex buffer that would have been uploaded
    pub fn bytes_presented(&self) -> u64 {
        self.bytes_presented
    }

    fn budget_spent(&self) -> bool {
        self.max_frames
            .is_some_and(|max| self.frames_presented >= max)
    }
}

impl Platform for HeadlessPlatform {
    fn poll(&mut self) -> PlatformInput {
        if self.budget_spent() {
            log::debug!("Frame budget of {:?} spent", self.max_frames);
            return PlatformInput {
                quit: true,
                ..Default::default()
            };
        }
        PlatformInput {
            quit: false,
            clicks: vec![self.menu.label_center(self.difficulty)],
            keys: TickInput {
                autopilot: true,
                ..Default::default()
            },
        }
    }

    fn present(&mut self, frame: &Frame) {
        let vertices = shapes::tessellate(frame);
        self.frames_presented += 1;
        self.bytes_presented += Vertex::as_bytes(&vertices).len() as u64;
        log::trace!(
            "Frame {}: {} commands, {} vertices",
            self.frames_presented,
            frame.commands.len(),
            vertices.len()
        );
    }

    fn wait_frame(&mut self, fps: u32) {
        if !self.realtime || fps == 0 {
            return;
        }
        let period = Duration::from_secs_f64(1.0 / fps as f64);
        if let Some(last) = self.last_frame {
            let elapsed = last.elapsed();
            if elapsed < period {
                std::thread::sleep(period - elapsed);
            }
        }
        self.last_frame = Some(Instant::now());
    }

    fn delay(&mut self, duration: Duration) {
        if self.realtime {
            std::thread::sleep(duration);
        }
    }

    fn play_music(&mut self, track: MusicTrack) {
        if self.music != Some(track) {
            log::debug!("Music: {:?}", track);
            self.music = Some(track);
        }
    }
}
